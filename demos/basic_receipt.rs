use recibo::core::*;
use recibo::html;

fn main() {
    // Issuer details normally come from deployment settings
    let config = IssuerConfig::from_vars(std::env::vars());

    // What the form submits
    let form = ReceiptForm {
        client_name: "Maria da Silva".into(),
        client_identifier: format_identifier("52998224725"),
        client_address: "Rua das Flores, 10 - Boa Viagem - Recife/PE".into(),
        amount: mask_currency_input("123456"),
        description: "Cestas básicas".into(),
        issue_date: "2024-03-05".into(),
    };

    let request = match ReceiptRequest::from_form(&form, &config, None) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Cannot build receipt: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "{} {} nº {}",
        request.payer.name,
        request.payer.identifier_kind(),
        request.payer.formatted_identifier()
    );
    println!("R$ {} ({})", request.amount, spell_amount(&request.amount));
    println!("Data: {}", format_date_br(request.issue_date));

    let doc = html::assemble(&request);
    println!("\n{} ({} bytes)", doc.filename(), doc.as_str().len());
    println!("{}", doc.as_str());
}

