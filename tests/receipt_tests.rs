#![cfg(feature = "html")]

use chrono::NaiveDate;
use recibo::core::*;
use recibo::html::*;

fn issuer_config() -> IssuerConfig {
    IssuerConfig {
        name: "Cestas & Afetos".into(),
        identifier: "11222333000181".into(),
        address: "Rua do Comércio, 45 - Centro - Recife/PE".into(),
        phone: "(81) 98888-7777".into(),
        email: "contato@cestaseafetos.com.br".into(),
        pix_key: "11.222.333/0001-81".into(),
    }
}

fn form() -> ReceiptForm {
    ReceiptForm {
        client_name: "Maria da Silva".into(),
        client_identifier: "529.982.247-25".into(),
        client_address: "Rua das Flores, 10 - Boa Viagem - Recife/PE".into(),
        amount: "1234,56".into(),
        description: "Cestas básicas".into(),
        issue_date: "2024-03-05".into(),
    }
}

fn render(logo: Option<ImagePayload>) -> RenderedDocument {
    let request = ReceiptRequest::from_form(&form(), &issuer_config(), logo).unwrap();
    assemble(&request)
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

#[test]
fn amount_is_shown_in_figures_and_words() {
    let doc = render(None);
    let html = doc.as_str();
    assert!(html.contains("Valor: <strong>R$ 1.234,56</strong>"));
    assert!(html.contains(
        "R$ 1.234,56 (um mil duzentos e trinta e quatro reais e cinquenta e seis centavos)"
    ));
}

#[test]
fn payer_sentence() {
    let doc = render(None);
    let html = doc.as_str();
    assert!(html.contains("Recebi de <strong>Maria da Silva</strong>,"));
    assert!(html.contains("CPF nº <strong>529.982.247-25</strong>,"));
    assert!(html.contains("residente em <strong>Rua das Flores, 10 - Boa Viagem - Recife/PE</strong>,"));
    assert!(html.contains("referente a <strong>Cestas básicas</strong>."));
}

#[test]
fn issuer_block_uses_entity_label() {
    let doc = render(None);
    let html = doc.as_str();
    assert!(html.contains("Nome: Cestas &amp; Afetos<br>"));
    assert!(html.contains("CNPJ: 11.222.333/0001-81<br>"));
    assert!(html.contains("Telefone: (81) 98888-7777<br>"));
    assert!(html.contains("E-mail: contato@cestaseafetos.com.br"));
    assert!(html.contains("Chave PIX: 11.222.333/0001-81"));
}

#[test]
fn individual_issuer_gets_cpf_label() {
    let config = IssuerConfig {
        identifier: "12345678901".into(),
        ..issuer_config()
    };
    let request = ReceiptRequest::from_form(&form(), &config, None).unwrap();
    let doc = assemble(&request);
    assert!(doc.as_str().contains("CPF: 123.456.789-01<br>"));
}

#[test]
fn entity_payer_gets_cnpj_label() {
    let form = ReceiptForm {
        client_identifier: "11222333000181".into(),
        ..form()
    };
    let request = ReceiptRequest::from_form(&form, &issuer_config(), None).unwrap();
    let doc = assemble(&request);
    assert!(doc.as_str().contains("CNPJ nº <strong>11.222.333/0001-81</strong>"));
}

#[test]
fn date_is_day_first() {
    let doc = render(None);
    assert!(doc.as_str().contains("Data: 05/03/2024"));
}

#[test]
fn date_edges_do_not_shift() {
    for (iso, shown) in [
        ("2024-01-01", "01/01/2024"),
        ("2023-12-31", "31/12/2023"),
        ("2024-02-29", "29/02/2024"),
    ] {
        let form = ReceiptForm {
            issue_date: iso.into(),
            ..form()
        };
        let request = ReceiptRequest::from_form(&form, &issuer_config(), None).unwrap();
        assert!(assemble(&request).as_str().contains(&format!("Data: {shown}")));
    }
}

// ---------------------------------------------------------------------------
// Logo
// ---------------------------------------------------------------------------

#[test]
fn no_logo_no_image_region() {
    let doc = render(None);
    assert!(!doc.as_str().contains("<img"));
    assert!(!doc.as_str().contains("alt=\"Logo\""));
}

#[test]
fn blank_logo_is_treated_as_absent() {
    assert!(ImagePayload::new("   ").is_none());
    assert!(ImagePayload::from_base64("image/jpeg", "").is_none());
}

#[test]
fn logo_is_embedded_verbatim() {
    let logo = ImagePayload::from_base64("image/jpeg", "/9j/4AAQSkZJRg==").unwrap();
    assert_eq!(logo.as_str(), "data:image/jpeg;base64,/9j/4AAQSkZJRg==");
    let doc = render(Some(logo));
    let html = doc.as_str();
    assert_eq!(html.matches("<img").count(), 1);
    assert!(html.contains("src=\"data:image/jpeg;base64,/9j/4AAQSkZJRg==\""));
}

// ---------------------------------------------------------------------------
// Markup
// ---------------------------------------------------------------------------

#[test]
fn document_is_self_contained() {
    let doc = render(None);
    let html = doc.as_str();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"pt-BR\">"));
    assert!(html.contains("<meta charset=\"UTF-8\">"));
    assert!(html.contains("<style>"));
    assert!(!html.contains("<link"));
    assert!(!html.contains("http://"));
    assert!(!html.contains("https://"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn user_input_cannot_inject_markup() {
    let form = ReceiptForm {
        client_name: "<script>alert(1)</script>".into(),
        description: "\"quoted\" & <em>".into(),
        ..form()
    };
    let request = ReceiptRequest::from_form(&form, &issuer_config(), None).unwrap();
    let html = assemble(&request).into_string();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("&quot;quoted&quot; &amp; &lt;em&gt;"));
}

#[test]
fn assembly_is_deterministic() {
    assert_eq!(render(None), render(None));
}

#[test]
fn filename_from_payer_name() {
    assert_eq!(render(None).filename(), "recibo_Maria_da_Silva.pdf");
}

// ---------------------------------------------------------------------------
// Intake
// ---------------------------------------------------------------------------

#[test]
fn form_from_json() {
    let json = r#"{
        "clienteNome": "Maria da Silva",
        "clienteCpf": "529.982.247-25",
        "clienteEndereco": "Rua das Flores, 10",
        "valor": "150,00",
        "descricao": "Cestas básicas",
        "dataEmissao": "2024-03-05"
    }"#;
    let form: ReceiptForm = serde_json::from_str(json).unwrap();
    let request = ReceiptRequest::from_form(&form, &IssuerConfig::default(), None).unwrap();
    assert_eq!(request.amount.to_br_string(), "150,00");
    assert_eq!(request.issue_date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());

    let html = assemble(&request).into_string();
    assert!(html.contains("(cento e cinquenta reais)"));
    // Placeholder issuer from the default configuration
    assert!(html.contains("Nome: Nome do Fornecedor<br>"));
    assert!(html.contains("CPF: 000.000.000-00<br>"));
}

#[test]
fn json_with_missing_fields_is_rejected() {
    let form: ReceiptForm = serde_json::from_str(r#"{"clienteNome": "Maria"}"#).unwrap();
    let err = ReceiptRequest::from_form(&form, &IssuerConfig::default(), None).unwrap_err();
    assert!(matches!(err, ReciboError::Validation(_)));
    let msg = err.to_string();
    for field in ["clienteCpf", "clienteEndereco", "valor", "descricao", "dataEmissao"] {
        assert!(msg.contains(field), "{field} missing from {msg}");
    }
}

#[test]
fn issuer_from_vars() {
    let config = IssuerConfig::from_vars(vec![
        ("FORNECEDOR_NOME".to_string(), "Padaria Pão Quente".to_string()),
        ("FORNECEDOR_CPF".to_string(), "11222333000181".to_string()),
    ]);
    let request = ReceiptRequest::from_form(&form(), &config, None).unwrap();
    let html = assemble(&request).into_string();
    assert!(html.contains("Nome: Padaria Pão Quente<br>"));
    assert!(html.contains("CNPJ: 11.222.333/0001-81<br>"));
    assert!(html.contains("Chave PIX: PIX não configurado"));
}
