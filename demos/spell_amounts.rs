use recibo::core::*;

fn main() {
    let inputs = std::env::args().skip(1).collect::<Vec<_>>();
    let inputs = if inputs.is_empty() {
        ["0", "0,50", "1", "15", "100", "1234,56", "1000000", "2000000,01"]
            .map(String::from)
            .to_vec()
    } else {
        inputs
    };

    for input in &inputs {
        match MonetaryAmount::parse_br(input) {
            Ok(amount) => println!("R$ {:>16}  {}", amount, spell_amount(&amount)),
            Err(e) => println!("{input:>19}  error: {e}"),
        }
    }
}
