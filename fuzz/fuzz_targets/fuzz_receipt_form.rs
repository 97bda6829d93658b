#![no_main]

use libfuzzer_sys::fuzz_target;
use recibo::core::{IssuerConfig, ReceiptForm, ReceiptRequest};

fuzz_target!(|fields: [&str; 6]| {
    let [name, identifier, address, amount, description, date] = fields;
    let form = ReceiptForm {
        client_name: name.into(),
        client_identifier: identifier.into(),
        client_address: address.into(),
        amount: amount.into(),
        description: description.into(),
        issue_date: date.into(),
    };
    if let Ok(request) = ReceiptRequest::from_form(&form, &IssuerConfig::default(), None) {
        let doc = recibo::html::assemble(&request);
        assert!(doc.as_str().starts_with("<!DOCTYPE html>"));
    }
});
