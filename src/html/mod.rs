//! Self-contained HTML receipts.
//!
//! [`assemble`] turns a [`ReceiptRequest`] into markup ready for a
//! print-to-PDF renderer. It performs no I/O and needs no external assets.
//!
//! # Example
//!
//! ```
//! use recibo::core::*;
//! use recibo::html::assemble;
//!
//! let form = ReceiptForm {
//!     client_name: "Maria Silva".into(),
//!     client_identifier: "12345678901".into(),
//!     client_address: "Rua das Flores, 10".into(),
//!     amount: "1234,56".into(),
//!     description: "Cestas básicas".into(),
//!     issue_date: "2024-03-05".into(),
//! };
//! let request = ReceiptRequest::from_form(&form, &IssuerConfig::default(), None).unwrap();
//! let doc = assemble(&request);
//!
//! assert!(doc.as_str().contains("123.456.789-01"));
//! assert!(doc.as_str().contains("05/03/2024"));
//! assert_eq!(doc.filename(), "recibo_Maria_Silva.pdf");
//! ```

mod template;

use crate::core::{ReceiptRequest, format_date_br, spell_amount};

use template::ReceiptView;

/// An assembled receipt: the markup and a suggested download filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    html: String,
    filename: String,
}

impl RenderedDocument {
    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    /// `recibo_<payer name>.pdf`, whitespace and path or quote characters
    /// replaced by `_`.
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl AsRef<str> for RenderedDocument {
    fn as_ref(&self) -> &str {
        &self.html
    }
}

/// Assemble the HTML receipt for `request`.
pub fn assemble(request: &ReceiptRequest) -> RenderedDocument {
    let amount = request.amount.to_br_string();
    let amount_words = spell_amount(&request.amount);
    let date = format_date_br(request.issue_date);

    let payer = &request.payer;
    let payer_identifier = payer.formatted_identifier();
    let issuer = &request.issuer;
    let issuer_identifier = issuer.formatted_identifier();

    let view = ReceiptView {
        logo: request.logo.as_ref().map(|logo| logo.as_str()),
        amount: &amount,
        amount_words: &amount_words,
        payer_name: &payer.name,
        payer_label: payer.identifier_kind().label(),
        payer_identifier: &payer_identifier,
        payer_address: &payer.address,
        description: &request.description,
        issuer_name: &issuer.name,
        issuer_label: issuer.identifier_kind().label(),
        issuer_identifier: &issuer_identifier,
        issuer_address: &issuer.address,
        issuer_phone: &issuer.phone,
        issuer_email: &issuer.email,
        pix_key: &issuer.pix_key,
        date: &date,
    };
    let html = template::render(&view);

    log::debug!(
        "assembled receipt for {} ({} bytes, logo: {})",
        payer.name,
        html.len(),
        request.logo.is_some()
    );

    RenderedDocument {
        html,
        filename: download_filename(&payer.name),
    }
}

/// Suggested filename for a receipt issued to `payer_name`.
pub fn download_filename(payer_name: &str) -> String {
    let stem: String = payer_name
        .trim()
        .chars()
        .map(|c| match c {
            c if c.is_whitespace() => '_',
            '/' | '\\' | '"' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("recibo_{stem}.pdf")
}
