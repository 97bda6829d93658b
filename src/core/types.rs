use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::amount::MonetaryAmount;
use super::identifier::{IdentifierKind, format_identifier};

/// A receipt request: everything needed to render one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptRequest {
    /// Who paid (the client).
    pub payer: Party,
    /// Who received the money and issues the receipt.
    pub issuer: Issuer,
    /// Amount received.
    pub amount: MonetaryAmount,
    /// What the payment refers to.
    pub description: String,
    /// Issue date, printed as `dd/mm/yyyy`.
    pub issue_date: NaiveDate,
    /// Optional logo shown in the header.
    pub logo: Option<ImagePayload>,
}

/// Payer of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    /// CPF or CNPJ as entered; punctuation is optional.
    pub identifier: String,
    pub address: String,
}

impl Party {
    pub fn new(
        name: impl Into<String>,
        identifier: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            address: address.into(),
        }
    }

    pub fn identifier_kind(&self) -> IdentifierKind {
        IdentifierKind::classify(&self.identifier)
    }

    pub fn formatted_identifier(&self) -> String {
        format_identifier(&self.identifier)
    }
}

/// Issuer of a receipt, with contact and payment details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    pub name: String,
    /// CPF or CNPJ as configured; punctuation is optional.
    pub identifier: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// PIX key, printed verbatim.
    pub pix_key: String,
}

impl Issuer {
    pub fn identifier_kind(&self) -> IdentifierKind {
        IdentifierKind::classify(&self.identifier)
    }

    pub fn formatted_identifier(&self) -> String {
        format_identifier(&self.identifier)
    }
}

/// An embeddable image reference, typically a `data:` URI.
///
/// The payload is opaque: it is placed into the `src` attribute as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImagePayload(String);

impl ImagePayload {
    /// Wrap an image source. Blank sources yield `None`.
    pub fn new(src: impl Into<String>) -> Option<Self> {
        let src = src.into();
        if src.trim().is_empty() {
            None
        } else {
            Some(Self(src))
        }
    }

    /// Build a `data:` URI from already base64-encoded content.
    pub fn from_base64(mime_type: &str, encoded: &str) -> Option<Self> {
        if encoded.trim().is_empty() {
            return None;
        }
        Some(Self(format!("data:{mime_type};base64,{encoded}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Raw form submission, with the form's own field names.
///
/// Every field is a string exactly as typed; missing fields deserialize as
/// empty and are reported by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptForm {
    #[serde(rename = "clienteNome")]
    pub client_name: String,
    #[serde(rename = "clienteCpf")]
    pub client_identifier: String,
    #[serde(rename = "clienteEndereco")]
    pub client_address: String,
    /// Amount with a decimal comma, e.g. `"150,00"`.
    #[serde(rename = "valor")]
    pub amount: String,
    #[serde(rename = "descricao")]
    pub description: String,
    /// Issue date as `yyyy-mm-dd`.
    #[serde(rename = "dataEmissao")]
    pub issue_date: String,
}
