//! Issuer configuration.
//!
//! The issuer's details are deployment settings rather than form input. They
//! are passed in explicitly; this crate never reads the process environment
//! itself. [`IssuerConfig::from_vars`] accepts any key/value source, such as
//! `std::env::vars()` handed over by the caller.

use serde::{Deserialize, Serialize};

use super::error::ReciboError;
use super::types::Issuer;

pub const VAR_NAME: &str = "FORNECEDOR_NOME";
pub const VAR_IDENTIFIER: &str = "FORNECEDOR_CPF";
pub const VAR_ADDRESS: &str = "FORNECEDOR_ENDERECO";
pub const VAR_PHONE: &str = "FORNECEDOR_TELEFONE";
pub const VAR_EMAIL: &str = "FORNECEDOR_EMAIL";
pub const VAR_PIX: &str = "FORNECEDOR_PIX";

const VARS: [&str; 6] = [
    VAR_NAME,
    VAR_IDENTIFIER,
    VAR_ADDRESS,
    VAR_PHONE,
    VAR_EMAIL,
    VAR_PIX,
];

/// Issuer details printed on every receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuerConfig {
    pub name: String,
    pub identifier: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub pix_key: String,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            name: "Nome do Fornecedor".into(),
            identifier: "000.000.000-00".into(),
            address: "Endereço não configurado".into(),
            phone: "(00) 00000-0000".into(),
            email: "email@exemplo.com".into(),
            pix_key: "PIX não configurado".into(),
        }
    }
}

impl IssuerConfig {
    /// Read the `FORNECEDOR_*` variables from `vars`.
    ///
    /// Unknown keys are ignored. Absent or blank variables keep their
    /// placeholder default.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        let mut seen = [false; VARS.len()];

        for (key, value) in vars {
            let key = key.as_ref();
            let Some(idx) = VARS.iter().position(|v| *v == key) else {
                continue;
            };
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            if let Some(slot) = config.field_mut(key) {
                *slot = value.to_string();
                seen[idx] = true;
            }
        }

        for (var, _) in VARS.iter().zip(seen).filter(|(_, seen)| !seen) {
            log::warn!("{var} not set, using placeholder");
        }
        config
    }

    fn field_mut(&mut self, var: &str) -> Option<&mut String> {
        match var {
            VAR_NAME => Some(&mut self.name),
            VAR_IDENTIFIER => Some(&mut self.identifier),
            VAR_ADDRESS => Some(&mut self.address),
            VAR_PHONE => Some(&mut self.phone),
            VAR_EMAIL => Some(&mut self.email),
            VAR_PIX => Some(&mut self.pix_key),
            _ => None,
        }
    }

    /// Check that every value is usable on a receipt.
    pub fn validate(&self) -> Result<(), ReciboError> {
        let fields = [
            ("name", &self.name),
            ("identifier", &self.identifier),
            ("address", &self.address),
            ("phone", &self.phone),
            ("email", &self.email),
            ("pix_key", &self.pix_key),
        ];
        let blank: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();
        if !blank.is_empty() {
            return Err(ReciboError::Config(format!(
                "issuer fields must not be empty: {}",
                blank.join(", ")
            )));
        }
        if !self.identifier.chars().any(|c| c.is_ascii_digit()) {
            return Err(ReciboError::Config(format!(
                "issuer identifier '{}' contains no digits",
                self.identifier
            )));
        }
        Ok(())
    }

    /// The issuer as printed on a receipt.
    pub fn issuer(&self) -> Issuer {
        Issuer {
            name: self.name.clone(),
            identifier: self.identifier.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            pix_key: self.pix_key.clone(),
        }
    }
}
