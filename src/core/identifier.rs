//! CPF / CNPJ punctuation and classification.
//!
//! Punctuation is permissive: no check digits are verified and inputs of the
//! wrong length are punctuated as far as their digits allow. Each separator
//! comes from its own first-match substitution, applied in order, and a
//! substitution that does not match leaves the text unchanged.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Identifiers with up to this many digits are CPFs.
pub const CPF_MAX_DIGITS: usize = 11;

/// Brazilian taxpayer identifier class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierKind {
    /// Cadastro de Pessoas Físicas: individuals, `000.000.000-00`.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica: entities, `00.000.000/0000-00`.
    Cnpj,
}

impl IdentifierKind {
    /// Classify by the number of digits in `raw`, ignoring any punctuation.
    pub fn classify(raw: &str) -> Self {
        if digit_count(raw) <= CPF_MAX_DIGITS {
            Self::Cpf
        } else {
            Self::Cnpj
        }
    }

    /// Label printed next to the identifier.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }

    pub fn is_individual(&self) -> bool {
        matches!(self, Self::Cpf)
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

type Substitution = (Regex, &'static str);

fn compile(table: &[(&str, &'static str)]) -> Vec<Substitution> {
    table
        .iter()
        .map(|&(pattern, replacement)| {
            let re = Regex::new(pattern).expect("identifier pattern is valid");
            (re, replacement)
        })
        .collect()
}

static CPF_STEPS: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
    compile(&[
        (r"([0-9]{3})([0-9])", "${1}.${2}"),
        (r"([0-9]{3})([0-9])", "${1}.${2}"),
        (r"([0-9]{3})([0-9]{1,2})$", "${1}-${2}"),
    ])
});

static CNPJ_STEPS: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
    compile(&[
        (r"([0-9]{2})([0-9])", "${1}.${2}"),
        (r"([0-9]{3})([0-9])", "${1}.${2}"),
        (r"([0-9]{3})([0-9])", "${1}/${2}"),
        (r"([0-9]{4})([0-9]{1,2})$", "${1}-${2}"),
    ])
});

/// Keep only the ASCII digits of `raw`.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn digit_count(raw: &str) -> usize {
    raw.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Punctuate a CPF or CNPJ.
///
/// ```
/// use recibo::core::format_identifier;
///
/// assert_eq!(format_identifier("12345678901"), "123.456.789-01");
/// assert_eq!(format_identifier("12345678000195"), "12.345.678/0001-95");
/// assert_eq!(format_identifier("1234567"), "123.456.7");
/// ```
pub fn format_identifier(raw: &str) -> String {
    let digits = digits_only(raw);
    let steps = match IdentifierKind::classify(&digits) {
        IdentifierKind::Cpf => &*CPF_STEPS,
        IdentifierKind::Cnpj => &*CNPJ_STEPS,
    };
    steps.iter().fold(digits, |text, (re, replacement)| {
        re.replacen(&text, 1, *replacement).into_owned()
    })
}
