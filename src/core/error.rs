use thiserror::Error;

/// Errors that can occur while building or rendering a receipt.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReciboError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// The amount string could not be turned into a [`MonetaryAmount`](super::MonetaryAmount).
    #[error("invalid amount: {0}")]
    Amount(String),

    /// The issue date is not a valid `yyyy-mm-dd` calendar date.
    #[error("invalid date: {0}")]
    Date(String),

    /// An issuer configuration value could not be used.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ReciboError {
    /// Join a list of validation errors into a single [`ReciboError::Validation`].
    pub fn from_validation(errors: &[ValidationError]) -> Self {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self::Validation(joined)
    }
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "payer.identifier").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
