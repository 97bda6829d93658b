//! Monetary amounts in Brazilian reais.
//!
//! Amounts are held as [`Decimal`] rounded to centavos, never as floating point.
//! Parsing and display follow the pt-BR convention: comma decimal separator,
//! period digit grouping (`1.234,56`).

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::ReciboError;

/// Exclusive upper bound for amounts; the spelled-out form stops at millions.
pub const MAX_AMOUNT: Decimal = dec!(1000000000);

/// A non-negative amount with at most two fractional digits, below [`MAX_AMOUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct MonetaryAmount(Decimal);

impl MonetaryAmount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create an amount, rounding half away from zero to two decimal places.
    pub fn new(value: Decimal) -> Result<Self, ReciboError> {
        if value < Decimal::ZERO {
            return Err(ReciboError::Amount(format!(
                "amount must not be negative, got {value}"
            )));
        }
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if rounded >= MAX_AMOUNT {
            return Err(ReciboError::Amount(format!(
                "amount must be below {MAX_AMOUNT}, got {value}"
            )));
        }
        Ok(Self(rounded))
    }

    /// Parse a user-entered amount with a decimal comma, e.g. `"1234,56"`.
    ///
    /// A period is also accepted as the decimal separator. Digit grouping
    /// (`"1.234,56"`) is rejected rather than guessed at.
    pub fn parse_br(input: &str) -> Result<Self, ReciboError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ReciboError::Amount("amount is empty".into()));
        }
        let normalized = trimmed.replacen(',', ".", 1);
        let value = Decimal::from_str(&normalized)
            .map_err(|e| ReciboError::Amount(format!("'{trimmed}' is not a number: {e}")))?;
        Self::new(value)
    }

    /// The underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Total number of centavos.
    pub fn total_cents(&self) -> u64 {
        // Bounded by MAX_AMOUNT, always fits.
        (self.0 * dec!(100)).trunc().to_u64().unwrap_or(0)
    }

    /// Whole reais (integer part).
    pub fn reais(&self) -> u32 {
        (self.total_cents() / 100) as u32
    }

    /// Centavos (fractional part), in `0..=99`.
    pub fn centavos(&self) -> u32 {
        (self.total_cents() % 100) as u32
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Format for display: period grouping, comma decimal, always two places.
    pub fn to_br_string(&self) -> String {
        let whole = self.reais().to_string();
        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        format!("{grouped},{:02}", self.centavos())
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_br_string())
    }
}

impl FromStr for MonetaryAmount {
    type Err = ReciboError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_br(s)
    }
}

impl TryFrom<Decimal> for MonetaryAmount {
    type Error = ReciboError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MonetaryAmount> for Decimal {
    fn from(amount: MonetaryAmount) -> Self {
        amount.0
    }
}

/// Currency input mask: keep only digits, read them as centavos.
///
/// `"12345"` becomes `"123,45"`, `"R$ 5"` becomes `"0,05"`, an input without
/// digits becomes `"0,00"`. No digit grouping is applied.
pub fn mask_currency_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = digits.trim_start_matches('0');
    let padded = format!("{digits:0>3}");
    let (whole, cents) = padded.split_at(padded.len() - 2);
    format!("{whole},{cents}")
}
