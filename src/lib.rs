//! # recibo
//!
//! Brazilian payment receipts ("recibos"): spelled-out amounts in Portuguese
//! (valor por extenso), CPF/CNPJ punctuation and classification, and
//! self-contained HTML receipts ready to be printed to PDF.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Issuer details are passed in as an explicit [`core::IssuerConfig`]; the
//! crate never reads the process environment.
//!
//! ## Quick Start
//!
//! ```rust
//! use recibo::core::*;
//!
//! let amount = MonetaryAmount::parse_br("1234,56").unwrap();
//! assert_eq!(
//!     spell_amount(&amount),
//!     "um mil duzentos e trinta e quatro reais e cinquenta e seis centavos"
//! );
//!
//! assert_eq!(format_identifier("12345678901"), "123.456.789-01");
//! assert_eq!(IdentifierKind::classify("12345678000195").label(), "CNPJ");
//!
//! let date = parse_iso_date("2024-03-05").unwrap();
//! assert_eq!(format_date_br(date), "05/03/2024");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Amounts, spelled-out values, identifiers, dates, request types |
//! | `html` (default) | Self-contained HTML receipt assembly |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "html")]
pub mod html;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
