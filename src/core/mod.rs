//! Receipt types, amount spelling, identifier punctuation and validation.
//!
//! Everything here is a pure function of its inputs: no I/O, no shared
//! state, no environment access.

mod amount;
mod builder;
mod config;
mod date;
mod error;
mod identifier;
mod types;
mod validation;
mod words;

pub use amount::*;
pub use builder::*;
pub use config::*;
pub use date::*;
pub use error::*;
pub use identifier::*;
pub use types::*;
pub use validation::*;
pub use words::*;
