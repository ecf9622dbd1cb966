//! Core billing types, totals, amount-in-words, and the active bill.
//!
//! This module has no rendering dependencies; everything here is pure
//! computation over in-memory values.

mod bill;
mod catalog;
mod config;
mod error;
pub mod format;
mod numbering;
mod totals;
mod types;
pub mod words;

pub use bill::*;
pub use catalog::*;
pub use config::*;
pub use error::*;
pub use format::{DigitGrouping, format_amount, format_currency, format_issue_date, format_rate};
pub use numbering::*;
pub use totals::*;
pub use types::*;
pub use words::{CurrencyWords, ScaleWords, amount_to_words, integer_to_words};
