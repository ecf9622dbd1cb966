//! # billdesk
//!
//! Point-of-sale billing core: line items, discount and GST totals,
//! amount-in-words on the Indian numbering scale, and printable PDF invoices.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Totals keep full precision; rounding happens only when amounts are
//! printed.
//!
//! ## Quick Start
//!
//! ```rust
//! use billdesk::core::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let config = BillingConfig::default();
//! let catalog = Catalog::demo();
//! let mut numbers = config.number_sequence();
//!
//! let mut bill = Bill::open(&mut numbers, NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(), &config).unwrap();
//! bill.set_customer(Customer::new("Acme Corporation").phone("+91 98765 43210"));
//! bill.add(catalog.get(1).unwrap()); // Web Development, 5000
//! bill.add(catalog.get(3).unwrap()); // UI/UX Design, 3000
//! bill.set_discount(Discount::percentage(dec!(10)));
//!
//! let totals = bill.totals();
//! assert_eq!(totals.taxable_value, dec!(7200));
//! assert_eq!(totals.grand_total, dec!(8496));
//! assert!(bill.checkout().is_ok());
//!
//! let words = amount_to_words(totals.grand_total, &config.scale, &config.currency);
//! assert_eq!(words, "Eight Thousand Four Hundred Ninety Six Rupees Only");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Types, totals, words, catalog, bill session, config |
//! | `layout` (default) | Positioned A4 invoice layout |
//! | `pdf` (default) | PDF serialization and saving |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "layout")]
pub mod layout;

#[cfg(feature = "pdf")]
pub mod pdf;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
