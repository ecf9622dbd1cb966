//! Billing configuration: tax defaults, currency words, seller identity,
//! document text.
//!
//! Every field has a default, so a partial JSON document is enough:
//!
//! ```
//! use billdesk::core::BillingConfig;
//!
//! let config = BillingConfig::from_json(r#"{ "default_tax_rate": "12" }"#).unwrap();
//! assert_eq!(config.tax_label, "GST");
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::BillingError;
use super::format::DigitGrouping;
use super::numbering::InvoiceNumberSequence;
use super::types::{FALLBACK_TAX_CODE, Seller, TaxRate};
use super::words::{CurrencyWords, ScaleWords};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// Tax rate in percent for new and cleared bills.
    pub default_tax_rate: Decimal,
    /// Label for the tax line in the summary, e.g. "GST".
    pub tax_label: String,
    /// Label for the seller's tax registration, e.g. "GST".
    pub tax_id_label: String,
    /// HSN/SAC code printed for lines without one.
    pub default_tax_code: String,
    pub currency: CurrencyWords,
    pub scale: ScaleWords,
    /// Prefix for printed amounts. PDF base fonts have no rupee glyph.
    pub currency_symbol: String,
    pub digit_grouping: DigitGrouping,
    pub invoice_prefix: String,
    pub invoice_number_width: usize,
    pub document_title: String,
    pub seller: Seller,
    /// Terms and conditions, printed numbered in order.
    pub terms: Vec<String>,
    pub footer: Footer,
}

/// Closing lines printed at the bottom of each page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub thank_you: String,
    pub contact: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            thank_you: "Thank you for your business!".into(),
            contact: "For any queries, please contact: accounts@yourcompany.com | +1 234 567 890"
                .into(),
        }
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            default_tax_rate: dec!(18),
            tax_label: "GST".into(),
            tax_id_label: "GST".into(),
            default_tax_code: FALLBACK_TAX_CODE.into(),
            currency: CurrencyWords::default(),
            scale: ScaleWords::default(),
            currency_symbol: "Rs.".into(),
            digit_grouping: DigitGrouping::Western,
            invoice_prefix: "INV-".into(),
            invoice_number_width: 4,
            document_title: "INVOICE".into(),
            seller: Seller::default(),
            terms: vec![
                "Goods once sold will not be taken back".into(),
                "Payment is due within 15 days of invoice date".into(),
                "This is a computer generated invoice - valid without signature".into(),
            ],
            footer: Footer::default(),
        }
    }
}

impl BillingConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, BillingError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BillingError::Config(format!("invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BillingError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            BillingError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "loaded billing config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BillingError> {
        if self.default_tax_rate.is_sign_negative() && !self.default_tax_rate.is_zero() {
            return Err(BillingError::Config(format!(
                "default_tax_rate must not be negative, got {}",
                self.default_tax_rate
            )));
        }
        if self.seller.name.trim().is_empty() {
            return Err(BillingError::Config("seller.name must not be empty".into()));
        }
        if self.invoice_number_width > 20 {
            return Err(BillingError::Config(
                "invoice_number_width cannot exceed 20".into(),
            ));
        }
        Ok(())
    }

    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::new(self.default_tax_rate)
    }

    /// A fresh numbering sequence using the configured prefix and width.
    pub fn number_sequence(&self) -> InvoiceNumberSequence {
        InvoiceNumberSequence::new(self.invoice_prefix.clone())
            .with_padding(self.invoice_number_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_json() {
        let json = serde_json::to_string(&BillingConfig::default()).unwrap();
        let parsed = BillingConfig::from_json(&json).unwrap();
        assert_eq!(parsed, BillingConfig::default());
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let config = BillingConfig::from_json(
            r#"{ "currency": { "major": "Dollars" }, "digit_grouping": "indian" }"#,
        )
        .unwrap();
        assert_eq!(config.currency.major, "Dollars");
        assert_eq!(config.currency.minor, "Paise");
        assert_eq!(config.digit_grouping, DigitGrouping::Indian);
        assert_eq!(config.default_tax_rate, dec!(18));
    }

    #[test]
    fn rejects_negative_tax_rate() {
        let err = BillingConfig::from_json(r#"{ "default_tax_rate": "-5" }"#).unwrap_err();
        assert!(matches!(err, BillingError::Config(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            BillingConfig::from_json("{ not json"),
            Err(BillingError::Config(_))
        ));
    }

    #[test]
    fn number_sequence_uses_prefix_and_width() {
        let config = BillingConfig {
            invoice_prefix: "BILL/".into(),
            invoice_number_width: 3,
            ..BillingConfig::default()
        };
        assert_eq!(config.number_sequence().peek(), "BILL/001");
    }
}
