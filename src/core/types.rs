use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Tax classification code used when neither the line nor the config supplies one.
pub const FALLBACK_TAX_CODE: &str = "9983";

/// A product or service that can be added to a bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Catalog-wide identifier; a bill holds at most one row per id.
    pub id: u32,
    /// Short product code (e.g. "PRD001").
    pub code: String,
    pub name: String,
    pub description: String,
    /// Price per unit, non-negative.
    pub unit_price: Decimal,
    /// Free-form grouping such as "Service" or "Subscription".
    pub category: String,
    /// HSN/SAC classification code.
    pub tax_code: Option<String>,
}

/// One row on a bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Id of the catalog entry this row was created from.
    pub catalog_id: u32,
    pub code: String,
    pub name: String,
    pub description: String,
    pub unit_price: Decimal,
    /// Always at least 1.
    pub quantity: u32,
    pub tax_code: Option<String>,
}

impl LineItem {
    /// Start a row for `item` with quantity 1.
    pub fn from_catalog(item: &CatalogItem) -> Self {
        Self {
            catalog_id: item.id,
            code: item.code.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            unit_price: item.unit_price,
            quantity: 1,
            tax_code: item.tax_code.clone(),
        }
    }

    /// Line amount: `unit_price * quantity`, unrounded. Saturates at the
    /// edges of the `Decimal` range.
    pub fn amount(&self) -> Decimal {
        super::totals::saturating_mul(self.unit_price, Decimal::from(self.quantity))
    }

    /// The line's tax code, or `fallback` when none is set.
    pub fn tax_code_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.tax_code.as_deref() {
            Some(code) if !code.trim().is_empty() => code,
            _ => fallback,
        }
    }
}

/// Document-level discount applied before tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Discount {
    /// Percentage of the subtotal, 0 to 100.
    Percentage(Decimal),
    /// Absolute amount in the invoice currency.
    Fixed(Decimal),
}

impl Discount {
    /// Percentage discount, clamped into `0..=100`.
    pub fn percentage(value: Decimal) -> Self {
        Self::Percentage(value.clamp(Decimal::ZERO, dec!(100)))
    }

    /// Fixed discount, negative input becomes 0.
    pub fn fixed(value: Decimal) -> Self {
        Self::Fixed(value.max(Decimal::ZERO))
    }

    /// No discount.
    pub fn none() -> Self {
        Self::Percentage(Decimal::ZERO)
    }

    /// The raw configured value, regardless of kind.
    pub fn value(&self) -> Decimal {
        match self {
            Self::Percentage(v) | Self::Fixed(v) => *v,
        }
    }

    /// Same kind, new value, with the kind's clamping applied.
    pub fn with_value(&self, value: Decimal) -> Self {
        match self {
            Self::Percentage(_) => Self::percentage(value),
            Self::Fixed(_) => Self::fixed(value),
        }
    }
}

impl Default for Discount {
    fn default() -> Self {
        Self::none()
    }
}

/// Flat tax rate in percent, applied to the taxable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Negative input becomes 0.
    pub fn new(percent: Decimal) -> Self {
        Self(percent.max(Decimal::ZERO))
    }

    pub fn percent(&self) -> Decimal {
        self.0
    }
}

/// Derived invoice totals. Never mutated independently of their inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of `unit_price * quantity` over all lines.
    pub subtotal: Decimal,
    /// Discount resolved against the subtotal.
    pub discount_amount: Decimal,
    /// `subtotal - discount_amount`.
    pub taxable_value: Decimal,
    /// `taxable_value * rate / 100`.
    pub tax_amount: Decimal,
    /// `taxable_value + tax_amount`.
    pub grand_total: Decimal,
}

impl InvoiceTotals {
    pub const ZERO: Self = Self {
        subtotal: Decimal::ZERO,
        discount_amount: Decimal::ZERO,
        taxable_value: Decimal::ZERO,
        tax_amount: Decimal::ZERO,
        grand_total: Decimal::ZERO,
    };
}

/// Invoice number and issue date, fixed when the bill is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceIdentity {
    pub number: String,
    pub issue_date: NaiveDate,
}

/// Buyer contact details. Only the name is required at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Phone, treating blank strings as absent.
    pub fn phone_opt(&self) -> Option<&str> {
        non_blank(&self.phone)
    }

    /// Email, treating blank strings as absent.
    pub fn email_opt(&self) -> Option<&str> {
        non_blank(&self.email)
    }

    /// Address, treating blank strings as absent.
    pub fn address_opt(&self) -> Option<&str> {
        non_blank(&self.address)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Issuing company printed in the header, the "From" block and the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seller {
    /// Legal name shown in the "From" block.
    pub name: String,
    /// Brand printed in the header band.
    pub brand: String,
    pub address_lines: Vec<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Tax registration number (GSTIN).
    pub tax_id: Option<String>,
}

impl Default for Seller {
    fn default() -> Self {
        Self {
            name: "Your Company Name".into(),
            brand: "YOUR COMPANY".into(),
            address_lines: vec!["123 Business Street".into(), "City, State 12345".into()],
            phone: Some("+1 234 567 890".into()),
            email: Some("company@example.com".into()),
            tax_id: Some("27ABCDE1234F1Z5".into()),
        }
    }
}
