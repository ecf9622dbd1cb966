use chrono::NaiveDate;
use tracing::{debug, warn};

use super::config::BillingConfig;
use super::error::{BillingError, ValidationError, join_validation_errors};
use super::numbering::InvoiceNumberSequence;
use super::totals::compute_totals;
use super::types::*;

/// The bill currently being assembled at the counter.
///
/// Owns the line items and every input the totals depend on; totals are
/// always derived on demand and never stored.
///
/// ```
/// use billdesk::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let config = BillingConfig::default();
/// let mut seq = config.number_sequence();
/// let mut bill = Bill::open(&mut seq, NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(), &config).unwrap();
///
/// let catalog = Catalog::demo();
/// bill.add(catalog.get(1).unwrap());
/// bill.add(catalog.get(3).unwrap());
/// bill.set_discount(Discount::percentage(dec!(10)));
///
/// assert_eq!(bill.identity().number, "INV-0001");
/// assert_eq!(bill.totals().grand_total, dec!(8496));
/// ```
#[derive(Debug, Clone)]
pub struct Bill {
    identity: InvoiceIdentity,
    customer: Customer,
    items: Vec<LineItem>,
    discount: Discount,
    tax_rate: TaxRate,
}

impl Bill {
    pub fn new(identity: InvoiceIdentity, tax_rate: TaxRate) -> Self {
        Self {
            identity,
            customer: Customer::default(),
            items: Vec::new(),
            discount: Discount::none(),
            tax_rate,
        }
    }

    /// Open a bill with the next number from `sequence`, dated `issue_date`.
    pub fn open(
        sequence: &mut InvoiceNumberSequence,
        issue_date: NaiveDate,
        config: &BillingConfig,
    ) -> Result<Self, BillingError> {
        let identity = InvoiceIdentity {
            number: sequence.next_number()?,
            issue_date,
        };
        debug!(number = %identity.number, "opened bill");
        Ok(Self::new(identity, config.tax_rate()))
    }

    pub fn identity(&self) -> &InvoiceIdentity {
        &self.identity
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn discount(&self) -> Discount {
        self.discount
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of `item`. A second add of the same catalog entry bumps
    /// the quantity instead of adding a row.
    pub fn add(&mut self, item: &CatalogItem) {
        if let Some(line) = self.items.iter_mut().find(|l| l.catalog_id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            debug!(code = %line.code, quantity = line.quantity, "incremented bill line");
        } else {
            self.items.push(LineItem::from_catalog(item));
            debug!(code = %item.code, "added bill line");
        }
    }

    /// Change a row's quantity by `delta`, never going below 1.
    /// Returns `false` if no row exists for `catalog_id`.
    pub fn update_quantity(&mut self, catalog_id: u32, delta: i64) -> bool {
        let Some(line) = self.items.iter_mut().find(|l| l.catalog_id == catalog_id) else {
            return false;
        };
        let updated = i64::from(line.quantity)
            .saturating_add(delta)
            .clamp(1, i64::from(u32::MAX));
        // Clamped into u32 range above.
        line.quantity = updated as u32;
        debug!(code = %line.code, quantity = line.quantity, "updated bill line quantity");
        true
    }

    /// Delete a row outright. Returns `false` if it was not on the bill.
    pub fn remove(&mut self, catalog_id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|l| l.catalog_id != catalog_id);
        let removed = self.items.len() != before;
        if removed {
            debug!(catalog_id, "removed bill line");
        }
        removed
    }

    /// Empty the bill and the customer, zero the discount, and restore the
    /// configured tax rate. The invoice number and date are kept.
    pub fn clear(&mut self, config: &BillingConfig) {
        self.items.clear();
        self.customer = Customer::default();
        self.discount = self.discount.with_value(rust_decimal::Decimal::ZERO);
        self.tax_rate = config.tax_rate();
        debug!(number = %self.identity.number, "cleared bill");
    }

    pub fn set_customer(&mut self, customer: Customer) {
        self.customer = customer;
    }

    pub fn set_discount(&mut self, discount: Discount) {
        // Re-run the constructor clamps in case the variant was built directly.
        self.discount = discount.with_value(discount.value());
    }

    pub fn set_tax_rate(&mut self, rate: TaxRate) {
        self.tax_rate = rate;
    }

    /// Totals for the current items, discount and tax rate.
    pub fn totals(&self) -> InvoiceTotals {
        compute_totals(&self.items, self.discount, self.tax_rate)
    }

    /// Check the preconditions for producing an invoice document.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.customer.name.trim().is_empty() {
            errors.push(ValidationError::new(
                "customer.name",
                "please enter customer name",
            ));
        }
        if self.items.is_empty() {
            errors.push(ValidationError::new(
                "items",
                "please add at least one item",
            ));
        }
        errors
    }

    /// Like [`Bill::validate`], but as a single error.
    pub fn checkout(&self) -> Result<(), BillingError> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }
        warn!(number = %self.identity.number, failures = errors.len(), "checkout rejected");
        Err(join_validation_errors(&errors))
    }
}
