use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{Discount, InvoiceTotals, LineItem, TaxRate};

/// Compute subtotal, discount, taxable value, tax and grand total.
///
/// The order is fixed: the discount always comes off the subtotal before tax
/// is applied, and nothing is rounded between steps. An empty item list
/// yields [`InvoiceTotals::ZERO`]. Amounts beyond the `Decimal` range
/// saturate at `Decimal::MAX` / `Decimal::MIN`.
///
/// ```
/// use billdesk::core::*;
/// use rust_decimal_macros::dec;
///
/// let totals = compute_totals(&[], Discount::fixed(dec!(50)), TaxRate::new(dec!(18)));
/// assert_eq!(totals.subtotal, dec!(0));
/// ```
pub fn compute_totals(items: &[LineItem], discount: Discount, tax: TaxRate) -> InvoiceTotals {
    if items.is_empty() {
        return InvoiceTotals::ZERO;
    }

    let subtotal = items
        .iter()
        .map(LineItem::amount)
        .fold(Decimal::ZERO, saturating_add);

    let discount_amount = match discount {
        Discount::Percentage(percent) => saturating_mul(subtotal, percent / dec!(100)),
        Discount::Fixed(amount) => amount,
    };

    let taxable_value = saturating_sub(subtotal, discount_amount);
    let tax_amount = saturating_mul(taxable_value, tax.percent() / dec!(100));
    let grand_total = saturating_add(taxable_value, tax_amount);

    InvoiceTotals {
        subtotal,
        discount_amount,
        taxable_value,
        tax_amount,
        grand_total,
    }
}

impl InvoiceTotals {
    /// Copy with every amount rounded to 2 decimal places for display.
    pub fn rounded(&self) -> Self {
        Self {
            subtotal: round_half_up(self.subtotal, 2),
            discount_amount: round_half_up(self.discount_amount, 2),
            taxable_value: round_half_up(self.taxable_value, 2),
            tax_amount: round_half_up(self.tax_amount, 2),
            grand_total: round_half_up(self.grand_total, 2),
        }
    }
}

fn saturated(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

pub(crate) fn saturating_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b)
        .unwrap_or_else(|| saturated(a.is_sign_negative() != b.is_sign_negative()))
}

// Overflow on addition only happens when both operands share a sign.
pub(crate) fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| saturated(a.is_sign_negative()))
}

pub(crate) fn saturating_sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b).unwrap_or_else(|| saturated(a.is_sign_negative()))
}

pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(price: Decimal, qty: u32) -> LineItem {
        LineItem {
            catalog_id: 1,
            code: "PRD".into(),
            name: "Item".into(),
            description: String::new(),
            unit_price: price,
            quantity: qty,
            tax_code: None,
        }
    }

    #[test]
    fn discount_applies_before_tax() {
        let totals = compute_totals(
            &[line(dec!(1000), 1)],
            Discount::percentage(dec!(50)),
            TaxRate::new(dec!(10)),
        );
        // 10% of the discounted 500, not of the raw 1000
        assert_eq!(totals.tax_amount, dec!(50));
        assert_eq!(totals.grand_total, dec!(550));
    }

    #[test]
    fn no_intermediate_rounding() {
        let totals = compute_totals(
            &[line(dec!(0.333), 3)],
            Discount::none(),
            TaxRate::new(dec!(18)),
        );
        assert_eq!(totals.subtotal, dec!(0.999));
        assert_eq!(totals.tax_amount, dec!(0.17982));
        assert_eq!(totals.rounded().tax_amount, dec!(0.18));
        assert_eq!(totals.rounded().grand_total, dec!(1.18));
    }

    #[test]
    fn saturating_helpers_clamp_to_range() {
        assert_eq!(saturating_mul(Decimal::MAX, dec!(2)), Decimal::MAX);
        assert_eq!(saturating_mul(Decimal::MAX, dec!(-2)), Decimal::MIN);
        assert_eq!(saturating_add(Decimal::MIN, dec!(-1)), Decimal::MIN);
        assert_eq!(saturating_sub(Decimal::MAX, dec!(-1)), Decimal::MAX);
        assert_eq!(saturating_add(dec!(1.5), dec!(2.25)), dec!(3.75));
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_half_up(dec!(2.345), 2), dec!(2.35));
        assert_eq!(round_half_up(dec!(2.344), 2), dec!(2.34));
    }
}
