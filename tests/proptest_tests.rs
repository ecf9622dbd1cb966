//! Property-based tests for totals, words and the bill session.
//!
//! Run with: `cargo test --test proptest_tests`

use billdesk::core::*;
use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// A price between 0.01 and 99999.99.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

fn arb_line(idx: u32) -> impl Strategy<Value = LineItem> {
    (arb_price(), 1u32..=100).prop_map(move |(price, quantity)| LineItem {
        catalog_id: idx,
        code: format!("PRD{idx:03}"),
        name: format!("Item {idx}"),
        description: String::new(),
        unit_price: price,
        quantity,
        tax_code: None,
    })
}

/// 0 to 8 lines with distinct catalog ids.
fn arb_lines() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(arb_line(0), 0..=8).prop_map(|mut lines| {
        for (i, line) in lines.iter_mut().enumerate() {
            line.catalog_id = i as u32 + 1;
        }
        lines
    })
}

/// Any entered discount, including out-of-range values the constructors clamp.
fn arb_discount() -> impl Strategy<Value = Discount> {
    prop_oneof![
        (-5000i64..15000i64).prop_map(|v| Discount::percentage(Decimal::new(v, 2))),
        (-100_000i64..100_000_000i64).prop_map(|v| Discount::fixed(Decimal::new(v, 2))),
    ]
}

fn arb_rate() -> impl Strategy<Value = TaxRate> {
    prop_oneof![
        Just(TaxRate::new(Decimal::ZERO)),
        Just(TaxRate::new(Decimal::from(5))),
        Just(TaxRate::new(Decimal::from(18))),
        (0i64..5000i64).prop_map(|v| TaxRate::new(Decimal::new(v, 2))),
    ]
}

fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

// ── Totals ──────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn subtotal_is_sum_of_line_amounts(lines in arb_lines(), discount in arb_discount(), rate in arb_rate()) {
        let totals = compute_totals(&lines, discount, rate);
        let expected: Decimal = lines
            .iter()
            .map(|l| l.unit_price * Decimal::from(l.quantity))
            .sum();
        prop_assert_eq!(totals.subtotal, expected);
    }

    #[test]
    fn discount_and_taxable_add_up(lines in arb_lines(), discount in arb_discount(), rate in arb_rate()) {
        let totals = compute_totals(&lines, discount, rate);
        prop_assert_eq!(totals.taxable_value + totals.discount_amount, totals.subtotal);
        prop_assert_eq!(totals.taxable_value + totals.tax_amount, totals.grand_total);
    }

    #[test]
    fn tax_never_reduces_the_total(lines in arb_lines(), discount in arb_discount(), rate in arb_rate()) {
        let totals = compute_totals(&lines, discount, rate);
        prop_assume!(totals.taxable_value >= Decimal::ZERO);
        prop_assert!(totals.grand_total >= totals.taxable_value);
        prop_assert!(totals.tax_amount >= Decimal::ZERO);
    }

    #[test]
    fn percentage_discount_never_exceeds_subtotal(lines in arb_lines(), raw in -5000i64..15000i64, rate in arb_rate()) {
        let totals = compute_totals(&lines, Discount::percentage(Decimal::new(raw, 2)), rate);
        prop_assert!(totals.discount_amount >= Decimal::ZERO);
        prop_assert!(totals.discount_amount <= totals.subtotal);
        prop_assert!(totals.taxable_value >= Decimal::ZERO);
    }

    #[test]
    fn totals_are_deterministic(lines in arb_lines(), discount in arb_discount(), rate in arb_rate()) {
        prop_assert_eq!(
            compute_totals(&lines, discount, rate),
            compute_totals(&lines, discount, rate)
        );
    }

    #[test]
    fn entered_values_are_clamped(raw in -1_000_000i64..1_000_000i64) {
        let value = Decimal::new(raw, 2);
        let pct = Discount::percentage(value).value();
        prop_assert!(pct >= Decimal::ZERO && pct <= Decimal::ONE_HUNDRED);
        prop_assert!(Discount::fixed(value).value() >= Decimal::ZERO);
        prop_assert!(TaxRate::new(value).percent() >= Decimal::ZERO);
    }
}

// ── Amount in words ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn words_are_never_blank(amount in arb_amount()) {
        let words = amount_to_words(amount, &ScaleWords::default(), &CurrencyWords::default());
        prop_assert!(words.ends_with(" Only"));
        prop_assert!(words.contains("Rupees"));
        prop_assert!(!words.contains("  "));
        prop_assert!(!words.starts_with(' '));
    }

    #[test]
    fn paise_appear_only_when_nonzero(rupees in 0u64..10_000_000u64, paise in 0u32..100u32) {
        let amount = Decimal::from(rupees) + Decimal::new(i64::from(paise), 2);
        let words = amount_to_words(amount, &ScaleWords::default(), &CurrencyWords::default());
        prop_assert_eq!(words.contains(" Paise"), paise != 0);
    }

    #[test]
    fn negatives_mirror_positives(amount in arb_amount()) {
        prop_assume!(amount.round_dp(2) > Decimal::ZERO);
        let scale = ScaleWords::default();
        let currency = CurrencyWords::default();
        let positive = amount_to_words(amount, &scale, &currency);
        let negative = amount_to_words(-amount, &scale, &currency);
        prop_assert_eq!(negative, format!("Minus {positive}"));
    }

    #[test]
    fn integer_words_use_known_vocabulary(n in 1u128..1_000_000_000_000u128) {
        const VOCABULARY: &[&str] = &[
            "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
            "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen",
            "Eighteen", "Nineteen", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy",
            "Eighty", "Ninety", "Hundred", "Thousand", "Lakh", "Crore",
        ];
        let words = integer_to_words(n, &ScaleWords::default());
        for word in words.split(' ') {
            prop_assert!(VOCABULARY.contains(&word), "unexpected word {:?} in {:?}", word, words);
        }
    }
}

// ── Bill session ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn repeated_adds_accumulate_quantity(times in 1u32..50) {
        let config = BillingConfig::default();
        let catalog = Catalog::demo();
        let mut seq = config.number_sequence();
        let mut bill = Bill::open(&mut seq, NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(), &config).unwrap();

        let item = catalog.get(2).unwrap();
        for _ in 0..times {
            bill.add(item);
        }
        prop_assert_eq!(bill.items().len(), 1);
        prop_assert_eq!(bill.items()[0].quantity, times);
        prop_assert_eq!(bill.totals().subtotal, item.unit_price * Decimal::from(times));
    }

    #[test]
    fn quantity_stays_positive(deltas in prop::collection::vec(-20i64..20, 1..20)) {
        let config = BillingConfig::default();
        let mut seq = config.number_sequence();
        let mut bill = Bill::open(&mut seq, NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(), &config).unwrap();
        bill.add(Catalog::demo().get(6).unwrap());

        for delta in deltas {
            bill.update_quantity(6, delta);
            prop_assert!(bill.items()[0].quantity >= 1);
        }
    }
}
