//! Amount-in-words rendering on the Indian numbering scale.
//!
//! Integers are decomposed at 100 (Hundred), 1,000 (Thousand),
//! 1,00,000 (Lakh) and 1,00,00,000 (Crore), recursing on the quotient and the
//! remainder. The fractional part is rendered as sub-units (two digits).

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::totals::round_half_up;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const LAKH: u128 = 100_000;
const CRORE: u128 = 10_000_000;

/// Scale words inserted between groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleWords {
    pub hundred: String,
    pub thousand: String,
    pub lakh: String,
    pub crore: String,
}

impl Default for ScaleWords {
    fn default() -> Self {
        Self {
            hundred: "Hundred".into(),
            thousand: "Thousand".into(),
            lakh: "Lakh".into(),
            crore: "Crore".into(),
        }
    }
}

/// Currency nouns for the major unit and the hundredth sub-unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyWords {
    pub major: String,
    pub minor: String,
}

impl Default for CurrencyWords {
    fn default() -> Self {
        Self {
            major: "Rupees".into(),
            minor: "Paise".into(),
        }
    }
}

/// Render a currency amount as words.
///
/// The amount is rounded to two decimal places first, so the sub-unit part
/// never reaches 100.
///
/// ```
/// use billdesk::core::*;
/// use rust_decimal_macros::dec;
///
/// let words = amount_to_words(dec!(8496), &ScaleWords::default(), &CurrencyWords::default());
/// assert_eq!(words, "Eight Thousand Four Hundred Ninety Six Rupees Only");
/// ```
pub fn amount_to_words(amount: Decimal, scale: &ScaleWords, currency: &CurrencyWords) -> String {
    let rounded = round_half_up(amount, 2);
    let magnitude = rounded.abs();

    let major = magnitude.trunc();
    let minor = ((magnitude - major) * dec!(100)).trunc();

    // Decimal's range fits in u128, so these conversions cannot fail.
    let major = major.to_u128().unwrap_or_default();
    let minor = minor.to_u128().unwrap_or_default();

    let mut out = String::new();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push_str("Minus ");
    }
    out.push_str(&integer_to_words(major, scale));
    out.push(' ');
    out.push_str(&currency.major);
    if minor > 0 {
        out.push_str(" and ");
        out.push_str(&integer_to_words(minor, scale));
        out.push(' ');
        out.push_str(&currency.minor);
    }
    out.push_str(" Only");
    out
}

/// Render a non-negative integer as words. Zero renders as "Zero".
pub fn integer_to_words(n: u128, scale: &ScaleWords) -> String {
    if n == 0 {
        return "Zero".to_string();
    }
    let mut parts = Vec::new();
    push_words(n, scale, &mut parts);
    parts.join(" ")
}

fn push_words<'a>(n: u128, scale: &'a ScaleWords, out: &mut Vec<&'a str>) {
    // Divisor and scale word for each magnitude, largest first.
    let (divisor, word) = match n {
        0 => return,
        1..=19 => {
            out.push(ONES[n as usize]);
            return;
        }
        20..=99 => {
            out.push(TENS[(n / 10) as usize]);
            push_words(n % 10, scale, out);
            return;
        }
        100..=999 => (100, scale.hundred.as_str()),
        1_000..=99_999 => (1_000, scale.thousand.as_str()),
        100_000..=9_999_999 => (LAKH, scale.lakh.as_str()),
        _ => (CRORE, scale.crore.as_str()),
    };
    push_words(n / divisor, scale, out);
    out.push(word);
    push_words(n % divisor, scale, out);
}
