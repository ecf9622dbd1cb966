use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::totals::round_half_up;

/// How integer digits are grouped with thousands separators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitGrouping {
    /// Groups of three: 1,234,567.
    #[default]
    Western,
    /// Last three, then pairs: 12,34,567.
    Indian,
}

/// Format `value` with `decimals` fraction digits and grouped integer digits.
pub fn format_amount(value: Decimal, decimals: u32, grouping: DigitGrouping) -> String {
    let rounded = round_half_up(value, decimals);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let plain = format!("{:.*}", decimals as usize, rounded.abs());
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };

    let mut out = String::with_capacity(plain.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, grouping));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `symbol` immediately followed by the formatted amount, e.g. "Rs.5,000".
pub fn format_currency(
    symbol: &str,
    value: Decimal,
    decimals: u32,
    grouping: DigitGrouping,
) -> String {
    format!("{symbol}{}", format_amount(value, decimals, grouping))
}

/// Percent rate without trailing zeros: 18, 12.5.
pub fn format_rate(rate: Decimal) -> String {
    rate.normalize().to_string()
}

/// Long US-style date, e.g. "October 18, 2026".
pub fn format_issue_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let mut groups: Vec<&str> = Vec::new();
    let (head, last_three) = digits.split_at(len - 3);
    let step = match grouping {
        DigitGrouping::Western => 3,
        DigitGrouping::Indian => 2,
    };

    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(last_three);
    groups.join(",")
}
