use billdesk::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn words(amount: Decimal) -> String {
    amount_to_words(amount, &ScaleWords::default(), &CurrencyWords::default())
}

#[test]
fn zero_is_not_blank() {
    assert_eq!(words(dec!(0)), "Zero Rupees Only");
}

#[test]
fn whole_rupees() {
    assert_eq!(words(dec!(550)), "Five Hundred Fifty Rupees Only");
    assert_eq!(
        words(dec!(8496)),
        "Eight Thousand Four Hundred Ninety Six Rupees Only"
    );
}

#[test]
fn lakh_boundary() {
    assert_eq!(words(dec!(100000)), "One Lakh Rupees Only");
    assert_eq!(
        words(dec!(99999)),
        "Ninety Nine Thousand Nine Hundred Ninety Nine Rupees Only"
    );
}

#[test]
fn crore_boundary() {
    assert_eq!(words(dec!(10000000)), "One Crore Rupees Only");
    assert_eq!(
        words(dec!(9999999)),
        "Ninety Nine Lakh Ninety Nine Thousand Nine Hundred Ninety Nine Rupees Only"
    );
}

#[test]
fn paise_are_appended_when_nonzero() {
    assert_eq!(
        words(dec!(1296.50)),
        "One Thousand Two Hundred Ninety Six Rupees and Fifty Paise Only"
    );
    assert_eq!(words(dec!(12.05)), "Twelve Rupees and Five Paise Only");
    assert_eq!(words(dec!(12.00)), "Twelve Rupees Only");
}

#[test]
fn only_paise() {
    assert_eq!(words(dec!(0.75)), "Zero Rupees and Seventy Five Paise Only");
}

#[test]
fn paise_are_rounded_not_truncated() {
    assert_eq!(words(dec!(10.456)), "Ten Rupees and Forty Six Paise Only");
    assert_eq!(words(dec!(10.454)), "Ten Rupees and Forty Five Paise Only");
}

#[test]
fn rounding_carries_into_rupees() {
    assert_eq!(words(dec!(1.999)), "Two Rupees Only");
    assert_eq!(words(dec!(99999.995)), "One Lakh Rupees Only");
}

#[test]
fn negative_amounts_are_prefixed() {
    assert_eq!(words(dec!(-20)), "Minus Twenty Rupees Only");
    assert_eq!(words(dec!(-0.001)), "Zero Rupees Only");
}

#[test]
fn nouns_are_configurable() {
    let currency = CurrencyWords {
        major: "Dollars".into(),
        minor: "Cents".into(),
    };
    assert_eq!(
        amount_to_words(dec!(3.10), &ScaleWords::default(), &currency),
        "Three Dollars and Ten Cents Only"
    );
}

#[test]
fn scale_words_are_configurable() {
    let scale = ScaleWords {
        hundred: "Sau".into(),
        thousand: "Hazaar".into(),
        lakh: "Lac".into(),
        crore: "Karod".into(),
    };
    assert_eq!(integer_to_words(2_00_300, &scale), "Two Lac Three Sau");
    assert_eq!(integer_to_words(30_00_00_000, &scale), "Thirty Karod");
}

#[test]
fn very_large_amounts_recurse_through_crore() {
    assert_eq!(
        words(dec!(1000000000000)),
        "One Lakh Crore Rupees Only"
    );
}
