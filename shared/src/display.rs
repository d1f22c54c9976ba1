//! Presentation helpers for the details view and the cards.
//!
//! Rules and prize split are fixed constants, not data from the API.

use chrono::{DateTime, NaiveDate};

/// Rules listed on every tournament's details page.
pub const RULES: [&str; 3] = ["Rule 1", "Rule 2", "Rule 3"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrizePlace {
    First,
    Second,
    Third,
}

impl PrizePlace {
    pub fn label(&self) -> &'static str {
        match self {
            Self::First => "First Place",
            Self::Second => "Second Place",
            Self::Third => "Third Place",
        }
    }

    /// Share of the prize pool, in percent.
    pub fn percent(&self) -> u8 {
        match self {
            Self::First => 50,
            Self::Second => 30,
            Self::Third => 20,
        }
    }
}

pub const PRIZE_PLACES: [PrizePlace; 3] = [PrizePlace::First, PrizePlace::Second, PrizePlace::Third];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrizeShare {
    pub place: PrizePlace,
    pub percent: u8,
    pub amount: f64,
}

impl PrizeShare {
    /// `50% ($500)`
    pub fn describe(&self) -> String {
        format!("{}% (${})", self.percent, format_amount(self.amount))
    }
}

/// Splits a prize pool 50/30/20 across the podium.
pub fn prize_breakdown(prize_pool: f64) -> [PrizeShare; 3] {
    PRIZE_PLACES.map(|place| PrizeShare {
        place,
        percent: place.percent(),
        amount: prize_pool * f64::from(place.percent()) / 100.0,
    })
}

/// Formats a number with thousands separators and at most three decimals.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && (whole != "0" || !fraction.is_empty());
    let sign = if negative { "-" } else { "" };
    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}

/// Formats an API date as `M/D/YYYY`. Unparseable input is returned as-is.
pub fn format_date(date_str: &str) -> String {
    let trimmed = date_str.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()));

    match date {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_breakdown_of_a_thousand() {
        let shares = prize_breakdown(1000.0);
        let amounts: Vec<f64> = shares.iter().map(|s| s.amount).collect();

        assert_eq!(amounts, vec![500.0, 300.0, 200.0]);
        assert_eq!(amounts.iter().sum::<f64>(), 1000.0);
        assert_eq!(shares[0].describe(), "50% ($500)");
        assert_eq!(shares[2].place.label(), "Third Place");
    }

    #[test]
    fn test_breakdown_of_empty_pool() {
        assert!(prize_breakdown(0.0).iter().all(|s| s.amount == 0.0));
    }

    #[rstest]
    #[case(0.0, "0")]
    #[case(999.0, "999")]
    #[case(5000.0, "5,000")]
    #[case(1234567.0, "1,234,567")]
    #[case(1234.5, "1,234.5")]
    #[case(0.125, "0.125")]
    #[case(2.0004, "2")]
    #[case(-2500.0, "-2,500")]
    fn test_format_amount(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_amount(value), expected);
    }

    #[rstest]
    #[case("2025-03-10", "3/10/2025")]
    #[case("2024-11-30", "11/30/2024")]
    #[case("2025-02-20T18:00:00Z", "2/20/2025")]
    #[case("next week", "next week")]
    #[case("", "")]
    fn test_format_date(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_date(raw), expected);
    }

    proptest! {
        #[test]
        fn prop_breakdown_sums_to_pool(pool in 0u32..10_000_000u32) {
            let pool = f64::from(pool);
            let total: f64 = prize_breakdown(pool).iter().map(|s| s.amount).sum();
            prop_assert!((total - pool).abs() < 1e-6);
        }

        #[test]
        fn prop_breakdown_keeps_ranking(pool in 0.0f64..1e9) {
            let shares = prize_breakdown(pool);
            prop_assert!(shares[0].amount >= shares[1].amount);
            prop_assert!(shares[1].amount >= shares[2].amount);
        }
    }
}
