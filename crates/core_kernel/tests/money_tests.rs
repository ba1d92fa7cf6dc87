//! Unit tests for the Money module
//!
//! Tests cover money creation, currency handling, and the grouped display
//! used when echoing claimed amounts back to the user.

use core_kernel::{Money, Currency, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::INR);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::INR);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_from_whole_keeps_major_units() {
        let m = Money::from_whole(80_001, Currency::INR);
        assert_eq!(m.amount(), dec!(80001));
    }

    #[test]
    fn test_zero_is_not_negative() {
        let m = Money::from_whole(0, Currency::EUR);
        assert!(!m.is_negative());
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::new(dec!(-5), Currency::USD);
        assert!(m.is_negative());
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_currency_symbols() {
        assert_eq!(Currency::INR.symbol(), "₹");
        assert_eq!(Currency::USD.symbol(), "$");
        assert_eq!(Currency::JPY.symbol(), "¥");
    }

    #[test]
    fn test_currency_parse_is_case_insensitive() {
        assert_eq!("inr".parse::<Currency>().unwrap(), Currency::INR);
        assert_eq!(" Usd ".parse::<Currency>().unwrap(), Currency::USD);
    }

    #[test]
    fn test_currency_parse_unknown() {
        let result = "XYZ".parse::<Currency>();
        assert_eq!(result, Err(MoneyError::UnknownCurrency("XYZ".to_string())));
    }

    #[test]
    fn test_currency_serializes_as_code() {
        let json = serde_json::to_string(&Currency::INR).unwrap();
        assert_eq!(json, "\"INR\"");
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_small_amount() {
        assert_eq!(Money::from_whole(0, Currency::INR).to_string(), "₹0");
        assert_eq!(Money::from_whole(999, Currency::INR).to_string(), "₹999");
    }

    #[test]
    fn test_display_form_default_amount() {
        assert_eq!(Money::from_whole(50_000, Currency::INR).to_string(), "₹50,000");
    }

    #[test]
    fn test_display_millions() {
        assert_eq!(Money::from_whole(1_234_567, Currency::USD).to_string(), "$1,234,567");
    }

    #[test]
    fn test_display_minor_units_only_when_fractional() {
        assert_eq!(Money::new(dec!(1000.05), Currency::EUR).to_string(), "€1,000.05");
        assert_eq!(Money::new(dec!(1000.00), Currency::EUR).to_string(), "€1,000");
    }

    #[test]
    fn test_display_jpy_rounds_away_minor_units() {
        assert_eq!(Money::new(dec!(10000.4), Currency::JPY).to_string(), "¥10,000");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Money::new(dec!(-2500), Currency::GBP).to_string(), "-£2,500");
    }
}
