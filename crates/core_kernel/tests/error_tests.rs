//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::{Currency, MoneyError};

#[test]
fn test_unknown_currency_becomes_core_error() {
    let result: Result<Currency, CoreError> = "XYZ".parse::<Currency>().map_err(CoreError::from);

    match result {
        Err(CoreError::Money(MoneyError::UnknownCurrency(code))) => assert_eq!(code, "XYZ"),
        other => panic!("Expected Money error, got {:?}", other),
    }
}

#[test]
fn test_configuration_error_display() {
    let error = CoreError::configuration("API_PORT must be a port number");

    assert_eq!(
        error.to_string(),
        "Configuration error: API_PORT must be a port number"
    );
}
