//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ClaimError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ClaimError::InvalidInput(message.into())
    }
}
