//! Rule-based claim risk scoring

use tracing::debug;

use crate::claim_input::ClaimInput;
use crate::error::ClaimError;
use crate::risk::{ComponentScores, RiskResult};

/// Maps claim attributes to a risk score and classification
///
/// Stateless; a single instance can be shared freely across requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    /// Creates a scorer
    pub fn new() -> Self {
        Self
    }

    /// Scores an input already range-checked by the caller
    ///
    /// Total: every `ClaimInput` yields a complete result. `claim_type` does
    /// not participate.
    pub fn evaluate(&self, input: &ClaimInput) -> RiskResult {
        let result = RiskResult::from_components(ComponentScores::from_input(input));

        debug!(
            total_score = result.total_score,
            risk_level = %result.risk_level,
            probability = result.probability,
            claim_type = %input.claim_type,
            "Claim evaluated"
        );

        result
    }

    /// Validates the input before scoring it
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::InvalidInput` if `customer_age` is outside 18..=100
    pub fn evaluate_checked(&self, input: &ClaimInput) -> Result<RiskResult, ClaimError> {
        input.validate()?;
        Ok(self.evaluate(input))
    }
}

/// Scores an input with the default scorer
pub fn evaluate(input: &ClaimInput) -> RiskResult {
    RiskScorer::new().evaluate(input)
}
