//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claim inputs, one per risk bucket plus the form
//! defaults, and matching JSON request bodies.

use domain_claims::{ClaimInput, ClaimType};
use serde_json::{json, Value};

/// Fixture for claim inputs
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// The values the form opens with (total 1, LOW)
    pub fn form_defaults() -> ClaimInput {
        ClaimInput::default()
    }

    /// No factor fires (total 0, LOW)
    pub fn clean() -> ClaimInput {
        ClaimInput {
            claim_amount: 50_000,
            customer_age: 30,
            num_previous_claims: 0,
            days_since_last_claim: 365,
            policy_duration: 5,
            claim_type: ClaimType::Health,
        }
    }

    /// Recent claim on a short policy (total 3, MEDIUM)
    pub fn medium_risk() -> ClaimInput {
        ClaimInput {
            claim_amount: 50_000,
            customer_age: 30,
            num_previous_claims: 0,
            days_since_last_claim: 10,
            policy_duration: 1,
            claim_type: ClaimType::Health,
        }
    }

    /// Every factor fires (total 8, HIGH)
    pub fn high_risk() -> ClaimInput {
        ClaimInput {
            claim_amount: 90_000,
            customer_age: 22,
            num_previous_claims: 3,
            days_since_last_claim: 10,
            policy_duration: 1,
            claim_type: ClaimType::Vehicle,
        }
    }

    /// JSON request body for an input
    pub fn request_body(input: &ClaimInput) -> Value {
        json!({
            "claim_amount": input.claim_amount,
            "customer_age": input.customer_age,
            "num_previous_claims": input.num_previous_claims,
            "days_since_last_claim": input.days_since_last_claim,
            "policy_duration": input.policy_duration,
            "claim_type": input.claim_type.as_str(),
        })
    }

    /// Urlencoded form pairs for an input
    pub fn form_fields(input: &ClaimInput) -> Vec<(&'static str, String)> {
        vec![
            ("claim_amount", input.claim_amount.to_string()),
            ("customer_age", input.customer_age.to_string()),
            ("num_previous_claims", input.num_previous_claims.to_string()),
            ("days_since_last_claim", input.days_since_last_claim.to_string()),
            ("policy_duration", input.policy_duration.to_string()),
            ("claim_type", input.claim_type.as_str().to_string()),
        ]
    }
}
