//! Test Data Builders
//!
//! Provides a builder for claim inputs with sensible defaults, so tests
//! specify only the attributes they care about.

use domain_claims::{ClaimInput, ClaimType};

use crate::fixtures::ClaimFixtures;

/// Builder for constructing test claim inputs
///
/// Starts from [`ClaimFixtures::clean`], where no factor fires.
pub struct ClaimInputBuilder {
    input: ClaimInput,
}

impl Default for ClaimInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimInputBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            input: ClaimFixtures::clean(),
        }
    }

    /// Sets the claimed amount
    pub fn with_claim_amount(mut self, amount: u64) -> Self {
        self.input.claim_amount = amount;
        self
    }

    /// Sets the customer age
    pub fn with_customer_age(mut self, age: u32) -> Self {
        self.input.customer_age = age;
        self
    }

    /// Sets the number of previous claims
    pub fn with_previous_claims(mut self, count: u32) -> Self {
        self.input.num_previous_claims = count;
        self
    }

    /// Sets the days since the last claim
    pub fn with_days_since_last_claim(mut self, days: u32) -> Self {
        self.input.days_since_last_claim = days;
        self
    }

    /// Sets the policy duration in years
    pub fn with_policy_duration(mut self, years: u32) -> Self {
        self.input.policy_duration = years;
        self
    }

    /// Sets the claim type
    pub fn with_claim_type(mut self, claim_type: ClaimType) -> Self {
        self.input.claim_type = claim_type;
        self
    }

    /// Builds the claim input
    pub fn build(self) -> ClaimInput {
        self.input
    }
}
