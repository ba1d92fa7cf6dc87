//! Claim attributes submitted for risk evaluation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{Currency, Money};
use crate::error::ClaimError;

/// Youngest customer age accepted by the form
pub const MIN_CUSTOMER_AGE: u32 = 18;
/// Oldest customer age accepted by the form
pub const MAX_CUSTOMER_AGE: u32 = 100;

/// Type of claim being made
///
/// Captured with every submission and echoed in the analysis row, but no
/// scoring rule reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    #[default]
    Health,
    Vehicle,
}

impl ClaimType {
    /// All claim types in form order
    pub const ALL: [ClaimType; 2] = [ClaimType::Health, ClaimType::Vehicle];

    /// Returns the form value for this claim type
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Health => "health",
            ClaimType::Vehicle => "vehicle",
        }
    }

    /// Returns the integer encoding used in the analysis row
    pub fn encoded(&self) -> u8 {
        match self {
            ClaimType::Health => 0,
            ClaimType::Vehicle => 1,
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimType {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "health" => Ok(ClaimType::Health),
            "vehicle" => Ok(ClaimType::Vehicle),
            other => Err(ClaimError::invalid_input(format!(
                "claim_type must be one of health, vehicle (got '{}')",
                other
            ))),
        }
    }
}

/// The six attributes describing one claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClaimInput {
    /// Claimed amount in whole currency units
    pub claim_amount: u64,
    /// Customer age in years
    pub customer_age: u32,
    /// Number of claims previously filed by the customer
    pub num_previous_claims: u32,
    /// Days elapsed since the customer's last claim
    pub days_since_last_claim: u32,
    /// Years the policy has been held
    pub policy_duration: u32,
    /// Type of claim
    pub claim_type: ClaimType,
}

impl Default for ClaimInput {
    /// The values the claim form is pre-filled with
    fn default() -> Self {
        Self {
            claim_amount: 50_000,
            customer_age: 30,
            num_previous_claims: 0,
            days_since_last_claim: 365,
            policy_duration: 1,
            claim_type: ClaimType::Health,
        }
    }
}

impl ClaimInput {
    /// Checks the bounds the form widgets enforce at entry
    ///
    /// Counts and amounts are unsigned, so only the age range can be violated
    /// once a `ClaimInput` exists.
    pub fn validate(&self) -> Result<(), ClaimError> {
        if !(MIN_CUSTOMER_AGE..=MAX_CUSTOMER_AGE).contains(&self.customer_age) {
            return Err(ClaimError::invalid_input(format!(
                "customer_age must be between {} and {} (got {})",
                MIN_CUSTOMER_AGE, MAX_CUSTOMER_AGE, self.customer_age
            )));
        }
        Ok(())
    }

    /// Returns the claimed amount as money in the given currency
    pub fn amount(&self, currency: Currency) -> Money {
        Money::from_whole(self.claim_amount, currency)
    }

    /// Returns the row of claim data shown in the analysis detail view
    pub fn analysis_row(&self) -> AnalysisRow {
        AnalysisRow {
            claim_amount: self.claim_amount,
            customer_age: self.customer_age,
            num_previous_claims: self.num_previous_claims,
            days_since_last_claim: self.days_since_last_claim,
            policy_duration: self.policy_duration,
            claim_type: self.claim_type.encoded(),
        }
    }
}

/// Claim data as submitted, before range checks
///
/// Mirrors what a form or JSON body can carry: signed numbers and a free-text
/// claim type. Converting into [`ClaimInput`] rejects anything out of range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClaimInput {
    pub claim_amount: i64,
    pub customer_age: i64,
    pub num_previous_claims: i64,
    pub days_since_last_claim: i64,
    pub policy_duration: i64,
    pub claim_type: String,
}

impl TryFrom<ClaimInput> for RawClaimInput {
    type Error = ClaimError;

    /// Fails only for claim amounts above `i64::MAX`
    fn try_from(input: ClaimInput) -> Result<Self, Self::Error> {
        let claim_amount = i64::try_from(input.claim_amount).map_err(|_| {
            ClaimError::invalid_input(format!(
                "claim_amount is too large (got {})",
                input.claim_amount
            ))
        })?;
        Ok(Self {
            claim_amount,
            customer_age: i64::from(input.customer_age),
            num_previous_claims: i64::from(input.num_previous_claims),
            days_since_last_claim: i64::from(input.days_since_last_claim),
            policy_duration: i64::from(input.policy_duration),
            claim_type: input.claim_type.to_string(),
        })
    }
}

fn non_negative<T: TryFrom<i64>>(field: &str, value: i64) -> Result<T, ClaimError> {
    if value < 0 {
        return Err(ClaimError::invalid_input(format!(
            "{} must not be negative (got {})",
            field, value
        )));
    }
    T::try_from(value)
        .map_err(|_| ClaimError::invalid_input(format!("{} is too large (got {})", field, value)))
}

impl TryFrom<RawClaimInput> for ClaimInput {
    type Error = ClaimError;

    fn try_from(raw: RawClaimInput) -> Result<Self, Self::Error> {
        let input = ClaimInput {
            claim_amount: non_negative("claim_amount", raw.claim_amount)?,
            customer_age: non_negative("customer_age", raw.customer_age)?,
            num_previous_claims: non_negative("num_previous_claims", raw.num_previous_claims)?,
            days_since_last_claim: non_negative("days_since_last_claim", raw.days_since_last_claim)?,
            policy_duration: non_negative("policy_duration", raw.policy_duration)?,
            claim_type: raw.claim_type.parse()?,
        };
        input.validate()?;
        Ok(input)
    }
}

/// Claim data used for analysis, with the claim type integer-encoded
/// (health = 0, vehicle = 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRow {
    pub claim_amount: u64,
    pub customer_age: u32,
    pub num_previous_claims: u32,
    pub days_since_last_claim: u32,
    pub policy_duration: u32,
    pub claim_type: u8,
}

impl AnalysisRow {
    /// Column names in display order
    pub const COLUMNS: [&'static str; 6] = [
        "claim_amount",
        "customer_age",
        "num_previous_claims",
        "days_since_last_claim",
        "policy_duration",
        "claim_type",
    ];

    /// Cell values in column order
    pub fn values(&self) -> [u64; 6] {
        [
            self.claim_amount,
            u64::from(self.customer_age),
            u64::from(self.num_previous_claims),
            u64::from(self.days_since_last_claim),
            u64::from(self.policy_duration),
            u64::from(self.claim_type),
        ]
    }
}
