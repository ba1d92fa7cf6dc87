//! Risk evaluation DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_claims::{AnalysisRow, ClaimError, ClaimInput, RawClaimInput, RiskLevel, RiskResult};

/// JSON body for `POST /api/v1/risk/evaluate`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct EvaluateClaimRequest {
    #[validate(range(min = 0))]
    pub claim_amount: i64,
    #[validate(range(min = 18, max = 100))]
    pub customer_age: i64,
    #[validate(range(min = 0))]
    pub num_previous_claims: i64,
    #[validate(range(min = 0))]
    pub days_since_last_claim: i64,
    #[validate(range(min = 0))]
    pub policy_duration: i64,
    #[validate(length(min = 1))]
    pub claim_type: String,
}

impl From<EvaluateClaimRequest> for RawClaimInput {
    fn from(request: EvaluateClaimRequest) -> Self {
        RawClaimInput {
            claim_amount: request.claim_amount,
            customer_age: request.customer_age,
            num_previous_claims: request.num_previous_claims,
            days_since_last_claim: request.days_since_last_claim,
            policy_duration: request.policy_duration,
            claim_type: request.claim_type,
        }
    }
}

/// Urlencoded body of the HTML claim form
///
/// Fields stay as text so an invalid submission can be re-rendered exactly
/// as the user typed it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ClaimForm {
    pub claim_amount: String,
    pub customer_age: String,
    pub num_previous_claims: String,
    pub days_since_last_claim: String,
    pub policy_duration: String,
    pub claim_type: String,
}

impl ClaimForm {
    /// Pre-fills the form from an input
    pub fn from_input(input: &ClaimInput) -> Self {
        Self {
            claim_amount: input.claim_amount.to_string(),
            customer_age: input.customer_age.to_string(),
            num_previous_claims: input.num_previous_claims.to_string(),
            days_since_last_claim: input.days_since_last_claim.to_string(),
            policy_duration: input.policy_duration.to_string(),
            claim_type: input.claim_type.to_string(),
        }
    }

    /// Parses the text fields into a raw input
    pub fn parse(&self) -> Result<RawClaimInput, ClaimError> {
        Ok(RawClaimInput {
            claim_amount: parse_field("claim_amount", &self.claim_amount)?,
            customer_age: parse_field("customer_age", &self.customer_age)?,
            num_previous_claims: parse_field("num_previous_claims", &self.num_previous_claims)?,
            days_since_last_claim: parse_field("days_since_last_claim", &self.days_since_last_claim)?,
            policy_duration: parse_field("policy_duration", &self.policy_duration)?,
            claim_type: self.claim_type.clone(),
        })
    }
}

fn parse_field(field: &str, value: &str) -> Result<i64, ClaimError> {
    value
        .trim()
        .parse()
        .map_err(|_| ClaimError::invalid_input(format!("{} must be a whole number", field)))
}

/// One headline metric in the summary row
#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
}

/// One slice of the factor breakdown pie
#[derive(Debug, Clone, Serialize)]
pub struct PieSlice {
    pub component: String,
    pub score: u32,
    /// Fraction of the total score, 0.0 when the total is zero
    pub share: f64,
    pub color: String,
}

/// Factor breakdown chart
#[derive(Debug, Clone, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// Probability gauge
#[derive(Debug, Clone, Serialize)]
pub struct Gauge {
    pub title: String,
    pub value: u8,
    pub min: u8,
    pub max: u8,
    pub bar_color: String,
}

/// Banner style keyed by risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerStyle {
    Success,
    Warning,
    Error,
}

impl BannerStyle {
    pub fn for_level(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low => BannerStyle::Success,
            RiskLevel::Medium => BannerStyle::Warning,
            RiskLevel::High => BannerStyle::Error,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BannerStyle::Success => "banner-success",
            BannerStyle::Warning => "banner-warning",
            BannerStyle::Error => "banner-error",
        }
    }
}

/// Styled result banner
#[derive(Debug, Clone, Serialize)]
pub struct Banner {
    pub level: RiskLevel,
    pub label: String,
    pub icon: String,
    pub style: BannerStyle,
    pub message: String,
}

/// Everything the result page shows for one evaluation
#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    pub result: RiskResult,
    pub summary: Vec<Metric>,
    pub breakdown: PieChart,
    pub gauge: Gauge,
    pub banner: Banner,
    pub input: ClaimInput,
    pub analysis_row: AnalysisRow,
}

/// One row of the factor table
#[derive(Debug, Clone, Serialize)]
pub struct FactorResponse {
    pub name: String,
    pub condition: String,
    pub weight: u32,
}

/// One row of the classification table
#[derive(Debug, Clone, Serialize)]
pub struct BucketResponse {
    pub level: RiskLevel,
    pub label: String,
    pub min_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<u32>,
    pub probability: u8,
}

/// Response for `GET /api/v1/risk/factors`
#[derive(Debug, Clone, Serialize)]
pub struct ScoringRulesResponse {
    pub factors: Vec<FactorResponse>,
    pub buckets: Vec<BucketResponse>,
    pub max_score: u32,
}
