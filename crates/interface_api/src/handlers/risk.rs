//! Risk evaluation JSON handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use domain_claims::{ClaimInput, RawClaimInput};

use crate::{AppState, error::ApiError};
use crate::dto::risk::*;
use crate::report::{build_report, scoring_rules};

/// Scores a claim and returns the full report
///
/// Bodies that are not JSON or do not match the request shape are rejected
/// with 400; well-formed values outside the accepted ranges with 422.
pub async fn evaluate_claim(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateClaimRequest>, JsonRejection>,
) -> Result<Json<RiskReport>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;
    let input = ClaimInput::try_from(RawClaimInput::from(request))?;
    let result = state.scorer.evaluate(&input);

    Ok(Json(build_report(&input, &result, state.config.currency)))
}

/// Lists the scoring factors and classification buckets
pub async fn list_factors() -> Json<ScoringRulesResponse> {
    Json(scoring_rules())
}
