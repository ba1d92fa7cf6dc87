//! Custom Test Assertions
//!
//! Provides assertion helpers for risk results that give more meaningful
//! error messages than standard assertions.

use domain_claims::{RiskLevel, RiskResult};
use serde_json::Value;

/// Asserts the internal invariants of a result
///
/// # Panics
///
/// Panics if the total is not the sum of the components, a component is
/// neither zero nor its factor's weight, or the level and probability do not
/// follow from the total
pub fn assert_result_consistent(result: &RiskResult) {
    let sum: u32 = result.component_scores.iter().map(|(_, s)| s).sum();
    assert_eq!(
        result.total_score, sum,
        "total_score {} does not match component sum {}",
        result.total_score, sum
    );

    for (factor, score) in result.component_scores.iter() {
        assert!(
            score == 0 || score == factor.weight(),
            "{} contributed {}, expected 0 or {}",
            factor,
            score,
            factor.weight()
        );
    }

    let expected = RiskLevel::from_score(result.total_score);
    assert_eq!(
        result.risk_level, expected,
        "score {} classified as {}, expected {}",
        result.total_score, result.risk_level, expected
    );
    assert_eq!(result.probability, expected.probability());
}

/// Asserts the level, score and probability of a result
pub fn assert_risk(result: &RiskResult, level: RiskLevel, total_score: u32) {
    assert_eq!(result.total_score, total_score, "unexpected total score");
    assert_eq!(result.risk_level, level, "unexpected risk level");
    assert_eq!(result.probability, level.probability(), "unexpected probability");
}

/// Asserts the risk fields of a JSON report
pub fn assert_report_json(report: &Value, level: RiskLevel, total_score: u32) {
    assert_eq!(report["result"]["risk_level"], level.code(), "report: {}", report);
    assert_eq!(report["result"]["total_score"], total_score, "report: {}", report);
    assert_eq!(report["result"]["probability"], level.probability(), "report: {}", report);
    assert_eq!(report["gauge"]["value"], level.probability(), "report: {}", report);
    assert_eq!(report["banner"]["label"], level.label(), "report: {}", report);
}
