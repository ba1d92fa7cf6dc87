//! Builds the presentation view model for one evaluation

use core_kernel::Currency;
use domain_claims::{ClaimInput, RiskFactor, RiskLevel, RiskResult};

use crate::dto::risk::{
    Banner, BannerStyle, BucketResponse, FactorResponse, Gauge, Metric, PieChart, PieSlice,
    RiskReport, ScoringRulesResponse,
};

/// Qualitative Dark2 palette, one color per factor
pub const DARK2: [&str; 8] = [
    "#1B9E77", "#D95F02", "#7570B3", "#E7298A", "#66A61E", "#E6AB02", "#A6761D", "#666666",
];

/// Gauge bar color
pub const GAUGE_COLOR: &str = "#6200ea";

pub const BREAKDOWN_TITLE: &str = "Risk Factors Contribution";
pub const GAUGE_TITLE: &str = "Fraud Probability";

/// Assembles the report for an input and its result
pub fn build_report(input: &ClaimInput, result: &RiskResult, currency: Currency) -> RiskReport {
    RiskReport {
        result: *result,
        summary: summary_metrics(input, result, currency),
        breakdown: breakdown_chart(result),
        gauge: probability_gauge(result),
        banner: risk_banner(result),
        input: *input,
        analysis_row: input.analysis_row(),
    }
}

fn summary_metrics(input: &ClaimInput, result: &RiskResult, currency: Currency) -> Vec<Metric> {
    vec![
        Metric {
            label: "Risk Level".to_string(),
            value: result.risk_level.label().to_string(),
            delta: Some(format!("{}%", result.probability)),
        },
        Metric {
            label: "Score".to_string(),
            value: result.total_score.to_string(),
            delta: None,
        },
        Metric {
            label: "Amount".to_string(),
            value: input.amount(currency).to_string(),
            delta: None,
        },
    ]
}

fn breakdown_chart(result: &RiskResult) -> PieChart {
    let total = result.total_score;
    let slices = result
        .component_scores
        .iter()
        .enumerate()
        .map(|(i, (factor, score))| PieSlice {
            component: factor.name().to_string(),
            score,
            share: if total == 0 {
                0.0
            } else {
                f64::from(score) / f64::from(total)
            },
            color: DARK2[i % DARK2.len()].to_string(),
        })
        .collect();

    PieChart {
        title: BREAKDOWN_TITLE.to_string(),
        slices,
    }
}

fn probability_gauge(result: &RiskResult) -> Gauge {
    Gauge {
        title: GAUGE_TITLE.to_string(),
        value: result.probability,
        min: 0,
        max: 100,
        bar_color: GAUGE_COLOR.to_string(),
    }
}

fn risk_banner(result: &RiskResult) -> Banner {
    let level = result.risk_level;
    Banner {
        level,
        label: level.label().to_string(),
        icon: level.icon().to_string(),
        style: BannerStyle::for_level(level),
        message: format!("Fraud Probability: {}%", result.probability),
    }
}

/// The fixed factor and classification tables
pub fn scoring_rules() -> ScoringRulesResponse {
    ScoringRulesResponse {
        factors: RiskFactor::ALL
            .iter()
            .map(|f| FactorResponse {
                name: f.name().to_string(),
                condition: f.condition(),
                weight: f.weight(),
            })
            .collect(),
        buckets: RiskLevel::ALL
            .iter()
            .map(|level| {
                let (min_score, max_score) = level.score_range();
                BucketResponse {
                    level: *level,
                    label: level.label().to_string(),
                    min_score,
                    max_score,
                    probability: level.probability(),
                }
            })
            .collect(),
        max_score: RiskFactor::MAX_TOTAL,
    }
}
