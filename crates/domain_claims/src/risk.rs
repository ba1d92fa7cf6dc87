//! Risk factors, component scores, and risk classification
//!
//! Five fixed rules each contribute a weight when their condition holds on a
//! [`ClaimInput`]. Their sum is bucketed into a [`RiskLevel`], and each level
//! carries a fixed display probability.
//!
//! ```text
//! total 0..=2 -> LOW    (20%)
//! total 3..=5 -> MEDIUM (55%)
//! total >= 6  -> HIGH   (85%)
//! ```

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::claim_input::ClaimInput;

/// Claimed amounts above this value are flagged
pub const HIGH_AMOUNT_THRESHOLD: u64 = 80_000;
/// Customers with at least this many previous claims are flagged
pub const PREVIOUS_CLAIMS_THRESHOLD: u32 = 3;
/// Claims filed fewer than this many days after the last one are flagged
pub const RECENT_CLAIM_DAYS: u32 = 30;
/// Policies held fewer than this many years are flagged
pub const SHORT_POLICY_YEARS: u32 = 2;
/// Customers younger than this are flagged
pub const YOUNG_CUSTOMER_AGE: u32 = 25;

/// Highest total score a LOW classification covers
pub const LOW_MAX_SCORE: u32 = 2;
/// Highest total score a MEDIUM classification covers
pub const MEDIUM_MAX_SCORE: u32 = 5;

/// Display probability for LOW risk
pub const LOW_PROBABILITY: u8 = 20;
/// Display probability for MEDIUM risk
pub const MEDIUM_PROBABILITY: u8 = 55;
/// Display probability for HIGH risk
pub const HIGH_PROBABILITY: u8 = 85;

/// A named scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskFactor {
    HighAmount,
    PreviousClaims,
    RecentClaim,
    ShortPolicy,
    YoungCustomer,
}

impl RiskFactor {
    /// All factors in breakdown order
    pub const ALL: [RiskFactor; 5] = [
        RiskFactor::HighAmount,
        RiskFactor::PreviousClaims,
        RiskFactor::RecentClaim,
        RiskFactor::ShortPolicy,
        RiskFactor::YoungCustomer,
    ];

    /// Highest total score reachable when every factor fires
    pub const MAX_TOTAL: u32 = 8;

    /// Display name of the factor
    pub fn name(&self) -> &'static str {
        match self {
            RiskFactor::HighAmount => "High Amount",
            RiskFactor::PreviousClaims => "Previous Claims",
            RiskFactor::RecentClaim => "Recent Claim",
            RiskFactor::ShortPolicy => "Short Policy",
            RiskFactor::YoungCustomer => "Young Customer",
        }
    }

    /// Score contributed when the factor's condition holds
    pub fn weight(&self) -> u32 {
        match self {
            RiskFactor::HighAmount | RiskFactor::PreviousClaims | RiskFactor::RecentClaim => 2,
            RiskFactor::ShortPolicy | RiskFactor::YoungCustomer => 1,
        }
    }

    /// Human-readable condition, e.g. for the factor table endpoint
    pub fn condition(&self) -> String {
        match self {
            RiskFactor::HighAmount => format!("claim_amount > {}", HIGH_AMOUNT_THRESHOLD),
            RiskFactor::PreviousClaims => {
                format!("num_previous_claims >= {}", PREVIOUS_CLAIMS_THRESHOLD)
            }
            RiskFactor::RecentClaim => format!("days_since_last_claim < {}", RECENT_CLAIM_DAYS),
            RiskFactor::ShortPolicy => format!("policy_duration < {}", SHORT_POLICY_YEARS),
            RiskFactor::YoungCustomer => format!("customer_age < {}", YOUNG_CUSTOMER_AGE),
        }
    }

    /// Whether the factor's condition holds for the input
    pub fn applies_to(&self, input: &ClaimInput) -> bool {
        match self {
            RiskFactor::HighAmount => input.claim_amount > HIGH_AMOUNT_THRESHOLD,
            RiskFactor::PreviousClaims => input.num_previous_claims >= PREVIOUS_CLAIMS_THRESHOLD,
            RiskFactor::RecentClaim => input.days_since_last_claim < RECENT_CLAIM_DAYS,
            RiskFactor::ShortPolicy => input.policy_duration < SHORT_POLICY_YEARS,
            RiskFactor::YoungCustomer => input.customer_age < YOUNG_CUSTOMER_AGE,
        }
    }

    /// The factor's contribution for the input: its weight or zero
    pub fn score(&self, input: &ClaimInput) -> u32 {
        if self.applies_to(input) {
            self.weight()
        } else {
            0
        }
    }

    fn index(&self) -> usize {
        match self {
            RiskFactor::HighAmount => 0,
            RiskFactor::PreviousClaims => 1,
            RiskFactor::RecentClaim => 2,
            RiskFactor::ShortPolicy => 3,
            RiskFactor::YoungCustomer => 4,
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contribution of every factor, zero entries included
///
/// Always holds all five factors in [`RiskFactor::ALL`] order so the
/// breakdown chart keeps the same slices across evaluations. Serializes as a
/// map from factor name to score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ComponentScores {
    scores: [u32; 5],
}

impl ComponentScores {
    /// Scores every factor against the input
    pub fn from_input(input: &ClaimInput) -> Self {
        let mut scores = [0; 5];
        for factor in RiskFactor::ALL {
            scores[factor.index()] = factor.score(input);
        }
        Self { scores }
    }

    /// Score contributed by one factor
    pub fn get(&self, factor: RiskFactor) -> u32 {
        self.scores[factor.index()]
    }

    /// Sum of all contributions
    pub fn total(&self) -> u32 {
        self.scores.iter().sum()
    }

    /// Iterates `(factor, score)` pairs in breakdown order
    pub fn iter(&self) -> impl Iterator<Item = (RiskFactor, u32)> + '_ {
        RiskFactor::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Factors whose condition held
    pub fn triggered(&self) -> Vec<RiskFactor> {
        self.iter().filter(|(_, s)| *s > 0).map(|(f, _)| f).collect()
    }
}

impl Serialize for ComponentScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(RiskFactor::ALL.len()))?;
        for (factor, score) in self.iter() {
            map.serialize_entry(factor.name(), &score)?;
        }
        map.end()
    }
}

/// Risk classification bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// All levels, lowest first
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// Buckets a total score
    pub fn from_score(total_score: u32) -> Self {
        match total_score {
            0..=LOW_MAX_SCORE => RiskLevel::Low,
            s if s <= MEDIUM_MAX_SCORE => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    /// Fixed display probability for the level
    ///
    /// Not a calibrated probability.
    pub fn probability(&self) -> u8 {
        match self {
            RiskLevel::Low => LOW_PROBABILITY,
            RiskLevel::Medium => MEDIUM_PROBABILITY,
            RiskLevel::High => HIGH_PROBABILITY,
        }
    }

    /// Inclusive score range covered by the level; HIGH is open-ended
    pub fn score_range(&self) -> (u32, Option<u32>) {
        match self {
            RiskLevel::Low => (0, Some(LOW_MAX_SCORE)),
            RiskLevel::Medium => (LOW_MAX_SCORE + 1, Some(MEDIUM_MAX_SCORE)),
            RiskLevel::High => (MEDIUM_MAX_SCORE + 1, None),
        }
    }

    /// Short code, as serialized
    pub fn code(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }

    /// Banner label
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Medium => "MEDIUM RISK",
            RiskLevel::High => "HIGH RISK",
        }
    }

    /// Banner icon: check, warning, or alarm
    pub fn icon(&self) -> &'static str {
        match self {
            RiskLevel::Low => "✅",
            RiskLevel::Medium => "⚠️",
            RiskLevel::High => "🚨",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RiskResult {
    pub total_score: u32,
    pub component_scores: ComponentScores,
    pub risk_level: RiskLevel,
    pub probability: u8,
}

impl RiskResult {
    /// Builds the result from component scores, deriving total and bucket
    pub fn from_components(component_scores: ComponentScores) -> Self {
        let total_score = component_scores.total();
        let risk_level = RiskLevel::from_score(total_score);
        Self {
            total_score,
            component_scores,
            risk_level,
            probability: risk_level.probability(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_total_is_sum_of_weights() {
        let sum: u32 = RiskFactor::ALL.iter().map(|f| f.weight()).sum();
        assert_eq!(sum, RiskFactor::MAX_TOTAL);
    }

    #[test]
    fn test_bucket_edges() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(2), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(3), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(5), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(6), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    }

    #[test]
    fn test_ranges_cover_scores_without_overlap() {
        for score in 0..=RiskFactor::MAX_TOTAL {
            let covering: Vec<_> = RiskLevel::ALL
                .iter()
                .filter(|level| {
                    let (lo, hi) = level.score_range();
                    score >= lo && hi.map_or(true, |hi| score <= hi)
                })
                .collect();
            assert_eq!(covering, vec![&RiskLevel::from_score(score)]);
        }
    }

    #[test]
    fn test_component_scores_serialize_all_keys_in_order() {
        let json = serde_json::to_string(&ComponentScores::default()).unwrap();
        assert_eq!(
            json,
            r#"{"High Amount":0,"Previous Claims":0,"Recent Claim":0,"Short Policy":0,"Young Customer":0}"#
        );
    }
}
