//! Claims Risk Domain
//!
//! This crate scores an insurance claim against five fixed rules and
//! classifies the total into a risk bucket.
//!
//! # Evaluation
//!
//! ```text
//! ClaimInput -> component scores (5 factors) -> total -> LOW / MEDIUM / HIGH
//! ```
//!
//! There is no model or persisted state; [`RiskScorer::evaluate`] is a pure
//! function of its input.

pub mod claim_input;
pub mod risk;
pub mod scorer;
pub mod error;

pub use claim_input::{AnalysisRow, ClaimInput, ClaimType, RawClaimInput};
pub use risk::{ComponentScores, RiskFactor, RiskLevel, RiskResult};
pub use scorer::{evaluate, RiskScorer};
pub use error::ClaimError;
