//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! ClaimWatch test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claim inputs for each risk bucket
//! - `builders`: Builder pattern for claim input construction
//! - `assertions`: Custom assertion helpers for risk results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
