//! Core Kernel - Foundational value types for ClaimWatch
//!
//! This crate provides the building blocks shared by the domain and API crates:
//! - Money types with precise decimal arithmetic and grouped display
//! - Currency codes and symbols
//! - The common error type

pub mod money;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use error::CoreError;
