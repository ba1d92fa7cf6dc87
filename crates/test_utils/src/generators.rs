//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claim inputs that respect the
//! form's entry bounds.

use domain_claims::{ClaimInput, ClaimType};
use proptest::prelude::*;

/// Strategy for generating claim types
pub fn claim_type_strategy() -> impl Strategy<Value = ClaimType> {
    prop_oneof![Just(ClaimType::Health), Just(ClaimType::Vehicle)]
}

/// Strategy for generating claimed amounts, concentrated around the 80,000 threshold
pub fn claim_amount_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        0u64..1_000_000u64,
        79_990u64..80_010u64,
    ]
}

/// Strategy for generating customer ages within 18..=100
pub fn customer_age_strategy() -> impl Strategy<Value = u32> {
    18u32..=100u32
}

/// Strategy for generating any valid claim input
pub fn claim_input_strategy() -> impl Strategy<Value = ClaimInput> {
    (
        claim_amount_strategy(),
        customer_age_strategy(),
        0u32..15u32,
        0u32..1_000u32,
        0u32..30u32,
        claim_type_strategy(),
    )
        .prop_map(
            |(
                claim_amount,
                customer_age,
                num_previous_claims,
                days_since_last_claim,
                policy_duration,
                claim_type,
            )| ClaimInput {
                claim_amount,
                customer_age,
                num_previous_claims,
                days_since_last_claim,
                policy_duration,
                claim_type,
            },
        )
}

/// Strategy for generating ages the form rejects
pub fn invalid_age_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![0u32..18u32, 101u32..200u32]
}
