//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data around the
//! gateway's two inputs: policy numbers and claim amounts.

use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for well-formed policy numbers (exactly 12 characters).
pub fn valid_policy_number_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<char>(), 12).prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for malformed policy numbers (any length except 12, empty
/// included).
pub fn invalid_policy_number_strategy() -> impl Strategy<Value = String> {
    ".*".prop_filter("length must differ from 12", |s: &String| {
        s.chars().count() != 12
    })
}

/// Strategy for claim amounts with cent precision, negatives included.
pub fn claim_amount_strategy() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for claim amounts above the large-claim waiver threshold.
pub fn large_claim_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1_000_001i64..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}
