//! Policy screening pipeline
//!
//! `PolicyHandler` coordinates validation and verification without owning
//! either rule: the syntactic check comes from [`PolicyValidator`] and the
//! carrier check from an injected [`PolicyVerification`] implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::validation::PolicyValidator;
use crate::verification::PolicyVerification;

/// Outcome of screening a policy number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyOutcome {
    /// Rejected before verification: the number is syntactically malformed.
    Invalid,
    /// The carrier confirmed the policy.
    Verified,
    /// The carrier rejected the policy.
    VerificationFailed,
}

/// Coordinates the two screening stages for a policy number.
pub struct PolicyHandler {
    validator: PolicyValidator,
    verifier: Arc<dyn PolicyVerification>,
}

impl PolicyHandler {
    /// Creates a handler from its two collaborators.
    pub fn new(validator: PolicyValidator, verifier: Arc<dyn PolicyVerification>) -> Self {
        Self {
            validator,
            verifier,
        }
    }

    /// Screens a policy number and reports the outcome.
    ///
    /// A malformed number short-circuits the pipeline: the carrier is never
    /// contacted for it. A failed verification is reported, not raised.
    pub fn handle(&self, policy_number: &str) -> PolicyOutcome {
        if !self.validator.is_valid(policy_number) {
            tracing::warn!("invalid policy number");
            return PolicyOutcome::Invalid;
        }

        if self.verifier.verify(policy_number) {
            tracing::info!("policy verified successfully");
            PolicyOutcome::Verified
        } else {
            tracing::warn!("policy verification failed");
            PolicyOutcome::VerificationFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification::CarrierApiVerifier;

    #[test]
    fn test_handle_well_formed_number_verifies() {
        let handler = PolicyHandler::new(
            PolicyValidator::new(),
            Arc::new(CarrierApiVerifier::new()),
        );
        assert_eq!(handler.handle("POL123456789"), PolicyOutcome::Verified);
    }

    #[test]
    fn test_handle_malformed_number_is_invalid() {
        let handler = PolicyHandler::new(
            PolicyValidator::new(),
            Arc::new(CarrierApiVerifier::new()),
        );
        assert_eq!(handler.handle("POL123"), PolicyOutcome::Invalid);
        assert_eq!(handler.handle(""), PolicyOutcome::Invalid);
    }

    #[test]
    fn test_outcome_serializes() {
        let json = serde_json::to_string(&PolicyOutcome::Verified).unwrap();
        assert!(!json.is_empty());
    }
}
