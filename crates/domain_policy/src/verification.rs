//! Carrier policy verification
//!
//! This module defines the port for verifying a policy number against the
//! carrier's system of record, plus the shipped stand-in adapter.
//!
//! # Architecture
//!
//! The `PolicyVerification` trait is the seam to the external carrier API.
//! Multiple adapters can implement it:
//!
//! - **CarrierApiVerifier**: the stand-in shipped here, which simulates the
//!   remote call and always reports success
//! - **Recording doubles**: test implementations that count invocations and
//!   return a configured outcome
//!
//! The real integration (transport, authentication, timeout, retry) lives
//! outside this repository.

/// Port for verifying a policy number with the issuing carrier.
pub trait PolicyVerification: Send + Sync {
    /// Returns true when the carrier recognises the policy as in force.
    fn verify(&self, policy_number: &str) -> bool;
}

/// Stand-in for the carrier verification API.
///
/// Emits a diagnostic event in place of the remote call and reports success
/// unconditionally. There is no failure path by design; callers that need to
/// exercise one inject their own `PolicyVerification` implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct CarrierApiVerifier;

impl CarrierApiVerifier {
    /// Creates a new stand-in verifier.
    pub fn new() -> Self {
        Self
    }
}

impl PolicyVerification for CarrierApiVerifier {
    fn verify(&self, policy_number: &str) -> bool {
        // In a real adapter this is where the API request goes out.
        tracing::info!(
            length = policy_number.chars().count(),
            "verifying policy number via carrier API"
        );
        true
    }
}
