//! Pre-built assemblies for common test scenarios
//!
//! Each fixture wires a processor the way a caller would: construct the
//! carrier adapter once, then hand the same instance to every capability slot
//! the carrier supports.

use std::sync::Arc;

use domain_claims::{
    ClaimProcessor, DellClaimsAdapter, GoogleClaimsAdapter, MicrosoftClaimsAdapter,
};
use domain_policy::{CarrierApiVerifier, PolicyHandler, PolicyValidator};

/// A processor wired for Microsoft: submission and insurer notification from
/// one adapter instance, no user notifier.
pub fn microsoft_processor() -> ClaimProcessor {
    let carrier = Arc::new(MicrosoftClaimsAdapter::new());
    ClaimProcessor::new(carrier.clone(), carrier)
}

/// A processor wired for Dell: all three capabilities from one adapter
/// instance.
pub fn dell_processor() -> ClaimProcessor {
    let carrier = Arc::new(DellClaimsAdapter::new());
    ClaimProcessor::new(carrier.clone(), carrier.clone()).with_user_notification(carrier)
}

/// A processor wired for Google: submission and insurer notification only.
pub fn google_processor() -> ClaimProcessor {
    let carrier = Arc::new(GoogleClaimsAdapter::new());
    ClaimProcessor::new(carrier.clone(), carrier)
}

/// A policy handler wired with the stub carrier verifier.
pub fn stub_policy_handler() -> PolicyHandler {
    PolicyHandler::new(PolicyValidator::new(), Arc::new(CarrierApiVerifier::new()))
}
