//! Microsoft carrier adapter

use crate::ports::{ClaimSubmission, InsurerNotification};

/// Claims integration for the Microsoft carrier programme.
///
/// Microsoft accepts submissions and insurer notifications only; claimant
/// contact is handled on the carrier's side, so no user-notification
/// capability is exposed.
#[derive(Debug, Default, Clone, Copy)]
pub struct MicrosoftClaimsAdapter;

impl MicrosoftClaimsAdapter {
    /// Creates a new adapter.
    pub fn new() -> Self {
        Self
    }
}

impl ClaimSubmission for MicrosoftClaimsAdapter {
    fn submit_claim(&self) -> bool {
        // Placeholder for the real submission call to Microsoft's claims endpoint.
        tracing::info!(carrier = "microsoft", "submitting claim");
        true
    }
}

impl InsurerNotification for MicrosoftClaimsAdapter {
    fn send_insurer_notification(&self) {
        tracing::info!(carrier = "microsoft", "notifying insurer");
    }
}
