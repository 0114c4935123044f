//! Dell carrier adapter

use crate::ports::{ClaimSubmission, InsurerNotification, UserNotification};

/// Claims integration for the Dell carrier programme.
///
/// Dell is the only carrier with a user-facing channel: on top of submission
/// and insurer notification it delivers a confirmation to the claimant.
#[derive(Debug, Default, Clone, Copy)]
pub struct DellClaimsAdapter;

impl DellClaimsAdapter {
    /// Creates a new adapter.
    pub fn new() -> Self {
        Self
    }
}

impl ClaimSubmission for DellClaimsAdapter {
    fn submit_claim(&self) -> bool {
        // Placeholder for the real submission call to Dell's claims endpoint.
        tracing::info!(carrier = "dell", "submitting claim");
        true
    }
}

impl InsurerNotification for DellClaimsAdapter {
    fn send_insurer_notification(&self) {
        tracing::info!(carrier = "dell", "notifying insurer");
    }
}

impl UserNotification for DellClaimsAdapter {
    fn send_user_notification(&self) -> bool {
        tracing::info!(carrier = "dell", "notifying claimant");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_capabilities_report_success() {
        let adapter = DellClaimsAdapter::new();
        assert!(adapter.submit_claim());
        adapter.send_insurer_notification();
        assert!(adapter.send_user_notification());
    }
}
