//! Google carrier adapter

use crate::ports::{ClaimSubmission, InsurerNotification};

/// Claims integration for the Google carrier programme.
///
/// Submission and insurer notification only, like
/// [`MicrosoftClaimsAdapter`](crate::adapters::MicrosoftClaimsAdapter).
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleClaimsAdapter;

impl GoogleClaimsAdapter {
    /// Creates a new adapter.
    pub fn new() -> Self {
        Self
    }
}

impl ClaimSubmission for GoogleClaimsAdapter {
    fn submit_claim(&self) -> bool {
        tracing::info!(carrier = "google", "submitting claim");
        true
    }
}

impl InsurerNotification for GoogleClaimsAdapter {
    fn send_insurer_notification(&self) {
        tracing::info!(carrier = "google", "notifying insurer");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_reports_success() {
        let adapter = GoogleClaimsAdapter::new();
        assert!(adapter.submit_claim());
    }
}
