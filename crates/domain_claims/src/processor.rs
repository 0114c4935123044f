//! Claim processing pipeline
//!
//! `ClaimProcessor` depends only on the capability traits in [`crate::ports`];
//! which carrier actually serves a claim is decided by whoever wires the
//! processor together.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ports::{ClaimSubmission, InsurerNotification, UserNotification};

/// Outcome of processing a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimOutcome {
    /// The carrier accepted the claim and the insurer was notified.
    Submitted {
        /// Whether a claimant notification was delivered. Always false when
        /// no user notifier is wired.
        user_notified: bool,
    },
    /// The carrier rejected the claim; no notification was sent.
    SubmissionRejected,
}

/// Routes a claim through submission and the notification steps.
///
/// The user notifier is an explicit optional capability: processors for
/// carriers without a user-facing channel are built without one, and the
/// notification step checks for its presence rather than failing.
pub struct ClaimProcessor {
    submission: Arc<dyn ClaimSubmission>,
    insurer: Arc<dyn InsurerNotification>,
    user: Option<Arc<dyn UserNotification>>,
}

impl ClaimProcessor {
    /// Creates a processor with the two mandatory capabilities and no user
    /// notifier.
    pub fn new(
        submission: Arc<dyn ClaimSubmission>,
        insurer: Arc<dyn InsurerNotification>,
    ) -> Self {
        Self {
            submission,
            insurer,
            user: None,
        }
    }

    /// Wires a user notifier into the processor.
    pub fn with_user_notification(mut self, user: Arc<dyn UserNotification>) -> Self {
        self.user = Some(user);
        self
    }

    /// Processes a claim against the wired carrier capabilities.
    ///
    /// Submission gates everything: a rejected submission produces
    /// [`ClaimOutcome::SubmissionRejected`] with no notification sent and no
    /// error raised. On acceptance the insurer is always notified; the
    /// claimant is notified only when a notifier is present.
    pub fn process_claim(&self, policy_number: &str) -> ClaimOutcome {
        if !self.submission.submit_claim() {
            tracing::warn!(
                length = policy_number.chars().count(),
                "claim submission rejected, skipping notifications"
            );
            return ClaimOutcome::SubmissionRejected;
        }

        self.insurer.send_insurer_notification();

        let user_notified = match &self.user {
            Some(user) => user.send_user_notification(),
            None => false,
        };

        ClaimOutcome::Submitted { user_notified }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{DellClaimsAdapter, MicrosoftClaimsAdapter};

    #[test]
    fn test_processing_without_user_notifier() {
        let carrier = Arc::new(MicrosoftClaimsAdapter::new());
        let processor = ClaimProcessor::new(carrier.clone(), carrier);

        let outcome = processor.process_claim("policyMicro1");

        assert_eq!(outcome, ClaimOutcome::Submitted { user_notified: false });
    }

    #[test]
    fn test_processing_with_user_notifier() {
        let carrier = Arc::new(DellClaimsAdapter::new());
        let processor = ClaimProcessor::new(carrier.clone(), carrier.clone())
            .with_user_notification(carrier);

        let outcome = processor.process_claim("policyDell45");

        assert_eq!(outcome, ClaimOutcome::Submitted { user_notified: true });
    }

    #[test]
    fn test_outcome_serializes() {
        let json = serde_json::to_string(&ClaimOutcome::Submitted { user_notified: true }).unwrap();
        assert!(!json.is_empty());
    }
}
