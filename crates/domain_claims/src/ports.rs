//! Claims Gateway Ports
//!
//! Capability traits for the carrier-facing side of claim processing. Each
//! trait describes exactly one behavior, and a carrier adapter implements
//! only the traits it actually supports. An adapter with no user-facing
//! channel simply does not implement [`UserNotification`].
//!
//! All operations are synchronous, in-process calls. Failure is a boolean
//! result; no operation raises an error.

/// Submits a claim to the carrier.
pub trait ClaimSubmission: Send + Sync {
    /// Returns true when the carrier accepted the claim.
    fn submit_claim(&self) -> bool;
}

/// Notifies the insurer that a claim was submitted.
pub trait InsurerNotification: Send + Sync {
    fn send_insurer_notification(&self);
}

/// Notifies the claimant that their claim was submitted.
///
/// Only carriers with a user-facing channel implement this.
pub trait UserNotification: Send + Sync {
    /// Returns true when the notification was delivered.
    fn send_user_notification(&self) -> bool;
}
