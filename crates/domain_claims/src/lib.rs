//! Claims Gateway Domain
//!
//! This crate routes claims to carrier integrations through three segregated
//! capability traits (submission, insurer notification, user notification)
//! and prices them through per-carrier copayment schedules and discounts.
//!
//! # Claim Flow
//!
//! ```text
//! submit -> notify insurer -> notify user (when a notifier is wired)
//! ```
//!
//! A rejected submission stops the flow; no notification is sent and no error
//! is raised.

pub mod ports;
pub mod adapters;
pub mod processor;
pub mod copayment;
pub mod discount;

pub use ports::{ClaimSubmission, InsurerNotification, UserNotification};
pub use adapters::{MicrosoftClaimsAdapter, DellClaimsAdapter, GoogleClaimsAdapter};
pub use processor::{ClaimProcessor, ClaimOutcome};
pub use copayment::{
    base_copayment, CopaymentSchedule, StandardCopayment, MicrosoftCopayment, DellCopayment,
};
pub use discount::{CarrierDiscount, MicrosoftDiscount, DellDiscount, GoogleDiscount};
