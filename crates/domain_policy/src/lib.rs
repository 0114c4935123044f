//! Policy Screening Domain
//!
//! This crate implements the pre-claim policy screening pipeline: a syntactic
//! check on the policy number followed by a verification call against the
//! carrier's system of record.
//!
//! # Screening Pipeline
//!
//! ```text
//! policy number -> validate (syntactic) -> verify (carrier) -> outcome
//! ```
//!
//! Validation failures short-circuit the pipeline; the carrier is never
//! contacted for a malformed number.

pub mod validation;
pub mod verification;
pub mod handler;

pub use validation::PolicyValidator;
pub use verification::{PolicyVerification, CarrierApiVerifier};
pub use handler::{PolicyHandler, PolicyOutcome};
