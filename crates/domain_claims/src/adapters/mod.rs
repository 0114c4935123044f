//! Carrier adapters
//!
//! One adapter per carrier, each implementing only the capability traits that
//! carrier supports. The real integrations (REST calls, queues, email/SMS
//! transports) live outside this repository; these adapters simulate the
//! calls and report fixed success.

mod microsoft;
mod dell;
mod google;

pub use microsoft::MicrosoftClaimsAdapter;
pub use dell::DellClaimsAdapter;
pub use google::GoogleClaimsAdapter;
