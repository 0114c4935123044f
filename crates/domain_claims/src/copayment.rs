//! Copayment schedules
//!
//! Every carrier charges a copayment on top of the claim amount. The shared
//! base charge lives in [`base_copayment`]; carrier schedules call it
//! explicitly and add their own delta, so the composition is visible at each
//! call site.
//!
//! Claim amounts are taken as given. No range check is applied here, so
//! zero and negative amounts flow through the same arithmetic.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Applies the base copayment shared by all schedules.
pub fn base_copayment(claim_amount: Decimal) -> Decimal {
    claim_amount + dec!(100)
}

/// A carrier's rule for adding a copayment to a claim amount.
///
/// Every schedule returns at least the input amount, so callers can hold any
/// schedule without special-casing.
pub trait CopaymentSchedule: Send + Sync {
    /// Returns the claim amount with the carrier's copayment applied.
    fn add_copayment(&self, claim_amount: Decimal) -> Decimal;
}

/// The default schedule: base copayment only.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardCopayment;

impl CopaymentSchedule for StandardCopayment {
    fn add_copayment(&self, claim_amount: Decimal) -> Decimal {
        base_copayment(claim_amount)
    }
}

/// Microsoft's schedule: copayment waived entirely above 10000, an extra
/// 100 on top of the base charge otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct MicrosoftCopayment;

impl CopaymentSchedule for MicrosoftCopayment {
    fn add_copayment(&self, claim_amount: Decimal) -> Decimal {
        if claim_amount > dec!(10000) {
            return claim_amount;
        }
        base_copayment(claim_amount) + dec!(100)
    }
}

/// Dell's schedule: an extra 50 on top of the base charge, always.
#[derive(Debug, Default, Clone, Copy)]
pub struct DellCopayment;

impl CopaymentSchedule for DellCopayment {
    fn add_copayment(&self, claim_amount: Decimal) -> Decimal {
        base_copayment(claim_amount) + dec!(50)
    }
}
