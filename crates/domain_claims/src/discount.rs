//! Carrier discounts
//!
//! Each carrier programme carries a negotiated flat discount percentage,
//! fixed at compile time. Adding a carrier means adding an implementation of
//! [`CarrierDiscount`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The discount a carrier programme grants on claim pricing.
pub trait CarrierDiscount: Send + Sync {
    /// Returns the discount percentage (e.g. `5` for 5%).
    fn discount_percent(&self) -> Decimal;
}

/// Microsoft programme: 5% discount.
#[derive(Debug, Default, Clone, Copy)]
pub struct MicrosoftDiscount;

impl CarrierDiscount for MicrosoftDiscount {
    fn discount_percent(&self) -> Decimal {
        dec!(5)
    }
}

/// Dell programme: no discount.
#[derive(Debug, Default, Clone, Copy)]
pub struct DellDiscount;

impl CarrierDiscount for DellDiscount {
    fn discount_percent(&self) -> Decimal {
        dec!(0)
    }
}

/// Google programme: 10% discount.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleDiscount;

impl CarrierDiscount for GoogleDiscount {
    fn discount_percent(&self) -> Decimal {
        dec!(10)
    }
}
