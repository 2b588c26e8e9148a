use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for every monetary figure leaving the service
pub const MONEY_SCALE: u32 = 2;

/// Rounds a monetary value to cents, half away from zero.
///
/// Values outside the range `Decimal` can hold are returned unchanged: floats
/// that large have no fractional cents left to round.
pub fn round_money(amount: f64) -> f64 {
    Decimal::from_f64(amount)
        .map(|value| value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|value| value.to_f64())
        .unwrap_or(amount)
}

/// Converts a whole-number percentage (2.9 means 2.9%) into a fraction
pub fn percent(value: f64) -> f64 {
    value / 100.0
}
