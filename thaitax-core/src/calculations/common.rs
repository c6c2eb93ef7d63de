//! Shared numeric helpers for the calculation modules.

use rust_decimal::Decimal;

/// Rounds a decimal value to two decimal places using half-up rounding
/// (midpoints move away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use thaitax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(833.333)), dec!(833.33));
/// assert_eq!(round_half_up(dec!(833.335)), dec!(833.34));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the smaller of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}
