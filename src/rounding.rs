//! Per-field rounding precision
//!
//! Each derived field has its own named precision; rounding happens once,
//! when the field is produced, never at display time.

/// Decimal places for tenor mid points (covers both 2- and 3-dp feed values)
pub const MID_DECIMALS: u32 = 3;

/// Decimal places for all-in mid rates
pub const ALL_IN_MID_DECIMALS: u32 = 6;

/// Decimal places for annualized forward-point fractions
pub const ANNUALIZED_DECIMALS: u32 = 5;

/// Decimal places for P&L impact amounts
pub const PNL_DECIMALS: u32 = 2;

/// Round to a fixed number of decimal places, half away from zero
///
/// Non-finite values pass through unchanged, so NaN inputs propagate
/// instead of failing.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
