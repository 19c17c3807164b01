//! Null-safe numeric helpers shared by every analyzer.
//!
//! Statement line items arrive as nullable numbers. Once they enter a formula they are
//! coerced to plain `f64` with "missing" meaning zero, and every division goes through
//! [`safe_divide`] so a zero denominator yields "not applicable" (0.0) instead of an
//! infinity or NaN.

/// Decimal places used for every ratio.
pub const RATIO_PRECISION: u32 = 4;

/// Decimal places used for discriminant model scores.
pub const SCORE_PRECISION: u32 = 3;

/// Coerce a nullable number to `f64`, treating an absent value as `0.0`.
pub fn normalize<T: Into<f64>>(value: Option<T>) -> f64 {
    value.map(Into::into).unwrap_or(0.0)
}

/// Round half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Divide with a zero guard. An exactly-zero denominator yields `0.0`;
/// otherwise the quotient is rounded to [`RATIO_PRECISION`] places.
pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    round_to(numerator / denominator, RATIO_PRECISION)
}

/// `safe_divide(numerator, denominator) * 100`, re-rounded so the percentage
/// carries no floating point noise from the multiplication.
pub fn safe_percent(numerator: f64, denominator: f64) -> f64 {
    round_to(safe_divide(numerator, denominator) * 100.0, RATIO_PRECISION)
}
