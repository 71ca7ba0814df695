//! Numeric utilities shared by every color space.
//!
//! - [`clip`] - Clamp into a closed range
//! - [`wrap_modulo`] - Non-negative remainder, used for hue wrap-around
//! - [`round_to_precision`] - Fixed-precision rounding of XYZ/LAB values
//!
//! # Example
//!
//! ```rust
//! use tinct_core::numeric::{clip, wrap_modulo, round_decimal};
//!
//! assert_eq!(clip(-0.2, 0.0, 1.0), 0.0);
//! assert_eq!(wrap_modulo(-90.0, 360.0), 270.0);
//! assert_eq!(round_decimal(41.23456), 41.235);
//! ```

/// Default rounding precision for XYZ and LAB values (three decimals).
pub const DEFAULT_PRECISION: f64 = 1000.0;

/// Clips `value` to `[min, max]`.
///
/// Computed as `max(min(value, max), min)`, so an inverted range returns
/// `min`. NaN input yields `min`.
///
/// # Example
///
/// ```rust
/// use tinct_core::clip;
///
/// assert_eq!(clip(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clip(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clip(-3.0, -1.0, 1.0), -1.0);
/// ```
#[inline]
pub fn clip(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Returns `((x mod m) + m) mod m`.
///
/// Unlike `%`, the result is non-negative for negative `x` when `m > 0`.
///
/// # Example
///
/// ```rust
/// use tinct_core::wrap_modulo;
///
/// assert_eq!(wrap_modulo(370.0, 360.0), 10.0);
/// assert_eq!(wrap_modulo(-30.0, 360.0), 330.0);
/// assert_eq!(wrap_modulo(1.25, 1.0), 0.25);
/// ```
#[inline]
pub fn wrap_modulo(x: f64, m: f64) -> f64 {
    ((x % m) + m) % m
}

/// Rounds `x` to `1 / precision` steps: `round(x * precision) / precision`.
///
/// Halfway cases round away from zero.
#[inline]
pub fn round_to_precision(x: f64, precision: f64) -> f64 {
    (x * precision).round() / precision
}

/// Rounds `x` to three decimals ([`DEFAULT_PRECISION`]).
#[inline]
pub fn round_decimal(x: f64) -> f64 {
    round_to_precision(x, DEFAULT_PRECISION)
}
