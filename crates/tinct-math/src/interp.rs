//! Interpolation utilities for color mixing.
//!
//! - Linear interpolation ([`lerp`])
//! - Circular interpolation for hue angles ([`hue_delta`], [`lerp_hue`])
//!
//! # Usage
//!
//! ```rust
//! use tinct_math::{lerp, lerp_hue};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//!
//! // 350 deg -> 10 deg passes through 0, not through 180
//! assert_eq!(lerp_hue(350.0, 10.0, 0.5), 360.0);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
///
/// # Formula
///
/// `a * (1 - t) + b * t`
///
/// # Example
///
/// ```rust
/// use tinct_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Signed difference `to - from` in degrees along the shorter arc.
///
/// The result lies in `[-180, 180]`.
///
/// # Example
///
/// ```rust
/// use tinct_math::hue_delta;
///
/// assert_eq!(hue_delta(10.0, 50.0), 40.0);
/// assert_eq!(hue_delta(350.0, 10.0), 20.0);
/// assert_eq!(hue_delta(10.0, 350.0), -20.0);
/// ```
#[inline]
pub fn hue_delta(from: f64, to: f64) -> f64 {
    let delta = to - from;
    if delta > 180.0 {
        delta - 360.0
    } else if delta < -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// Interpolates hue angles (degrees) along the shortest circular path.
///
/// The result is not wrapped; it may fall outside `[0, 360)` and should be
/// normalized by the caller.
#[inline]
pub fn lerp_hue(from: f64, to: f64, t: f64) -> f64 {
    from + t * hue_delta(from, to)
}
