//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! IEC 61966-2-1:1999, WCAG 2.1 (relative luminance)

use tinct_math::Vec3;

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use tinct_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB EOTF with the WCAG breakpoint.
///
/// # Formula
///
/// ```text
/// if V <= 0.03928:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
#[inline]
pub fn eotf_wcag(v: f64) -> f64 {
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use tinct_transfer::srgb::oetf;
///
/// let encoded = oetf(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Applies sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: Vec3) -> Vec3 {
    rgb.map(eotf)
}

/// Applies the WCAG-breakpoint EOTF to an RGB triplet.
#[inline]
pub fn eotf_wcag_rgb(rgb: Vec3) -> Vec3 {
    rgb.map(eotf_wcag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let back = oetf(eotf(v));
            assert_abs_diff_eq!(v, back, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert_eq!(eotf(1.0), 1.0);
        assert_eq!(eotf_wcag(1.0), 1.0);
        assert_eq!(oetf(0.0), 0.0);
        assert_abs_diff_eq!(oetf(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wcag_breakpoint() {
        // Between the two breakpoints the WCAG variant takes the power branch
        let v = 0.04;
        assert_abs_diff_eq!(eotf(v), v / 12.92);
        assert_abs_diff_eq!(eotf_wcag(v), ((v + 0.055) / 1.055_f64).powf(2.4));
        assert_eq!(eotf(0.02), eotf_wcag(0.02));
        assert_eq!(eotf(0.5), eotf_wcag(0.5));
    }

    #[test]
    fn test_rgb_helpers() {
        let rgb = Vec3::new(0.0, 0.5, 1.0);
        let linear = eotf_rgb(rgb);
        assert_eq!(linear.x, 0.0);
        assert_eq!(linear.z, 1.0);
        assert_abs_diff_eq!(oetf(linear.y), 0.5, epsilon = 1e-9);
        assert_eq!(eotf_wcag_rgb(rgb).y, eotf_wcag(0.5));
    }
}
