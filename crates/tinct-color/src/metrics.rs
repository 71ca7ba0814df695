//! Perceptual metrics: relative luminance, contrast, light/dark checks.
//!
//! # WCAG
//!
//! [`Rgba::luminance`] is the WCAG 2.x relative luminance, and
//! [`Rgba::contrast_ratio`] the matching `(L1 + 0.05) / (L2 + 0.05)` ratio,
//! from 1.0 (identical) to 21.0 (black on white). [`ContrastContext`]
//! selects the AA/AAA threshold used by [`Rgba::is_contrasting`].
//!
//! # Heuristics
//!
//! Several quick checks use fixed weights on the *encoded* channels and are
//! kept as separate operations because their callers depend on their exact
//! thresholds:
//!
//! | Check | Formula | Threshold |
//! |-------|---------|-----------|
//! | [`is_light`](Rgba::is_light) | `(299R + 587G + 114B) / 1000` | `>= 0.5` |
//! | [`is_dark`](Rgba::is_dark) | `0.2126R + 0.7152G + 0.0722B` | `< 0.5` |
//! | [`is_contrasting_with`](Rgba::is_contrasting_with) | ratio of the `is_dark` sums | `> 1.6` |
//!
//! `is_light` and `is_dark` are not complements: a color can be both, or
//! neither.
//!
//! # Example
//!
//! ```rust
//! use tinct_color::{ContrastContext, Rgba};
//!
//! assert_eq!(Rgba::WHITE.contrast_ratio(&Rgba::BLACK), 21.0);
//! assert!(Rgba::WHITE.is_contrasting(&Rgba::BLACK, ContrastContext::Standard));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::space::Rgba;
use tinct_math::Vec3;
use tinct_transfer::srgb;

/// Rec.709 / sRGB luminance weights.
pub const REC709_LUMA: Vec3 = Vec3::new(0.2126, 0.7152, 0.0722);

/// Legacy perceived-brightness weights, per mille.
const PERCEIVED_BRIGHTNESS: Vec3 = Vec3::new(299.0, 587.0, 114.0);

const BLACK_THRESHOLD: f64 = 0.09;
const WHITE_THRESHOLD: f64 = 0.91;
const DISTINCT_THRESHOLD: f64 = 0.25;
const GRAY_TOLERANCE: f64 = 0.03;
const HEURISTIC_CONTRAST: f64 = 1.6;

/// Display context selecting a WCAG minimum contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContrastContext {
    /// Body text, level AA: 4.5.
    #[default]
    Standard,
    /// Large text, level AA: 3.0.
    StandardLargeText,
    /// Body text, level AAA: 7.0.
    Enhanced,
    /// Large text, level AAA: 4.5.
    EnhancedLargeText,
}

impl ContrastContext {
    /// All contexts, in declaration order.
    pub const ALL: [ContrastContext; 4] = [
        Self::Standard,
        Self::StandardLargeText,
        Self::Enhanced,
        Self::EnhancedLargeText,
    ];

    /// Contrast ratio that must be exceeded in this context.
    pub fn minimum_ratio(&self) -> f64 {
        match self {
            Self::Standard => 4.5,
            Self::StandardLargeText => 3.0,
            Self::Enhanced => 7.0,
            Self::EnhancedLargeText => 4.5,
        }
    }

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::StandardLargeText => "standard-large",
            Self::Enhanced => "enhanced",
            Self::EnhancedLargeText => "enhanced-large",
        }
    }
}

impl fmt::Display for ContrastContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContrastContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ctx| ctx.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown contrast context '{s}' (expected standard, standard-large, enhanced or enhanced-large)"
                )
            })
    }
}

/// Weighted sum of the encoded channels, no linearization.
#[inline]
fn encoded_luma(c: &Rgba) -> f64 {
    c.rgb_vec().dot(REC709_LUMA)
}

#[inline]
fn is_near_gray(c: &Rgba) -> bool {
    (c.red() - c.green()).abs() < GRAY_TOLERANCE && (c.red() - c.blue()).abs() < GRAY_TOLERANCE
}

impl Rgba {
    /// HSB hue as a fraction in [0, 1).
    pub fn hue(&self) -> f64 {
        self.to_hsba().hue()
    }

    /// HSB saturation.
    pub fn saturation(&self) -> f64 {
        self.to_hsba().saturation()
    }

    /// HSB brightness, the largest channel.
    pub fn brightness(&self) -> f64 {
        self.to_hsba().brightness()
    }

    /// HSL lightness, `(max + min) / 2`.
    pub fn lightness(&self) -> f64 {
        self.to_hsl().lightness()
    }

    /// WCAG relative luminance in [0, 1].
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_color::Rgba;
    ///
    /// assert_eq!(Rgba::rgb(0.0, 1.0, 0.0).luminance(), 0.7152);
    /// ```
    pub fn luminance(&self) -> f64 {
        srgb::eotf_wcag_rgb(self.rgb_vec()).dot(REC709_LUMA)
    }

    /// WCAG contrast ratio with `other`, in [1, 21]. Symmetric.
    pub fn contrast_ratio(&self, other: &Rgba) -> f64 {
        let (a, b) = (self.luminance(), other.luminance());
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Returns `true` if the contrast ratio exceeds the context's minimum.
    pub fn is_contrasting(&self, other: &Rgba, context: ContrastContext) -> bool {
        self.contrast_ratio(other) > context.minimum_ratio()
    }

    /// Perceived-brightness check: `(299R + 587G + 114B) / 1000 >= 0.5`.
    pub fn is_light(&self) -> bool {
        self.rgb_vec().dot(PERCEIVED_BRIGHTNESS) / 1000.0 >= 0.5
    }

    /// Luma check: `0.2126R + 0.7152G + 0.0722B < 0.5`.
    pub fn is_dark(&self) -> bool {
        encoded_luma(self) < 0.5
    }

    /// All three channels below 0.09.
    pub fn is_black(&self) -> bool {
        self.rgb_vec().max_element() < BLACK_THRESHOLD
    }

    /// All three channels above 0.91.
    pub fn is_white(&self) -> bool {
        self.rgb_vec().min_element() > WHITE_THRESHOLD
    }

    /// Either [`is_black`](Self::is_black) or [`is_white`](Self::is_white).
    pub fn is_black_or_white(&self) -> bool {
        self.is_black() || self.is_white()
    }

    /// Returns `true` if any channel differs from `other` by more than 0.25.
    ///
    /// Two near-grays (each with channels within 0.03 of each other) are
    /// never distinct, however far apart their levels are.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_color::Rgba;
    ///
    /// let dark_gray = Rgba::rgb(0.2, 0.2, 0.2);
    /// let light_gray = Rgba::rgb(0.8, 0.8, 0.8);
    /// assert!(!dark_gray.is_distinct_from(&light_gray));
    /// assert!(dark_gray.is_distinct_from(&Rgba::rgb(0.2, 0.2, 0.8)));
    /// ```
    pub fn is_distinct_from(&self, other: &Rgba) -> bool {
        let diff = (self.rgb_vec() - other.rgb_vec()).abs();
        if diff.max_element() <= DISTINCT_THRESHOLD {
            return false;
        }
        !(is_near_gray(self) && is_near_gray(other))
    }

    /// Quick contrast heuristic on encoded luma: `(max + 0.05) / (min + 0.05) > 1.6`.
    ///
    /// Independent of [`is_contrasting`](Self::is_contrasting); it uses
    /// no linearization and a fixed threshold.
    pub fn is_contrasting_with(&self, other: &Rgba) -> bool {
        let (a, b) = (encoded_luma(self), encoded_luma(other));
        let ratio = (a.max(b) + 0.05) / (a.min(b) + 0.05);
        ratio > HEURISTIC_CONTRAST
    }
}
