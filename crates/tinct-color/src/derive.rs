//! Derived colors: lighten, darken, saturate, hue rotation, inversion, gray.
//!
//! Most operations lift the color to [`Hsl`], adjust one channel and lower
//! it back; inversion, alpha and the grayscale modes other than lightness
//! work on RGBA channels directly. Every call returns a new value.
//!
//! # Example
//!
//! ```rust
//! use tinct_color::{Rgba, DEFAULT_ADJUSTMENT};
//!
//! let red = Rgba::rgb(1.0, 0.0, 0.0);
//! let pink = red.lighter(DEFAULT_ADJUSTMENT);
//! assert!((pink.to_hsl().lightness() - 0.7).abs() < 1e-9);
//!
//! let cyan = red.complemented();
//! assert_eq!(cyan.to_hex_string(), "#00FFFFFF");
//! ```

use crate::space::{Hsl, Rgba};
use tinct_core::clip;
use tinct_math::Vec3;

/// Default step for lighten/darken/saturate/desaturate/tint/shade.
pub const DEFAULT_ADJUSTMENT: f64 = 0.2;

/// How [`Rgba::grayscaled_with`] collapses a color to gray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrayscaleMode {
    /// HSL lightness, `(max + min) / 2`. Same as [`Rgba::grayscaled`].
    #[default]
    Lightness,
    /// Rec.709 weighted sum of the encoded channels.
    Luminance,
    /// Mean of the three channels.
    Average,
    /// Largest channel (HSB brightness).
    Value,
}

impl Rgba {
    #[inline]
    fn map_hsl(&self, f: impl FnOnce(Hsl) -> Hsl) -> Self {
        f(self.to_hsl()).to_rgba()
    }

    /// Increases HSL lightness by `amount`.
    #[must_use]
    pub fn lighter(&self, amount: f64) -> Self {
        self.map_hsl(|hsl| hsl.lighter(amount))
    }

    /// Decreases HSL lightness by `amount`.
    #[must_use]
    pub fn darkened(&self, amount: f64) -> Self {
        self.map_hsl(|hsl| hsl.darker(amount))
    }

    /// Increases HSL saturation by `amount`.
    #[must_use]
    pub fn saturated(&self, amount: f64) -> Self {
        self.map_hsl(|hsl| hsl.saturated(amount))
    }

    /// Decreases HSL saturation by `amount`.
    #[must_use]
    pub fn desaturated(&self, amount: f64) -> Self {
        self.map_hsl(|hsl| hsl.desaturated(amount))
    }

    /// Rotates the hue by `degrees`; any real value is accepted.
    #[must_use]
    pub fn adjusted_hue(&self, degrees: f64) -> Self {
        self.map_hsl(|hsl| hsl.adjusted_hue(degrees))
    }

    /// Rotates the hue by 180 degrees.
    #[must_use]
    pub fn complemented(&self) -> Self {
        self.adjusted_hue(180.0)
    }

    /// Fully desaturates the color in HSL.
    #[must_use]
    pub fn grayscaled(&self) -> Self {
        self.desaturated(1.0)
    }

    /// Collapses the color to gray using `mode`. Alpha is preserved.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_color::{GrayscaleMode, Rgba};
    ///
    /// let c = Rgba::rgb(0.9, 0.3, 0.0);
    /// assert!((c.grayscaled_with(GrayscaleMode::Average).red() - 0.4).abs() < 1e-12);
    /// assert_eq!(c.grayscaled_with(GrayscaleMode::Value).red(), 0.9);
    /// ```
    #[must_use]
    pub fn grayscaled_with(&self, mode: GrayscaleMode) -> Self {
        let rgb = self.rgb_vec();
        let gray = match mode {
            GrayscaleMode::Lightness => return self.grayscaled(),
            GrayscaleMode::Luminance => rgb.dot(crate::metrics::REC709_LUMA),
            GrayscaleMode::Average => (rgb.x + rgb.y + rgb.z) / 3.0,
            GrayscaleMode::Value => rgb.max_element(),
        };
        Self::from_rgb_vec(Vec3::splat(gray), self.alpha())
    }

    /// Replaces R, G, B with `1 - value`; alpha is unchanged.
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self::from_rgb_vec(Vec3::ONE - self.rgb_vec(), self.alpha())
    }

    /// Adds `delta` to alpha, clipped to [0, 1].
    #[must_use]
    pub fn adjusted_alpha(&self, delta: f64) -> Self {
        self.with_alpha(self.alpha() + delta)
    }

    /// Replaces alpha, clipped to [0, 1].
    #[must_use]
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self::from_rgb_vec(self.rgb_vec(), alpha)
    }

    /// Raises HSB saturation to `minimum` if it is lower; otherwise returns
    /// the color unchanged.
    #[must_use]
    pub fn with_minimum_saturation(&self, minimum: f64) -> Self {
        let hsb = self.to_hsba();
        if hsb.saturation() < minimum {
            Self::from_hsb(hsb.hue_degrees(), clip(minimum, 0.0, 1.0), hsb.brightness(), hsb.alpha())
        } else {
            *self
        }
    }
}
