//! Color space value types.
//!
//! Every space gets its own struct so channel tuples from different spaces
//! cannot be mixed up:
//!
//! - [`Rgba`] - Canonical storage representation, all channels in [0, 1]
//! - [`Hsba`] - Hue/saturation/brightness (HSV) with alpha
//! - [`Hsl`] - Hue/saturation/lightness with alpha
//! - [`Xyz`] - CIE XYZ tristimulus, D65 / 2 deg observer, percentage scale
//! - [`Lab`] - CIE L*a*b*, D65 reference white
//!
//! Constructors clip every channel into its declared domain; hues are
//! wrapped into [0, 1). Fields are private so the invariants hold for every
//! value in circulation.
//!
//! # Example
//!
//! ```rust
//! use tinct_color::{Hsl, Rgba};
//!
//! let c = Rgba::new(1.5, 0.5, -0.2, 1.0);
//! assert_eq!(c.red(), 1.0);
//! assert_eq!(c.blue(), 0.0);
//!
//! let hsl = Hsl::new(-90.0, 0.5, 0.5, 1.0);
//! assert_eq!(hsl.hue_degrees(), 270.0);
//! ```

use tinct_core::{clip, wrap_modulo};
use tinct_math::Vec3;

/// Upper bound of the X channel (D65 white, percentage scale).
pub const X_MAX: f64 = 95.05;
/// Upper bound of the Y channel.
pub const Y_MAX: f64 = 100.0;
/// Upper bound of the Z channel.
pub const Z_MAX: f64 = 108.9;

/// Folds a wrapped hue fraction into [0, 1); rounding can leave exactly 1.0.
#[inline]
fn below_full_turn(h: f64) -> f64 {
    if h < 1.0 { h } else { 0.0 }
}

/// Normalizes a hue given in degrees to a fraction in [0, 1).
#[inline]
fn normalize_hue(degrees: f64) -> f64 {
    below_full_turn(wrap_modulo(degrees, 360.0) / 360.0)
}

/// Normalizes a hue given in turns to a fraction in [0, 1).
#[inline]
fn normalize_turns(turns: f64) -> f64 {
    below_full_turn(wrap_modulo(turns, 1.0))
}

#[inline]
fn unit(v: f64) -> f64 {
    clip(v, 0.0, 1.0)
}

// ============================================================================
// RGBA
// ============================================================================

/// Red/green/blue/alpha color, the canonical representation.
///
/// All four channels lie in [0, 1]. Every other space is a derived view
/// computed on demand; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::raw(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::raw(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent black.
    pub const CLEAR: Self = Self::raw(0.0, 0.0, 0.0, 0.0);

    const fn raw(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates a color from channels in [0, 1], clipping out-of-range input.
    #[inline]
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::raw(unit(red), unit(green), unit(blue), unit(alpha))
    }

    /// Creates an opaque color.
    #[inline]
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Creates a color from 0-255 integer channels.
    ///
    /// Each channel is clipped to [0, 255] before scaling.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_color::Rgba;
    ///
    /// let c = Rgba::from_rgb255(255, 0, 300, 255);
    /// assert_eq!(c, Rgba::rgb(1.0, 0.0, 1.0));
    /// ```
    pub fn from_rgb255(red: i32, green: i32, blue: i32, alpha: i32) -> Self {
        let scale = |c: i32| f64::from(c.clamp(0, 255)) / 255.0;
        Self::raw(scale(red), scale(green), scale(blue), scale(alpha))
    }

    /// Opaque [`from_rgb255`](Self::from_rgb255).
    #[inline]
    pub fn rgb255(red: i32, green: i32, blue: i32) -> Self {
        Self::from_rgb255(red, green, blue, 255)
    }

    /// Red channel.
    #[inline]
    pub fn red(&self) -> f64 {
        self.red
    }

    /// Green channel.
    #[inline]
    pub fn green(&self) -> f64 {
        self.green
    }

    /// Blue channel.
    #[inline]
    pub fn blue(&self) -> f64 {
        self.blue
    }

    /// Alpha channel.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The color channels as a vector, alpha dropped.
    #[inline]
    pub fn rgb_vec(&self) -> Vec3 {
        Vec3::new(self.red, self.green, self.blue)
    }

    /// Creates a color from an RGB vector and alpha, clipping both.
    #[inline]
    pub fn from_rgb_vec(rgb: Vec3, alpha: f64) -> Self {
        Self::new(rgb.x, rgb.y, rgb.z, alpha)
    }

    /// Channels as `[r, g, b, a]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

// ============================================================================
// HSBA
// ============================================================================

/// Hue/saturation/brightness color with alpha.
///
/// Hue is stored as a fraction of a full turn in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsba {
    hue: f64,
    saturation: f64,
    brightness: f64,
    alpha: f64,
}

impl Hsba {
    /// Creates an HSBA value. `hue` is in degrees and wraps; the rest clip to [0, 1].
    #[inline]
    pub fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation: unit(saturation),
            brightness: unit(brightness),
            alpha: unit(alpha),
        }
    }

    /// Same as [`new`](Self::new) with the hue given as a fraction of a turn.
    #[inline]
    pub(crate) fn from_turns(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self {
            hue: normalize_turns(hue),
            saturation: unit(saturation),
            brightness: unit(brightness),
            alpha: unit(alpha),
        }
    }

    /// Hue as a fraction in [0, 1).
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Hue in degrees, [0, 360).
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        self.hue * 360.0
    }

    /// Saturation in [0, 1].
    #[inline]
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Brightness (value) in [0, 1].
    #[inline]
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Alpha in [0, 1].
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

// ============================================================================
// HSL
// ============================================================================

/// Hue/saturation/lightness color with alpha.
///
/// The intermediate space for most derivations. Transforms return new values;
/// hue is kept as a fraction in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    hue: f64,
    saturation: f64,
    lightness: f64,
    alpha: f64,
}

impl Hsl {
    /// Creates an HSL value. `hue` is in degrees and wraps; the rest clip to [0, 1].
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_color::Hsl;
    ///
    /// let hsl = Hsl::new(450.0, 1.5, 0.5, 1.0);
    /// assert_eq!(hsl.hue_degrees(), 90.0);
    /// assert_eq!(hsl.saturation(), 1.0);
    /// ```
    #[inline]
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation: unit(saturation),
            lightness: unit(lightness),
            alpha: unit(alpha),
        }
    }

    /// Same as [`new`](Self::new) with the hue given as a fraction of a turn.
    #[inline]
    pub(crate) fn from_turns(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue: normalize_turns(hue),
            saturation: unit(saturation),
            lightness: unit(lightness),
            alpha: unit(alpha),
        }
    }

    /// Hue as a fraction in [0, 1).
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Hue in degrees, [0, 360).
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        self.hue * 360.0
    }

    /// Saturation in [0, 1].
    #[inline]
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Lightness in [0, 1].
    #[inline]
    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Alpha in [0, 1].
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Adds `amount` to lightness.
    #[must_use]
    pub fn lighter(&self, amount: f64) -> Self {
        Self::new(self.hue_degrees(), self.saturation, self.lightness + amount, self.alpha)
    }

    /// Subtracts `amount` from lightness.
    #[must_use]
    pub fn darker(&self, amount: f64) -> Self {
        self.lighter(-amount)
    }

    /// Adds `amount` to saturation.
    #[must_use]
    pub fn saturated(&self, amount: f64) -> Self {
        Self::new(self.hue_degrees(), self.saturation + amount, self.lightness, self.alpha)
    }

    /// Subtracts `amount` from saturation.
    #[must_use]
    pub fn desaturated(&self, amount: f64) -> Self {
        self.saturated(-amount)
    }

    /// Rotates hue by `degrees`.
    #[must_use]
    pub fn adjusted_hue(&self, degrees: f64) -> Self {
        Self::new(self.hue_degrees() + degrees, self.saturation, self.lightness, self.alpha)
    }
}

// ============================================================================
// XYZ
// ============================================================================

/// CIE XYZ tristimulus values (D65, 2 deg observer), percentage scale.
///
/// X in [0, 95.05], Y in [0, 100], Z in [0, 108.9]. No alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    x: f64,
    y: f64,
    z: f64,
}

impl Xyz {
    /// Reference white of the D65 illuminant.
    pub const D65: Self = Self {
        x: X_MAX,
        y: Y_MAX,
        z: Z_MAX,
    };

    /// Creates an XYZ value, clipping each channel to its range.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: clip(x, 0.0, X_MAX),
            y: clip(y, 0.0, Y_MAX),
            z: clip(z, 0.0, Z_MAX),
        }
    }

    /// X channel.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y channel (luminance, 0-100).
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z channel.
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Channels as a vector.
    #[inline]
    pub fn to_vec(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

// ============================================================================
// LAB
// ============================================================================

/// CIE L*a*b* color referenced to D65. No alpha.
///
/// L in [0, 100], a and b in [-128, 127].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    l: f64,
    a: f64,
    b: f64,
}

impl Lab {
    /// Creates a LAB value, clipping each channel to its range.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self {
            l: clip(l, 0.0, 100.0),
            a: clip(a, -128.0, 127.0),
            b: clip(b, -128.0, 127.0),
        }
    }

    /// Lightness L*.
    #[inline]
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Green-red axis a*.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Blue-yellow axis b*.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }
}
