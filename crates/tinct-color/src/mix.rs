//! Mixing two colors in a chosen color space.
//!
//! Each channel is interpolated linearly, `c1 + weight * (c2 - c1)`. Hues
//! take the shorter way around the color wheel, so mixing 350 deg with
//! 10 deg passes through red rather than cyan. Alpha is always interpolated
//! linearly, whatever the space.
//!
//! # Example
//!
//! ```rust
//! use tinct_color::{MixSpace, Rgba};
//!
//! let gray = Rgba::BLACK.mixed(&Rgba::WHITE, 0.5, MixSpace::Rgb);
//! assert_eq!(gray, Rgba::rgb(0.5, 0.5, 0.5));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::derive::DEFAULT_ADJUSTMENT;
use crate::space::{Hsba, Hsl, Lab, Rgba};
use tinct_core::clip;
use tinct_math::{lerp, lerp_hue};

/// Default weight for [`Rgba::mixed`]: an even blend.
pub const DEFAULT_MIX_WEIGHT: f64 = 0.5;

/// Color space in which [`Rgba::mixed`] interpolates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MixSpace {
    /// Encoded sRGB channels.
    #[default]
    Rgb,
    /// Hue/saturation/brightness.
    Hsb,
    /// Hue/saturation/lightness.
    Hsl,
    /// CIE L*a*b*.
    Lab,
}

impl MixSpace {
    /// All spaces, in declaration order.
    pub const ALL: [MixSpace; 4] = [Self::Rgb, Self::Hsb, Self::Hsl, Self::Lab];

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsb => "hsb",
            Self::Hsl => "hsl",
            Self::Lab => "lab",
        }
    }
}

impl fmt::Display for MixSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MixSpace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(Self::Rgb),
            "hsb" | "hsv" => Ok(Self::Hsb),
            "hsl" => Ok(Self::Hsl),
            "lab" => Ok(Self::Lab),
            other => Err(format!("unknown mix space '{other}' (expected rgb, hsb, hsl or lab)")),
        }
    }
}

impl Rgba {
    /// Blends towards `other` by `weight` (clipped to [0, 1]) in `space`.
    ///
    /// `weight = 0` yields `self`, `weight = 1` yields `other` (exactly in
    /// RGB, to conversion precision in the other spaces).
    #[must_use]
    pub fn mixed(&self, other: &Rgba, weight: f64, space: MixSpace) -> Self {
        let t = clip(weight, 0.0, 1.0);
        let alpha = lerp(self.alpha(), other.alpha(), t);
        match space {
            MixSpace::Rgb => Self::from_rgb_vec(self.rgb_vec().lerp(other.rgb_vec(), t), alpha),
            MixSpace::Hsb => {
                let (a, b) = (self.to_hsba(), other.to_hsba());
                Hsba::new(
                    lerp_hue(a.hue_degrees(), b.hue_degrees(), t),
                    lerp(a.saturation(), b.saturation(), t),
                    lerp(a.brightness(), b.brightness(), t),
                    alpha,
                )
                .to_rgba()
            }
            MixSpace::Hsl => {
                let (a, b) = (self.to_hsl(), other.to_hsl());
                Hsl::new(
                    lerp_hue(a.hue_degrees(), b.hue_degrees(), t),
                    lerp(a.saturation(), b.saturation(), t),
                    lerp(a.lightness(), b.lightness(), t),
                    alpha,
                )
                .to_rgba()
            }
            MixSpace::Lab => {
                let (a, b) = (self.to_lab(), other.to_lab());
                let lab = Lab::new(
                    lerp(a.l(), b.l(), t),
                    lerp(a.a(), b.a(), t),
                    lerp(a.b(), b.b(), t),
                );
                Self::from_lab(lab, alpha)
            }
        }
    }

    /// Mixes with white in RGB: `mixed(WHITE, amount, Rgb)`.
    #[must_use]
    pub fn tinted(&self, amount: f64) -> Self {
        self.mixed(&Self::WHITE, amount, MixSpace::Rgb)
    }

    /// Mixes with black in RGB: `mixed(BLACK, amount, Rgb)`.
    #[must_use]
    pub fn shaded(&self, amount: f64) -> Self {
        self.mixed(&Self::BLACK, amount, MixSpace::Rgb)
    }

    /// [`tinted`](Self::tinted) by [`DEFAULT_ADJUSTMENT`].
    #[must_use]
    pub fn tint(&self) -> Self {
        self.tinted(DEFAULT_ADJUSTMENT)
    }

    /// [`shaded`](Self::shaded) by [`DEFAULT_ADJUSTMENT`].
    #[must_use]
    pub fn shade(&self) -> Self {
        self.shaded(DEFAULT_ADJUSTMENT)
    }
}
