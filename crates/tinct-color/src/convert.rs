//! Conversions between RGBA and the derived spaces.
//!
//! ```text
//!            +--> HSB
//!            |
//!   RGBA ----+--> HSL
//!            |
//!            +--> XYZ ----> LAB
//! ```
//!
//! Every arrow is bidirectional. LAB goes through XYZ in both directions,
//! and XYZ / LAB values are rounded to three decimals on the way out of
//! RGBA. That rounding keeps `RGBA -> XYZ -> RGBA` and `RGBA -> LAB -> RGBA`
//! stable to within 1e-3 per channel.
//!
//! # Example
//!
//! ```rust
//! use tinct_color::Rgba;
//!
//! let red = Rgba::rgb(1.0, 0.0, 0.0);
//! let hsl = red.to_hsl();
//! assert_eq!(hsl.hue_degrees(), 0.0);
//! assert_eq!(hsl.saturation(), 1.0);
//! assert_eq!(hsl.lightness(), 0.5);
//!
//! let lab = red.to_lab();
//! assert!((lab.l() - 53.233).abs() < 1e-9);
//! ```

use crate::space::{Hsba, Hsl, Lab, Rgba, X_MAX, Xyz, Y_MAX, Z_MAX};
use std::sync::OnceLock;
use tinct_core::{clip, round_decimal};
use tinct_math::{Mat3, Vec3};
use tinct_transfer::srgb;

/// Linear sRGB to CIE XYZ (D65), unit scale.
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
]);

/// Cached inverse of [`SRGB_TO_XYZ`].
static XYZ_TO_SRGB: OnceLock<Mat3> = OnceLock::new();

/// CIE XYZ (D65) to linear sRGB, inverted from [`SRGB_TO_XYZ`] on first use.
#[inline]
pub fn xyz_to_srgb() -> Mat3 {
    *XYZ_TO_SRGB.get_or_init(|| SRGB_TO_XYZ.inverse().unwrap_or(Mat3::IDENTITY))
}

/// CIE threshold `(6/29)^3`, as published to four digits.
const LAB_EPSILON: f64 = 0.008856;
/// Slope of the linear segment near black.
const LAB_SLOPE: f64 = 7.787;
const LAB_OFFSET: f64 = 16.0 / 116.0;

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_SLOPE * t + LAB_OFFSET
    }
}

#[inline]
fn lab_f_inv(t: f64) -> f64 {
    let cube = t * t * t;
    if cube > LAB_EPSILON {
        cube
    } else {
        (t - LAB_OFFSET) / LAB_SLOPE
    }
}

/// Hue in turns from the max-channel sector formula; 0 for achromatic input.
fn hue_turns(rgb: Vec3, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let (r, g, b) = (rgb.x, rgb.y, rgb.z);
    let sector = if r == max {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if g == max {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    sector / 6.0
}

/// Classic `m1`/`m2` hue-to-channel function for HSL.
fn hue_to_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = tinct_core::wrap_modulo(hue, 1.0);
    if hue * 6.0 < 1.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue * 2.0 < 1.0 {
        m2
    } else if hue * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

impl Rgba {
    /// Builds a color from HSL: hue in degrees, the rest in [0, 1].
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_color::Rgba;
    ///
    /// let green = Rgba::from_hsl(120.0, 1.0, 0.5, 1.0);
    /// assert_eq!(green.to_hex_string(), "#00FF00FF");
    /// ```
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Hsl::new(hue, saturation, lightness, alpha).to_rgba()
    }

    /// Builds a color from HSB: hue in degrees, the rest in [0, 1].
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Hsba::new(hue, saturation, brightness, alpha).to_rgba()
    }

    /// Builds a color from CIE XYZ with the given alpha.
    pub fn from_xyz(xyz: Xyz, alpha: f64) -> Self {
        let linear = xyz_to_srgb() * (xyz.to_vec() * 0.01);
        // abs() turns -0.0 from rounding into 0.0
        let rgb = linear.map(|c| clip(round_decimal(srgb::oetf(c)), 0.0, 1.0).abs());
        Self::from_rgb_vec(rgb, alpha)
    }

    /// Builds a color from CIE LAB with the given alpha.
    pub fn from_lab(lab: Lab, alpha: f64) -> Self {
        Self::from_xyz(lab.to_xyz(), alpha)
    }

    /// Converts to hue/saturation/brightness.
    pub fn to_hsba(&self) -> Hsba {
        let rgb = self.rgb_vec();
        let max = rgb.max_element();
        let delta = max - rgb.min_element();
        let saturation = if max > 0.0 { delta / max } else { 0.0 };
        Hsba::from_turns(hue_turns(rgb, max, delta), saturation, max, self.alpha())
    }

    /// Converts to hue/saturation/lightness.
    pub fn to_hsl(&self) -> Hsl {
        let rgb = self.rgb_vec();
        let max = rgb.max_element();
        let min = rgb.min_element();
        let delta = max - min;
        let lightness = (max + min) / 2.0;
        let saturation = if delta == 0.0 {
            0.0
        } else if lightness < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };
        Hsl::from_turns(hue_turns(rgb, max, delta), saturation, lightness, self.alpha())
    }

    /// Converts to CIE XYZ (percentage scale, three decimals). Alpha is dropped.
    pub fn to_xyz(&self) -> Xyz {
        let linear = srgb::eotf_rgb(self.rgb_vec());
        let xyz = (SRGB_TO_XYZ * linear * 100.0).map(round_decimal);
        Xyz::new(xyz.x, xyz.y, xyz.z)
    }

    /// Converts to CIE LAB (three decimals). Alpha is dropped.
    pub fn to_lab(&self) -> Lab {
        self.to_xyz().to_lab()
    }
}

impl Hsba {
    /// Converts back to RGBA with the six-sector HSV formula.
    pub fn to_rgba(&self) -> Rgba {
        let (s, v) = (self.saturation(), self.brightness());
        let h6 = self.hue() * 6.0;
        let sector = h6.floor();
        let f = h6 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match sector as u32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Rgba::new(r, g, b, self.alpha())
    }
}

impl Hsl {
    /// Converts back to RGBA.
    ///
    /// `m2 = l <= 0.5 ? l(s+1) : l+s-ls`, `m1 = 2l-m2`; the channels sample
    /// the hue function at `h+1/3`, `h` and `h-1/3`.
    pub fn to_rgba(&self) -> Rgba {
        let (h, s, l) = (self.hue(), self.saturation(), self.lightness());
        let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
        let m1 = l * 2.0 - m2;
        Rgba::new(
            hue_to_channel(m1, m2, h + 1.0 / 3.0),
            hue_to_channel(m1, m2, h),
            hue_to_channel(m1, m2, h - 1.0 / 3.0),
            self.alpha(),
        )
    }
}

impl Xyz {
    /// Converts to CIE LAB (three decimals).
    pub fn to_lab(&self) -> Lab {
        let fx = lab_f(self.x() / X_MAX);
        let fy = lab_f(self.y() / Y_MAX);
        let fz = lab_f(self.z() / Z_MAX);
        Lab::new(
            round_decimal(116.0 * fy - 16.0),
            round_decimal(500.0 * (fx - fy)),
            round_decimal(200.0 * (fy - fz)),
        )
    }

    /// Converts to an opaque RGBA color.
    pub fn to_rgba(&self) -> Rgba {
        Rgba::from_xyz(*self, 1.0)
    }
}

impl Lab {
    /// Converts to CIE XYZ.
    pub fn to_xyz(&self) -> Xyz {
        let fy = (self.l() + 16.0) / 116.0;
        let fx = self.a() / 500.0 + fy;
        let fz = fy - self.b() / 200.0;
        Xyz::new(
            X_MAX * lab_f_inv(fx),
            Y_MAX * lab_f_inv(fy),
            Z_MAX * lab_f_inv(fz),
        )
    }

    /// Converts to an opaque RGBA color.
    pub fn to_rgba(&self) -> Rgba {
        Rgba::from_lab(*self, 1.0)
    }
}

impl From<Rgba> for Hsba {
    fn from(c: Rgba) -> Self {
        c.to_hsba()
    }
}

impl From<Rgba> for Hsl {
    fn from(c: Rgba) -> Self {
        c.to_hsl()
    }
}

impl From<Rgba> for Xyz {
    fn from(c: Rgba) -> Self {
        c.to_xyz()
    }
}

impl From<Rgba> for Lab {
    fn from(c: Rgba) -> Self {
        c.to_lab()
    }
}

impl From<Hsba> for Rgba {
    fn from(c: Hsba) -> Self {
        c.to_rgba()
    }
}

impl From<Hsl> for Rgba {
    fn from(c: Hsl) -> Self {
        c.to_rgba()
    }
}
