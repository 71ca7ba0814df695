//! Hex string construction and formatting.
//!
//! # Accepted Input
//!
//! An optional leading `#`, then exactly 3, 4, 6 or 8 hex digits
//! (case-insensitive):
//!
//! | Digits | Layout | Alpha |
//! |--------|--------|-------|
//! | 3 | `RGB` nibbles, each scaled by 17 | opaque |
//! | 4 | `RGBA` nibbles, each scaled by 17 | from input |
//! | 6 | `RRGGBB` bytes | opaque |
//! | 8 | `RRGGBBAA` bytes | from input |
//!
//! Anything else is a [`ColorError`], never a panic.
//!
//! # Example
//!
//! ```rust
//! use tinct_color::Rgba;
//!
//! let red = Rgba::from_hex("#F00")?;
//! assert_eq!(red, Rgba::from_hex("ff0000")?);
//! assert_eq!(red.to_hex_string(), "#FF0000FF");
//!
//! let parsed: Rgba = "#00FF0080".parse()?;
//! assert_eq!(parsed.to_hex_rgba(), 0x00FF0080);
//! # Ok::<(), tinct_color::ColorError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::space::Rgba;
use tinct_core::{ColorError, ColorResult};
use tracing::debug;

/// Converts a [0, 1] channel to its 8-bit value.
#[inline]
fn to_byte(c: f64) -> u32 {
    (c * 255.0).round() as u32
}

/// Validates and decodes the digits of a hex color into `[r, g, b, a]` bytes.
fn decode(input: &str) -> ColorResult<[i32; 4]> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorError::EmptyInput);
    }
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if let Some((position, digit)) = digits.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_hex_digit(input, digit, position));
    }
    if !matches!(digits.len(), 3 | 4 | 6 | 8) {
        return Err(ColorError::invalid_hex_length(input, digits.len()));
    }

    // At most 8 ASCII hex digits, so this fits and cannot fail
    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| ColorError::invalid_hex_length(input, digits.len()))?;
    let nibble = |shift: u32| ((value >> shift) & 0xF) as i32 * 17;
    let byte = |shift: u32| ((value >> shift) & 0xFF) as i32;

    Ok(match digits.len() {
        3 => [nibble(8), nibble(4), nibble(0), 255],
        4 => [nibble(12), nibble(8), nibble(4), nibble(0)],
        6 => [byte(16), byte(8), byte(0), 255],
        _ => [byte(24), byte(16), byte(8), byte(0)],
    })
}

impl Rgba {
    /// Parses a 3, 4, 6 or 8 digit hex color, with or without `#`.
    ///
    /// # Errors
    ///
    /// - [`ColorError::EmptyInput`] for blank input
    /// - [`ColorError::InvalidHexDigit`] for a non-hex character
    /// - [`ColorError::InvalidHexLength`] for an unsupported digit count
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_color::Rgba;
    ///
    /// assert!(Rgba::from_hex("#12345").is_err());
    /// assert!(Rgba::from_hex("#GGG").is_err());
    /// ```
    pub fn from_hex(input: &str) -> ColorResult<Self> {
        match decode(input) {
            Ok([r, g, b, a]) => Ok(Self::from_rgb255(r, g, b, a)),
            Err(err) => {
                debug!(input, error = %err, "rejected hex color");
                Err(err)
            }
        }
    }

    /// Builds an opaque color from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_color::Rgba;
    ///
    /// assert_eq!(Rgba::from_hex_value(0x0000FF), Rgba::rgb(0.0, 0.0, 1.0));
    /// ```
    pub fn from_hex_value(value: u32) -> Self {
        let byte = |shift: u32| ((value >> shift) & 0xFF) as i32;
        Self::from_rgb255(byte(16), byte(8), byte(0), 255)
    }

    /// Packed `0xRRGGBB` value; alpha is not included.
    pub fn to_hex(&self) -> u32 {
        (to_byte(self.red()) << 16) | (to_byte(self.green()) << 8) | to_byte(self.blue())
    }

    /// Packed `0xRRGGBBAA` value.
    pub fn to_hex_rgba(&self) -> u32 {
        (self.to_hex() << 8) | to_byte(self.alpha())
    }

    /// Upper-case `#RRGGBBAA` string.
    pub fn to_hex_string(&self) -> String {
        format!("#{:08X}", self.to_hex_rgba())
    }

    /// Returns `true` if `hex` parses to the same 8-bit RGBA value.
    ///
    /// Malformed input compares unequal.
    pub fn same_hex_as(&self, hex: &str) -> bool {
        Self::from_hex(hex).is_ok_and(|other| other.to_hex_rgba() == self.to_hex_rgba())
    }

    /// Returns `true` if the 8-bit RGB value equals `value` (`0xRRGGBB`).
    pub fn same_hex_value(&self, value: u32) -> bool {
        self.to_hex() == value & 0xFF_FFFF
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}
