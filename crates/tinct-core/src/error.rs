//! Error types for tinct color construction.
//!
//! Only textual construction can fail. Numeric constructors clip their
//! inputs into the valid domain and derivations are total, so the error
//! surface is small.
//!
//! # Usage
//!
//! ```rust
//! use tinct_core::{ColorError, ColorResult};
//!
//! fn digit_count(hex: &str) -> ColorResult<usize> {
//!     let digits = hex.trim_start_matches('#');
//!     match digits.len() {
//!         3 | 4 | 6 | 8 => Ok(digits.len()),
//!         len => Err(ColorError::invalid_hex_length(hex, len)),
//!     }
//! }
//!
//! assert!(digit_count("#12345").is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `tinct-color` - Hex parsing and palette batch parsing
//! - `tinct-cli` - Reporting failed palette entries

use thiserror::Error;

/// Result type alias using [`ColorError`] as the error type.
pub type ColorResult<T> = Result<T, ColorError>;

/// Errors that can occur while constructing a color.
///
/// # Categories
///
/// - **Hex errors**: [`InvalidHexLength`](ColorError::InvalidHexLength),
///   [`InvalidHexDigit`](ColorError::InvalidHexDigit)
/// - **Input errors**: [`EmptyInput`](ColorError::EmptyInput)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Hex string does not carry 3, 4, 6 or 8 digits.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_core::ColorError;
    ///
    /// let err = ColorError::invalid_hex_length("#12345", 5);
    /// assert!(err.to_string().contains("5 digits"));
    /// ```
    #[error("invalid hex color '{input}': expected 3, 4, 6 or 8 digits, got {len} digits")]
    InvalidHexLength {
        /// The offending input, as given
        input: String,
        /// Number of digits after the optional `#`
        len: usize,
    },

    /// Hex string contains a character that is not a hex digit.
    #[error("invalid hex color '{input}': '{digit}' at position {position} is not a hex digit")]
    InvalidHexDigit {
        /// The offending input, as given
        input: String,
        /// First non-hex character
        digit: char,
        /// Character position within the digits (after the optional `#`)
        position: usize,
    },

    /// Input was empty or whitespace only.
    #[error("empty color input")]
    EmptyInput,
}

impl ColorError {
    /// Creates a [`ColorError::InvalidHexLength`] error.
    #[inline]
    pub fn invalid_hex_length(input: impl Into<String>, len: usize) -> Self {
        Self::InvalidHexLength {
            input: input.into(),
            len,
        }
    }

    /// Creates a [`ColorError::InvalidHexDigit`] error.
    #[inline]
    pub fn invalid_hex_digit(input: impl Into<String>, digit: char, position: usize) -> Self {
        Self::InvalidHexDigit {
            input: input.into(),
            digit,
            position,
        }
    }

    /// Returns `true` if this error comes from a malformed hex string.
    #[inline]
    pub fn is_hex_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidHexLength { .. } | Self::InvalidHexDigit { .. }
        )
    }

    /// Returns the rejected input, if the error carries one.
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::InvalidHexLength { input, .. } | Self::InvalidHexDigit { input, .. } => {
                Some(input)
            }
            Self::EmptyInput => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_length() {
        let err = ColorError::invalid_hex_length("#12345", 5);
        let msg = err.to_string();
        assert!(msg.contains("#12345"));
        assert!(msg.contains("5 digits"));
        assert!(err.is_hex_error());
        assert_eq!(err.input(), Some("#12345"));
    }

    #[test]
    fn test_invalid_digit() {
        let err = ColorError::invalid_hex_digit("#GG0000", 'G', 0);
        let msg = err.to_string();
        assert!(msg.contains("'G'"));
        assert!(msg.contains("position 0"));
        assert!(err.is_hex_error());
    }

    #[test]
    fn test_empty_input() {
        let err = ColorError::EmptyInput;
        assert!(!err.is_hex_error());
        assert_eq!(err.input(), None);
        assert_eq!(err.to_string(), "empty color input");
    }
}
