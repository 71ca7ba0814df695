//! # tinct-transfer
//!
//! Transfer functions for sRGB encoding and decoding.
//!
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//!
//! # Variants
//!
//! | Function | Linear segment below | Use |
//! |----------|----------------------|-----|
//! | [`srgb::eotf`] | 0.04045 | XYZ / LAB conversion |
//! | [`srgb::eotf_wcag`] | 0.03928 | WCAG relative luminance |
//! | [`srgb::oetf`] | 0.0031308 (linear) | XYZ -> RGB |
//!
//! The WCAG 2.x definition of relative luminance still quotes the older
//! 0.03928 breakpoint; the two decodings differ only for encoded values
//! between 0.03928 and 0.04045.
//!
//! # Usage
//!
//! ```rust
//! use tinct_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-9);
//! ```
//!
//! # Used By
//!
//! - `tinct-color` - XYZ conversion and perceptual metrics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{eotf as srgb_eotf, eotf_wcag as srgb_eotf_wcag, oetf as srgb_oetf};
