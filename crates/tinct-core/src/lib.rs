//! # tinct-core
//!
//! Foundation types for the tinct color engine.
//!
//! This crate provides the pieces every other tinct crate leans on:
//!
//! - [`ColorError`] / [`ColorResult`] - Recoverable construction failures
//! - [`clip`], [`wrap_modulo`], [`round_to_precision`] - Numeric utilities
//!
//! ## Crate Structure
//!
//! `tinct-core` has no internal dependencies:
//!
//! ```text
//! tinct-core (this crate)
//!    ^
//!    |
//!    +-- tinct-math (matrices, interpolation)
//!    +-- tinct-transfer (sRGB transfer functions)
//!    +-- tinct-color (color spaces, derivation, metrics)
//! ```
//!
//! ## Error Policy
//!
//! Only malformed textual input (hex strings) is an error. Out-of-domain
//! numbers are clipped, never rejected.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod numeric;

pub use error::{ColorError, ColorResult};
pub use numeric::{clip, round_decimal, round_to_precision, wrap_modulo, DEFAULT_PRECISION};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tinct_core::prelude::*;
///
/// assert_eq!(clip(1.5, 0.0, 1.0), 1.0);
/// ```
pub mod prelude {
    pub use crate::error::{ColorError, ColorResult};
    pub use crate::numeric::{clip, round_decimal, round_to_precision, wrap_modulo, DEFAULT_PRECISION};
}
