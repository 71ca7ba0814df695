//! # tinct-color
//!
//! Color value engine: one canonical RGBA value with derived views in
//! HSB, HSL, CIE XYZ and CIE LAB, plus the operations built on them.
//!
//! - **Construction** - from channels, 0-255 integers, hex strings, packed integers
//! - **Conversions** - RGBA <-> HSBA / HSL / XYZ / LAB
//! - **Derivation** - lighten, darken, saturate, hue rotation, invert, grayscale
//! - **Mixing** - weighted blends in RGB, HSB, HSL or LAB; tint and shade
//! - **Metrics** - WCAG luminance and contrast, light/dark heuristics
//! - **Gradients** - multi-stop sampling
//! - **Palettes** - batch hex parsing with per-entry failures
//!
//! # Architecture
//!
//! ```text
//!                  tinct-color
//!                       |
//!          +------------+------------+
//!          |                         |
//!    tinct-transfer              tinct-math
//!          |                         |
//!          +------------+------------+
//!                       |
//!                  tinct-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_color::{ContrastContext, MixSpace, Rgba};
//!
//! let brand = Rgba::from_hex("#3366CC")?;
//! let hover = brand.lighter(0.1);
//! let muted = brand.mixed(&Rgba::WHITE, 0.3, MixSpace::Lab);
//!
//! assert!(Rgba::WHITE.is_contrasting(&brand, ContrastContext::Standard));
//! println!("{hover} {muted} {:.3}", brand.luminance());
//! # Ok::<(), tinct_color::ColorError>(())
//! ```
//!
//! # Color Spaces
//!
//! | Space | Channels | Range |
//! |-------|----------|-------|
//! | RGBA | red, green, blue, alpha | [0, 1] |
//! | HSBA | hue, saturation, brightness, alpha | hue [0, 1) turns, rest [0, 1] |
//! | HSL | hue, saturation, lightness, alpha | hue [0, 1) turns, rest [0, 1] |
//! | XYZ | X, Y, Z | [0, 95.05], [0, 100], [0, 108.9] |
//! | LAB | L*, a*, b* | [0, 100], [-128, 127], [-128, 127] |
//!
//! XYZ and LAB use the D65 white point and the 2 degree observer.
//!
//! # Features
//!
//! - `rayon` (default) - [`palette::parse_palette_text_par`]
//! - `serde` - `Serialize`/`Deserialize` on the value types and enums
//!
//! # Dependencies
//!
//! - [`tinct-core`] - Errors and numeric utilities
//! - [`tinct-math`] - Vec3, Mat3, interpolation
//! - [`tinct-transfer`] - sRGB transfer functions
//!
//! # Used By
//!
//! - `tinct-cli` - The `tinct` command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod derive;
mod gradient;
mod hex;
mod metrics;
mod mix;
pub mod convert;
pub mod palette;
pub mod space;

pub use derive::{GrayscaleMode, DEFAULT_ADJUSTMENT};
pub use gradient::Gradient;
pub use metrics::{ContrastContext, REC709_LUMA};
pub use mix::{MixSpace, DEFAULT_MIX_WEIGHT};
pub use palette::{parse_palette, parse_palette_text, PaletteEntry, PaletteFailure, PaletteReport};
pub use space::{Hsba, Hsl, Lab, Rgba, Xyz};
pub use tinct_core::{ColorError, ColorResult};

// Re-export sub-crates for convenience
pub use tinct_math as math;
pub use tinct_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        ColorError, ColorResult, ContrastContext, Gradient, GrayscaleMode, Hsba, Hsl, Lab, MixSpace,
        Rgba, Xyz,
    };
    pub use crate::{DEFAULT_ADJUSTMENT, DEFAULT_MIX_WEIGHT};
}
