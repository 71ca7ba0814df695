//! # tinct-math
//!
//! Math primitives for the tinct color engine.
//!
//! - [`Mat3`] - 3x3 matrices for the sRGB <-> XYZ transform
//! - [`Vec3`] - 3D vectors for RGB/XYZ triplets
//! - [`lerp`], [`lerp_hue`] - Linear and shortest-path circular interpolation
//!
//! # Design
//!
//! Matrix inversion is delegated to [`glam`]'s double precision types. All
//! matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tinct_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124, 0.3576, 0.1805],
//!     [0.2126, 0.7152, 0.0722],
//!     [0.0193, 0.1192, 0.9505],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 1.0, 1.0);
//! assert!((xyz.y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Matrix inversion
//!
//! # Used By
//!
//! - `tinct-color` - Color space conversions and mixing

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod mat3;
mod vec3;

pub use interp::*;
pub use mat3::*;
pub use vec3::*;
