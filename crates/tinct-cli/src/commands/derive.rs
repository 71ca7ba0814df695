//! Derive command: apply one derivation to a color.

use crate::DeriveArgs;
use anyhow::{Context, Result};
use clap::ValueEnum;
use tinct_color::{Rgba, DEFAULT_ADJUSTMENT};
use tracing::{debug, trace};

/// Derivations exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeriveOp {
    /// Raise HSL lightness
    Lighten,
    /// Lower HSL lightness
    Darken,
    /// Raise HSL saturation
    Saturate,
    /// Lower HSL saturation
    Desaturate,
    /// Rotate the hue by --amount degrees
    Hue,
    /// Rotate the hue by 180 degrees
    Complement,
    /// 1 - value on each color channel
    Invert,
    /// Full desaturation
    Grayscale,
    /// Mix with white
    Tint,
    /// Mix with black
    Shade,
    /// Replace alpha with --amount
    Alpha,
}

/// Applies `op`; adjustment ops default to `DEFAULT_ADJUSTMENT`.
pub fn apply(color: Rgba, op: DeriveOp, amount: Option<f64>) -> Result<Rgba> {
    let step = amount.unwrap_or(DEFAULT_ADJUSTMENT);
    let result = match op {
        DeriveOp::Lighten => color.lighter(step),
        DeriveOp::Darken => color.darkened(step),
        DeriveOp::Saturate => color.saturated(step),
        DeriveOp::Desaturate => color.desaturated(step),
        DeriveOp::Hue => color.adjusted_hue(amount.context("hue needs --amount <DEGREES>")?),
        DeriveOp::Complement => color.complemented(),
        DeriveOp::Invert => color.inverted(),
        DeriveOp::Grayscale => color.grayscaled(),
        DeriveOp::Tint => color.tinted(step),
        DeriveOp::Shade => color.shaded(step),
        DeriveOp::Alpha => color.with_alpha(amount.context("alpha needs --amount <ALPHA>")?),
    };
    Ok(result)
}

pub fn run(args: DeriveArgs, verbose: u8) -> Result<()> {
    trace!(color = %args.color, op = ?args.op, amount = ?args.amount, "derive::run");

    let color = super::parse_color(&args.color)?;
    let result = apply(color, args.op, args.amount)?;
    debug!(from = %color, to = %result, "derived");

    if verbose > 0 {
        println!("{} -> {:?} -> {}", color, args.op, result);
    } else {
        println!("{}", result);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(op: DeriveOp, amount: Option<f64>) -> String {
        let base = Rgba::from_hex("#FF0000").unwrap();
        apply(base, op, amount).unwrap().to_hex_string()
    }

    #[test]
    fn test_fixed_ops() {
        assert_eq!(hex(DeriveOp::Complement, None), "#00FFFFFF");
        assert_eq!(hex(DeriveOp::Invert, None), "#00FFFFFF");
        assert_eq!(hex(DeriveOp::Grayscale, None), "#808080FF");
    }

    #[test]
    fn test_default_amount() {
        // lightness 0.5 -> 0.7: #FF6666
        assert_eq!(hex(DeriveOp::Lighten, None), "#FF6666FF");
        assert_eq!(hex(DeriveOp::Darken, None), "#990000FF");
        assert_eq!(hex(DeriveOp::Tint, None), "#FF3333FF");
        assert_eq!(hex(DeriveOp::Shade, None), "#CC0000FF");
    }

    #[test]
    fn test_explicit_amount() {
        assert_eq!(hex(DeriveOp::Hue, Some(120.0)), "#00FF00FF");
        assert_eq!(hex(DeriveOp::Hue, Some(-120.0)), "#0000FFFF");
        assert_eq!(hex(DeriveOp::Alpha, Some(0.0)), "#FF000000");
        assert_eq!(hex(DeriveOp::Lighten, Some(0.5)), "#FFFFFFFF");
    }

    #[test]
    fn test_amount_required() {
        let base = Rgba::BLACK;
        assert!(apply(base, DeriveOp::Hue, None).is_err());
        assert!(apply(base, DeriveOp::Alpha, None).is_err());
    }
}
