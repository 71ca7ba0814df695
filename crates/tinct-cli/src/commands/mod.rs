//! CLI command implementations

pub mod contrast;
pub mod derive;
pub mod gradient;
pub mod info;
pub mod mix;
pub mod palette;

use anyhow::{Context, Result};
use tinct_color::Rgba;

/// Parse a hex color argument
pub fn parse_color(input: &str) -> Result<Rgba> {
    Rgba::from_hex(input).with_context(|| format!("Invalid color: {input}"))
}

/// Parse every argument, failing on the first bad one
pub fn parse_colors(inputs: &[String]) -> Result<Vec<Rgba>> {
    inputs.iter().map(|s| parse_color(s)).collect()
}

/// Format channels as `0.200 0.400 0.600 1.000`
pub fn format_channels(channels: &[f64]) -> String {
    channels
        .iter()
        .map(|c| format!("{c:.3}"))
        .collect::<Vec<_>>()
        .join(" ")
}
