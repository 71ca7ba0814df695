//! Color info command.
//!
//! Shows a color in every space along with its luminance and light/dark
//! classification, as text or JSON.

use crate::InfoArgs;
use anyhow::Result;
use serde::Serialize;
use tinct_color::{Hsba, Hsl, Lab, Rgba, Xyz};
use tracing::trace;

/// Every representation of one color.
#[derive(Debug, Serialize)]
pub struct ColorInfo {
    pub input: String,
    pub hex: String,
    pub rgba: Rgba,
    pub hsba: Hsba,
    pub hsl: Hsl,
    pub xyz: Xyz,
    pub lab: Lab,
    pub luminance: f64,
    pub is_light: bool,
    pub is_dark: bool,
}

impl ColorInfo {
    pub fn new(input: &str, color: Rgba) -> Self {
        Self {
            input: input.to_string(),
            hex: color.to_hex_string(),
            rgba: color,
            hsba: color.to_hsba(),
            hsl: color.to_hsl(),
            xyz: color.to_xyz(),
            lab: color.to_lab(),
            luminance: color.luminance(),
            is_light: color.is_light(),
            is_dark: color.is_dark(),
        }
    }
}

pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    trace!(colors = args.colors.len(), json = args.json, "info::run");

    let infos = args
        .colors
        .iter()
        .map(|input| Ok(ColorInfo::new(input, super::parse_color(input)?)))
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for (idx, info) in infos.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        print_text(info, verbose);
    }
    Ok(())
}

fn print_text(info: &ColorInfo, verbose: u8) {
    let hsb = &info.hsba;
    let hsl = &info.hsl;
    println!("{}", info.input);
    println!("  Hex:        {}", info.hex);
    println!("  RGBA:       {}", super::format_channels(&info.rgba.to_array()));
    println!(
        "  HSB:        {:.1} deg, {:.3}, {:.3}",
        hsb.hue_degrees(),
        hsb.saturation(),
        hsb.brightness()
    );
    println!(
        "  HSL:        {:.1} deg, {:.3}, {:.3}",
        hsl.hue_degrees(),
        hsl.saturation(),
        hsl.lightness()
    );
    println!(
        "  XYZ:        {:.3}, {:.3}, {:.3}",
        info.xyz.x(),
        info.xyz.y(),
        info.xyz.z()
    );
    println!(
        "  LAB:        {:.3}, {:.3}, {:.3}",
        info.lab.l(),
        info.lab.a(),
        info.lab.b()
    );
    println!("  Luminance:  {:.4}", info.luminance);
    println!("  Light:      {}", yes_no(info.is_light));
    println!("  Dark:       {}", yes_no(info.is_dark));

    if verbose > 0 {
        let c = info.rgba;
        println!("  Packed:     0x{:06X}", c.to_hex());
        println!("  Vs white:   {:.2}:1", c.contrast_ratio(&Rgba::WHITE));
        println!("  Vs black:   {:.2}:1", c.contrast_ratio(&Rgba::BLACK));
    }
}

fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_info() {
        let info = ColorInfo::new("#F00", Rgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(info.hex, "#FF0000FF");
        assert_eq!(info.hsl.lightness(), 0.5);
        assert_eq!(info.luminance, 0.2126);
        assert!(!info.is_light);
        assert!(info.is_dark);
    }

    #[test]
    fn test_json_shape() {
        let info = ColorInfo::new("#FFF", Rgba::WHITE);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["hex"], "#FFFFFFFF");
        assert_eq!(json["rgba"]["red"], 1.0);
        assert_eq!(json["xyz"]["y"], 100.0);
        assert_eq!(json["lab"]["l"], 100.0);
        assert_eq!(json["is_light"], true);
    }

    #[test]
    fn test_run_rejects_bad_input() {
        let args = InfoArgs {
            colors: vec!["#000".to_string(), "#12345".to_string()],
            json: false,
        };
        assert!(run(args, 0).is_err());
    }
}
