//! Gradient command: sample evenly spaced colors between stops.

use crate::GradientArgs;
use anyhow::{bail, Result};
use tinct_color::{Gradient, MixSpace, Rgba};
use tracing::{debug, trace};

/// Samples `steps` colors, optionally from the last stop to the first.
pub fn sample(stops: Vec<Rgba>, steps: usize, space: MixSpace, reverse: bool) -> Vec<Rgba> {
    let gradient = Gradient::new(stops);
    let gradient = if reverse { gradient.reversed() } else { gradient };
    gradient.color_palette(steps, space)
}

pub fn run(args: GradientArgs, verbose: u8) -> Result<()> {
    trace!(stops = args.colors.len(), steps = args.steps, space = %args.space, "gradient::run");

    if args.steps == 0 {
        bail!("--steps must be at least 1");
    }

    let stops = super::parse_colors(&args.colors)?;
    let colors = sample(stops, args.steps, args.space, args.reverse);
    debug!(samples = colors.len(), "gradient sampled");

    let last = colors.len().saturating_sub(1).max(1) as f64;
    for (i, color) in colors.iter().enumerate() {
        if verbose > 0 {
            println!("{:.3}  {}", i as f64 / last, color);
        } else {
            println!("{}", color);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hexes(colors: &[Rgba]) -> Vec<String> {
        colors.iter().map(|c| c.to_hex_string()).collect()
    }

    #[test]
    fn test_sample_rgb() {
        let colors = sample(vec![Rgba::BLACK, Rgba::WHITE], 3, MixSpace::Rgb, false);
        assert_eq!(hexes(&colors), ["#000000FF", "#808080FF", "#FFFFFFFF"]);
    }

    #[test]
    fn test_sample_reverse() {
        let colors = sample(vec![Rgba::BLACK, Rgba::WHITE], 2, MixSpace::Rgb, true);
        assert_eq!(colors, vec![Rgba::WHITE, Rgba::BLACK]);
    }

    #[test]
    fn test_sample_hsl_passes_through_short_arc() {
        let red = Rgba::from_hex("#F00").unwrap();
        let blue = Rgba::from_hex("#00F").unwrap();
        let colors = sample(vec![red, blue], 3, MixSpace::Hsl, false);
        // 0 deg -> 240 deg goes backwards through magenta
        assert_eq!(colors[1].to_hex_string(), "#FF00FFFF");
    }

    #[test]
    fn test_run_rejects_zero_steps() {
        let args = GradientArgs {
            colors: vec!["#000".to_string()],
            steps: 0,
            space: MixSpace::Rgb,
            reverse: false,
        };
        assert!(run(args, 0).is_err());
    }
}
