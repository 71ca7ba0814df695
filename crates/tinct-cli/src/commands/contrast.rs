//! Contrast command: WCAG ratio and pass/fail for a display context.

use crate::ContrastArgs;
use anyhow::Result;
use tinct_color::{ContrastContext, Rgba};
use tracing::{info, trace};

/// Result of comparing two colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    pub ratio: f64,
    pub context: ContrastContext,
    pub passes: bool,
    pub heuristic: bool,
}

impl ContrastReport {
    pub fn new(foreground: &Rgba, background: &Rgba, context: ContrastContext) -> Self {
        Self {
            ratio: foreground.contrast_ratio(background),
            context,
            passes: foreground.is_contrasting(background, context),
            heuristic: foreground.is_contrasting_with(background),
        }
    }
}

fn pass_fail(v: bool) -> &'static str {
    if v { "pass" } else { "fail" }
}

pub fn run(args: ContrastArgs, verbose: u8) -> Result<()> {
    trace!(fg = %args.foreground, bg = %args.background, context = %args.context, "contrast::run");

    let fg = super::parse_color(&args.foreground)?;
    let bg = super::parse_color(&args.background)?;
    let report = ContrastReport::new(&fg, &bg, args.context);
    info!(ratio = report.ratio, passes = report.passes, "contrast checked");

    println!("Ratio:      {:.2}:1", report.ratio);
    println!(
        "WCAG {} (> {}): {}",
        report.context,
        report.context.minimum_ratio(),
        pass_fail(report.passes)
    );
    println!("Heuristic (> 1.6): {}", pass_fail(report.heuristic));

    if verbose > 0 {
        for ctx in ContrastContext::ALL {
            println!(
                "  {:<15} {:>4} {}",
                ctx.name(),
                ctx.minimum_ratio(),
                pass_fail(fg.is_contrasting(&bg, ctx))
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_on_white() {
        let r = ContrastReport::new(&Rgba::BLACK, &Rgba::WHITE, ContrastContext::Enhanced);
        assert_eq!(r.ratio, 21.0);
        assert!(r.passes);
        assert!(r.heuristic);
    }

    #[test]
    fn test_gray_on_white() {
        let gray = Rgba::from_hex("#777").unwrap();
        let r = ContrastReport::new(&gray, &Rgba::WHITE, ContrastContext::Standard);
        assert!(r.ratio > 4.4 && r.ratio < 4.5);
        assert!(!r.passes);
        let large = ContrastReport::new(&gray, &Rgba::WHITE, ContrastContext::StandardLargeText);
        assert!(large.passes);
    }

    #[test]
    fn test_run() {
        let args = ContrastArgs {
            foreground: "#000".to_string(),
            background: "#FFF".to_string(),
            context: ContrastContext::Standard,
        };
        assert!(run(args, 1).is_ok());
    }
}
