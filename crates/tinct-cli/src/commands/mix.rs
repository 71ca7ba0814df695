//! Mix command: blend two colors in a chosen space.

use crate::MixArgs;
use anyhow::Result;
use tracing::{debug, trace, warn};

pub fn run(args: MixArgs, verbose: u8) -> Result<()> {
    trace!(from = %args.from, to = %args.to, weight = args.weight, space = %args.space, "mix::run");

    if !(0.0..=1.0).contains(&args.weight) {
        warn!(weight = args.weight, "weight outside [0, 1], clipping");
    }

    let from = super::parse_color(&args.from)?;
    let to = super::parse_color(&args.to)?;
    let result = from.mixed(&to, args.weight, args.space);
    debug!(%from, %to, %result, "mixed");

    if verbose > 0 {
        println!(
            "{} + {} ({:.0}% in {}) -> {}",
            from,
            to,
            args.weight * 100.0,
            args.space,
            result
        );
    } else {
        println!("{}", result);
    }
    Ok(())
}
