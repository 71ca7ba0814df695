//! tinct - color inspection and derivation CLI
//!
//! Exposes the tinct-color engine: conversions, derivations, mixing,
//! WCAG contrast checks, gradients and palette validation.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tinct_color::{ContrastContext, MixSpace, DEFAULT_MIX_WEIGHT};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

use commands::derive::DeriveOp;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "TINCT_LOG";

#[derive(Parser)]
#[command(name = "tinct")]
#[command(author, version, about = "Color inspection and derivation CLI")]
#[command(long_about = "
Inspect, derive, mix and contrast-check colors given as hex strings.

Examples:
  tinct info '#3366CC'                      # Every representation
  tinct info '#F00' '#0F0' --json           # Machine-readable output
  tinct derive '#3366CC' lighten -a 0.1     # Lighten by 10%
  tinct derive '#3366CC' hue -a -30         # Rotate hue
  tinct mix '#000' '#FFF' -w 0.25 -s lab    # Blend in CIE LAB
  tinct contrast '#777' '#FFF' -c enhanced  # WCAG AAA check
  tinct palette brand.txt                   # Validate a palette file
  tinct gradient '#F00' '#00F' -n 7 -s hsl  # Sample a gradient
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more detail: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every representation of one or more colors
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Derive a new color (lighten, darken, hue, invert, ...)
    #[command(visible_alias = "d")]
    Derive(DeriveArgs),

    /// Blend two colors
    #[command(visible_alias = "m")]
    Mix(MixArgs),

    /// WCAG contrast ratio between two colors
    #[command(visible_alias = "c")]
    Contrast(ContrastArgs),

    /// Validate a palette file, one hex color per line
    #[command(visible_alias = "p")]
    Palette(PaletteArgs),

    /// Sample evenly spaced colors from a gradient
    #[command(visible_alias = "g")]
    Gradient(GradientArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Hex color(s)
    #[arg(required = true)]
    colors: Vec<String>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct DeriveArgs {
    /// Hex color
    color: String,

    /// Operation to apply
    #[arg(value_enum)]
    op: DeriveOp,

    /// Step for the operation (degrees for `hue`, new alpha for `alpha`)
    #[arg(short, long, allow_hyphen_values = true)]
    amount: Option<f64>,
}

#[derive(Args)]
struct MixArgs {
    /// First color
    from: String,

    /// Second color
    to: String,

    /// Weight of the second color, 0..1
    #[arg(short, long, default_value_t = DEFAULT_MIX_WEIGHT)]
    weight: f64,

    /// Interpolation space: rgb, hsb, hsl, lab
    #[arg(short, long, default_value = "rgb")]
    space: MixSpace,
}

#[derive(Args)]
struct ContrastArgs {
    /// Foreground color
    foreground: String,

    /// Background color
    background: String,

    /// Display context: standard, standard-large, enhanced, enhanced-large
    #[arg(short, long, default_value = "standard")]
    context: ContrastContext,
}

#[derive(Args)]
struct PaletteArgs {
    /// Palette file
    input: PathBuf,
}

#[derive(Args)]
struct GradientArgs {
    /// Gradient stops, first to last
    #[arg(required = true)]
    colors: Vec<String>,

    /// Number of colors to sample
    #[arg(short = 'n', long, default_value = "5")]
    steps: usize,

    /// Interpolation space: rgb, hsb, hsl, lab
    #[arg(short, long, default_value = "rgb")]
    space: MixSpace,

    /// Sample from the last stop to the first
    #[arg(short, long)]
    reverse: bool,
}

/// Default filter directive for a `-v` count.
fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber: stderr always, plus `log_file` if given.
///
/// The returned guard flushes the file writer on drop and must be kept
/// alive until exit.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let registry = tracing_subscriber::registry().with(env_filter).with(stderr_layer);

    let Some(path) = log_file else {
        registry.try_init().context("Failed to initialize logging")?;
        return Ok(None);
    };

    let name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    registry
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(Some(guard))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Derive(args) => commands::derive::run(args, cli.verbose),
        Commands::Mix(args) => commands::mix::run(args, cli.verbose),
        Commands::Contrast(args) => commands::contrast::run(args, cli.verbose),
        Commands::Palette(args) => commands::palette::run(args, cli.verbose),
        Commands::Gradient(args) => commands::gradient::run(args, cli.verbose),
    }
}
