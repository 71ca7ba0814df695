//! Palette command: batch-parse a palette file in parallel.
//!
//! Every line is checked; failures are reported by line number and make the
//! command exit non-zero once all lines have been processed.

use crate::PaletteArgs;
use anyhow::{bail, Context, Result};
use std::path::Path;
use tinct_color::palette::parse_palette_text_par;
use tinct_color::PaletteReport;
use tracing::{info, trace};

/// Reads and parses a palette file.
pub fn load(path: &Path) -> Result<PaletteReport> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read palette: {}", path.display()))?;
    Ok(parse_palette_text_par(&text))
}

pub fn run(args: PaletteArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), "palette::run");

    let report = load(&args.input)?;
    info!(
        colors = report.colors.len(),
        failed = report.failures.len(),
        input = %args.input.display(),
        "Palette parsed"
    );

    for entry in &report.colors {
        if verbose > 0 {
            println!("{:>5}: {}  ({})", entry.index + 1, entry.color, entry.input);
        } else {
            println!("{}", entry.color);
        }
    }

    for failure in &report.failures {
        eprintln!("Error: line {}: {}", failure.index + 1, failure.error);
    }

    if verbose > 0 || !report.is_clean() {
        println!(
            "Parsed: {} colors, {} failed",
            report.colors.len(),
            report.failures.len()
        );
    }

    if !report.is_clean() {
        bail!("{} palette entries failed", report.failures.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn palette_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_clean_palette() {
        let file = palette_file("// brand\n#FF6600\n\n# accents\n#0af\n");
        let report = load(file.path()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.colors.len(), 2);
        assert_eq!(report.colors[1].index, 4);

        let args = PaletteArgs {
            input: file.path().to_path_buf(),
        };
        assert!(run(args, 0).is_ok());
    }

    #[test]
    fn test_failures_reported_by_line() {
        let file = palette_file("#000\n#12345\n#fff\nnot-a-color\n");
        let report = load(file.path()).unwrap();
        let lines: Vec<usize> = report.failures.iter().map(|f| f.index + 1).collect();
        assert_eq!(lines, vec![2, 4]);
        assert_eq!(report.colors.len(), 2);

        let args = PaletteArgs {
            input: file.path().to_path_buf(),
        };
        let err = run(args, 0).unwrap_err();
        assert!(err.to_string().contains("2 palette entries failed"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing: PathBuf = dir.path().join("nope.txt");
        let err = load(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read palette"));
    }
}
