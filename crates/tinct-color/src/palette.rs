//! Batch parsing of hex color palettes.
//!
//! Parsing never stops at the first bad entry: every entry is tried and the
//! [`PaletteReport`] lists the colors that parsed alongside the entries that
//! failed, each with its index and the original input.
//!
//! # Text Format
//!
//! [`parse_palette_text`] reads one color per line. Blank lines and comment
//! lines are skipped. A comment starts with `//`, or with `#` followed by
//! whitespace or nothing; `#` followed directly by other characters is a
//! color entry.
//!
//! ```text
//! // brand colors
//! #FF6600
//! # accents
//! #0af
//! ```
//!
//! # Example
//!
//! ```rust
//! use tinct_color::palette::parse_palette;
//!
//! let report = parse_palette(["#F00", "nope", "#00FF00"]);
//! assert_eq!(report.colors.len(), 2);
//! assert_eq!(report.failures[0].index, 1);
//! assert!(!report.is_clean());
//! ```

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tinct_core::{ColorError, ColorResult};
use tracing::{debug, trace};

use crate::space::Rgba;

/// A successfully parsed entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    /// Position of the entry (line index for text input, 0-based).
    pub index: usize,
    /// The entry as given, trimmed.
    pub input: String,
    /// Parsed color.
    pub color: Rgba,
}

/// An entry that failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteFailure {
    /// Position of the entry (line index for text input, 0-based).
    pub index: usize,
    /// The entry as given, trimmed.
    pub input: String,
    /// Why it was rejected.
    pub error: ColorError,
}

/// Outcome of a batch parse, both lists in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaletteReport {
    /// Entries that parsed.
    pub colors: Vec<PaletteEntry>,
    /// Entries that did not.
    pub failures: Vec<PaletteFailure>,
}

impl PaletteReport {
    /// Returns `true` if no entry failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of entries considered (comments and blanks excluded).
    pub fn total(&self) -> usize {
        self.colors.len() + self.failures.len()
    }

    /// The parsed colors without their metadata.
    pub fn to_colors(&self) -> Vec<Rgba> {
        self.colors.iter().map(|e| e.color).collect()
    }

    /// Converts into the colors, or the first failure's error.
    pub fn into_result(self) -> ColorResult<Vec<Rgba>> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure.error),
            None => Ok(self.colors.into_iter().map(|e| e.color).collect()),
        }
    }

    fn from_results(results: impl IntoIterator<Item = (usize, String, ColorResult<Rgba>)>) -> Self {
        let mut report = Self::default();
        for (index, input, result) in results {
            match result {
                Ok(color) => report.colors.push(PaletteEntry { index, input, color }),
                Err(error) => {
                    trace!(index, input = %input, error = %error, "palette entry rejected");
                    report.failures.push(PaletteFailure { index, input, error });
                }
            }
        }
        debug!(
            colors = report.colors.len(),
            failures = report.failures.len(),
            "parsed palette"
        );
        report
    }
}

fn parse_entry(index: usize, raw: &str) -> (usize, String, ColorResult<Rgba>) {
    let input = raw.trim();
    (index, input.to_string(), Rgba::from_hex(input))
}

/// Returns `true` for lines [`parse_palette_text`] skips.
fn is_skipped_line(line: &str) -> bool {
    if line.is_empty() || line.starts_with("//") {
        return true;
    }
    match line.strip_prefix('#') {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

/// Non-skipped lines of `text`, with their 0-based line index.
fn palette_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i, line.trim()))
        .filter(|(_, line)| !is_skipped_line(line))
}

/// Parses every entry; `index` in the report is the entry's position.
pub fn parse_palette<I, S>(entries: I) -> PaletteReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PaletteReport::from_results(
        entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| parse_entry(i, entry.as_ref())),
    )
}

/// Parses one color per line, skipping blank and comment lines.
///
/// `index` in the report is the 0-based line index.
pub fn parse_palette_text(text: &str) -> PaletteReport {
    PaletteReport::from_results(palette_lines(text).map(|(i, line)| parse_entry(i, line)))
}

/// Parallel [`parse_palette_text`]; same report, same order.
#[cfg(feature = "rayon")]
pub fn parse_palette_text_par(text: &str) -> PaletteReport {
    let lines: Vec<(usize, &str)> = palette_lines(text).collect();
    let results: Vec<_> = lines
        .par_iter()
        .map(|&(i, line)| parse_entry(i, line))
        .collect();
    PaletteReport::from_results(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
// brand
#FF6600

# accents
#\tdisabled
#
#0af
  #ABCDEF80
#GGHHII
fff0
";

    #[test]
    fn test_parse_entries() {
        let report = parse_palette(vec!["#F00".to_string(), " #0f0 ".to_string(), "xyz".to_string()]);
        assert_eq!(report.total(), 3);
        assert_eq!(report.colors[1].input, "#0f0");
        assert_eq!(report.colors[1].color, Rgba::rgb(0.0, 1.0, 0.0));
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 2);
        assert!(report.failures[0].error.is_hex_error());
    }

    #[test]
    fn test_parse_text_skips_comments() {
        let report = parse_palette_text(SAMPLE);
        let indices: Vec<usize> = report.colors.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![1, 6, 7, 9]);
        assert_eq!(report.colors[2].input, "#ABCDEF80");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 8);
        assert_eq!(report.failures[0].input, "#GGHHII");
    }

    #[test]
    fn test_clean_report() {
        let report = parse_palette_text("#000\n#fff\n");
        assert!(report.is_clean());
        assert_eq!(report.to_colors(), vec![Rgba::BLACK, Rgba::WHITE]);
        assert_eq!(report.into_result().unwrap().len(), 2);
    }

    #[test]
    fn test_into_result_first_error() {
        let report = parse_palette(["#12", "#1234567"]);
        let err = report.into_result().unwrap_err();
        assert_eq!(err, ColorError::invalid_hex_length("#12", 2));
    }

    #[test]
    fn test_empty_input() {
        let report = parse_palette_text("");
        assert_eq!(report.total(), 0);
        assert!(report.is_clean());
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_parallel_matches_serial() {
        let text: String = (0..500)
            .map(|i| if i % 7 == 0 { format!("zz{i}\n") } else { format!("#{:06X}\n", i * 4099) })
            .collect();
        assert_eq!(parse_palette_text_par(&text), parse_palette_text(&text));
    }
}
