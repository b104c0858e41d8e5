/// Implementation of `redline stats`.
///
/// Streams a file through a [`LineReader`] and prints a short report. The
/// file is never loaded whole, so multi-gigabyte logs are fine as long as
/// no single line crosses the ceiling.
///
/// # Example output
///
/// ```text
/// File:          /var/log/app.log  (18342 bytes)
/// Lines:         412
/// Unterminated:  0
/// Longest line:  311 bytes (line 97)
/// ```
use std::fmt::Write as _;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use redline_reader::{LineReader, ReadError, ReaderConfig};
use serde::Serialize;

use crate::StatsArgs;

/// Counters gathered from one pass over the input.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub lines: usize,
    /// Total input bytes, delimiters included.
    pub bytes: u64,
    /// Lines without a trailing `\n`: 1 when the input does not end with
    /// one, otherwise 0.
    pub unterminated_lines: usize,
    pub longest_line: usize,
    /// 1-based; 0 when the input is empty.
    pub longest_line_number: usize,
}

/// Run the `redline stats` command.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, a read fails, or a line
/// exceeds the configured maximum size.
pub fn run(args: &StatsArgs, config: ReaderConfig) -> Result<()> {
    let file =
        File::open(&args.file).with_context(|| format!("cannot open {}", args.file.display()))?;

    let stats = collect(file, config)
        .with_context(|| format!("failed to scan {}", args.file.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    print!("{}", render(&args.file, &stats));
    Ok(())
}

/// Human-readable report for one file.
fn render(file: &Path, stats: &LineStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "File:          {}  ({} bytes)", file.display(), stats.bytes);
    let _ = writeln!(out, "Lines:         {}", stats.lines);
    let _ = writeln!(out, "Unterminated:  {}", stats.unterminated_lines);
    if stats.lines > 0 {
        let _ = writeln!(
            out,
            "Longest line:  {} bytes (line {})",
            stats.longest_line, stats.longest_line_number
        );
    }
    out
}

/// Gather [`LineStats`] from any byte source.
pub fn collect<R: Read>(source: R, config: ReaderConfig) -> Result<LineStats, ReadError> {
    let mut reader = LineReader::with_config(source, config);
    let mut stats = LineStats::default();

    while let Some(line) = reader.read_line()? {
        stats.lines += 1;
        stats.bytes += line.len() as u64 + u64::from(line.had_newline());
        if !line.had_newline() {
            stats.unterminated_lines += 1;
        }
        if line.len() > stats.longest_line || stats.longest_line_number == 0 {
            stats.longest_line = line.len();
            stats.longest_line_number = stats.lines;
        }
    }

    tracing::debug!(lines = stats.lines, bytes = stats.bytes, "scan complete");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn counts_lines_and_bytes() {
        let stats = collect(&b"a\nlonger\n\nxyz"[..], ReaderConfig::default()).unwrap();
        assert_eq!(
            stats,
            LineStats {
                lines: 4,
                bytes: 13,
                unterminated_lines: 1,
                longest_line: 6,
                longest_line_number: 2,
            }
        );
    }

    #[test]
    fn empty_input_has_no_lines() {
        let stats = collect(&b""[..], ReaderConfig::default()).unwrap();
        assert_eq!(stats, LineStats::default());
    }

    #[test]
    fn trailing_newline_is_reported() {
        let stats = collect(&b"one\n"[..], ReaderConfig::default()).unwrap();
        assert_eq!(stats.unterminated_lines, 0);
        assert_eq!(stats.bytes, 4);
    }

    #[test]
    fn report_lists_unterminated_lines() {
        let stats = collect(&b"a\nlonger\n\nxyz"[..], ReaderConfig::default()).unwrap();
        assert_snapshot!(render(Path::new("app.log"), &stats).trim_end(), @r"
        File:          app.log  (13 bytes)
        Lines:         4
        Unterminated:  1
        Longest line:  6 bytes (line 2)
        ");
    }

    #[test]
    fn json_report_uses_unterminated_count() {
        let stats = collect(&b"one\n"[..], ReaderConfig::default()).unwrap();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["unterminated_lines"], 0);
        assert_eq!(json["lines"], 1);
    }

    #[test]
    fn oversize_line_is_an_error() {
        let config = ReaderConfig::default().with_max_line_size(2);
        let err = collect(&b"abc"[..], config).unwrap_err();
        assert!(err.is_line_too_long());
    }
}
