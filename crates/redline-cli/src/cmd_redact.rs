/// Implementation of `redline redact`.
///
/// Masks every occurrence of `--literal` in the file and writes the result
/// to stdout or `-o <file>`. The newline structure of the input is kept
/// exactly: binary files and files without a trailing newline come out
/// with the same shape they went in with.
///
/// A one-line summary goes to stderr:
///
/// ```text
/// redacted 3 occurrences on 2 of 40 lines
/// ```
use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use redline_reader::ReaderConfig;
use redline_redact::{LiteralRedactor, RedactionReport};

use crate::RedactArgs;

/// Run the `redline redact` command.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read, a line exceeds
/// the configured maximum size, or the output cannot be written.
pub fn run(args: &RedactArgs, config: ReaderConfig) -> Result<()> {
    let input =
        File::open(&args.file).with_context(|| format!("cannot open {}", args.file.display()))?;

    let mut redactor = LiteralRedactor::new(args.literal.as_bytes()).with_reader_config(config);
    if let Some(mask) = &args.mask {
        redactor = redactor.with_mask(mask.as_bytes());
    }

    let report = match &args.output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            redactor.redact(input, BufWriter::new(out))
        }
        None => redactor.redact(input, BufWriter::new(io::stdout().lock())),
    }
    .with_context(|| format!("failed to redact {}", args.file.display()))?;

    writeln!(io::stderr(), "{}", summary(&report))?;
    Ok(())
}

fn summary(report: &RedactionReport) -> String {
    let occurrences = report.total_occurrences();
    format!(
        "redacted {occurrences} occurrence{} on {} of {} line{}",
        if occurrences == 1 { "" } else { "s" },
        report.redactions.len(),
        report.lines_read,
        if report.lines_read == 1 { "" } else { "s" },
    )
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use redline_redact::Redaction;

    use super::*;

    #[test]
    fn summary_of_clean_pass() {
        let report = RedactionReport {
            lines_read: 1,
            redactions: Vec::new(),
        };
        assert_snapshot!(summary(&report), @"redacted 0 occurrences on 0 of 1 line");
    }

    #[test]
    fn summary_counts_occurrences_and_lines() {
        let report = RedactionReport {
            lines_read: 40,
            redactions: vec![
                Redaction {
                    redactor: "literal".into(),
                    line: 3,
                    occurrences: 2,
                    characters_removed: 0,
                },
                Redaction {
                    redactor: "literal".into(),
                    line: 9,
                    occurrences: 1,
                    characters_removed: 0,
                },
            ],
        };
        assert_snapshot!(summary(&report), @"redacted 3 occurrences on 2 of 40 lines");
    }
}
