use std::borrow::Cow;
use std::io::{Read, Write};

use memchr::memmem;
use redline_reader::{LineReader, ReadError, ReaderConfig};

use crate::error::RedactError;
use crate::report::{Redaction, RedactionReport};

/// Replacement written in place of every match unless overridden.
pub const DEFAULT_MASK: &str = "***HIDDEN***";

/// Replaces every occurrence of a fixed byte string, line by line.
///
/// The input is scanned with a [`LineReader`], so the output keeps the
/// exact newline structure of the input: a missing trailing newline stays
/// missing, binary content passes through untouched, and a line that
/// contains no match is written back byte-for-byte.
///
/// ```text
///   input:   "user=admin\npassword=hunter2\ntail"
///   pattern: "hunter2"
///   output:  "user=admin\npassword=***HIDDEN***\ntail"
/// ```
///
/// Matches never span lines, and an empty pattern matches nothing.
#[derive(Clone, Debug)]
pub struct LiteralRedactor {
    pattern: Vec<u8>,
    mask: Vec<u8>,
    name: String,
    config: ReaderConfig,
}

impl LiteralRedactor {
    #[must_use]
    pub fn new(pattern: impl Into<Vec<u8>>) -> Self {
        Self {
            pattern: pattern.into(),
            mask: DEFAULT_MASK.as_bytes().to_vec(),
            name: "literal".to_string(),
            config: ReaderConfig::default(),
        }
    }

    #[must_use]
    pub fn with_mask(mut self, mask: impl Into<Vec<u8>>) -> Self {
        self.mask = mask.into();
        self
    }

    /// Name recorded in each [`Redaction`].
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_reader_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copy `input` to `output`, masking every occurrence of the pattern.
    ///
    /// Lines already written before an error stay written; `output` is
    /// flushed only on success.
    ///
    /// # Errors
    ///
    /// - [`RedactError::Read`] when a line exceeds the reader ceiling or
    ///   the input fails.
    /// - [`RedactError::Write`] when `output` fails.
    pub fn redact<R: Read, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<RedactionReport, RedactError> {
        let mut reader = LineReader::with_config(input, self.config);
        let finder = memmem::Finder::new(&self.pattern);
        let mut report = RedactionReport::default();

        loop {
            let line = match reader.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(err) => {
                    self.log_read_failure(&err);
                    return Err(err.into());
                }
            };
            report.lines_read += 1;

            let (clean, occurrences) = replace_all(&finder, line.as_bytes(), &self.mask);
            output.write_all(&clean).map_err(RedactError::Write)?;
            if line.had_newline() {
                output.write_all(b"\n").map_err(RedactError::Write)?;
            }

            if occurrences > 0 {
                report.redactions.push(Redaction {
                    redactor: self.name.clone(),
                    line: report.lines_read,
                    occurrences,
                    characters_removed: signed_len(line.len()) - signed_len(clean.len()),
                });
            }
        }

        output.flush().map_err(RedactError::Write)?;
        tracing::debug!(
            redactor = %self.name,
            lines = report.lines_read,
            redacted = report.redactions.len(),
            "redaction pass complete"
        );
        Ok(report)
    }

    fn log_read_failure(&self, err: &ReadError) {
        match err {
            ReadError::LineTooLong { limit } => tracing::info!(
                redactor = %self.name,
                limit,
                "a line in the input exceeded {} max length",
                format_limit(*limit)
            ),
            ReadError::Io(e) => tracing::info!(redactor = %self.name, "error redacting input: {e}"),
        }
    }
}

/// Replace every non-overlapping occurrence found by `finder`.
///
/// Borrows `haystack` unchanged when nothing matches.
fn replace_all<'a>(
    finder: &memmem::Finder<'_>,
    haystack: &'a [u8],
    mask: &[u8],
) -> (Cow<'a, [u8]>, usize) {
    if finder.needle().is_empty() {
        return (Cow::Borrowed(haystack), 0);
    }

    let mut out = Vec::new();
    let mut last = 0;
    let mut occurrences = 0;
    for start in finder.find_iter(haystack) {
        out.extend_from_slice(&haystack[last..start]);
        out.extend_from_slice(mask);
        last = start + finder.needle().len();
        occurrences += 1;
    }

    if occurrences == 0 {
        return (Cow::Borrowed(haystack), 0);
    }
    out.extend_from_slice(&haystack[last..]);
    (Cow::Owned(out), occurrences)
}

/// Whole mebibytes are shown as `N MB`; anything else in bytes, so small
/// ceilings never round down to zero.
fn format_limit(limit: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if limit >= MIB && limit % MIB == 0 {
        format!("{} MB", limit / MIB)
    } else {
        format!("{limit} bytes")
    }
}

fn signed_len(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}
