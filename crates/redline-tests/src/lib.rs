//! Test sources shared by the integration suites and benchmarks.
//!
//! | Item             | Purpose                                              |
//! |------------------|------------------------------------------------------|
//! | `Trickle`        | `Read` that hands out at most N bytes per call       |
//! | `FailAfter`      | `Read` that fails once its data is used up           |
//! | `expected_lines` | Reference splitter the readers are checked against   |
//! | `log_fixture`    | Deterministic log-like payload for benchmarks        |

use std::io::{self, Read};

use redline_reader::{Line, LineReader, ReadError, ReaderConfig};

/// Reader that returns at most `step` bytes per `read` call, exercising
/// every buffer boundary the line reader can hit.
pub struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
}

impl<'a> Trickle<'a> {
    #[must_use]
    pub fn new(data: &'a [u8], step: usize) -> Self {
        Self {
            data,
            step: step.max(1),
        }
    }
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Reader that yields `data` and then fails with `kind` on every call.
pub struct FailAfter<'a> {
    data: &'a [u8],
    kind: io::ErrorKind,
}

impl<'a> FailAfter<'a> {
    #[must_use]
    pub fn new(data: &'a [u8], kind: io::ErrorKind) -> Self {
        Self { data, kind }
    }
}

impl Read for FailAfter<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(self.kind, "source failed"));
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Split `data` at every `\n` the way a correct reader must, ignoring the
/// size ceiling.
#[must_use]
pub fn expected_lines(data: &[u8]) -> Vec<Line> {
    let mut lines: Vec<Line> = data
        .split(|&b| b == b'\n')
        .map(|chunk| Line::new(chunk.to_vec(), true))
        .collect();
    // `split` always yields one trailing piece: empty when the input ends
    // with `\n` (or is empty), otherwise the unterminated tail.
    if let Some(tail) = lines.pop() {
        if !tail.is_empty() {
            lines.push(Line::new(tail.into_bytes(), false));
        }
    }
    lines
}

/// Drain a reader, stopping at the first error.
///
/// # Errors
///
/// Returns the first error the reader reports.
pub fn read_all<R: Read>(source: R, config: ReaderConfig) -> Result<Vec<Line>, ReadError> {
    LineReader::with_config(source, config).lines().collect()
}

/// Deterministic log-like payload of roughly `lines` lines.
#[must_use]
pub fn log_fixture(lines: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(lines * 64);
    for i in 0..lines {
        out.extend_from_slice(
            format!("2024-01-01T00:00:{:02}Z level=info req={i} msg=\"handled request\"\n", i % 60)
                .as_bytes(),
        );
    }
    out
}
