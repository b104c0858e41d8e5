/// Default ceiling for a single line: 10 MiB.
///
/// Large enough for any realistic log line, small enough that a binary
/// file with no newlines cannot balloon a reader's buffer.
pub const DEFAULT_MAX_LINE_SIZE: usize = 10 * 1024 * 1024;

/// Default number of bytes requested from the source per read: 64 KiB.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Configuration for a [`LineReader`](crate::LineReader) or
/// [`AsyncLineReader`](crate::AsyncLineReader).
///
/// ```text
/// ┌───────────────┬─────────────────────────────────────────────────────┐
/// │ Field         │ Purpose                                             │
/// ├───────────────┼─────────────────────────────────────────────────────┤
/// │ max_line_size │ Largest line (excluding `\n`) the reader accepts    │
/// │ chunk_size    │ Bytes requested from the source per read call       │
/// └───────────────┴─────────────────────────────────────────────────────┘
/// ```
///
/// A read never asks for more than the ceiling still allows, so a
/// reader's buffer stays within `max_line_size + 1` bytes whatever the
/// chunk size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReaderConfig {
    /// A line whose undelimited length exceeds this many bytes fails with
    /// [`ReadError::LineTooLong`](crate::ReadError::LineTooLong). A line
    /// of exactly this length is accepted.
    pub max_line_size: usize,

    /// Size of each read issued against the source. Values below 1 are
    /// treated as 1.
    pub chunk_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_line_size: DEFAULT_MAX_LINE_SIZE,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ReaderConfig {
    /// Set the maximum accepted line length in bytes.
    #[must_use]
    pub fn with_max_line_size(mut self, max_line_size: usize) -> Self {
        self.max_line_size = max_line_size;
        self
    }

    /// Set the number of bytes requested per read.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub(crate) fn effective_chunk_size(&self) -> usize {
        self.chunk_size.max(1)
    }
}
