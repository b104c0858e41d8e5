/// Errors returned while scanning a byte stream for lines.
///
/// End-of-stream is not an error: readers report it as `Ok(None)`.
///
/// ```text
///   ReadError
///   ├── LineTooLong   ← undelimited run exceeded the configured ceiling
///   └── Io            ← passed through from the underlying source
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The current line grew past `limit` bytes before a `\n` or
    /// end-of-stream was seen.
    ///
    /// Fatal for the reader that produced it: every later call returns
    /// this error again.
    #[error("line exceeds maximum size of {limit} bytes")]
    LineTooLong { limit: usize },

    /// The underlying source failed. Bytes of the partially read line
    /// are discarded.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ReadError {
    /// Returns `true` for [`ReadError::LineTooLong`].
    #[must_use]
    pub fn is_line_too_long(&self) -> bool {
        matches!(self, Self::LineTooLong { .. })
    }
}
