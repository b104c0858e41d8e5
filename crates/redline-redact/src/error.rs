use redline_reader::ReadError;

/// Errors that abort a redaction pass.
///
/// Read-side and write-side failures are kept apart so a caller can tell
/// "the input was unusable" from "the destination went away".
#[derive(Debug, thiserror::Error)]
pub enum RedactError {
    /// Scanning the input failed: an oversize line or an I/O error on the
    /// source.
    #[error("failed to read input: {0}")]
    Read(#[from] ReadError),

    /// Writing redacted output failed.
    #[error("failed to write redacted output: {0}")]
    Write(#[source] std::io::Error),
}
