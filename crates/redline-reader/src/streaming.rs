use tokio::io::{AsyncRead, AsyncReadExt};

use crate::config::ReaderConfig;
use crate::error::ReadError;
use crate::line::Line;
use crate::scan::LineBuffer;

/// Asynchronous counterpart of [`LineReader`](crate::LineReader).
///
/// Reads from any `AsyncRead` source (files, sockets, child process
/// pipes) and yields the same results as the blocking reader for the
/// same bytes: both drive one shared scanning core.
///
/// # Example
///
/// ```rust,no_run
/// use redline_reader::AsyncLineReader;
/// use tokio::io::AsyncRead;
///
/// async fn count_lines(source: impl AsyncRead + Unpin) -> usize {
///     let mut reader = AsyncLineReader::new(source);
///     let mut count = 0;
///     while let Some(_line) = reader.read_line().await.unwrap() {
///         count += 1;
///     }
///     count
/// }
/// ```
pub struct AsyncLineReader<R> {
    reader: R,
    scan: LineBuffer,
    config: ReaderConfig,
}

impl<R: AsyncRead + Unpin> AsyncLineReader<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ReaderConfig::default())
    }

    #[must_use]
    pub fn with_config(reader: R, config: ReaderConfig) -> Self {
        Self {
            reader,
            scan: LineBuffer::new(&config),
            config,
        }
    }

    /// Advance to the next line. See
    /// [`LineReader::read_line`](crate::LineReader::read_line) for the
    /// result table.
    ///
    /// # Errors
    ///
    /// [`ReadError::LineTooLong`] past the ceiling, [`ReadError::Io`] when
    /// the source fails.
    pub async fn read_line(&mut self) -> Result<Option<Line>, ReadError> {
        loop {
            if let Some(result) = self.scan.poll_line() {
                return result;
            }
            let filled = match self.reader.read(self.scan.spare()).await {
                Ok(n) => n,
                Err(e) => {
                    self.scan.discard_pending();
                    return Err(ReadError::Io(e));
                }
            };
            if filled == 0 {
                return Ok(self.scan.finish());
            }
            self.scan.commit(filled);
        }
    }

    #[must_use]
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
