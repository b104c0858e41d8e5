use std::io::Read;
use std::iter::FusedIterator;

use crate::config::ReaderConfig;
use crate::error::ReadError;
use crate::line::Line;
use crate::scan::LineBuffer;

/// Blocking, binary-safe line reader with a hard per-line ceiling.
///
/// Wraps any [`Read`] source and yields one [`Line`] per call to
/// [`read_line`](Self::read_line). Bytes are passed through verbatim;
/// only `\n` (0x0A) is treated specially.
///
/// ```text
///   read_line() result                    meaning
///   ─────────────────────────────────────────────────────────────────────
///   Ok(Some(line)), had_newline = true     line ended with `\n`
///   Ok(Some(line)), had_newline = false    final bytes; stream is over
///   Ok(None)                               end-of-stream, nothing left
///   Err(ReadError::LineTooLong { .. })     ceiling crossed (terminal)
///   Err(ReadError::Io(_))                  source failed
/// ```
///
/// Once `Ok(None)` or `LineTooLong` has been returned, every later call
/// returns the same thing without touching the source again.
///
/// # Example
///
/// ```rust
/// use redline_reader::LineReader;
///
/// let mut reader = LineReader::new(&b"alpha\nbeta"[..]);
/// let mut out = Vec::new();
/// while let Some(line) = reader.read_line().unwrap() {
///     line.write_to(&mut out).unwrap();
/// }
/// assert_eq!(out, b"alpha\nbeta");
/// ```
pub struct LineReader<R> {
    inner: R,
    scan: LineBuffer,
    config: ReaderConfig,
}

impl<R: Read> LineReader<R> {
    /// Create a reader with [`ReaderConfig::default`].
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, ReaderConfig::default())
    }

    #[must_use]
    pub fn with_config(inner: R, config: ReaderConfig) -> Self {
        Self {
            inner,
            scan: LineBuffer::new(&config),
            config,
        }
    }

    /// Advance to the next line.
    ///
    /// Blocks on the source as needed. No retries are performed; an
    /// [`std::io::ErrorKind::Interrupted`] read is returned to the caller
    /// like any other I/O error.
    ///
    /// # Errors
    ///
    /// - [`ReadError::LineTooLong`] when the current line exceeds
    ///   `max_line_size` bytes. No partial content is returned.
    /// - [`ReadError::Io`] when the source fails. The partially read line
    ///   is discarded.
    pub fn read_line(&mut self) -> Result<Option<Line>, ReadError> {
        loop {
            if let Some(result) = self.scan.poll_line() {
                return result;
            }
            let filled = match self.inner.read(self.scan.spare()) {
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

    /// Consume the reader and iterate over its lines.
    #[must_use]
    pub fn lines(self) -> Lines<R> {
        Lines {
            reader: self,
            done: false,
        }
    }
}

impl<R> LineReader<R> {
    #[must_use]
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    #[must_use]
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Reading from the source directly skips bytes the reader may still
    /// hold in its buffer.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwrap the source. Buffered but unreturned bytes are lost.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Iterator over the lines of a [`LineReader`].
///
/// Yields `Ok(line)` until end-of-stream, or a single `Err` after which
/// the iterator is exhausted. I/O errors also end iteration.
pub struct Lines<R> {
    reader: LineReader<R>,
    done: bool,
}

impl<R: Read> Iterator for Lines<R> {
    type Item = Result<Line, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> FusedIterator for Lines<R> {}
