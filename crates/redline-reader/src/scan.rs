use crate::config::ReaderConfig;
use crate::error::ReadError;
use crate::line::Line;

/// Scanning core shared by the blocking and async readers.
///
/// The readers own the source and only move bytes into [`spare`]; every
/// decision about where a line ends, when the ceiling is crossed, and
/// what happens at end-of-stream lives here.
///
/// Buffer layout:
///
/// ```text
///   buf: [ consumed | current line ............ | spare ........ ]
///        0          start          scanned      end             buf.len()
///                   └── no `\n` in start..scanned
/// ```
///
/// [`spare`]: LineBuffer::spare
pub(crate) struct LineBuffer {
    buf: Vec<u8>,
    start: usize,
    scanned: usize,
    end: usize,
    state: ScanState,
    max_line_size: usize,
    chunk_size: usize,
}

/// ```text
///   Active ──line──▶ Active
///   Active ──EOF───▶ Exhausted   (terminal)
///   Active ──cap───▶ Failed      (terminal)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScanState {
    Active,
    Exhausted,
    Failed,
}

impl LineBuffer {
    pub(crate) fn new(config: &ReaderConfig) -> Self {
        Self {
            buf: Vec::new(),
            start: 0,
            scanned: 0,
            end: 0,
            state: ScanState::Active,
            max_line_size: config.max_line_size,
            chunk_size: config.effective_chunk_size(),
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> ScanState {
        self.state
    }

    /// Produce a result from buffered bytes alone.
    ///
    /// Returns `None` when the caller must read more input before an
    /// answer exists.
    pub(crate) fn poll_line(&mut self) -> Option<Result<Option<Line>, ReadError>> {
        match self.state {
            ScanState::Active => {}
            ScanState::Exhausted => return Some(Ok(None)),
            ScanState::Failed => return Some(Err(self.too_long())),
        }

        if let Some(offset) = memchr::memchr(b'\n', &self.buf[self.scanned..self.end]) {
            let delim = self.scanned + offset;
            if delim - self.start > self.max_line_size {
                return Some(Err(self.fail()));
            }
            let bytes = self.buf[self.start..delim].to_vec();
            self.start = delim + 1;
            self.scanned = self.start;
            return Some(Ok(Some(Line::new(bytes, true))));
        }

        self.scanned = self.end;
        if self.pending() > self.max_line_size {
            return Some(Err(self.fail()));
        }
        None
    }

    /// Writable room for the next read. Call [`commit`](Self::commit) with
    /// the number of bytes the source filled.
    pub(crate) fn spare(&mut self) -> &mut [u8] {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.scanned -= self.start;
            self.start = 0;
        }
        // Everything buffered is now pending. Reading `max + 1 - pending`
        // bytes either finds the delimiter or proves the line oversize, so
        // the buffer never grows past `max_line_size + 1`.
        let window = self
            .chunk_size
            .min(
                self.max_line_size
                    .saturating_add(1)
                    .saturating_sub(self.pending()),
            )
            .max(1);
        let wanted = self.end.saturating_add(window);
        if self.buf.len() < wanted {
            self.buf.resize(wanted, 0);
        }
        &mut self.buf[self.end..wanted]
    }

    pub(crate) fn commit(&mut self, filled: usize) {
        debug_assert!(self.end + filled <= self.buf.len());
        self.end += filled;
    }

    /// The source reported end-of-stream.
    pub(crate) fn finish(&mut self) -> Option<Line> {
        if self.state != ScanState::Active {
            return None;
        }
        let line = (self.pending() > 0)
            .then(|| Line::new(self.buf[self.start..self.end].to_vec(), false));
        tracing::debug!(trailing = line.as_ref().map_or(0, Line::len), "end of stream");
        self.state = ScanState::Exhausted;
        self.release();
        line
    }

    /// The source failed mid-line; drop what was accumulated so it is
    /// never returned alongside or after the error.
    pub(crate) fn discard_pending(&mut self) {
        self.start = self.end;
        self.scanned = self.end;
    }

    fn pending(&self) -> usize {
        self.end - self.start
    }

    fn fail(&mut self) -> ReadError {
        tracing::warn!(limit = self.max_line_size, "line exceeds maximum size");
        self.state = ScanState::Failed;
        self.release();
        self.too_long()
    }

    fn too_long(&self) -> ReadError {
        ReadError::LineTooLong {
            limit: self.max_line_size,
        }
    }

    fn release(&mut self) {
        self.buf = Vec::new();
        self.start = 0;
        self.scanned = 0;
        self.end = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(max_line_size: usize, chunk_size: usize) -> LineBuffer {
        LineBuffer::new(
            &ReaderConfig::default()
                .with_max_line_size(max_line_size)
                .with_chunk_size(chunk_size),
        )
    }

    /// Copy `data` into the buffer the way a reader would, one spare
    /// window at a time.
    fn feed(scan: &mut LineBuffer, mut data: &[u8]) {
        while !data.is_empty() {
            let spare = scan.spare();
            let n = spare.len().min(data.len());
            spare[..n].copy_from_slice(&data[..n]);
            scan.commit(n);
            data = &data[n..];
        }
    }

    #[test]
    fn needs_input_when_empty() {
        let mut scan = buffer(16, 4);
        assert!(scan.poll_line().is_none());
        assert_eq!(scan.state(), ScanState::Active);
    }

    #[test]
    fn yields_every_buffered_line_before_asking_for_more() {
        let mut scan = buffer(16, 64);
        feed(&mut scan, b"a\n\nbc\nrest");

        let first = scan.poll_line().unwrap().unwrap().unwrap();
        assert_eq!(first, Line::new(b"a".to_vec(), true));
        let second = scan.poll_line().unwrap().unwrap().unwrap();
        assert_eq!(second, Line::new(Vec::new(), true));
        let third = scan.poll_line().unwrap().unwrap().unwrap();
        assert_eq!(third, Line::new(b"bc".to_vec(), true));
        assert!(scan.poll_line().is_none());

        let last = scan.finish().unwrap();
        assert_eq!(last, Line::new(b"rest".to_vec(), false));
        assert_eq!(scan.state(), ScanState::Exhausted);
    }

    #[test]
    fn compaction_keeps_partial_line_intact() {
        let mut scan = buffer(16, 4);
        feed(&mut scan, b"ab\ncd");
        assert_eq!(scan.poll_line().unwrap().unwrap().unwrap().as_bytes(), b"ab");
        assert!(scan.poll_line().is_none());

        feed(&mut scan, b"ef\n");
        assert_eq!(scan.poll_line().unwrap().unwrap().unwrap().as_bytes(), b"cdef");
    }

    #[test]
    fn delimited_line_longer_than_limit_fails() {
        let mut scan = buffer(3, 64);
        feed(&mut scan, b"abcd\n");
        let err = scan.poll_line().unwrap().unwrap_err();
        assert!(err.is_line_too_long());
        assert_eq!(scan.state(), ScanState::Failed);
    }

    #[test]
    fn line_at_limit_is_accepted() {
        let mut scan = buffer(3, 64);
        feed(&mut scan, b"abc\n");
        assert_eq!(scan.poll_line().unwrap().unwrap().unwrap().as_bytes(), b"abc");
    }

    #[test]
    fn undelimited_run_past_limit_fails_without_delimiter() {
        let mut scan = buffer(3, 2);
        feed(&mut scan, b"ab");
        assert!(scan.poll_line().is_none());
        feed(&mut scan, b"cd");
        assert!(scan.poll_line().unwrap().unwrap_err().is_line_too_long());
    }

    #[test]
    fn read_window_never_outgrows_the_ceiling() {
        let mut scan = buffer(4, crate::DEFAULT_CHUNK_SIZE);
        assert_eq!(scan.spare().len(), 5);
        feed(&mut scan, b"ab");
        assert!(scan.poll_line().is_none());
        assert_eq!(scan.spare().len(), 3);
        feed(&mut scan, b"cd\n");
        assert_eq!(scan.poll_line().unwrap().unwrap().unwrap().as_bytes(), b"abcd");
        assert!(scan.buf.len() <= 5);
    }

    #[test]
    fn huge_chunk_size_does_not_overflow() {
        let mut scan = buffer(8, usize::MAX);
        assert_eq!(scan.spare().len(), 9);

        let mut unbounded = buffer(usize::MAX, 4);
        assert_eq!(unbounded.spare().len(), 4);
    }

    #[test]
    fn failed_state_is_sticky() {
        let mut scan = buffer(1, 8);
        feed(&mut scan, b"xyz");
        assert!(scan.poll_line().unwrap().is_err());
        assert!(scan.poll_line().unwrap().unwrap_err().is_line_too_long());
        assert!(scan.finish().is_none());
        assert!(scan.poll_line().unwrap().is_err());
    }

    #[test]
    fn exhausted_state_is_sticky() {
        let mut scan = buffer(8, 8);
        assert!(scan.finish().is_none());
        assert!(matches!(scan.poll_line(), Some(Ok(None))));
        assert!(matches!(scan.poll_line(), Some(Ok(None))));
    }

    #[test]
    fn discard_drops_partial_line() {
        let mut scan = buffer(8, 8);
        feed(&mut scan, b"partial");
        assert!(scan.poll_line().is_none());
        scan.discard_pending();
        feed(&mut scan, b"next\n");
        assert_eq!(scan.poll_line().unwrap().unwrap().unwrap().as_bytes(), b"next");
    }
}
