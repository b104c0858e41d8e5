use std::io::{self, Write};

/// One line produced by a reader.
///
/// `bytes` never contains the terminating `\n`. `had_newline` tells a
/// delimiter-terminated line apart from the final unterminated bytes of a
/// stream, so consumers can reproduce the input structure exactly:
///
/// ```text
///   input            lines
///   "a\nb\n"   →    ("a", true)  ("b", true)
///   "a\nb"     →    ("a", true)  ("b", false)
///   "\n"       →    ("",  true)
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Line {
    bytes: Vec<u8>,
    had_newline: bool,
}

impl Line {
    #[must_use]
    pub fn new(bytes: Vec<u8>, had_newline: bool) -> Self {
        Self { bytes, had_newline }
    }

    /// Line content, without the delimiter.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Whether a `\n` terminated this line. Only the last line of a
    /// stream can be unterminated.
    #[must_use]
    pub fn had_newline(&self) -> bool {
        self.had_newline
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the content followed by `\n` only if the line originally
    /// ended with one.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.bytes)?;
        if self.had_newline {
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for Line {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Line> for Vec<u8> {
    fn from(line: Line) -> Self {
        line.bytes
    }
}
