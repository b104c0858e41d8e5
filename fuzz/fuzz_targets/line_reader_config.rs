#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use redline_reader::{LineReader, ReaderConfig};

#[derive(Arbitrary, Debug)]
struct Input {
    max_line_size: u8,
    chunk_size: u8,
    data: Vec<u8>,
}

// Fuzz target: small ceilings and chunk sizes.
//
// Catches bugs in:
// - Buffer compaction across chunk boundaries
// - Ceiling checks when the delimiter and the overflow share a chunk
// - Sticky terminal states
fuzz_target!(|input: Input| {
    let limit = usize::from(input.max_line_size);
    let config = ReaderConfig::default()
        .with_max_line_size(limit)
        .with_chunk_size(usize::from(input.chunk_size));
    let mut reader = LineReader::with_config(&input.data[..], config);

    let mut expected = input.data.split(|&b| b == b'\n').peekable();
    loop {
        match reader.read_line() {
            Ok(Some(line)) => {
                let want = expected.next().unwrap();
                assert_eq!(line.as_bytes(), want);
                assert!(line.len() <= limit);
                assert_eq!(line.had_newline(), expected.peek().is_some());
            }
            Ok(None) => {
                // Only an empty tail (input ended with `\n` or was empty) may remain.
                assert!(expected.next().is_none_or(<[u8]>::is_empty));
                assert!(reader.read_line().unwrap().is_none());
                break;
            }
            Err(e) => {
                assert!(e.is_line_too_long());
                assert!(expected.next().unwrap().len() > limit);
                assert!(reader.read_line().unwrap_err().is_line_too_long());
                break;
            }
        }
    }
});
