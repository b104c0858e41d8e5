#![no_main]

use libfuzzer_sys::fuzz_target;
use redline_reader::LineReader;

// Fuzz target: default-config line reader over raw bytes.
//
// Writing every line back with `write_to` must reproduce the input
// exactly, and only the last line may lack a newline.
fuzz_target!(|data: &[u8]| {
    let mut reader = LineReader::new(data);
    let mut out = Vec::with_capacity(data.len());
    let mut saw_unterminated = false;

    while let Some(line) = reader.read_line().unwrap() {
        assert!(!saw_unterminated, "line after an unterminated line");
        saw_unterminated = !line.had_newline();
        line.write_to(&mut out).unwrap();
    }

    assert_eq!(out, data);
    assert!(reader.read_line().unwrap().is_none());
});
