#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use redline_redact::LiteralRedactor;

#[derive(Arbitrary, Debug)]
struct Input {
    pattern: Vec<u8>,
    mask: Vec<u8>,
    data: Vec<u8>,
}

// Fuzz target: literal redaction keeps the newline structure.
//
// Masks without `\n` must never change the number of newlines, and a
// clean report must mean byte-identical output.
fuzz_target!(|input: Input| {
    if input.mask.contains(&b'\n') {
        return;
    }
    let mut out = Vec::new();
    let report = LiteralRedactor::new(input.pattern)
        .with_mask(input.mask)
        .redact(&input.data[..], &mut out)
        .unwrap();

    let newlines = |b: &[u8]| b.iter().filter(|&&c| c == b'\n').count();
    assert_eq!(newlines(&out), newlines(&input.data));
    if report.is_clean() {
        assert_eq!(out, input.data);
    }
});
