//! Redaction pipeline driven end-to-end through the line reader.

use insta::assert_snapshot;
use redline_reader::{ReadError, ReaderConfig};
use redline_redact::{LiteralRedactor, RedactError};
use redline_tests::{Trickle, log_fixture};

fn redact(redactor: &LiteralRedactor, input: &[u8], step: usize) -> Vec<u8> {
    let mut out = Vec::new();
    redactor.redact(Trickle::new(input, step), &mut out).unwrap();
    out
}

#[test]
fn config_file_secret_is_masked() {
    let input = b"user: admin\npassword: hunter2\nretries: 3";
    let out = redact(&LiteralRedactor::new("hunter2"), input, 5);
    assert_snapshot!(String::from_utf8(out).unwrap(), @r"
    user: admin
    password: ***HIDDEN***
    retries: 3
    ");
}

#[test]
fn output_independent_of_read_fragmentation() {
    let input = log_fixture(50);
    let redactor = LiteralRedactor::new("req=1").with_mask("req=#");
    let whole = redact(&redactor, &input, usize::MAX);
    for step in [1, 3, 64] {
        assert_eq!(redact(&redactor, &input, step), whole, "step {step}");
    }
}

#[test]
fn report_lines_are_one_based() {
    let mut out = Vec::new();
    let report = LiteralRedactor::new("k")
        .with_name("key")
        .redact(&b"a\nk\nb\nkk"[..], &mut out)
        .unwrap();

    let lines: Vec<usize> = report.redactions.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![2, 4]);
    assert_eq!(report.total_occurrences(), 3);
    assert_eq!(report.lines_read, 4);
}

#[test]
fn binary_file_without_newline_is_not_given_one() {
    let input: Vec<u8> = (0u8..=9).chain(11..=255).collect();
    let out = redact(&LiteralRedactor::new("absent"), &input, 13);
    assert_eq!(out, input);
}

#[test]
fn oversize_line_surfaces_as_read_error() {
    let redactor = LiteralRedactor::new("x")
        .with_reader_config(ReaderConfig::default().with_max_line_size(16));
    let mut out = Vec::new();
    let err = redactor
        .redact(&vec![b'y'; 17][..], &mut out)
        .unwrap_err();
    assert!(matches!(err, RedactError::Read(ReadError::LineTooLong { limit: 16 })));
    assert!(out.is_empty());
}
