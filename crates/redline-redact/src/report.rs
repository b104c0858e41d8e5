use serde::Serialize;

/// A single line that a redactor changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Redaction {
    /// Name of the redactor that produced the change.
    pub redactor: String,
    /// 1-based line number in the input.
    pub line: usize,
    /// Number of pattern occurrences replaced on this line.
    pub occurrences: usize,
    /// `original_len - redacted_len`. Negative when the mask is longer
    /// than the text it replaced.
    pub characters_removed: i64,
}

/// Summary of one redaction pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RedactionReport {
    /// Lines read from the input, including a final unterminated line.
    pub lines_read: usize,
    pub redactions: Vec<Redaction>,
}

impl RedactionReport {
    /// Total replaced occurrences across all lines.
    #[must_use]
    pub fn total_occurrences(&self) -> usize {
        self.redactions.iter().map(|r| r.occurrences).sum()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.redactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_over_lines() {
        let report = RedactionReport {
            lines_read: 3,
            redactions: vec![
                Redaction {
                    redactor: "a".into(),
                    line: 1,
                    occurrences: 2,
                    characters_removed: 4,
                },
                Redaction {
                    redactor: "a".into(),
                    line: 3,
                    occurrences: 1,
                    characters_removed: -2,
                },
            ],
        };
        assert_eq!(report.total_occurrences(), 3);
        assert!(!report.is_clean());
        assert!(RedactionReport::default().is_clean());
    }
}
