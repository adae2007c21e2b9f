// Format sanity check for text sources
//
// A dictionary is expected to hold one word per line, so its line count
// equals its word count. A large deviation usually means the input and the
// dictionary were swapped on the command line. The check is a heuristic: a
// dictionary with several words per line is still a valid dictionary.

use std::fmt;

/// Ratio of lines to words that a one-word-per-line source has.
pub const EXPECTED_LINE_WORD_RATIO: f64 = 1.0;

const RATIO_TOLERANCE: f64 = 1e-9;

/// How a failed format check is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatCheck {
    /// Do not inspect sources.
    Off,
    /// Log a warning and carry on.
    #[default]
    Warn,
    /// Reject the source.
    Strict,
}

/// Line and word counts of a text source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatReport {
    /// Number of lines. A trailing newline does not start an extra line.
    pub lines: usize,
    /// Number of whitespace-separated words.
    pub words: usize,
}

impl FormatReport {
    /// Lines divided by words, or `None` for a source without words.
    pub fn ratio(&self) -> Option<f64> {
        if self.words == 0 {
            None
        } else {
            Some(self.lines as f64 / self.words as f64)
        }
    }

    /// Whether the ratio matches `expected`. Sources without words never do.
    pub fn matches_ratio(&self, expected: f64) -> bool {
        self.ratio()
            .is_some_and(|ratio| (ratio - expected).abs() <= RATIO_TOLERANCE)
    }

    /// Whether the source looks like one word per line.
    pub fn is_one_word_per_line(&self) -> bool {
        self.matches_ratio(EXPECTED_LINE_WORD_RATIO)
    }
}

impl fmt::Display for FormatReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ratio() {
            Some(ratio) => write!(
                f,
                "{} lines, {} words (ratio {ratio:.3})",
                self.lines, self.words
            ),
            None => write!(f, "{} lines, no words", self.lines),
        }
    }
}

/// Count the lines and words of `text`.
pub fn inspect_format(text: &str) -> FormatReport {
    let mut report = FormatReport::default();
    for line in text.lines() {
        report.lines += 1;
        report.words += line.split_whitespace().count();
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_word_per_line() {
        let report = inspect_format("this\nis\na\ntest\n");
        assert_eq!(report, FormatReport { lines: 4, words: 4 });
        assert_eq!(report.ratio(), Some(1.0));
        assert!(report.is_one_word_per_line());
    }

    #[test]
    fn missing_trailing_newline_counts_the_same() {
        assert_eq!(inspect_format("a\nb"), inspect_format("a\nb\n"));
    }

    #[test]
    fn crlf_line_endings() {
        let report = inspect_format("a\r\nb\r\n");
        assert_eq!(report, FormatReport { lines: 2, words: 2 });
    }

    #[test]
    fn prose_is_not_one_word_per_line() {
        let report = inspect_format("Thiss is a tst of the systm.\n");
        assert_eq!(report, FormatReport { lines: 1, words: 7 });
        assert!(!report.is_one_word_per_line());
    }

    #[test]
    fn blank_lines_skew_the_ratio() {
        let report = inspect_format("a\n\nb\n");
        assert_eq!(report, FormatReport { lines: 3, words: 2 });
        assert_eq!(report.ratio(), Some(1.5));
        assert!(!report.is_one_word_per_line());
        assert!(report.matches_ratio(1.5));
    }

    #[test]
    fn empty_text_has_no_ratio() {
        let report = inspect_format("");
        assert_eq!(report, FormatReport { lines: 0, words: 0 });
        assert_eq!(report.ratio(), None);
        assert!(!report.is_one_word_per_line());
    }

    #[test]
    fn whitespace_only_text_has_no_ratio() {
        let report = inspect_format("\n  \n");
        assert_eq!(report.lines, 2);
        assert_eq!(report.ratio(), None);
    }

    #[test]
    fn display() {
        assert_eq!(
            inspect_format("a b\n").to_string(),
            "1 lines, 2 words (ratio 0.500)"
        );
        assert_eq!(inspect_format("").to_string(), "0 lines, no words");
    }
}
