// SpellChecker: top-level integration point
//
// Owns the vocabulary built from one dictionary source and the options that
// control classification. Construction (build phase) and checking (query
// phase) are separate calls; checking only borrows the checker immutably.

use std::fmt;
use std::time::Instant;

use log::{debug, info, warn};
use sanasto_core::{Token, TokenSet};
use sanasto_trie::VocabularyIndex;

use crate::classifier::{Classification, NumberPolicy, classify};
use crate::format::{EXPECTED_LINE_WORD_RATIO, FormatCheck, inspect_format};
use crate::tokenizer::tokenize;

/// Which source a check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRole {
    Input,
    Dictionary,
}

impl fmt::Display for SourceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRole::Input => f.write_str("input"),
            SourceRole::Dictionary => f.write_str("dictionary"),
        }
    }
}

/// Error type for checker construction and checking.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckError {
    /// The source does not look like one word per line.
    #[error(
        "{role} is not formatted one word per line: {lines} lines, {words} words \
         (ratio {ratio:.3}, expected {expected})"
    )]
    FormatMismatch {
        role: SourceRole,
        lines: usize,
        words: usize,
        ratio: f64,
        expected: f64,
    },

    /// The source holds no words at all.
    #[error("{role} contains no words")]
    EmptySource { role: SourceRole },
}

/// Options controlling how sources are inspected and tokens classified.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOptions {
    /// Which tokens are treated as numbers and never reported.
    pub number_policy: NumberPolicy,
    /// How a failed format check is handled.
    pub format_check: FormatCheck,
    /// Expected lines-to-words ratio of checked sources.
    pub expected_ratio: f64,
    /// Also run the format check on input text, not only on the dictionary.
    pub check_input_format: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            number_policy: NumberPolicy::default(),
            format_check: FormatCheck::default(),
            expected_ratio: EXPECTED_LINE_WORD_RATIO,
            check_input_format: false,
        }
    }
}

impl CheckOptions {
    /// Run the format check on `text` according to these options.
    ///
    /// Under [`FormatCheck::Warn`] problems are logged and `Ok` is returned.
    pub fn check_format(&self, text: &str, role: SourceRole) -> Result<(), CheckError> {
        if self.format_check == FormatCheck::Off {
            return Ok(());
        }

        let report = inspect_format(text);
        let error = match report.ratio() {
            None => CheckError::EmptySource { role },
            Some(_) if report.matches_ratio(self.expected_ratio) => {
                debug!("{role} format ok: {report}");
                return Ok(());
            }
            Some(ratio) => CheckError::FormatMismatch {
                role,
                lines: report.lines,
                words: report.words,
                ratio,
                expected: self.expected_ratio,
            },
        };

        match self.format_check {
            FormatCheck::Strict => Err(error),
            _ => {
                warn!("{error}");
                Ok(())
            }
        }
    }
}

/// Spell checker bound to one dictionary.
///
/// ```
/// use sanasto_check::SpellChecker;
///
/// let checker = SpellChecker::from_dictionary_text("this\nis\na\ntest\n", Default::default())?;
/// let unknown = checker.check_text("This is a tst.")?;
/// assert_eq!(unknown[0].as_str(), "tst");
/// # Ok::<(), sanasto_check::CheckError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SpellChecker {
    vocabulary: VocabularyIndex,
    options: CheckOptions,
}

impl SpellChecker {
    /// Build a checker from the raw text of a dictionary.
    ///
    /// The dictionary is format-checked, tokenized like any other text and
    /// loaded into the vocabulary index.
    pub fn from_dictionary_text(text: &str, options: CheckOptions) -> Result<Self, CheckError> {
        let start = Instant::now();
        options.check_format(text, SourceRole::Dictionary)?;
        debug!("dictionary format check took {:?}", start.elapsed());

        let start = Instant::now();
        let tokens = tokenize(text);
        let checker = Self::from_tokens(&tokens, options);
        info!(
            "built vocabulary of {} words ({} nodes) in {:?}",
            checker.vocabulary.len(),
            checker.vocabulary.node_count(),
            start.elapsed()
        );
        Ok(checker)
    }

    /// Build a checker from an already tokenized dictionary.
    pub fn from_tokens(tokens: &TokenSet, options: CheckOptions) -> Self {
        Self {
            vocabulary: VocabularyIndex::from_tokens(tokens),
            options,
        }
    }

    /// Wrap an existing vocabulary.
    pub fn from_vocabulary(vocabulary: VocabularyIndex, options: CheckOptions) -> Self {
        Self {
            vocabulary,
            options,
        }
    }

    pub fn vocabulary(&self) -> &VocabularyIndex {
        &self.vocabulary
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    pub fn set_number_policy(&mut self, policy: NumberPolicy) {
        self.options.number_policy = policy;
    }

    /// Check a single word.
    ///
    /// The word is lowercased first. Numbers exempt under the current policy
    /// are accepted; words containing characters outside the word alphabet
    /// are rejected.
    pub fn spell(&self, word: &str) -> bool {
        match Token::new(word) {
            Ok(token) => {
                self.options.number_policy.exempts(&token)
                    || self.vocabulary.contains(token.as_str())
            }
            Err(_) => false,
        }
    }

    /// Classify the distinct tokens of an already tokenized input.
    pub fn classify_tokens(&self, input: &TokenSet) -> Classification {
        let start = Instant::now();
        let result = classify(input, &self.vocabulary, self.options.number_policy);
        info!(
            "classified {} distinct tokens ({} unknown, {} numbers skipped) in {:?}",
            input.len(),
            result.unknown.len(),
            result.numbers_skipped,
            start.elapsed()
        );
        result
    }

    /// Tokenize `text` and classify its distinct tokens.
    pub fn classify_text(&self, text: &str) -> Result<Classification, CheckError> {
        if self.options.check_input_format {
            self.options.check_format(text, SourceRole::Input)?;
        }
        Ok(self.classify_tokens(&tokenize(text)))
    }

    /// The sorted distinct tokens of `text` that the dictionary lacks.
    pub fn check_text(&self, text: &str) -> Result<Vec<Token>, CheckError> {
        self.classify_text(text).map(|result| result.unknown)
    }
}
