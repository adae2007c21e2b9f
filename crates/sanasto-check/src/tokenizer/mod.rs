// Tokenizer: raw text to lowercase word tokens
//
// A word is a maximal run of `[A-Za-z0-9_]`. Every other character,
// including non-ASCII letters, separates words. The alphabet is ASCII, so
// scanning bytes always splits on char boundaries.

use sanasto_core::character::get_char_type;
use sanasto_core::{Token, TokenKind, TokenSet};

/// One maximal run of word characters, as it appears in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan<'a> {
    /// The run, with its original case.
    pub text: &'a str,
    /// Byte offset of the run in the source text.
    pub start: usize,
}

impl<'a> WordSpan<'a> {
    /// Byte offset one past the end of the run.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn kind(&self) -> TokenKind {
        TokenKind::of(self.text)
    }

    /// The normalized token for this run.
    pub fn to_token(&self) -> Token {
        Token::from_word_run(self.text)
    }
}

/// Iterator over the word runs of a text. See [`word_spans`].
#[derive(Debug, Clone)]
pub struct WordSpans<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for WordSpans<'a> {
    type Item = WordSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        let len = bytes.len();

        // Skip separators
        while self.pos < len && !get_char_type(bytes[self.pos] as char).is_word() {
            self.pos += 1;
        }
        if self.pos == len {
            return None;
        }

        let start = self.pos;
        while self.pos < len && get_char_type(bytes[self.pos] as char).is_word() {
            self.pos += 1;
        }

        Some(WordSpan {
            text: &self.text[start..self.pos],
            start,
        })
    }
}

/// Iterate over the maximal runs of word characters in `text`, in order.
///
/// Duplicates are reported each time they occur; use [`tokenize`] for the
/// distinct normalized tokens.
pub fn word_spans(text: &str) -> WordSpans<'_> {
    WordSpans { text, pos: 0 }
}

/// Extract the distinct lowercase tokens of `text`.
///
/// Empty input gives an empty set.
pub fn tokenize(text: &str) -> TokenSet {
    word_spans(text).map(|span| span.to_token()).collect()
}
