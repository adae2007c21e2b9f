// Token and TokenSet public API types

use std::borrow::Borrow;
use std::fmt;

use hashbrown::HashSet;

use crate::character::{is_all_digits, is_word_char, lower_word};

/// Error returned when a string is not a valid token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token is empty")]
    Empty,
    #[error("character {ch:?} at byte {pos} is outside the word alphabet")]
    InvalidChar { ch: char, pos: usize },
}

/// Kind of a token, derived from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Contains at least one letter or underscore.
    Word,
    /// Digits only (`^[0-9]+$`).
    Number,
}

impl TokenKind {
    /// Classify a run of word characters.
    pub fn of(text: &str) -> Self {
        if is_all_digits(text) {
            TokenKind::Number
        } else {
            TokenKind::Word
        }
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A normalized word token: a non-empty run of `[a-z0-9_]`.
///
/// Tokens are lowercase by construction, so two tokens are equal exactly when
/// their source runs are equal ignoring ASCII case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Token(String);

impl Token {
    /// Validate and normalize `text` into a token.
    ///
    /// Uppercase ASCII letters are lowercased. Any character outside the
    /// word alphabet is an error.
    pub fn new(text: &str) -> Result<Self, TokenError> {
        if text.is_empty() {
            return Err(TokenError::Empty);
        }
        if let Some((pos, ch)) = text.char_indices().find(|&(_, c)| !is_word_char(c)) {
            return Err(TokenError::InvalidChar { ch, pos });
        }
        Ok(Self(lower_word(text)))
    }

    /// Build a token from a run the tokenizer already delimited.
    ///
    /// # Panics
    ///
    /// Panics if `run` is empty or holds a character outside the word
    /// alphabet. Use [`Token::new`] for text that is not a delimited run.
    pub fn from_word_run(run: &str) -> Self {
        assert!(
            !run.is_empty() && run.chars().all(is_word_char),
            "not a word run: {run:?}"
        );
        Self(lower_word(run))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes (equal to the character count for the ASCII alphabet).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn kind(&self) -> TokenKind {
        TokenKind::of(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Token {
    type Error = TokenError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Token::new(text)
    }
}

// ---------------------------------------------------------------------------
// TokenSet
// ---------------------------------------------------------------------------

/// The distinct tokens extracted from one text source.
///
/// Duplicates collapse to one entry; iteration order is unspecified. Use
/// [`TokenSet::sorted`] where a reproducible order matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: HashSet<Token>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: HashSet::with_capacity(capacity),
        }
    }

    /// Add a token. Returns `true` if it was not present yet.
    pub fn insert(&mut self, token: Token) -> bool {
        self.tokens.insert(token)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.tokens.contains(word)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Tokens sorted by value.
    pub fn sorted(&self) -> Vec<&Token> {
        let mut tokens: Vec<&Token> = self.tokens.iter().collect();
        tokens.sort_unstable();
        tokens
    }
}

impl FromIterator<Token> for TokenSet {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl Extend<Token> for TokenSet {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        self.tokens.extend(iter);
    }
}

impl IntoIterator for TokenSet {
    type Item = Token;
    type IntoIter = hashbrown::hash_set::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a Token;
    type IntoIter = hashbrown::hash_set::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Token tests --

    #[test]
    fn token_new_lowercases() {
        let tok = Token::new("Dog").unwrap();
        assert_eq!(tok.as_str(), "dog");
        assert_eq!(tok.len(), 3);
    }

    #[test]
    fn token_new_rejects_empty() {
        assert_eq!(Token::new(""), Err(TokenError::Empty));
    }

    #[test]
    fn token_new_rejects_separator() {
        assert_eq!(
            Token::new("don't"),
            Err(TokenError::InvalidChar { ch: '\'', pos: 3 })
        );
        assert_eq!(
            Token::new("two words"),
            Err(TokenError::InvalidChar { ch: ' ', pos: 3 })
        );
    }

    #[test]
    fn token_new_rejects_non_ascii_letter() {
        assert!(matches!(
            Token::new("k\u{00E4}si"),
            Err(TokenError::InvalidChar { ch: '\u{00E4}', pos: 1 })
        ));
    }

    #[test]
    fn token_from_word_run() {
        let tok = Token::from_word_run("SYSTM");
        assert_eq!(tok.to_string(), "systm");
    }

    #[test]
    #[should_panic(expected = "not a word run")]
    fn token_from_word_run_rejects_separator() {
        let _ = Token::from_word_run("Hello World");
    }

    #[test]
    #[should_panic(expected = "not a word run")]
    fn token_from_word_run_rejects_empty() {
        let _ = Token::from_word_run("");
    }

    #[test]
    fn token_kind() {
        assert_eq!(Token::new("123").unwrap().kind(), TokenKind::Number);
        assert_eq!(Token::new("cat9").unwrap().kind(), TokenKind::Word);
        assert_eq!(Token::new("1st").unwrap().kind(), TokenKind::Word);
        assert_eq!(Token::new("_").unwrap().kind(), TokenKind::Word);
    }

    #[test]
    fn token_equality_ignores_source_case() {
        assert_eq!(Token::new("Dog").unwrap(), Token::new("dOG").unwrap());
    }

    #[test]
    fn token_ordering_is_by_value() {
        let mut toks = vec![
            Token::new("tst").unwrap(),
            Token::new("systm").unwrap(),
            Token::new("thiss").unwrap(),
        ];
        toks.sort();
        let texts: Vec<&str> = toks.iter().map(Token::as_str).collect();
        assert_eq!(texts, ["systm", "thiss", "tst"]);
    }

    #[test]
    fn token_try_from() {
        let tok: Token = "Word".try_into().unwrap();
        assert_eq!(tok.as_str(), "word");
    }

    // -- TokenSet tests --

    #[test]
    fn token_set_collapses_duplicates() {
        let mut set = TokenSet::new();
        assert!(set.insert(Token::new("a").unwrap()));
        assert!(!set.insert(Token::new("A").unwrap()));
        assert_eq!(set.len(), 1);
        assert!(set.contains("a"));
        assert!(!set.contains("A"));
    }

    #[test]
    fn token_set_empty() {
        let set = TokenSet::new();
        assert!(set.is_empty());
        assert!(set.sorted().is_empty());
    }

    #[test]
    fn token_set_sorted() {
        let set: TokenSet = ["of", "a", "is"]
            .into_iter()
            .map(Token::from_word_run)
            .collect();
        let sorted: Vec<&str> = set.sorted().into_iter().map(Token::as_str).collect();
        assert_eq!(sorted, ["a", "is", "of"]);
    }
}
