// Classifier: partition input tokens into known and unknown
//
// Every distinct input token is looked up once. Numbers are never
// misspellings: tokens exempted by the NumberPolicy are counted and skipped
// before any lookup.

use sanasto_core::character::starts_with_digit;
use sanasto_core::{Token, TokenKind, TokenSet};
use sanasto_trie::Vocabulary;

/// Which tokens count as numbers and are never reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberPolicy {
    /// Digits only (`123`). `1st` and `cat9` are still checked.
    #[default]
    DigitsOnly,
    /// Any token starting with a digit (`123`, `1st`, `2nd`). Covers
    /// ordinals written with digits.
    LeadingDigit,
}

impl NumberPolicy {
    /// Whether `token` is exempt from the vocabulary lookup.
    pub fn exempts(self, token: &Token) -> bool {
        match self {
            NumberPolicy::DigitsOnly => token.kind() == TokenKind::Number,
            NumberPolicy::LeadingDigit => starts_with_digit(token.as_str()),
        }
    }
}

/// Outcome of classifying a token set against a vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Classification {
    /// Tokens found in the vocabulary, sorted.
    pub known: Vec<Token>,
    /// Tokens absent from the vocabulary, sorted.
    pub unknown: Vec<Token>,
    /// Number of distinct tokens skipped as numbers.
    pub numbers_skipped: usize,
}

impl Classification {
    /// Number of vocabulary lookups the classification needed.
    pub fn lookups(&self) -> usize {
        self.known.len() + self.unknown.len()
    }
}

/// Classify every distinct token of `input` against `vocabulary`.
///
/// Issues exactly one membership query per non-exempt distinct token.
/// Both output lists are sorted by token value.
pub fn classify<V>(input: &TokenSet, vocabulary: &V, policy: NumberPolicy) -> Classification
where
    V: Vocabulary + ?Sized,
{
    let mut result = Classification::default();

    for token in input {
        if policy.exempts(token) {
            result.numbers_skipped += 1;
        } else if vocabulary.contains(token.as_str()) {
            result.known.push(token.clone());
        } else {
            result.unknown.push(token.clone());
        }
    }

    result.known.sort_unstable();
    result.unknown.sort_unstable();
    result
}

/// The sorted list of input tokens unknown to `vocabulary`.
pub fn unknown_tokens<V>(input: &TokenSet, vocabulary: &V, policy: NumberPolicy) -> Vec<Token>
where
    V: Vocabulary + ?Sized,
{
    classify(input, vocabulary, policy).unknown
}
