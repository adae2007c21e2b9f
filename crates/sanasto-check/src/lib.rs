//! Unknown-word detection against a dictionary.
//!
//! - [`tokenizer`] -- raw text to distinct lowercase tokens
//! - [`classifier`] -- partition tokens into known and unknown
//! - [`format`] -- lines-to-words sanity check for text sources
//! - [`checker`] -- [`SpellChecker`], which owns a vocabulary and its options
//!
//! The vocabulary itself lives in `sanasto-trie`; token types in
//! `sanasto-core`.

pub mod checker;
pub mod classifier;
pub mod format;
pub mod tokenizer;

pub use checker::{CheckError, CheckOptions, SourceRole, SpellChecker};
pub use classifier::{Classification, NumberPolicy, classify, unknown_tokens};
pub use format::{FormatCheck, FormatReport, inspect_format};
pub use tokenizer::{tokenize, word_spans};

pub use sanasto_core::{Token, TokenKind, TokenSet};
pub use sanasto_trie::{Vocabulary, VocabularyIndex};
