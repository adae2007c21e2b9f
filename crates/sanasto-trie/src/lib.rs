//! Vocabulary membership engine.
//!
//! This crate provides the prefix tree that stores the known-correct tokens
//! of a dictionary and answers exact-membership queries in time proportional
//! to the length of the queried token.
//!
//! # Architecture
//!
//! - `node` -- Tree node: labeled child edges and the end-of-word marker
//! - [`index`] -- [`VocabularyIndex`], the arena-backed prefix tree
//!
//! The index is built in one phase (`insert`) and queried in a second one
//! (`contains`). Queries take `&self`, so the borrow checker rules out a
//! query running while the index is still being mutated.

pub mod index;
mod node;

pub use index::{Probe, VocabularyIndex};

/// Error type for vocabulary construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// The empty string cannot be stored; the root never marks a word end.
    #[error("cannot insert an empty token")]
    EmptyToken,
}

/// Read-only membership queries over a set of known words.
///
/// The classifier only depends on this trait, so any structure answering
/// exact-membership queries can stand in for [`VocabularyIndex`] (tests use
/// it to count queries).
pub trait Vocabulary {
    /// Returns `true` iff `word` is a stored word.
    fn contains(&self, word: &str) -> bool;
}

impl<V: Vocabulary + ?Sized> Vocabulary for &V {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}
