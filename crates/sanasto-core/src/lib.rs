//! Shared types for the sanasto spell checker.
//!
//! - [`character`] -- the word alphabet `[A-Za-z0-9_]` and digit predicates
//! - [`token`] -- validated lowercase [`Token`]s and the deduplicated [`TokenSet`]

pub mod character;
pub mod token;

pub use token::{Token, TokenError, TokenKind, TokenSet};
