// VocabularyIndex: arena-backed prefix tree over characters

use sanasto_core::Token;

use crate::node::{Node, ROOT};
use crate::{TrieError, Vocabulary};

/// Result of walking a word down the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// Number of edges followed before the walk ended.
    ///
    /// Never exceeds the character length of the probed word.
    pub depth: usize,
    /// Whether the whole word was consumed and ended on a word-end node.
    pub found: bool,
}

/// The set of known words, stored as a prefix tree.
///
/// All nodes live in one arena owned by the index; nodes are only ever
/// appended. Lookups follow one edge per character, so their cost depends on
/// the length of the query and not on the number of stored words.
#[derive(Debug, Clone)]
pub struct VocabularyIndex {
    nodes: Vec<Node>,
    word_count: usize,
}

impl Default for VocabularyIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabularyIndex {
    /// Create an index holding no words (just the root node).
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            word_count: 0,
        }
    }

    /// Build an index from already-validated tokens.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a Token>,
    {
        let mut index = Self::new();
        for token in tokens {
            index.insert_token(token);
        }
        index
    }

    /// Store `word`. Inserting a word that is already stored changes nothing.
    ///
    /// The empty string is rejected: the root must never carry the
    /// end-of-word marker.
    pub fn insert(&mut self, word: &str) -> Result<(), TrieError> {
        if word.is_empty() {
            return Err(TrieError::EmptyToken);
        }
        self.insert_chars(word);
        Ok(())
    }

    /// Store a validated token. Tokens are never empty, so this cannot fail.
    pub fn insert_token(&mut self, token: &Token) {
        self.insert_chars(token.as_str());
    }

    // `word` must be non-empty.
    fn insert_chars(&mut self, word: &str) {
        let mut node = ROOT;
        for ch in word.chars() {
            node = match self.nodes[node].child(ch) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::new());
                    self.nodes[node].add_child(ch, next);
                    next
                }
            };
        }

        if self.nodes[node].mark_end() {
            self.word_count += 1;
        }
    }

    /// Returns `true` iff `word` was previously inserted.
    ///
    /// The empty string is never a member.
    pub fn contains(&self, word: &str) -> bool {
        self.probe(word).found
    }

    /// Walk `word` down the tree and report how far it got.
    pub fn probe(&self, word: &str) -> Probe {
        let mut node = ROOT;
        let mut depth = 0;
        for ch in word.chars() {
            match self.nodes[node].child(ch) {
                Some(next) => {
                    node = next;
                    depth += 1;
                }
                None => return Probe { depth, found: false },
            }
        }
        Probe {
            depth,
            found: node != ROOT && self.nodes[node].is_end(),
        }
    }

    /// Number of distinct stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of tree nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    fn node(&self, id: crate::node::NodeId) -> &Node {
        &self.nodes[id]
    }
}

impl Vocabulary for VocabularyIndex {
    fn contains(&self, word: &str) -> bool {
        VocabularyIndex::contains(self, word)
    }
}

impl<'a> FromIterator<&'a Token> for VocabularyIndex {
    fn from_iter<I: IntoIterator<Item = &'a Token>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

impl<'a> Extend<&'a Token> for VocabularyIndex {
    fn extend<I: IntoIterator<Item = &'a Token>>(&mut self, iter: I) {
        for token in iter {
            self.insert_token(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(words: &[&str]) -> VocabularyIndex {
        let mut index = VocabularyIndex::new();
        for word in words {
            index.insert(word).unwrap();
        }
        index
    }

    #[test]
    fn new_index_is_empty() {
        let index = VocabularyIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.node_count(), 1);
        assert!(!index.contains("a"));
    }

    #[test]
    fn inserted_words_are_members() {
        let index = index_of(&["this", "is", "a", "test"]);
        for word in ["this", "is", "a", "test"] {
            assert!(index.contains(word), "{word} should be a member");
        }
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn prefixes_of_stored_words_are_not_members() {
        let index = index_of(&["system"]);
        assert!(!index.contains("s"));
        assert!(!index.contains("sys"));
        assert!(!index.contains("syste"));
        assert!(index.contains("system"));
    }

    #[test]
    fn extensions_of_stored_words_are_not_members() {
        let index = index_of(&["test"]);
        assert!(!index.contains("tests"));
        assert!(!index.contains("testing"));
    }

    #[test]
    fn prefix_becomes_member_once_inserted() {
        let mut index = index_of(&["system"]);
        assert!(!index.contains("sys"));
        index.insert("sys").unwrap();
        assert!(index.contains("sys"));
        assert!(index.contains("system"));
        // "sys" reuses the existing path: no new nodes
        assert_eq!(index.node_count(), 1 + "system".len());
    }

    #[test]
    fn insert_is_idempotent() {
        let mut index = index_of(&["dog"]);
        let nodes = index.node_count();
        for _ in 0..5 {
            index.insert("dog").unwrap();
        }
        assert_eq!(index.len(), 1);
        assert_eq!(index.node_count(), nodes);
        assert!(index.contains("dog"));
        assert!(!index.contains("do"));
    }

    #[test]
    fn empty_word_is_rejected() {
        let mut index = VocabularyIndex::new();
        assert_eq!(index.insert(""), Err(TrieError::EmptyToken));
        assert!(index.is_empty());
        assert!(!index.contains(""));
    }

    #[test]
    fn empty_word_is_not_a_member_of_populated_index() {
        let index = index_of(&["a"]);
        assert!(!index.contains(""));
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let index = index_of(&["tea", "ten", "to"]);
        // root, t, e, a, n, o
        assert_eq!(index.node_count(), 6);
        let t = index.node(crate::node::ROOT).child('t').unwrap();
        assert_eq!(index.node(t).child_count(), 2);
    }

    #[test]
    fn lookup_is_case_sensitive_on_raw_strings() {
        let index = index_of(&["dog"]);
        assert!(!index.contains("Dog"));
    }

    #[test]
    fn from_tokens_builds_index() {
        let tokens: Vec<Token> = ["Dog", "cat"]
            .into_iter()
            .map(|w| Token::new(w).unwrap())
            .collect();
        let index: VocabularyIndex = tokens.iter().collect();
        assert!(index.contains("dog"));
        assert!(index.contains("cat"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn insert_token_counts_each_word_once() {
        let mut index = VocabularyIndex::new();
        let dog = Token::new("Dog").unwrap();
        index.insert_token(&dog);
        index.insert_token(&dog);
        assert_eq!(index.len(), 1);
        assert!(index.contains("dog"));
        assert!(!index.contains(""));
    }

    #[test]
    fn probe_reports_depth() {
        let index = index_of(&["system"]);
        assert_eq!(index.probe("systm"), Probe { depth: 4, found: false });
        assert_eq!(index.probe("system"), Probe { depth: 6, found: true });
        assert_eq!(index.probe("sys"), Probe { depth: 3, found: false });
        assert_eq!(index.probe("x"), Probe { depth: 0, found: false });
        assert_eq!(index.probe(""), Probe { depth: 0, found: false });
    }

    #[test]
    fn works_through_vocabulary_trait() {
        fn query(v: &dyn Vocabulary, word: &str) -> bool {
            v.contains(word)
        }
        let index = index_of(&["of"]);
        assert!(query(&index, "of"));
        assert!(!query(&index, "off"));
    }
}
