// Prefix tree node

use hashbrown::HashMap;

/// Index of a node inside the index's arena.
pub type NodeId = usize;

/// Id of the root node; the arena always holds it.
pub const ROOT: NodeId = 0;

/// One node of the prefix tree.
///
/// Each outgoing edge is labeled by a single character. `is_end` is set only
/// on nodes reached by a complete stored word, never on pure prefixes.
#[derive(Debug, Clone, Default)]
pub struct Node {
    children: HashMap<char, NodeId>,
    is_end: bool,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow the edge labeled `ch`.
    #[inline]
    pub fn child(&self, ch: char) -> Option<NodeId> {
        self.children.get(&ch).copied()
    }

    pub(crate) fn add_child(&mut self, ch: char, id: NodeId) {
        self.children.insert(ch, id);
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// Mark this node as a word end. Returns `true` if it was not one yet.
    pub(crate) fn mark_end(&mut self) -> bool {
        !std::mem::replace(&mut self.is_end, true)
    }

    #[cfg(test)]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}
