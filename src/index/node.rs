//! Trie node with per-node owner sets

use super::types::{Symbol, WordId};
use roaring::RoaringBitmap;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// A node of the generalized suffix trie.
///
/// Children are owned exclusively by their parent. The owners bitmap holds
/// the id of every word whose inserted suffixes pass through this node, so
/// a node's owners are always a superset of each child's owners.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: FxHashMap<Symbol, TrieNode>,
    owners: RoaringBitmap,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Child reached by `symbol`, if any suffix continued with it
    #[inline]
    pub fn child(&self, symbol: Symbol) -> Option<&TrieNode> {
        self.children.get(&symbol)
    }

    /// Get the child for `symbol`, creating it when absent.
    ///
    /// Returns the child and whether it was created by this call.
    #[inline]
    pub(crate) fn child_or_insert(&mut self, symbol: Symbol) -> (&mut TrieNode, bool) {
        match self.children.entry(symbol) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => (entry.insert(TrieNode::new()), true),
        }
    }

    #[inline]
    pub(crate) fn add_owner(&mut self, id: WordId) {
        self.owners.insert(id);
    }

    /// Ids of the words passing through this node, in ascending order
    pub fn owners(&self) -> &RoaringBitmap {
        &self.owners
    }

    /// Iterate over `(symbol, child)` pairs in no particular order
    pub fn children(&self) -> impl Iterator<Item = (Symbol, &TrieNode)> {
        self.children.iter().map(|(&symbol, child)| (symbol, child))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Follow `symbols` from this node.
    ///
    /// Stops at the first missing edge and returns `None`; partial walks
    /// never produce a node.
    pub fn walk<I>(&self, symbols: I) -> Option<&TrieNode>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut node = self;
        for symbol in symbols {
            node = node.child(symbol)?;
        }
        Some(node)
    }

    /// Number of nodes in the subtree rooted here, this node included
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

// Iterative so long single-word chains do not exhaust the stack on drop.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}
