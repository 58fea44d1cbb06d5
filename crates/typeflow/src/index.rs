//! Prefix index (character trie)
//!
//! Stores candidate values under normalized keys so that keys sharing a
//! prefix are visited contiguously. Nodes live in one arena and refer to
//! each other by slot index; the parent link is an index as well.
//!
//! # Example
//!
//! ```rust
//! use typeflow::index::{PrefixIndex, Walk};
//!
//! let mut index = PrefixIndex::new();
//! index.insert("tea", "Tea");
//! index.insert("ten", "Ten");
//!
//! let mut deltas = Vec::new();
//! index.traverse(|info| {
//!     deltas.push(info.delta().iter().collect::<String>());
//!     Walk::Continue
//! });
//! assert_eq!(deltas, vec!["", "t", "e", "a", "n"]);
//! ```

use std::convert::Infallible;

/// Slot of a node in the index arena.
pub type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct Node {
    /// `None` only for the root
    ch: Option<char>,
    parent: Option<NodeId>,
    depth: usize,
    /// Sorted by character
    children: Vec<NodeId>,
    /// Values whose key ends here
    values: Vec<String>,
}

impl Node {
    fn new(ch: Option<char>, parent: Option<NodeId>, depth: usize) -> Self {
        Self {
            ch,
            parent,
            depth,
            children: Vec::new(),
            values: Vec::new(),
        }
    }
}

/// What the traversal should do after a visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Descend into the children of the visited node
    Continue,
    /// Do not visit anything below the visited node
    SkipSubtree,
    /// Stop the traversal
    Halt,
}

/// A node as seen by a traversal visitor
#[derive(Debug, Clone, Copy)]
pub struct PrefixInfo<'a> {
    pub node: NodeId,
    /// Full key prefix leading to this node
    pub prefix: &'a [char],
    pub depth: usize,
    /// Length of the prefix shared with the previously visited node
    pub shared_len: usize,
    /// Values stored under exactly this prefix
    pub values: &'a [String],
}

impl<'a> PrefixInfo<'a> {
    /// Characters added since the shared prefix with the previous visit.
    pub fn delta(&self) -> &'a [char] {
        &self.prefix[self.shared_len..]
    }

    /// Whether at least one stored key ends at this node.
    pub fn is_word(&self) -> bool {
        !self.values.is_empty()
    }
}

/// Character trie mapping keys to one or more values.
///
/// Built once, then shared read-only by any number of searches.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    nodes: Vec<Node>,
    key_count: usize,
    value_count: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(None, None, 0)],
            key_count: 0,
            value_count: 0,
        }
    }

    /// Associate `value` with `key`. Several values may share a key.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let mut node = ROOT;
        for ch in key.chars() {
            node = self.child_or_insert(node, ch);
        }

        let values = &mut self.nodes[node].values;
        if values.is_empty() {
            self.key_count += 1;
        }
        values.push(value.into());
        self.value_count += 1;
    }

    /// Values stored under exactly `key`.
    pub fn get(&self, key: &str) -> &[String] {
        match self.lookup(key) {
            Some(id) => &self.nodes[id].values,
            None => &[],
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        !self.get(key).is_empty()
    }

    /// Number of stored values, aliases included.
    pub fn len(&self) -> usize {
        self.value_count
    }

    pub fn is_empty(&self) -> bool {
        self.value_count == 0
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.key_count
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Rebuild the key of a node by following parent links.
    pub fn key_of(&self, node: NodeId) -> Option<String> {
        let mut chars = Vec::with_capacity(self.nodes.get(node)?.depth);
        let mut current = Some(node);
        while let Some(id) = current {
            let n = &self.nodes[id];
            chars.extend(n.ch);
            current = n.parent;
        }
        Some(chars.into_iter().rev().collect())
    }

    /// All stored keys in traversal order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.key_count);
        self.traverse(|info| {
            if info.is_word() {
                keys.push(info.prefix.iter().collect());
            }
            Walk::Continue
        });
        keys
    }

    /// Pre-order depth-first walk in ascending character order.
    ///
    /// Every node's prefix strictly extends its parent's. The root (empty
    /// prefix) is visited first.
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&PrefixInfo<'_>) -> Walk,
    {
        let result: Result<(), Infallible> = self.try_traverse(|info| Ok(visit(info)));
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// [`traverse`](Self::traverse) with a fallible visitor; the first error stops the walk.
    pub fn try_traverse<E, F>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&PrefixInfo<'_>) -> Result<Walk, E>,
    {
        let mut stack = vec![ROOT];
        let mut path: Vec<char> = Vec::new();
        let mut prev_len = 0;

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if let Some(ch) = node.ch {
                // Everything past the parent belongs to an earlier branch
                path.truncate(node.depth - 1);
                path.push(ch);
            }

            let info = PrefixInfo {
                node: id,
                prefix: &path,
                depth: node.depth,
                shared_len: prev_len.min(node.depth.saturating_sub(1)),
                values: &node.values,
            };
            let walk = visit(&info)?;
            prev_len = path.len();

            match walk {
                Walk::Continue => stack.extend(node.children.iter().rev().copied()),
                Walk::SkipSubtree => {}
                Walk::Halt => break,
            }
        }
        Ok(())
    }

    fn lookup(&self, key: &str) -> Option<NodeId> {
        let mut node = ROOT;
        for ch in key.chars() {
            node = self.find_child(node, ch).ok()?;
        }
        Some(node)
    }

    /// `Ok(child)` if present, otherwise `Err(insertion position)`.
    fn find_child(&self, parent: NodeId, ch: char) -> Result<NodeId, usize> {
        let children = &self.nodes[parent].children;
        children
            .binary_search_by(|&c| self.nodes[c].ch.cmp(&Some(ch)))
            .map(|pos| children[pos])
    }

    fn child_or_insert(&mut self, parent: NodeId, ch: char) -> NodeId {
        match self.find_child(parent, ch) {
            Ok(id) => id,
            Err(pos) => {
                let id = self.nodes.len();
                let depth = self.nodes[parent].depth + 1;
                self.nodes.push(Node::new(Some(ch), Some(parent), depth));
                self.nodes[parent].children.insert(pos, id);
                id
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> PrefixIndex {
        let mut index = PrefixIndex::new();
        for word in ["ten", "tea", "to", "inn", "in", "ted"] {
            index.insert(word, word.to_uppercase());
        }
        index
    }

    /// (prefix, shared_len, is_word) for every visit
    fn visits(index: &PrefixIndex) -> Vec<(String, usize, bool)> {
        let mut out = Vec::new();
        index.traverse(|info| {
            out.push((info.prefix.iter().collect(), info.shared_len, info.is_word()));
            Walk::Continue
        });
        out
    }

    #[test]
    fn test_insert_and_get() {
        let index = sample();
        assert!(index.contains("tea"));
        assert!(index.contains("in"));
        assert!(!index.contains("te"));
        assert!(!index.contains("tealeaf"));
        assert_eq!(index.get("inn"), &["INN".to_string()]);
        assert!(index.get("x").is_empty());
        assert_eq!(index.len(), 6);
        assert_eq!(index.key_count(), 6);
        // root + t,e,n,a,d,o + i,n,n
        assert_eq!(index.node_count(), 10);
    }

    #[test]
    fn test_aliases_share_a_key() {
        let mut index = PrefixIndex::new();
        index.insert("ireland", "Ireland");
        index.insert("ireland", "IRELAND");
        assert_eq!(index.get("ireland"), &["Ireland".to_string(), "IRELAND".to_string()]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.key_count(), 1);
    }

    #[test]
    fn test_empty_key_lives_on_root() {
        let mut index = PrefixIndex::new();
        index.insert("", "empty");
        assert!(index.contains(""));
        assert_eq!(visits(&index), vec![(String::new(), 0, true)]);
    }

    #[test]
    fn test_traversal_order_and_shared_len() {
        let index = sample();
        let expected: Vec<(String, usize, bool)> = [
            ("", 0, false),
            ("i", 0, false),
            ("in", 1, true),
            ("inn", 2, true),
            ("t", 0, false),
            ("te", 1, false),
            ("tea", 2, true),
            ("ted", 2, true),
            ("ten", 2, true),
            ("to", 1, true),
        ]
        .into_iter()
        .map(|(p, shared, word)| (p.to_string(), shared, word))
        .collect();
        assert_eq!(visits(&index), expected);
    }

    #[test]
    fn test_delta_is_suffix_after_shared_prefix() {
        let index = sample();
        index.traverse(|info| {
            assert_eq!(info.delta().len(), info.prefix.len() - info.shared_len);
            assert!(info.depth == 0 || info.delta().len() == 1);
            Walk::Continue
        });
    }

    #[test]
    fn test_skip_subtree() {
        let index = sample();
        let mut seen = Vec::new();
        index.traverse(|info| {
            let prefix: String = info.prefix.iter().collect();
            let walk = if prefix == "te" {
                Walk::SkipSubtree
            } else {
                Walk::Continue
            };
            seen.push(prefix);
            walk
        });
        assert_eq!(seen, vec!["", "i", "in", "inn", "t", "te", "to"]);
    }

    #[test]
    fn test_halt() {
        let index = sample();
        let mut count = 0;
        index.traverse(|info| {
            count += 1;
            if info.is_word() {
                Walk::Halt
            } else {
                Walk::Continue
            }
        });
        assert_eq!(count, 3);
    }

    #[test]
    fn test_try_traverse_propagates_error() {
        let index = sample();
        let result = index.try_traverse(|info| {
            if info.depth == 2 {
                Err(info.prefix.iter().collect::<String>())
            } else {
                Ok(Walk::Continue)
            }
        });
        assert_eq!(result, Err("in".to_string()));
    }

    #[test]
    fn test_keys_and_key_of() {
        let index = sample();
        assert_eq!(index.keys(), vec!["in", "inn", "tea", "ted", "ten", "to"]);

        let mut ids = Vec::new();
        index.traverse(|info| {
            if info.is_word() {
                ids.push(info.node);
            }
            Walk::Continue
        });
        let rebuilt: Vec<String> = ids.iter().filter_map(|&id| index.key_of(id)).collect();
        assert_eq!(rebuilt, index.keys());
        assert_eq!(index.key_of(10_000), None);
    }

    #[test]
    fn test_unicode_keys() {
        let mut index = PrefixIndex::new();
        index.insert("café", "Café");
        index.insert("cafe", "Cafe");
        assert_eq!(index.keys(), vec!["cafe", "café"]);
        assert_eq!(index.node_count(), 6);
    }
}
