//! Character trie with single-mismatch lookup.
//!
//! Keys are byte strings (DNA bases in practice). Each node owns its children in
//! insertion order, so lookups return payloads in a stable, traversal-defined order
//! that carries no external meaning; callers sort when presentation order matters.

#[derive(Debug, Clone)]
struct Node<T> {
    values: Vec<T>,
    children: Vec<Child<T>>,
}

#[derive(Debug, Clone)]
struct Child<T> {
    label: u8,
    node: Node<T>,
}

impl<T> Node<T> {
    fn new() -> Self {
        Self {
            values: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// Prefix tree mapping keys to a multiset of values.
///
/// `find` can tolerate a single mismatched character anywhere except the first
/// position of the key, which always acts as an exact anchor.
#[derive(Debug, Clone)]
pub struct Trie<T> {
    root: Node<T>,
    value_count: usize,
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Trie<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            value_count: 0,
        }
    }

    /// Discard all keys and values
    pub fn reset(&mut self) {
        self.root = Node::new();
        self.value_count = 0;
    }

    /// Store `value` under `key`, creating nodes as needed.
    ///
    /// Multiple values may share a key; nothing is deduplicated.
    pub fn insert(&mut self, key: &str, value: T) {
        let mut node = &mut self.root;
        for &label in key.as_bytes() {
            let idx = match node.children.iter().position(|c| c.label == label) {
                Some(idx) => idx,
                None => {
                    node.children.push(Child {
                        label,
                        node: Node::new(),
                    });
                    node.children.len() - 1
                }
            };
            node = &mut node.children[idx].node;
        }
        node.values.push(value);
        self.value_count += 1;
    }

    /// Total number of stored values
    #[must_use]
    pub fn len(&self) -> usize {
        self.value_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value_count == 0
    }
}

impl<T: Clone> Trie<T> {
    /// Find all values stored under `key`.
    ///
    /// With `exact_match_only == false`, values whose key differs from `key` in
    /// exactly one position are returned too, provided that position is not the
    /// first. Characters of `key` beyond the depth of the trie match nothing.
    #[must_use]
    pub fn find(&self, key: &str, exact_match_only: bool) -> Vec<T> {
        let mut values = Vec::new();
        Self::find_helper(
            &self.root,
            key.as_bytes(),
            true,
            !exact_match_only,
            &mut values,
        );
        values
    }

    fn find_helper(
        node: &Node<T>,
        key: &[u8],
        first_char: bool,
        mismatch_allowed: bool,
        values: &mut Vec<T>,
    ) {
        let Some((&next, rest)) = key.split_first() else {
            values.extend_from_slice(&node.values);
            return;
        };

        for child in &node.children {
            if child.label == next {
                Self::find_helper(&child.node, rest, false, mismatch_allowed, values);
            } else if mismatch_allowed && !first_char {
                // The snip is spent here; the rest of the key must match exactly
                Self::find_helper(&child.node, rest, false, false, values);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<i32>) -> Vec<i32> {
        v.sort_unstable();
        v
    }

    fn make_test_trie() -> Trie<i32> {
        let mut trie = Trie::new();
        trie.insert("hi", 1);
        trie.insert("him", 2);
        trie.insert("hit", 3);
        trie.insert("hit", 7);
        trie.insert("hip", 2);
        trie.insert("hip", 10);
        trie.insert("lit", 0);
        trie.insert("himm", 4);
        trie.insert("lol", 2);
        trie.insert("lo", 5);
        trie.insert("lox", 0);
        trie.insert("la", 9);
        trie
    }

    #[test]
    fn test_exact_find() {
        let trie = make_test_trie();
        assert_eq!(trie.find("hit", true), vec![3, 7]);
        assert_eq!(trie.find("hi", true), vec![1]);
        assert_eq!(trie.find("himm", true), vec![4]);
        assert!(trie.find("hat", true).is_empty());
    }

    #[test]
    fn test_one_snip_find() {
        let trie = make_test_trie();
        // "hit" exactly plus "him" and "hip" with one mismatch at the last base.
        // "lit" differs only in the first character and is never returned.
        assert_eq!(sorted(trie.find("hit", false)), vec![2, 2, 3, 7, 10]);
    }

    #[test]
    fn test_first_character_is_anchored() {
        let trie = make_test_trie();
        assert!(trie.find("kit", false).is_empty());
        assert!(!trie.find("lit", false).contains(&3));
    }

    #[test]
    fn test_two_mismatches_not_found() {
        let mut trie = Trie::new();
        trie.insert("ACGT", 1);
        assert_eq!(trie.find("AGGT", false), vec![1]);
        assert_eq!(trie.find("ACGA", false), vec![1]);
        assert!(trie.find("AGGA", false).is_empty());
        assert!(trie.find("AGGT", true).is_empty());
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut trie = Trie::new();
        trie.insert("AT", 1);
        trie.insert("AC", 2);
        trie.insert("AG", 3);
        assert_eq!(trie.find("AA", false), vec![1, 2, 3]);
    }

    #[test]
    fn test_longer_and_shorter_keys() {
        let mut trie = Trie::new();
        trie.insert("ACG", 1);
        assert!(trie.find("ACGT", false).is_empty());
        assert!(trie.find("AC", false).is_empty());
        assert!(trie.find("", false).is_empty());
        trie.insert("", 9);
        assert_eq!(trie.find("", true), vec![9]);
    }

    #[test]
    fn test_reset() {
        let mut trie = make_test_trie();
        assert_eq!(trie.len(), 12);
        trie.reset();
        assert!(trie.is_empty());
        assert!(trie.find("hit", false).is_empty());

        trie.insert("hit", 42);
        assert_eq!(trie.find("hit", true), vec![42]);
        assert_eq!(trie.len(), 1);
    }
}
