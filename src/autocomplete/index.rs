use std::collections::BTreeMap;

/// Trie node. Children are keyed by one case-folded character. A node that
/// terminates a stored key holds that key so enumeration doesn't have to
/// rebuild it from the path.
#[derive(Debug, Default)]
struct Node {
    children: BTreeMap<char, Node>,
    key: Option<Box<str>>,
}

// Tear down with an explicit stack. The derived drop recurses once per level
// and long keys would overflow the stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Node> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

/// Character trie over case-folded keys for prefix enumeration.
///
/// Navigation costs O(prefix length) and enumeration O(size of the matched
/// subtree). Removal prunes every branch left without keys, so the node count
/// always equals the number of distinct key prefixes in the index.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: Node,
    len: usize,
    nodes: usize,
}

impl PrefixIndex {
    /// Add a key. Returns false if it was already indexed.
    pub fn insert(&mut self, key: &str) -> bool {
        let mut node = &mut self.root;
        for ch in key.chars() {
            node = node.children.entry(ch).or_insert_with(|| {
                self.nodes += 1;
                Node::default()
            });
        }

        if node.key.is_some() {
            return false;
        }

        node.key = Some(key.into());
        self.len += 1;
        true
    }

    /// Remove a key and prune the branches it leaves empty. Returns false if
    /// the key wasn't indexed.
    pub fn remove(&mut self, key: &str) -> bool {
        let chars: Vec<char> = key.chars().collect();
        let Some(removal) = self.plan_removal(&chars) else {
            return false;
        };

        match removal {
            Removal::Unmark => {
                if let Some(node) = self.node_mut(&chars) {
                    node.key = None;
                }
            }
            Removal::Cut(depth) => {
                if let Some(parent) = self.node_mut(&chars[..depth]) {
                    parent.children.remove(&chars[depth]);
                }
                self.nodes -= chars.len() - depth;
            }
        }

        self.len -= 1;
        true
    }

    /// Every indexed key starting with `prefix`. An empty prefix returns all
    /// keys. The prefix must already be case-folded.
    pub fn keys_with_prefix<'a>(&'a self, prefix: &str) -> Vec<&'a str> {
        let Some(start) = self.find(prefix) else {
            return Vec::new();
        };

        // Iterative walk so deep keys can't blow the stack.
        let mut out = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if let Some(k) = &node.key {
                out.push(k.as_ref());
            }
            stack.extend(node.children.values());
        }

        out
    }

    /// Number of indexed keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Work out how to remove the key spelt by `path` without recursing. If
    /// the key's node has no children, the branch is cut just below the
    /// deepest ancestor that still holds a key or another branch.
    fn plan_removal(&self, path: &[char]) -> Option<Removal> {
        let mut node = &self.root;
        let mut cut = 0;
        for (depth, ch) in path.iter().enumerate() {
            if node.key.is_some() || node.children.len() > 1 {
                cut = depth;
            }
            node = node.children.get(ch)?;
        }

        node.key.as_ref()?;
        if path.is_empty() || !node.children.is_empty() {
            return Some(Removal::Unmark);
        }
        Some(Removal::Cut(cut))
    }

    fn node_mut(&mut self, path: &[char]) -> Option<&mut Node> {
        let mut node = &mut self.root;
        for ch in path {
            node = node.children.get_mut(ch)?;
        }
        Some(node)
    }

    fn find(&self, prefix: &str) -> Option<&Node> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

enum Removal {
    /// Clear the key, the node still has children.
    Unmark,
    /// Detach the child at this depth along the key's path.
    Cut(usize),
}
