use crate::search::insertion_point;

/// A prefix trie mapping sequences of key-elements to values.
///
/// Each node owns an optional payload, an ascending sequence of key-elements,
/// and an index-aligned sequence of child nodes (child `i` is reached by
/// key-element `i`). The root represents the empty key sequence. Nodes are
/// created lazily along inserted paths and never pruned — there is no delete.
///
/// Branch positioning goes through [`insertion_point`], so descending one
/// level is O(log b) in the branching factor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie<K, V> {
    value: Option<V>,
    keys: Vec<K>,
    children: Vec<Trie<K, V>>,
}

impl<K, V> Default for Trie<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Trie<K, V> {
    #[inline]
    pub fn new() -> Self {
        Self {
            value: None,
            keys: Vec::new(),
            children: Vec::new(),
        }
    }

    /// This node's own payload. `Some` iff an inserted key sequence
    /// terminates exactly here.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Number of stored entries in this subtree.
    pub fn len(&self) -> usize {
        self.value.is_some() as usize + self.children.iter().map(Trie::len).sum::<usize>()
    }

    /// True when no entry is stored anywhere in this subtree.
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.iter().all(Trie::is_empty)
    }
}

impl<K: Ord + Clone, V> Trie<K, V> {
    /// Stores `value` under `key`, creating nodes along the path as needed.
    ///
    /// Returns the previous payload when `key` was already bound.
    pub fn insert(&mut self, key: &[K], value: V) -> Option<V> {
        match key.split_first() {
            None => self.value.replace(value),
            Some((head, rest)) => {
                let i = insertion_point(&self.keys, head);
                if i == self.keys.len() || self.keys[i] != *head {
                    self.keys.insert(i, head.clone());
                    self.children.insert(i, Trie::new());
                }
                self.children[i].insert(rest, value)
            }
        }
    }

    /// Exact lookup. `None` when no entry terminates at `key`.
    pub fn get(&self, key: &[K]) -> Option<&V> {
        self.subtrie(key)?.value.as_ref()
    }

    pub fn get_mut(&mut self, key: &[K]) -> Option<&mut V> {
        match key.split_first() {
            None => self.value.as_mut(),
            Some((head, rest)) => {
                let i = insertion_point(&self.keys, head);
                if i == self.keys.len() || self.keys[i] != *head {
                    return None;
                }
                self.children[i].get_mut(rest)
            }
        }
    }

    /// Descends to the node `prefix` denotes, whether or not an entry
    /// terminates there. `None` when the path does not exist.
    pub fn subtrie(&self, prefix: &[K]) -> Option<&Trie<K, V>> {
        let mut node = self;
        for k in prefix {
            let i = insertion_point(&node.keys, k);
            if i == node.keys.len() || node.keys[i] != *k {
                return None;
            }
            node = &node.children[i];
        }
        Some(node)
    }

    /// Eager depth-first traversal of every stored entry, in ascending
    /// lexicographic order by key sequence. A node's payload is visited
    /// before its children.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&[K], &V),
    {
        let mut prefix = Vec::new();
        self.for_each_inner(&mut prefix, &mut visit);
    }

    fn for_each_inner<F>(&self, prefix: &mut Vec<K>, visit: &mut F)
    where
        F: FnMut(&[K], &V),
    {
        if let Some(v) = &self.value {
            visit(prefix, v);
        }
        for (k, child) in self.keys.iter().zip(&self.children) {
            prefix.push(k.clone());
            child.for_each_inner(prefix, visit);
            prefix.pop();
        }
    }

    /// Lazy enumeration of every stored entry.
    ///
    /// Same order and content as [`for_each`](Self::for_each), but
    /// consumable incrementally: dropping the iterator early abandons the
    /// rest of the tree without visiting it.
    pub fn entries(&self) -> Entries<'_, K, V> {
        Entries {
            stack: vec![Frame {
                node: self,
                next_child: 0,
                visited: false,
            }],
            prefix: Vec::new(),
        }
    }
}

struct Frame<'a, K, V> {
    node: &'a Trie<K, V>,
    next_child: usize,
    visited: bool,
}

/// Depth-first iterator over a [`Trie`]'s stored entries.
///
/// Captures the traversal state explicitly (a stack of node/cursor frames
/// plus the current prefix) rather than relying on recursion, so the walk
/// can be suspended between items.
pub struct Entries<'a, K, V> {
    stack: Vec<Frame<'a, K, V>>,
    prefix: Vec<K>,
}

impl<'a, K: Clone, V> Iterator for Entries<'a, K, V> {
    type Item = (Vec<K>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let node = frame.node;

            if !frame.visited {
                frame.visited = true;
                if let Some(v) = &node.value {
                    return Some((self.prefix.clone(), v));
                }
            }

            if frame.next_child < node.children.len() {
                let i = frame.next_child;
                frame.next_child += 1;
                self.prefix.push(node.keys[i].clone());
                self.stack.push(Frame {
                    node: &node.children[i],
                    next_child: 0,
                    visited: false,
                });
            } else {
                self.stack.pop();
                // The bottom frame (the traversal root) contributed no
                // prefix element.
                if !self.stack.is_empty() {
                    self.prefix.pop();
                }
            }
        }
    }
}
