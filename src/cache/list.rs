//! Recency List Module
//!
//! Implements least-to-most-recently-used ordering for cache eviction.

// == List Node ==
/// A single link in the recency list.
///
/// Holds only the key and its neighbor handles; values stay in the index.
#[derive(Debug)]
struct Node {
    key: String,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Recency List ==
/// Tracks access order for LRU eviction.
///
/// Nodes live in an arena indexed by `usize` handles, and `prev`/`next`
/// are handles rather than references. That keeps ownership singular
/// (no `unsafe`, no reference cycles) while still allowing O(1) unlink
/// of any node from a handle stored alongside its entry.
///
/// - Head = least recently used
/// - Tail = most recently used
#[derive(Debug, Default)]
pub(crate) struct RecencyList {
    /// Arena of nodes; slots of removed nodes are recycled via `free`
    nodes: Vec<Node>,
    /// Arena slots available for reuse
    free: Vec<usize>,
    /// Least recently used node
    head: Option<usize>,
    /// Most recently used node
    tail: Option<usize>,
    /// Number of linked nodes
    len: usize,
}

impl RecencyList {
    // == Constructor ==
    /// Creates a new empty recency list.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // == Push Tail ==
    /// Links a new node holding `key` at the most-recently-used position.
    ///
    /// Recycles a freed arena slot when one is available. Returns the
    /// node's handle, valid until the node is removed.
    pub(crate) fn push_tail(&mut self, key: String) -> usize {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Node {
                    key,
                    prev: None,
                    next: None,
                };
                idx
            }
            None => {
                self.nodes.push(Node {
                    key,
                    prev: None,
                    next: None,
                });
                self.nodes.len() - 1
            }
        };
        self.link_tail(idx);
        self.len += 1;
        idx
    }

    // == Move To Tail ==
    /// Marks the node at `idx` as most recently used.
    ///
    /// No-op when the node already is the tail. Handles the node being
    /// head, tail, or interior.
    pub(crate) fn move_to_tail(&mut self, idx: usize) {
        if self.tail == Some(idx) {
            return;
        }
        self.detach(idx);
        self.link_tail(idx);
    }

    // == Pop Head ==
    /// Removes and returns the least recently used key.
    ///
    /// Returns None if the list is empty.
    pub(crate) fn pop_head(&mut self) -> Option<String> {
        let idx = self.head?;
        Some(self.remove(idx))
    }

    // == Remove ==
    /// Unlinks the node at `idx`, frees its slot, and returns its key.
    ///
    /// The handle must address a linked node.
    pub(crate) fn remove(&mut self, idx: usize) -> String {
        self.detach(idx);
        self.free.push(idx);
        self.len -= 1;
        std::mem::take(&mut self.nodes[idx].key)
    }

    // == Length ==
    /// Returns the number of linked nodes.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops all nodes and recycled slots.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Head Key ==
    /// Returns the least recently used key without removing it.
    #[allow(dead_code)]
    pub(crate) fn head_key(&self) -> Option<&str> {
        self.head.map(|idx| self.nodes[idx].key.as_str())
    }

    // == Tail Key ==
    /// Returns the most recently used key without removing it.
    #[allow(dead_code)]
    pub(crate) fn tail_key(&self) -> Option<&str> {
        self.tail.map(|idx| self.nodes[idx].key.as_str())
    }

    // == Link Surgery ==
    /// Appends a detached node at the tail.
    fn link_tail(&mut self, idx: usize) {
        self.nodes[idx].prev = self.tail;
        self.nodes[idx].next = None;
        match self.tail {
            Some(old_tail) => self.nodes[old_tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    /// Unlinks a node from its neighbors, patching head/tail as needed.
    ///
    /// The node's own links are left stale; callers either relink the
    /// node or free its slot.
    fn detach(&mut self, idx: usize) {
        let prev = self.nodes[idx].prev;
        let next = self.nodes[idx].next;
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
    }
}

// == Test Helpers ==
#[cfg(test)]
impl RecencyList {
    /// Keys from least to most recently used, with a cycle guard.
    pub(crate) fn keys_oldest_first(&self) -> Vec<String> {
        let mut keys = Vec::new();
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            keys.push(self.nodes[idx].key.clone());
            assert!(keys.len() <= self.len, "cycle in recency list");
            cursor = self.nodes[idx].next;
        }
        keys
    }

    /// Keys from most to least recently used, with a cycle guard.
    pub(crate) fn keys_newest_first(&self) -> Vec<String> {
        let mut keys = Vec::new();
        let mut cursor = self.tail;
        while let Some(idx) = cursor {
            keys.push(self.nodes[idx].key.clone());
            assert!(keys.len() <= self.len, "cycle in recency list");
            cursor = self.nodes[idx].prev;
        }
        keys
    }

    /// Returns the key stored at an arena slot.
    pub(crate) fn key_at(&self, idx: usize) -> &str {
        self.nodes[idx].key.as_str()
    }
}
