//! A prefix tree over printable ASCII used for keyword and datatype lookups.
//!
//! Nodes are stored in an arena. Each node has one child slot per printable ASCII byte
//! (32 to 126). Slot value 0 means "no child", which is unambiguous because the root at index 0
//! is never a child.

use crate::Dictionary;

const ALPHABET_START: u8 = 32;
const ALPHABET_SIZE: usize = 95;

#[derive(Debug, Clone)]
struct Node {
    terminal: bool,
    children: [u32; ALPHABET_SIZE],
}

impl Default for Node {
    fn default() -> Self {
        Self {
            terminal: false,
            children: [0; ALPHABET_SIZE],
        }
    }
}

/// Maps a byte to its child slot, `None` for bytes outside the alphabet.
#[inline]
fn slot(byte: u8) -> Option<usize> {
    let index = byte.wrapping_sub(ALPHABET_START) as usize;
    (index < ALPHABET_SIZE).then_some(index)
}

/// A set of printable ASCII words.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create a new, empty trie.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: 0,
        }
    }

    /// Check if the word can be stored: not blank and printable ASCII only.
    pub fn is_valid_word(word: &str) -> bool {
        !word.trim().is_empty() && word.bytes().all(|b| slot(b).is_some())
    }

    /// Inserts the word.
    /// Returns false if the word is invalid or already contained.
    pub fn insert(&mut self, word: &str) -> bool {
        if !Self::is_valid_word(word) {
            return false;
        }
        let mut node = 0usize;
        for byte in word.bytes() {
            // Valid words only contain bytes inside the alphabet.
            let Some(index) = slot(byte) else {
                return false;
            };
            let child = self.nodes[node].children[index];
            node = if child == 0 {
                let new_node = self.nodes.len();
                self.nodes.push(Node::default());
                self.nodes[node].children[index] = new_node as u32;
                new_node
            } else {
                child as usize
            };
        }
        if self.nodes[node].terminal {
            return false;
        }
        self.nodes[node].terminal = true;
        self.words += 1;
        true
    }

    /// Follows the bytes from the root, returns the node reached.
    fn walk(&self, bytes: &[u8]) -> Option<usize> {
        let mut node = 0usize;
        for &byte in bytes {
            let child = self.nodes[node].children[slot(byte)?];
            if child == 0 {
                return None;
            }
            node = child as usize;
        }
        Some(node)
    }

    /// Check if the trie contains the word.
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty()
            && self
                .walk(word.as_bytes())
                .is_some_and(|node| self.nodes[node].terminal)
    }

    /// Check if any word in the trie starts with the given prefix.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.walk(prefix.as_bytes()).is_some()
    }

    /// The number of words in the trie.
    #[inline]
    pub fn len(&self) -> usize {
        self.words
    }

    /// Check if the trie holds no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// All words in the trie in byte order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.words);
        let mut prefix = Vec::new();
        self.collect_words(0, &mut prefix, &mut words);
        words
    }

    fn collect_words(&self, node: usize, prefix: &mut Vec<u8>, words: &mut Vec<String>) {
        if self.nodes[node].terminal {
            words.push(String::from_utf8_lossy(prefix).into_owned());
        }
        for (index, &child) in self.nodes[node].children.iter().enumerate() {
            if child != 0 {
                prefix.push(index as u8 + ALPHABET_START);
                self.collect_words(child as usize, prefix, words);
                prefix.pop();
            }
        }
    }

    /// The number of nodes including the root. Used for the dot rendering.
    #[cfg(feature = "dot_writer")]
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over the edges of a node as `(byte, child)` pairs.
    #[cfg(feature = "dot_writer")]
    pub(crate) fn edges(&self, node: usize) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.nodes[node]
            .children
            .iter()
            .enumerate()
            .filter(|&(_, &child)| child != 0)
            .map(|(index, &child)| (index as u8 + ALPHABET_START, child as usize))
    }

    /// Check if the node terminates a word. Used for the dot rendering.
    #[cfg(feature = "dot_writer")]
    pub(crate) fn is_terminal(&self, node: usize) -> bool {
        self.nodes[node].terminal
    }
}

impl Dictionary for Trie {
    fn contains_word(&self, source: &[u8], start: usize, end: usize) -> bool {
        if self.is_empty() || start >= end {
            return false;
        }
        source
            .get(start..end)
            .and_then(|bytes| self.walk(bytes))
            .is_some_and(|node| self.nodes[node].terminal)
    }
}
