//! A prefix tree keyed by symbol sequences. Each node owns a map from symbol to child node and a
//! flag marking whether an inserted word ends there. Nodes are created lazily on insertion and
//! never removed.
//!
//! # Examples
//!
//! ```
//! use dsa_tour::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("go");
//! trie.insert("golang");
//!
//! assert!(trie.search("go"));
//! assert!(trie.search("golang"));
//! assert!(!trie.search("java"));
//!
//! // The path for "gol" exists but no word ends there.
//! assert!(!trie.search("gol"));
//! assert!(trie.starts_with("gol"));
//! ```

use std::collections::HashMap;
use std::hash::Hash;

/// A trie storing sequences of `S`. Defaults to `char` so words are plain strings, but any
/// hashable symbol works (e.g. `u8` for byte strings).
#[derive(Clone, Debug)]
pub struct Trie<S = char> {
    root: TrieNode<S>,
    words: usize,
}

#[derive(Clone, Debug)]
struct TrieNode<S> {
    children: HashMap<S, TrieNode<S>>,
    terminal: bool,
}

/// Manual implementation of `Default` so `S` doesn't have to be `Default`.
impl<S> Default for TrieNode<S> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            terminal: false,
        }
    }
}

impl<S> TrieNode<S> {
    fn count(&self) -> usize {
        let mut stack = vec![self];
        let mut count = 0;
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }

        count
    }
}

impl<S> Drop for Trie<S> {
    // Frees nodes one at a time so a long word doesn't recurse once per symbol.
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode<S>> = self.root.children.drain().map(|(_, n)| n).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl<S> Default for Trie<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Trie<S> {
    /// Generates a new, empty `Trie` holding only its root.
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            words: 0,
        }
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether no word (not even the empty one) has been inserted.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes in the trie, including the root.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}

impl<S> Trie<S>
where
    S: Eq + Hash,
{
    /// Inserts a word given as a sequence of symbols, creating any missing edges along its path
    /// and marking the last node terminal. Inserting the same word again changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_tour::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert_symbols(*b"abc");
    ///
    /// assert!(trie.search_symbols(*b"abc"));
    /// assert!(!trie.search_symbols(*b"ab"));
    /// ```
    pub fn insert_symbols<I>(&mut self, word: I)
    where
        I: IntoIterator<Item = S>,
    {
        let mut node = &mut self.root;
        let mut depth = 0;
        for symbol in word {
            node = node.children.entry(symbol).or_default();
            depth += 1;
        }

        let is_new = !node.terminal;
        node.terminal = true;
        if is_new {
            self.words += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(is_new, len = depth, words = self.words, "inserted trie word");
        #[cfg(not(feature = "tracing"))]
        let _ = depth;
    }

    /// Returns `true` iff exactly this sequence was inserted before. A strict prefix of an
    /// inserted word is not a member.
    pub fn search_symbols<I>(&self, word: I) -> bool
    where
        I: IntoIterator<Item = S>,
    {
        self.find(word).is_some_and(|node| node.terminal)
    }

    /// Returns `true` iff some inserted word begins with `prefix`. Every word starts with the
    /// empty prefix, so that is only `true` for a non-empty trie.
    pub fn starts_with_symbols<I>(&self, prefix: I) -> bool
    where
        I: IntoIterator<Item = S>,
    {
        // Nothing is ever removed, so any node below the root leads to some terminal node.
        self.find(prefix)
            .is_some_and(|node| node.terminal || !node.children.is_empty())
    }

    /// Follows `word` from the root. `None` as soon as an edge is missing.
    fn find<I>(&self, word: I) -> Option<&TrieNode<S>>
    where
        I: IntoIterator<Item = S>,
    {
        word.into_iter()
            .try_fold(&self.root, |node, symbol| node.children.get(&symbol))
    }
}

impl Trie<char> {
    /// Inserts the characters of `word`. The empty string marks the root itself as terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_tour::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert!(!trie.search(""));
    ///
    /// trie.insert("");
    /// assert!(trie.search(""));
    /// assert_eq!(trie.node_count(), 1);
    /// ```
    pub fn insert(&mut self, word: &str) {
        self.insert_symbols(word.chars());
    }

    /// Whether exactly `word` was inserted.
    pub fn search(&self, word: &str) -> bool {
        self.search_symbols(word.chars())
    }

    /// Whether some inserted word begins with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.starts_with_symbols(prefix.chars())
    }
}

impl<'a> Extend<&'a str> for Trie<char> {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for Trie<char> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }
}
