mod bst;
mod trie;
