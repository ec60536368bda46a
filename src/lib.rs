//! This crate is a small tour of fundamental data structures, mostly for
//! educational purposes. Most of the tour leans on the standard library's
//! containers directly (see the `tour` binary); the two structures with
//! real invariants of their own live here.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a tree where every `Node` stores a value and
//! up to two child `Node`s. The invariants of the BST in [`bst`] are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value. Duplicates always go right.
//!
//! Visiting the left subtree, then the subtree root, then the right subtree
//! (an "in-order" traversal) yields the values in non-decreasing order.
//! Inserting takes `O(height)`. The tree never rebalances, so inserting
//! already-sorted values degrades it into a linked list of height `N`.
//!
//! ## Trie
//!
//! A [`trie::Trie`] (or prefix tree) stores words by sharing common prefixes.
//! Each edge is labeled with one symbol and a node is marked terminal when an
//! inserted word ends there. Inserting and searching a word of length `m`
//! are both `O(m)`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
pub mod trie;
