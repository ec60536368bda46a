//! An unbalanced BST built from recursively owned, boxed children. Every `Node` owns its two
//! optional subtrees outright so the whole tree is dropped when the root goes out of scope.
//!
//! # Examples
//!
//! ```
//! use dsa_tour::bst::Node;
//!
//! let mut root = Node::new(10);
//! root.insert(5);
//! root.insert(15);
//! root.insert(12);
//!
//! // In-order traversal yields the values sorted.
//! let values: Vec<_> = root.iter().copied().collect();
//! assert_eq!(values, [5, 10, 12, 15]);
//!
//! // Duplicates are kept, not rejected.
//! root.insert(10);
//! let values: Vec<_> = root.iter().copied().collect();
//! assert_eq!(values, [5, 10, 10, 12, 15]);
//! ```

use std::cmp;
use std::iter::FusedIterator;

/// A node of a Binary Search Tree. The caller owns the root `Node` and every node exclusively
/// owns its children.
///
/// All values in the left subtree are less than `value`. All values in the right subtree are
/// greater than or equal to `value`.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a new leaf holding `value`. This is usually the root of a new tree.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Inserts `value` as a new leaf somewhere under this node. Values strictly less than a
    /// node's value go left, everything else (including equal values) goes right.
    ///
    /// This never rebalances, so it runs in `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_tour::bst::Node;
    ///
    /// let mut root = Node::new(2);
    /// root.insert(2);
    ///
    /// // Ties go right.
    /// assert!(root.left().is_none());
    /// assert_eq!(root.right().map(|n| *n.value()), Some(2));
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: cmp::Ord,
    {
        let mut node = self;
        let mut depth = 1;
        loop {
            let child = match value.cmp(&node.value) {
                cmp::Ordering::Less => &mut node.left,
                cmp::Ordering::Equal | cmp::Ordering::Greater => &mut node.right,
            };
            depth += 1;

            match child {
                Some(next) => node = &mut **next,
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(depth, "attached new bst leaf");
                    *child = Some(Box::new(Self::new(value)));
                    return;
                }
            }
        }
    }

    /// Returns `true` if some node under (or at) this node holds `value`. Follows the same
    /// routing as [`Node::insert`] so it runs in `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_tour::bst::Node;
    ///
    /// let mut root = Node::new(10);
    /// root.insert(5);
    ///
    /// assert!(root.contains(&5));
    /// assert!(!root.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        let mut node = Some(self);
        while let Some(n) = node {
            node = match value.cmp(&n.value) {
                cmp::Ordering::Less => n.left(),
                cmp::Ordering::Equal => return true,
                cmp::Ordering::Greater => n.right(),
            };
        }

        false
    }

    /// Number of nodes in this subtree, counting duplicates.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// height of 1.
    pub fn height(&self) -> usize {
        let mut stack = vec![(self, 1)];
        let mut height = 0;
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Lazily walks this subtree in order (left subtree, node, right subtree). Calling this again
    /// starts a fresh walk.
    pub fn iter(&self) -> InOrder<'_, T> {
        in_order(Some(self))
    }

    /// Eagerly visits every value in order, calling `f` on each one as it is reached.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_tour::bst::Node;
    ///
    /// let mut root = Node::new(3);
    /// root.insert(1);
    /// root.insert(2);
    ///
    /// let mut seen = String::new();
    /// root.for_each_in_order(|v| seen.push_str(&v.to_string()));
    /// assert_eq!(seen, "123");
    /// ```
    pub fn for_each_in_order<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(f);
    }
}

impl<T> Drop for Node<T> {
    // Frees the subtrees one node at a time so a degenerate tree doesn't recurse per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.left.take().into_iter().collect();
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<'a, T> IntoIterator for &'a Node<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Starts an in-order walk from an optional node. An empty (`None`) tree yields nothing.
///
/// # Examples
///
/// ```
/// use dsa_tour::bst::{in_order, Node};
///
/// assert_eq!(in_order::<i32>(None).count(), 0);
///
/// let root = Node::new(7);
/// assert_eq!(in_order(Some(&root)).collect::<Vec<_>>(), [&7]);
/// ```
pub fn in_order<T>(node: Option<&Node<T>>) -> InOrder<'_, T> {
    let mut iter = InOrder { stack: Vec::new() };
    iter.push_left_spine(node);
    iter
}

/// In-order iterator over the values of a BST. Holds the path of nodes whose value hasn't been
/// yielded yet, so it never uses more than `O(height)` memory.
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

/// Manual implementation of `Clone` so `T` doesn't have to be `Clone`. Cloning a partially
/// consumed iterator resumes from the same spot.
impl<T> Clone for InOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> InOrder<'a, T> {
    /// Pushes `node` and then each of its left descendants.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}
