//! An unbalanced BST that owns its nodes through `Box`es. Every operation descends from the root
//! by comparison, and structural changes hand the (possibly new) subtree root back up so the
//! parent can re-link it. No node knows its parent.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.depth(), 0);
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(2));
//! assert!(tree.insert(1));
//! assert!(tree.insert(3));
//!
//! // Equal values are only ever stored once.
//! assert!(!tree.insert(2));
//!
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! assert_eq!(tree.depth(), 2);
//!
//! // Deleting a value returns it.
//! assert_eq!(tree.delete(&2), Some(2));
//! assert_eq!(tree.delete(&2), None);
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 3]);
//! ```

use std::cmp;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use log::trace;

use crate::diagram::Diagram;

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree holding a set of values. No rebalancing happens, so the shape of the
/// tree is entirely decided by insertion order: inserting sorted input builds a tree as deep as
/// it is long.
#[derive(Clone)]
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    // Dropping `Box<Node>`s directly would recurse once per level, which a tree built from
    // sorted input has as many of as it has values. Detach the children first so each node is
    // dropped as a leaf.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root `Node`, if there is one. Mostly useful for looking at the shape of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.value(), &2);
    /// assert_eq!(root.left().map(|n| n.value()), Some(&1));
    /// assert_eq!(root.right().map(|n| n.value()), Some(&3));
    /// ```
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// depth of 0 and a lone root has a depth of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.depth(), 0);
    ///
    /// // Ascending input is the worst case.
    /// tree.extend(1..=4);
    /// assert_eq!(tree.depth(), 4);
    /// ```
    pub fn depth(&self) -> usize {
        self.root().map_or(0, Node::depth)
    }

    /// Visits the left subtree, then the node, then the right subtree. Because of the BST
    /// invariant this yields every value once, in ascending order. Each call starts a fresh
    /// traversal.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root(), self.len)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }

    /// A [`Display`][fmt::Display]able drawing of the tree, one level per pair of lines.
    pub fn diagram(&self) -> Diagram<'_, T> {
        Diagram::new(self)
    }
}

impl<T> OrderedTree<T>
where
    T: cmp::Ord,
{
    /// Inserts `value` into the tree. If an equal value is already stored the tree is left
    /// untouched and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert("b"));
    /// assert!(tree.insert("a"));
    /// assert!(!tree.insert("b"));
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let (root, inserted) = Node::insert(self.root.take(), value);
        self.root = Some(root);
        if inserted {
            self.len += 1;
            trace!("linked a new leaf, {} values stored", self.len);
        }
        inserted
    }

    /// Deletes the value equal to `value` from the tree and returns it. If the tree does not
    /// contain such a value, nothing happens.
    ///
    /// A node with two children stays where it is: it takes over the value of its in-order
    /// successor and the successor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [5, 3, 7, 6, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&5), Some(5));
    /// assert_eq!(tree.delete(&42), None);
    ///
    /// // 6 was the smallest value to the right of 5 so it moved into the root.
    /// assert_eq!(tree.root().map(|n| n.value()), Some(&6));
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let root = self.root.take()?;
        let (root, deleted) = root.delete(value);
        self.root = root;
        if deleted.is_some() {
            self.len -= 1;
            trace!("unlinked a node, {} values stored", self.len);
        }
        deleted
    }

    /// Whether a value equal to `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        let mut link = self.root();
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                cmp::Ordering::Less => node.left(),
                cmp::Ordering::Equal => return true,
                cmp::Ordering::Greater => node.right(),
            };
        }
        false
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: cmp::Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Builds the tree by inserting the values in iteration order, so the order still decides the
/// shape of the tree.
impl<T> FromIterator<T> for OrderedTree<T>
where
    T: cmp::Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// A single value in the tree along with the subtrees holding the values smaller
/// ([`left`][Node::left]) and larger ([`right`][Node::right]) than it.
#[derive(Clone)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the subtree holding smaller values.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the subtree holding larger values.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Depth of the subtree rooted at this node. A node without children has a depth of 1.
    pub fn depth(&self) -> usize {
        let left = self.left().map_or(0, Self::depth);
        let right = self.right().map_or(0, Self::depth);
        1 + left.max(right)
    }

    /// Unlinks the smallest node of this subtree. Returns its value and whatever should take this
    /// subtree's place.
    fn delete_smallest(mut self: Box<Self>) -> (T, Link<T>) {
        match self.left.take() {
            None => {
                let Node { value, right, .. } = *self;
                (value, right)
            }
            Some(left) => {
                let (smallest, new_left) = left.delete_smallest();
                self.left = new_left;
                (smallest, Some(self))
            }
        }
    }
}

impl<T> Node<T>
where
    T: cmp::Ord,
{
    /// Inserts `value` somewhere in the subtree at `link`, creating a node when the descent falls
    /// off the bottom of the tree. Returns the root of the subtree and whether a node was added.
    fn insert(link: Link<T>, value: T) -> (Box<Self>, bool) {
        let mut node = match link {
            None => return (Self::new_boxed(value), true),
            Some(node) => node,
        };

        let inserted = match value.cmp(&node.value) {
            cmp::Ordering::Less => {
                let (new_left, inserted) = Self::insert(node.left.take(), value);
                node.left = Some(new_left);
                inserted
            }
            cmp::Ordering::Equal => false,
            cmp::Ordering::Greater => {
                let (new_right, inserted) = Self::insert(node.right.take(), value);
                node.right = Some(new_right);
                inserted
            }
        };

        (node, inserted)
    }

    /// Deletes `value` from this subtree. Returns what should be linked in place of this node
    /// along with the deleted value, if one was found.
    fn delete(mut self: Box<Self>, value: &T) -> (Link<T>, Option<T>) {
        match value.cmp(&self.value) {
            cmp::Ordering::Less => {
                let deleted = match self.left.take() {
                    None => None,
                    Some(left) => {
                        let (new_left, deleted) = left.delete(value);
                        self.left = new_left;
                        deleted
                    }
                };
                (Some(self), deleted)
            }
            cmp::Ordering::Greater => {
                let deleted = match self.right.take() {
                    None => None,
                    Some(right) => {
                        let (new_right, deleted) = right.delete(value);
                        self.right = new_right;
                        deleted
                    }
                };
                (Some(self), deleted)
            }
            cmp::Ordering::Equal => match (self.left.take(), self.right.take()) {
                (None, None) => (None, Some(self.value)),
                (Some(child), None) | (None, Some(child)) => (Some(child), Some(self.value)),

                // With two children this node stays in place and takes over its successor's
                // value. The successor has no left child so unlinking it is one of the cases
                // above.
                (Some(left), Some(right)) => {
                    let (successor, new_right) = right.delete_smallest();
                    trace!("promoted the in-order successor of a node with two children");
                    let deleted = mem::replace(&mut self.value, successor);
                    self.left = Some(left);
                    self.right = new_right;
                    (Some(self), Some(deleted))
                }
            },
        }
    }
}

/// Iterator over the values of an [`OrderedTree`] in ascending order. Created by
/// [`OrderedTree::in_order`].
///
/// Only the path down to the next value is kept around, so this holds at most
/// [`depth`][OrderedTree::depth] node references at a time.
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<T> Clone for InOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> InOrder<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for InOrder<'_, T> {}
impl<T> FusedIterator for InOrder<'_, T> {}
