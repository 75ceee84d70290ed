//! A mutable, link-based BST. Every node owns its children through a `Box` so
//! the tree never needs parent pointers. Mutations walk a cursor over the
//! owning links instead.
//!
//! The tree does not rebalance itself while values are added. Call
//! [`OrderedTree::rebalance`] to rebuild it with minimum height.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{OrderedTree, TreeError};
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.add(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Duplicates are kept.
//! tree.add(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing a value returns it.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Ok(1));
//!
//! // Removing something that isn't there is an error.
//! assert_eq!(tree.remove(&1), Err(TreeError::NotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::error::{TreeError, TreeResult};
use crate::iter::{InOrder, LevelOrder, PostOrder, PreOrder};

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    /// The link a search for something that compared as `direction` against
    /// this node continues down. Everything that isn't `Less` goes right.
    fn child(&self, direction: Ordering) -> Option<&Self> {
        match direction {
            Ordering::Less => self.left.as_deref(),
            _ => self.right.as_deref(),
        }
    }

    fn child_mut(&mut self, direction: Ordering) -> &mut Link<T> {
        match direction {
            Ordering::Less => &mut self.left,
            _ => &mut self.right,
        }
    }

    /// Removes the node owned by `link` and returns its value. A node with two
    /// children stays in place and takes the largest value of its left
    /// subtree instead.
    fn unlink(link: &mut Link<T>) -> Option<T> {
        let node = link.as_mut()?;
        if node.left.is_some() && node.right.is_some() {
            let largest = Self::take_largest(&mut node.left)?;
            return Some(mem::replace(&mut node.data, largest));
        }

        let node = link.take()?;
        let Node { data, left, right } = *node;
        *link = left.or(right);
        Some(data)
    }

    /// Splices the rightmost node out of the subtree owned by `link`, handing
    /// its left child to its parent.
    fn take_largest(mut link: &mut Link<T>) -> Option<T> {
        while link.as_ref().is_some_and(|node| node.right.is_some()) {
            link = match link {
                Some(node) => &mut node.right,
                None => return None,
            };
        }

        let largest = link.take()?;
        let Node { data, left, .. } = *largest;
        *link = left;
        Some(data)
    }

    /// Builds a minimum-height subtree for the index range `start..end` of a
    /// sorted sequence, pulling values from `items` in ascending order. Each
    /// subtree root is the middle index of its range, rounding down.
    fn from_sorted(items: &mut impl Iterator<Item = T>, start: usize, end: usize) -> Link<T> {
        if start >= end {
            return None;
        }

        let middle = (start + end - 1) / 2;
        let left = Self::from_sorted(items, start, middle);
        let data = items.next()?;
        let right = Self::from_sorted(items, middle + 1, end);
        Some(Box::new(Self { data, left, right }))
    }
}

/// Releases a subtree one node at a time so a degenerate tree can't overflow
/// the stack with nested `Box` drops.
fn release<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// A Binary Search Tree over totally ordered values. Values are stored as
/// they are added, duplicates included, with no automatic balancing.
pub struct OrderedTree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree stores no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        trace!(dropped = self.size, "clearing tree");
        release(self.root.take());
        self.size = 0;
    }

    /// Inserts `item` as a new leaf. Walking down from the root, values less
    /// than a node go left and everything else (duplicates included) goes
    /// right.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add("b");
    /// tree.add("a");
    /// tree.add("b");
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&"a", &"b", &"b"]);
    /// ```
    pub fn add(&mut self, item: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            let direction = item.cmp(&node.data);
            link = node.child_mut(direction);
        }

        *link = Some(Node::new_boxed(item));
        self.size += 1;
    }

    /// Potentially finds the stored value equal to `item`. If no node holds
    /// such a value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let tree = OrderedTree::from([2, 1, 3]);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match item.cmp(&node.data) {
                Ordering::Equal => return Some(&node.data),
                direction => current = node.child(direction),
            }
        }

        None
    }

    /// Whether a value equal to `item` is stored in the tree.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// Removes a value equal to `item` from the tree and returns it. When
    /// duplicates are stored, the first one met walking down from the root is
    /// removed.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no such value is stored. The tree is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{OrderedTree, TreeError};
    ///
    /// let mut tree = OrderedTree::from([5, 3, 8]);
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.remove(&5), Err(TreeError::NotFound));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, item: &T) -> TreeResult<T>
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        loop {
            let direction = match link.as_deref() {
                Some(node) => item.cmp(&node.data),
                None => {
                    trace!("remove: item not in tree");
                    return Err(TreeError::NotFound);
                }
            };
            if direction == Ordering::Equal {
                break;
            }

            link = match link {
                Some(node) => node.child_mut(direction),
                None => return Err(TreeError::NotFound),
            };
        }

        let removed = Node::unlink(link).ok_or(TreeError::NotFound)?;
        self.size -= 1;
        Ok(removed)
    }

    /// Overwrites the stored value equal to `item` with `new_item` and
    /// returns the old value, or `None` if nothing matched.
    ///
    /// The node isn't moved. If `new_item` doesn't belong where `item` was,
    /// later searches may miss it or its neighbours.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([(2, "b"), (1, "a")]);
    ///
    /// assert_eq!(tree.replace(&(1, "a"), (1, "z")), Some((1, "a")));
    /// assert_eq!(tree.replace(&(3, "c"), (3, "z")), None);
    /// assert!(tree.contains(&(1, "z")));
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match item.cmp(&node.data) {
                Ordering::Equal => return Some(mem::replace(&mut node.data, new_item)),
                direction => current = node.child_mut(direction).as_deref_mut(),
            }
        }

        None
    }

    /// The number of edges on the longest path from the root to a leaf. A
    /// single node has height `0` and an empty tree has height `-1`.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }

        height
    }

    /// Whether the tree is no taller than `2 * log2(n + 1) - 1` where `n` is
    /// the number of values reached by an in-order walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = (0..15).collect();
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        let n = self.inorder().count();
        let bound = 2.0 * ((n + 1) as f64).log2() - 1.0;
        self.height() as f64 <= bound
    }

    /// All stored values `x` with `low <= x <= high`, in ascending order.
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T>
    where
        T: Ord,
    {
        self.inorder()
            .filter(|&item| low <= item && item <= high)
            .collect()
    }

    /// Rebuilds the tree with the same values and the minimum possible
    /// height. The middle value of the sorted contents becomes the root and
    /// each half is rebuilt the same way.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = (1..=7).collect();
    /// tree.rebalance();
    ///
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.iter().next(), Some(&4));
    /// assert_eq!(tree.len(), 7);
    /// ```
    pub fn rebalance(&mut self) {
        let sorted = self.drain_sorted();
        let len = sorted.len();

        self.clear();
        self.root = Node::from_sorted(&mut sorted.into_iter(), 0, len);
        self.size = len;

        debug!(size = self.size, height = self.height(), "rebalanced tree");
    }

    /// The smallest stored value strictly greater than `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let tree = OrderedTree::from([10, 20, 30]);
    ///
    /// assert_eq!(tree.successor(&10), Some(&20));
    /// assert_eq!(tree.successor(&15), Some(&20));
    /// assert_eq!(tree.successor(&30), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut best: Option<&T> = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if node.data > *item {
                if best.map_or(true, |best| node.data < *best) {
                    best = Some(&node.data);
                }
                current = node.left.as_deref();
            } else {
                current = node.right.as_deref();
            }
        }

        best
    }

    /// The largest stored value strictly less than `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let tree = OrderedTree::from([10, 20, 30]);
    ///
    /// assert_eq!(tree.predecessor(&30), Some(&20));
    /// assert_eq!(tree.predecessor(&25), Some(&20));
    /// assert_eq!(tree.predecessor(&10), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut best: Option<&T> = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if node.data < *item {
                if best.map_or(true, |best| node.data > *best) {
                    best = Some(&node.data);
                }
                current = node.right.as_deref();
            } else {
                current = node.left.as_deref();
            }
        }

        best
    }

    /// Iterates over the values in ascending order.
    pub fn inorder(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref())
    }

    /// Iterates over the values root first, then the left subtree, then the
    /// right subtree.
    pub fn preorder(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root.as_deref())
    }

    /// Iterates over the values children first, root last.
    pub fn postorder(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root.as_deref())
    }

    /// Iterates over the values one level at a time starting at the root.
    pub fn levelorder(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root.as_deref())
    }

    /// Iterates over the values in the tree's general order, which is
    /// [preorder][Self::preorder].
    pub fn iter(&self) -> PreOrder<'_, T> {
        self.preorder()
    }

    /// Takes every value out of the tree in ascending order, leaving it with
    /// no root. `size` is left for the caller to fix.
    fn drain_sorted(&mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.size);
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        let mut current = self.root.take();
        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }

            let Some(mut node) = stack.pop() else {
                break;
            };
            current = node.right.take();
            sorted.push(node.data);
        }

        sorted
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = PreOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.preorder()
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OrderedTree<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

/// Draws the tree rotated 90 degrees counter-clockwise: the right subtree
/// above each node, the left subtree below, one `"| "` per level of depth.
///
/// ```text
/// | 8
/// 5
/// | 3
/// ```
impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step<'a, T> {
            Expand(&'a Node<T>, usize),
            Write(&'a Node<T>, usize),
        }

        let mut stack: Vec<Step<'_, T>> = self
            .root
            .as_deref()
            .map(|root| Step::Expand(root, 0))
            .into_iter()
            .collect();
        while let Some(step) = stack.pop() {
            match step {
                Step::Expand(node, depth) => {
                    stack.extend(node.left.as_deref().map(|left| Step::Expand(left, depth + 1)));
                    stack.push(Step::Write(node, depth));
                    stack.extend(
                        node.right
                            .as_deref()
                            .map(|right| Step::Expand(right, depth + 1)),
                    );
                }
                Step::Write(node, depth) => {
                    writeln!(f, "{}{}", "| ".repeat(depth), node.data)?;
                }
            }
        }

        Ok(())
    }
}
