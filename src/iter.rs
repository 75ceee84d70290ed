//! Traversals over an [`OrderedTree`][crate::OrderedTree].
//!
//! Every traversal keeps its own explicit stack (or queue) so walking a tree
//! shaped like a linked list never recurses. They borrow the tree, never
//! mutate it, and a fresh traversal starts every time one is requested.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::linked::Node;

/// Visits values in ascending order: left subtree, node, right subtree.
///
/// Created by [`OrderedTree::inorder`][crate::OrderedTree::inorder].
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    current: Option<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // Push the whole left spine before visiting anything.
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }

        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        Some(&node.data)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// Visits a node, then its full left subtree, then its full right subtree.
///
/// Created by [`OrderedTree::preorder`][crate::OrderedTree::preorder] and by
/// iterating over `&OrderedTree`.
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Right goes on first so the left subtree is finished before it.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.data)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// Visits the full left subtree, then the full right subtree, then the node.
///
/// Created by [`OrderedTree::postorder`][crate::OrderedTree::postorder].
pub struct PostOrder<'a, T> {
    /// Each entry records whether the node's children were already scheduled.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.data);
            }

            self.stack.push((node, true));
            self.stack
                .extend(node.right.as_deref().map(|right| (right, false)));
            self.stack.extend(node.left.as_deref().map(|left| (left, false)));
        }
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

/// Visits the tree breadth first, one level at a time, left to right.
///
/// Created by [`OrderedTree::levelorder`][crate::OrderedTree::levelorder].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some(&node.data)
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}
