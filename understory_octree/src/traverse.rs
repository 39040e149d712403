// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy pre-order traversal.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::tree::Node;

/// Pre-order iterator over every node of an [`Octree`](crate::Octree).
///
/// A node is yielded before its children, and children are visited in
/// canonical [`Octant`](crate::Octant) order. The pending stack grows with tree
/// depth (at most seven siblings per level), not with the number of nodes.
///
/// Created by [`Octree::traverse`](crate::Octree::traverse).
pub struct Traverse<'a, E> {
    stack: Vec<&'a Node<E>>,
}

impl<'a, E> Traverse<'a, E> {
    pub(crate) fn new(root: &'a Node<E>) -> Self {
        let mut stack = Vec::with_capacity(16);
        stack.push(root);
        Self { stack }
    }
}

impl<'a, E> Iterator for Traverse<'a, E> {
    type Item = &'a Node<E>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(children) = node.children() {
            // Reversed so the first octant is popped first.
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}

impl<E> FusedIterator for Traverse<'_, E> {}

impl<E> core::fmt::Debug for Traverse<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Traverse")
            .field("pending", &self.stack.len())
            .finish_non_exhaustive()
    }
}
