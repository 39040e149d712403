// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: nodes, insertion, subdivision.

use alloc::boxed::Box;
use alloc::vec::Vec;
use glam::DVec3;

use crate::config::OctreeConfig;
use crate::element::Positioned;
use crate::error::OctreeError;
use crate::traverse::Traverse;
use crate::types::{Aabb3D, Octant};

/// A node of the octree: either a leaf holding elements or an internal node
/// with exactly eight children covering its bounds.
#[derive(Clone, Debug)]
pub struct Node<E> {
    bounds: Aabb3D,
    depth: u32,
    kind: Kind<E>,
}

#[derive(Clone, Debug)]
enum Kind<E> {
    Leaf(Vec<E>),
    Internal(Box<[Node<E>; 8]>),
}

impl<E> Node<E> {
    fn leaf(bounds: Aabb3D, depth: u32) -> Self {
        Self {
            bounds,
            depth,
            kind: Kind::Leaf(Vec::new()),
        }
    }

    /// Region covered by this node.
    #[inline]
    pub fn bounds(&self) -> Aabb3D {
        self.bounds
    }

    /// Distance from the root, which is at depth `0`.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether this node stores elements directly.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, Kind::Leaf(_))
    }

    /// Elements stored in this node, in insertion order. Always empty for internal nodes.
    pub fn elements(&self) -> &[E] {
        match &self.kind {
            Kind::Leaf(elements) => elements,
            Kind::Internal(_) => &[],
        }
    }

    /// The eight children in canonical octant order, if this node has subdivided.
    pub fn children(&self) -> Option<&[Self; 8]> {
        match &self.kind {
            Kind::Leaf(_) => None,
            Kind::Internal(children) => Some(children),
        }
    }

    /// The child covering one octant, if this node has subdivided.
    pub fn child(&self, octant: Octant) -> Option<&Self> {
        self.children().map(|children| &children[octant.index()])
    }
}

impl<E: Positioned> Node<E> {
    fn insert(&mut self, element: E, config: &OctreeConfig) {
        match &mut self.kind {
            Kind::Internal(children) => {
                let octant = self.bounds.octant_of(element.position());
                children[octant.index()].insert(element, config);
            }
            Kind::Leaf(elements) => {
                elements.push(element);
                let len = elements.len();
                if len <= config.capacity {
                    return;
                }
                if config.allows_split(&self.bounds, self.depth) {
                    self.split(config);
                } else if len == config.capacity + 1 {
                    log::warn!(
                        "leaf at depth {} over capacity ({} > {}); subdivision limit reached for {:?}",
                        self.depth,
                        len,
                        config.capacity,
                        self.bounds
                    );
                }
            }
        }
    }

    /// Replace this leaf with eight leaves and move its elements into them.
    ///
    /// The node only becomes internal once every element has been placed.
    fn split(&mut self, config: &OctreeConfig) {
        let elements = match &mut self.kind {
            Kind::Leaf(elements) => core::mem::take(elements),
            Kind::Internal(_) => return,
        };
        log::debug!(
            "splitting node at depth {} holding {} elements",
            self.depth,
            elements.len()
        );
        let depth = self.depth + 1;
        let mut children = Box::new(self.bounds.subdivide().map(|b| Self::leaf(b, depth)));
        for element in elements {
            let octant = self.bounds.octant_of(element.position());
            children[octant.index()].insert(element, config);
        }
        self.kind = Kind::Internal(children);
    }
}

/// A capacity-driven octree over a fixed bounding box.
///
/// Elements are routed by their [`Positioned::position`]. Leaves hold up to
/// [`OctreeConfig::capacity`] elements; the insertion that exceeds it splits the
/// leaf into eight children and redistributes its elements. Nodes never merge.
#[derive(Clone)]
pub struct Octree<E> {
    root: Node<E>,
    config: OctreeConfig,
    len: usize,
}

impl<E> core::fmt::Debug for Octree<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Octree")
            .field("bounds", &self.root.bounds)
            .field("config", &self.config)
            .field("len", &self.len)
            .field("nodes", &self.node_count())
            .finish_non_exhaustive()
    }
}

impl<E> Octree<E> {
    /// Create an empty tree over `bounds` with the given leaf capacity and default limits.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or `bounds` is invalid.
    /// Use [`Octree::try_new`] to handle that case instead.
    #[track_caller]
    pub fn new(bounds: Aabb3D, capacity: usize) -> Self {
        match Self::try_new(bounds, capacity) {
            Ok(tree) => tree,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create an empty tree, reporting a zero capacity or invalid bounds as an error.
    pub fn try_new(bounds: Aabb3D, capacity: usize) -> Result<Self, OctreeError> {
        Self::with_config(bounds, OctreeConfig::new(capacity))
    }

    /// Create an empty tree with explicit subdivision limits.
    pub fn with_config(bounds: Aabb3D, config: OctreeConfig) -> Result<Self, OctreeError> {
        bounds.validate()?;
        config.validate()?;
        Ok(Self {
            root: Node::leaf(bounds, 0),
            config,
            len: 0,
        })
    }

    /// Bounds of the root node.
    #[inline]
    pub fn bounds(&self) -> Aabb3D {
        self.root.bounds
    }

    /// Configuration the tree was built with.
    #[inline]
    pub fn config(&self) -> &OctreeConfig {
        &self.config
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> &Node<E> {
        &self.root
    }

    /// Number of elements stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no element has been stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Visit every node, internal and leaf, in pre-order.
    ///
    /// Each call starts an independent pass; see [`Traverse`].
    pub fn traverse(&self) -> Traverse<'_, E> {
        Traverse::new(&self.root)
    }

    /// Leaf nodes in traversal order.
    pub fn leaves(&self) -> impl Iterator<Item = &Node<E>> + '_ {
        self.traverse().filter(|node| node.is_leaf())
    }

    /// All stored elements in traversal order.
    pub fn elements(&self) -> impl Iterator<Item = &E> + '_ {
        self.leaves().flat_map(|node| node.elements().iter())
    }

    /// Total number of nodes, internal and leaf.
    pub fn node_count(&self) -> usize {
        self.traverse().count()
    }

    /// Depth of the deepest node.
    pub fn max_depth_reached(&self) -> u32 {
        self.traverse().map(Node::depth).max().unwrap_or(0)
    }

    /// Drop every element and collapse back to a single empty root leaf.
    pub fn clear(&mut self) {
        self.root = Node::leaf(self.root.bounds, 0);
        self.len = 0;
    }

    /// The leaf whose bounds own `position`, or `None` if it is outside the tree.
    pub fn find_leaf(&self, position: DVec3) -> Option<&Node<E>> {
        if !self.root.bounds.contains(position) {
            return None;
        }
        let mut node = &self.root;
        while let Some(children) = node.children() {
            node = &children[node.bounds.octant_of(position).index()];
        }
        Some(node)
    }
}

impl<E: Positioned> Octree<E> {
    /// Insert an element into the leaf owning its position, subdividing on overflow.
    ///
    /// Returns [`OctreeError::OutOfBounds`] and leaves the tree untouched if the
    /// position is outside the root bounds (the root's upper faces are exclusive).
    /// Callers feeding moving objects should clamp with [`Aabb3D::clamp_point`] first.
    pub fn insert(&mut self, element: E) -> Result<(), OctreeError> {
        let position = element.position();
        if !self.root.bounds.contains(position) {
            return Err(OctreeError::OutOfBounds { position });
        }
        self.root.insert(element, &self.config);
        self.len += 1;
        Ok(())
    }

    /// Insert every element, skipping those outside the bounds.
    ///
    /// Returns how many were stored.
    pub fn insert_all<I: IntoIterator<Item = E>>(&mut self, elements: I) -> usize {
        let mut stored = 0;
        for element in elements {
            match self.insert(element) {
                Ok(()) => stored += 1,
                Err(err) => log::debug!("skipping element: {err}"),
            }
        }
        stored
    }
}
