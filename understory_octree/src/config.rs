// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree configuration: leaf capacity and subdivision limits.

use crate::error::OctreeError;
use crate::types::Aabb3D;

/// Leaf capacity used by [`OctreeConfig::default`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Depth limit used by [`OctreeConfig::default`]. The root is at depth `0`.
pub const DEFAULT_MAX_DEPTH: u32 = 32;

/// Parameters controlling when leaves subdivide.
///
/// A leaf subdivides the first time it holds more than `capacity` elements,
/// unless it sits at `max_depth` or its children would be narrower than
/// `min_extent` on some axis. Leaves that may not subdivide keep accepting
/// elements past capacity, so clustered or coincident inputs cannot recurse
/// without bound.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OctreeConfig {
    /// Maximum number of elements a leaf holds before it subdivides. Must be non-zero.
    pub capacity: usize,
    /// Depth at which nodes stop subdividing.
    pub max_depth: u32,
    /// Smallest child extent a subdivision may produce. Must be non-negative.
    pub min_extent: f64,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl OctreeConfig {
    /// Configuration with the given capacity and default limits.
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_depth: DEFAULT_MAX_DEPTH,
            min_extent: 0.0,
        }
    }

    /// Replace the leaf capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replace the depth limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replace the minimum child extent.
    #[must_use]
    pub const fn with_min_extent(mut self, min_extent: f64) -> Self {
        self.min_extent = min_extent;
        self
    }

    /// Check that the configuration can build a tree.
    pub fn validate(&self) -> Result<(), OctreeError> {
        if self.capacity == 0 {
            return Err(OctreeError::ZeroCapacity);
        }
        if self.min_extent.is_nan() || self.min_extent < 0.0 {
            return Err(OctreeError::InvalidMinExtent {
                min_extent: self.min_extent,
            });
        }
        Ok(())
    }

    /// Whether a node with these bounds at this depth may subdivide.
    pub(crate) fn allows_split(&self, bounds: &Aabb3D, depth: u32) -> bool {
        depth < self.max_depth && bounds.size().min_element() * 0.5 >= self.min_extent
    }
}
