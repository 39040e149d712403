// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by bounds construction, configuration and insertion.

use glam::DVec3;

/// Errors produced by [`Octree`](crate::Octree) and [`Aabb3D`](crate::Aabb3D).
///
/// Construction errors (`InvalidExtent`, `ZeroCapacity`, `InvalidMinExtent`) are
/// programmer errors; the panicking constructors report them by panicking with
/// this error's message. `OutOfBounds` is the only error an insertion can produce.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum OctreeError {
    /// The element's position is not inside the root bounds (or is NaN).
    ///
    /// The tree is left unchanged and the element is dropped.
    #[error("position {position} lies outside the octree bounds")]
    OutOfBounds {
        /// The rejected position.
        position: DVec3,
    },
    /// A box with a non-finite corner or a non-positive extent.
    #[error("invalid bounds: origin {origin} and size {size} must be finite with positive extents")]
    InvalidExtent {
        /// Requested minimum corner.
        origin: DVec3,
        /// Requested extents.
        size: DVec3,
    },
    /// A leaf capacity of zero.
    #[error("leaf capacity must be greater than zero")]
    ZeroCapacity,
    /// A negative or NaN minimum subdivision extent.
    #[error("minimum subdivision extent must be a non-negative number, got {min_extent}")]
    InvalidMinExtent {
        /// The rejected value.
        min_extent: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_values() {
        let err = OctreeError::OutOfBounds {
            position: DVec3::new(1.0, 2.0, 3.0),
        };
        let msg = err.to_string();
        assert!(msg.contains("outside"), "unexpected message: {msg}");
        assert!(msg.contains('3'), "position missing from message: {msg}");

        let msg = OctreeError::InvalidMinExtent { min_extent: -1.5 }.to_string();
        assert!(msg.contains("-1.5"), "value missing from message: {msg}");
    }
}
