// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elements stored in the octree.

use glam::DVec3;

/// Anything the octree can place by a single point.
///
/// The tree partitions elements by this position only; any extent the element
/// has (like a sphere's radius) is payload and plays no part in routing.
pub trait Positioned {
    /// Point used to pick the owning leaf.
    fn position(&self) -> DVec3;
}

impl Positioned for DVec3 {
    #[inline]
    fn position(&self) -> DVec3 {
        *self
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    #[inline]
    fn position(&self) -> DVec3 {
        (**self).position()
    }
}

/// A sphere, indexed by its center.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    /// Center point.
    pub center: DVec3,
    /// Radius, carried as payload.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere. Debug builds assert a non-negative radius.
    pub fn new(center: DVec3, radius: f64) -> Self {
        debug_assert!(radius >= 0.0, "sphere radius must be non-negative");
        Self { center, radius }
    }
}

impl Positioned for Sphere {
    #[inline]
    fn position(&self) -> DVec3 {
        self.center
    }
}
