// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box geometry: half-open axis-aligned boxes and their octants.

use glam::{BVec3, DVec3};

use crate::error::OctreeError;

bitflags::bitflags! {
    /// One of the eight octants of a box.
    ///
    /// Each flag marks an axis on which the octant occupies the upper half.
    /// The raw bits double as the child index, so `Octant::empty()` is child `0`
    /// (lower on every axis) and `X | Y | Z` is child `7`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Octant: u8 {
        /// Upper half along x.
        const X = 0b0000_0001;
        /// Upper half along y.
        const Y = 0b0000_0010;
        /// Upper half along z.
        const Z = 0b0000_0100;
    }
}

impl Octant {
    /// All octants in canonical (child index) order.
    pub const ALL: [Self; 8] = [
        Self::from_bits_truncate(0),
        Self::from_bits_truncate(1),
        Self::from_bits_truncate(2),
        Self::from_bits_truncate(3),
        Self::from_bits_truncate(4),
        Self::from_bits_truncate(5),
        Self::from_bits_truncate(6),
        Self::from_bits_truncate(7),
    ];

    /// Child index of this octant, in `0..8`.
    #[inline]
    pub const fn index(self) -> usize {
        self.bits() as usize
    }

    /// Octant for a child index; `None` if `index >= 8`.
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_bits)
    }

    /// Per-axis selection: `upper` where this octant is in the upper half, `lower` elsewhere.
    #[inline]
    fn select(self, lower: DVec3, upper: DVec3) -> DVec3 {
        let mask = BVec3::new(
            self.contains(Self::X),
            self.contains(Self::Y),
            self.contains(Self::Z),
        );
        DVec3::select(mask, upper, lower)
    }
}

/// Axis-aligned box in 3D, stored as its minimum and exclusive maximum corners.
///
/// Membership is half-open: a point `p` is inside iff `min[i] <= p[i] < max[i]`
/// on every axis. Sibling octants therefore never share a point, and a point on
/// a split plane belongs to the upper octant.
///
/// Children share the parent's corners and center bit for bit, so subdivision
/// partitions the parent exactly even when the extents do not halve cleanly.
///
/// Boxes are validated on construction and immutable afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb3D {
    min: DVec3,
    max: DVec3,
}

impl Aabb3D {
    /// Create a box from its minimum corner and extents.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is non-finite or any extent is not strictly positive.
    /// Use [`Aabb3D::try_new`] to handle that case instead.
    #[track_caller]
    pub fn new(origin: DVec3, size: DVec3) -> Self {
        match Self::try_new(origin, size) {
            Ok(b) => b,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a box, reporting invalid extents as [`OctreeError::InvalidExtent`].
    pub fn try_new(origin: DVec3, size: DVec3) -> Result<Self, OctreeError> {
        if !size.cmpgt(DVec3::ZERO).all() {
            return Err(OctreeError::InvalidExtent { origin, size });
        }
        let b = Self {
            min: origin,
            max: origin + size,
        };
        b.validate().map_err(|_| OctreeError::InvalidExtent { origin, size })?;
        Ok(b)
    }

    /// Create a box from scalar origin and extents (`x, y, z, width, height, depth`).
    ///
    /// # Panics
    ///
    /// Same conditions as [`Aabb3D::new`].
    #[track_caller]
    pub fn from_xyz_whd(x: f64, y: f64, z: f64, w: f64, h: f64, d: f64) -> Self {
        Self::new(DVec3::new(x, y, z), DVec3::new(w, h, d))
    }

    /// Create a box from its center and half-extents.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Aabb3D::new`].
    #[track_caller]
    pub fn from_center_half_extents(center: DVec3, half_extents: DVec3) -> Self {
        Self::new(center - half_extents, half_extents * 2.0)
    }

    /// Check the finite/positive-extent invariant.
    ///
    /// Boxes built through the constructors always pass; deserialized boxes may not.
    pub fn validate(&self) -> Result<(), OctreeError> {
        let size = self.size();
        let valid = self.min.is_finite()
            && self.max.is_finite()
            && size.is_finite()
            && self.max.cmpgt(self.min).all();
        if valid {
            Ok(())
        } else {
            Err(OctreeError::InvalidExtent {
                origin: self.min,
                size,
            })
        }
    }

    /// Minimum corner.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.min
    }

    /// Extents along each axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Minimum corner (same as [`Aabb3D::origin`]).
    #[inline]
    pub fn min(&self) -> DVec3 {
        self.min
    }

    /// Exclusive maximum corner.
    #[inline]
    pub fn max(&self) -> DVec3 {
        self.max
    }

    /// Center, which is also the split point used by [`Aabb3D::subdivide`].
    #[inline]
    pub fn center(&self) -> DVec3 {
        self.min + self.size() * 0.5
    }

    /// Whether the point lies inside the half-open box. NaN coordinates never do.
    #[inline]
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmplt(self.max).all()
    }

    /// The octant of this box that a point falls into.
    ///
    /// Only meaningful for points inside the box; a point on a split plane goes
    /// to the upper side, matching [`Aabb3D::contains`] on the children.
    #[inline]
    pub fn octant_of(&self, point: DVec3) -> Octant {
        let upper = point.cmpge(self.center());
        let mut octant = Octant::empty();
        octant.set(Octant::X, upper.x);
        octant.set(Octant::Y, upper.y);
        octant.set(Octant::Z, upper.z);
        octant
    }

    /// Bisect every axis, returning the eight children in canonical octant order.
    ///
    /// On each axis the lower child spans `[min, center)` and the upper child
    /// `[center, max)`, using the same `center` as [`Aabb3D::octant_of`].
    pub fn subdivide(&self) -> [Self; 8] {
        let center = self.center();
        Octant::ALL.map(|octant| Self {
            min: octant.select(self.min, center),
            max: octant.select(center, self.max),
        })
    }

    /// The eight corners in canonical octant order.
    pub fn corners(&self) -> [DVec3; 8] {
        Octant::ALL.map(|octant| octant.select(self.min, self.max))
    }

    /// The twelve edges as `(start, end)` segments.
    ///
    /// Edges are grouped by axis (x, then y, then z) and within a group ordered
    /// by the octant of their start corner.
    pub fn edges(&self) -> [(DVec3, DVec3); 12] {
        let corners = self.corners();
        let mut edges = [(DVec3::ZERO, DVec3::ZERO); 12];
        let mut n = 0;
        for axis in [Octant::X, Octant::Y, Octant::Z] {
            for octant in Octant::ALL {
                if !octant.contains(axis) {
                    edges[n] = (corners[octant.index()], corners[(octant | axis).index()]);
                    n += 1;
                }
            }
        }
        edges
    }

    /// Clamp a point into the box.
    ///
    /// The exclusive upper bound maps to the largest value below it, so the
    /// result always satisfies [`Aabb3D::contains`]. NaN coordinates clamp to the origin.
    pub fn clamp_point(&self, point: DVec3) -> DVec3 {
        DVec3::new(
            clamp_half_open(point.x, self.min.x, self.max.x),
            clamp_half_open(point.y, self.min.y, self.max.y),
            clamp_half_open(point.z, self.min.z, self.max.z),
        )
    }
}

fn clamp_half_open(v: f64, lo: f64, hi: f64) -> f64 {
    // `f64::max` returns the non-NaN operand.
    v.max(lo).min(hi.next_down())
}
