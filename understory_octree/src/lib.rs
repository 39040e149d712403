// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_octree --heading-base-level=0

//! Understory Octree: a capacity-driven 3D octree over points and spheres.
//!
//! Understory Octree partitions a fixed world box so that spatial questions
//! ("which region holds which objects") stay cheap as the object count grows.
//!
//! - Insert elements located by a single point (see [`Positioned`]); [`Sphere`] is provided.
//! - Leaves subdivide into eight octants the first time they exceed their capacity.
//! - Walk every node, internal and leaf, lazily and in a deterministic order with [`Octree::traverse`].
//!
//! The crate only indexes. It does not remove, move, or rebalance elements, and it
//! has no nearest-neighbour queries. Rendering and projection live with the caller;
//! [`Aabb3D::edges`] exists so that callers can draw region wireframes.
//!
//! # Example
//!
//! ```rust
//! use understory_octree::{Aabb3D, Octant, Octree, Sphere};
//! use understory_octree::glam::DVec3;
//!
//! let world = Aabb3D::from_xyz_whd(-50.0, -50.0, -50.0, 100.0, 100.0, 100.0);
//! let mut tree = Octree::new(world, 4);
//!
//! for c in [1.0, 2.0, 3.0, 4.0] {
//!     tree.insert(Sphere::new(DVec3::splat(c), 1.0))?;
//! }
//! assert!(tree.root().is_leaf());
//!
//! // The fifth sphere overflows the root, which splits into eight leaves.
//! tree.insert(Sphere::new(DVec3::splat(-10.0), 1.0))?;
//! assert_eq!(tree.traverse().count(), 9);
//!
//! let upper = tree.root().child(Octant::X | Octant::Y | Octant::Z).unwrap();
//! assert_eq!(upper.elements().len(), 4);
//! # Ok::<(), understory_octree::OctreeError>(())
//! ```
//!
//! ## Bounds and octants
//!
//! [`Aabb3D`] is half-open: the lower faces belong to a box, the upper faces do not.
//! Siblings therefore never share a point, and a point exactly on a split plane is
//! owned by the upper octant. The same rule applies to the root, so a point on the
//! world's upper faces is rejected:
//!
//! ```rust
//! use understory_octree::{Aabb3D, Octree, OctreeError};
//! use understory_octree::glam::DVec3;
//!
//! let world = Aabb3D::from_xyz_whd(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
//! let mut tree: Octree<DVec3> = Octree::new(world, 8);
//!
//! let outside = DVec3::new(10.0, 5.0, 5.0);
//! assert_eq!(
//!     tree.insert(outside),
//!     Err(OctreeError::OutOfBounds { position: outside })
//! );
//! // Clamping maps the upper face just inside.
//! assert!(tree.insert(world.clamp_point(outside)).is_ok());
//! ```
//!
//! Children are ordered by [`Octant`], one bit per axis set when the child occupies
//! the upper half of that axis. Traversal is pre-order in that order.
//!
//! ## Subdivision limits
//!
//! Many coincident positions would otherwise split forever. [`OctreeConfig`] caps the
//! depth (default [`DEFAULT_MAX_DEPTH`]) and optionally the smallest child extent;
//! leaves that hit a limit keep accepting elements past capacity.
//!
//! ## Threading
//!
//! Insertion takes `&mut self` and traversal `&self`, so a tree is never observed
//! half-split. Share it across producers behind a lock of your choice.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod element;
pub mod error;
pub mod traverse;
pub mod tree;
pub mod types;

pub use config::{DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH, OctreeConfig};
pub use element::{Positioned, Sphere};
pub use error::OctreeError;
pub use traverse::Traverse;
pub use tree::{Node, Octree};
pub use types::{Aabb3D, Octant};

pub use glam;
