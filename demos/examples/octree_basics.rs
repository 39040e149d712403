// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octree basics.
//!
//! Fill a leaf to capacity, overflow it, and walk the resulting nodes.
//!
//! Run:
//! - `cargo run -p understory_demos --example octree_basics`

use glam::DVec3;
use understory_octree::{Aabb3D, Octree, Sphere};

fn main() {
    let world = Aabb3D::from_xyz_whd(-50.0, -50.0, -50.0, 100.0, 100.0, 100.0);
    let mut tree = Octree::new(world, 4);

    for c in [1.0, 2.0, 3.0, 4.0] {
        tree.insert(Sphere::new(DVec3::splat(c), 1.0)).unwrap();
    }
    println!("before overflow: {} node(s)", tree.node_count());

    // The fifth sphere splits the root
    tree.insert(Sphere::new(DVec3::splat(-10.0), 1.0)).unwrap();
    for node in tree.traverse() {
        println!(
            "depth {} origin {} leaf={} elements={}",
            node.depth(),
            node.bounds().origin(),
            node.is_leaf(),
            node.elements().len()
        );
    }
    assert_eq!(tree.node_count(), 9, "root plus eight leaves");

    // Out-of-bounds insertions are rejected
    let err = tree
        .insert(Sphere::new(DVec3::new(50.0, 0.0, 0.0), 1.0))
        .unwrap_err();
    println!("rejected: {err}");
}
