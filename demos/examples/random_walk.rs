// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random-walk wireframe.
//!
//! Index a few thousand spheres from a random walk and write rotated views of
//! the tree as SVG frames.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example random_walk -- out.svg`

use std::path::PathBuf;

use glam::DVec3;
use kurbo::Size;
use understory_demos::{Camera, RandomWalk, SceneOptions, render_svg};
use understory_octree::{Aabb3D, Octree};

const WORLD: f64 = 1000.0;
const SAMPLES: usize = 5000;
const RADIUS: f64 = 5.0;
const CAPACITY: usize = 10;
const STEP: f64 = 10.0;
const FRAMES: usize = 4;

fn main() -> std::io::Result<()> {
    env_logger::init();
    let out = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("octree.svg"), PathBuf::from);

    let world = Aabb3D::from_center_half_extents(DVec3::ZERO, DVec3::splat(WORLD / 2.0));
    let mut tree = Octree::new(world, CAPACITY);
    let walk = RandomWalk::seeded(world, DVec3::splat(STEP), 0x5EED);
    let stored = tree.insert_all(walk.spheres(RADIUS).take(SAMPLES));
    log::info!(
        "stored {stored} spheres in {} nodes, {} leaves, depth {}",
        tree.node_count(),
        tree.leaves().count(),
        tree.max_depth_reached()
    );

    let mut camera = Camera::new(Size::new(WORLD, WORLD));
    let options = SceneOptions {
        draw_empty_octants: false,
        ..SceneOptions::default()
    };
    for frame in 0..FRAMES {
        let path = if frame == 0 {
            out.clone()
        } else {
            out.with_extension(format!("{frame}.svg"))
        };
        std::fs::write(&path, render_svg(&tree, &camera, options))?;
        log::info!("wrote {}", path.display());
        camera.rotate_degrees(15.0, 20.0, 5.0);
    }
    Ok(())
}
