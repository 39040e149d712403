// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the Understory demos.
//!
//! - [`walk`]: a random-walk producer of spheres.
//! - [`camera`]: the projection used to draw the 3D tree in 2D.
//! - [`scene`]: projected wireframes and SVG output.
//!
//! Run:
//! - `cargo run -p understory_demos --example octree_basics`
//! - `cargo run -p understory_demos --example random_walk -- out.svg`

pub mod camera;
pub mod scene;
pub mod walk;

pub use camera::Camera;
pub use scene::{Scene, SceneOptions, render_svg};
pub use walk::RandomWalk;
