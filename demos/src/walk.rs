// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random-walk producer feeding spheres into a tree.

use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use understory_octree::{Aabb3D, Sphere};

/// A random walk confined to a world box.
///
/// Starts at a uniformly random point. Each step moves every axis by
/// `(u * step + 1)` in a random direction, with `u` uniform in `[0, 1)`, and
/// clamps the result back into the box so every yielded position can be
/// inserted into a tree over the same box.
#[derive(Clone, Debug)]
pub struct RandomWalk<R = StdRng> {
    rng: R,
    world: Aabb3D,
    step: DVec3,
    position: DVec3,
}

impl RandomWalk<StdRng> {
    /// A reproducible walk driven by a seeded [`StdRng`].
    pub fn seeded(world: Aabb3D, step: DVec3, seed: u64) -> Self {
        Self::new(world, step, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomWalk<R> {
    /// Start a walk with the given generator.
    pub fn new(world: Aabb3D, step: DVec3, mut rng: R) -> Self {
        let t = DVec3::new(rng.random(), rng.random(), rng.random());
        let position = world.clamp_point(world.origin() + world.size() * t);
        Self {
            rng,
            world,
            step,
            position,
        }
    }

    /// Current position.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Turn the walk into spheres of a fixed radius centered on each step.
    pub fn spheres(self, radius: f64) -> impl Iterator<Item = Sphere> {
        self.map(move |center| Sphere::new(center, radius))
    }

    fn delta(&mut self, step: f64) -> f64 {
        let magnitude = self.rng.random::<f64>() * step + 1.0;
        if self.rng.random_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }
}

impl<R: Rng> Iterator for RandomWalk<R> {
    type Item = DVec3;

    fn next(&mut self) -> Option<DVec3> {
        let delta = DVec3::new(
            self.delta(self.step.x),
            self.delta(self.step.y),
            self.delta(self.step.z),
        );
        self.position = self.world.clamp_point(self.position + delta);
        Some(self.position)
    }
}
