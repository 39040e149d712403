// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::DVec3;
use understory_octree::{Aabb3D, Octree, OctreeConfig, Sphere};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    fn next_unit(&mut self) -> DVec3 {
        DVec3::new(self.next_f64(), self.next_f64(), self.next_f64())
    }
}

fn world() -> Aabb3D {
    Aabb3D::from_center_half_extents(DVec3::ZERO, DVec3::splat(500.0))
}

fn gen_uniform_spheres(count: usize) -> Vec<Sphere> {
    let w = world();
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let p = w.clamp_point(w.origin() + w.size() * rng.next_unit());
            Sphere::new(p, 5.0)
        })
        .collect()
}

fn gen_clustered_spheres(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Sphere> {
    let w = world();
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let centers: Vec<DVec3> = (0..n_clusters)
        .map(|_| w.origin() + w.size() * rng.next_unit())
        .collect();
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for c in centers {
        for _ in 0..per_cluster {
            let offset = (rng.next_unit() - DVec3::splat(0.5)) * spread;
            out.push(Sphere::new(w.clamp_point(c + offset), 5.0));
        }
    }
    out
}

// Random walk with unit-to-eleven steps, like the demo producer.
fn gen_walk_spheres(count: usize) -> Vec<Sphere> {
    let w = world();
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let mut pos = w.clamp_point(w.origin() + w.size() * rng.next_unit());
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let mag = rng.next_unit() * 10.0 + DVec3::ONE;
        let sign = DVec3::new(
            if rng.next_u64() & 1 == 0 { 1.0 } else { -1.0 },
            if rng.next_u64() & 1 == 0 { 1.0 } else { -1.0 },
            if rng.next_u64() & 1 == 0 { 1.0 } else { -1.0 },
        );
        pos = w.clamp_point(pos + mag * sign);
        out.push(Sphere::new(pos, 5.0));
    }
    out
}

fn build(spheres: &[Sphere], capacity: usize) -> Octree<Sphere> {
    let mut tree = Octree::new(world(), capacity);
    for s in spheres {
        tree.insert(*s).unwrap();
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree_insert");
    for &n in &[1_000usize, 5_000, 20_000] {
        let spheres = gen_uniform_spheres(n);
        group.throughput(Throughput::Elements(n as u64));
        for &capacity in &[4usize, 10, 32] {
            group.bench_function(format!("uniform_n{n}_cap{capacity}"), |b| {
                b.iter_batched(
                    || Octree::new(world(), capacity),
                    |mut tree| {
                        for s in &spheres {
                            tree.insert(*s).unwrap();
                        }
                        black_box(tree.len());
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    let clustered = gen_clustered_spheres(16, 512, 20.0);
    group.throughput(Throughput::Elements(clustered.len() as u64));
    group.bench_function("clustered_cap10", |b| {
        b.iter(|| black_box(build(&clustered, 10).len()))
    });
    let walk = gen_walk_spheres(5_000);
    group.throughput(Throughput::Elements(walk.len() as u64));
    group.bench_function("walk_cap10", |b| {
        b.iter(|| black_box(build(&walk, 10).len()))
    });
    let coincident = vec![Sphere::new(DVec3::splat(1.0), 5.0); 256];
    group.bench_function("coincident_depth_limited", |b| {
        b.iter(|| {
            let config = OctreeConfig::new(4).with_max_depth(16);
            let mut tree = Octree::with_config(world(), config).unwrap();
            for s in &coincident {
                tree.insert(*s).unwrap();
            }
            black_box(tree.node_count());
        })
    });
    group.finish();
}

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree_traverse");
    for &n in &[1_000usize, 20_000] {
        let tree = build(&gen_uniform_spheres(n), 10);
        group.throughput(Throughput::Elements(tree.node_count() as u64));
        group.bench_function(format!("nodes_n{n}"), |b| {
            b.iter(|| black_box(tree.traverse().count()))
        });
        group.bench_function(format!("elements_n{n}"), |b| {
            b.iter(|| {
                let sum: f64 = tree.elements().map(|s| s.center.x).sum();
                black_box(sum)
            })
        });
        group.bench_function(format!("edges_n{n}"), |b| {
            b.iter(|| {
                let edges: usize = tree
                    .traverse()
                    .filter(|node| !node.elements().is_empty())
                    .map(|node| node.bounds().edges().len())
                    .sum();
                black_box(edges)
            })
        });
    }
    group.finish();
}

fn bench_find_leaf(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree_find_leaf");
    let spheres = gen_uniform_spheres(20_000);
    let tree = build(&spheres, 10);
    group.throughput(Throughput::Elements(spheres.len() as u64));
    group.bench_function("all_inserted_n20000", |b| {
        b.iter(|| {
            let found = spheres
                .iter()
                .filter(|s| tree.find_leaf(s.center).is_some())
                .count();
            black_box(found)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_traverse, bench_find_leaf);
criterion_main!(benches);
