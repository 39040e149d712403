// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::DVec3;
use understory_octree::{Aabb3D, Octree};

use rstar::RTree;

fn world() -> Aabb3D {
    Aabb3D::from_center_half_extents(DVec3::ZERO, DVec3::splat(500.0))
}

fn gen_lattice_points(n: usize) -> Vec<DVec3> {
    let w = world();
    let cell = w.size() / n as f64;
    let mut out = Vec::with_capacity(n * n * n);
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                let i = DVec3::new(x as f64, y as f64, z as f64) + DVec3::splat(0.5);
                out.push(w.origin() + cell * i);
            }
        }
    }
    out
}

fn bench_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare_3d");
    for &n in &[16usize, 32] {
        let points = gen_lattice_points(n);
        group.throughput(Throughput::Elements(points.len() as u64));

        group.bench_function(format!("understory_octree_build_enumerate_n{n}"), |b| {
            b.iter_batched(
                || Octree::new(world(), 10),
                |mut tree| {
                    for p in &points {
                        tree.insert(*p).unwrap();
                    }
                    black_box(tree.elements().count());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_insert_enumerate_n{n}"), |b| {
            b.iter_batched(
                RTree::<[f64; 3]>::new,
                |mut tree| {
                    for p in &points {
                        tree.insert(p.to_array());
                    }
                    black_box(tree.iter().count());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_bulk_enumerate_n{n}"), |b| {
            b.iter_batched(
                || points.iter().map(|p| p.to_array()).collect::<Vec<_>>(),
                |raw| {
                    let tree = RTree::bulk_load(raw);
                    black_box(tree.iter().count());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_external_compare);
criterion_main!(benches);
