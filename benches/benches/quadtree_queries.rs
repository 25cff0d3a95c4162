// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bracken_quadtree::{Aabb2D, Point2D, QuadTree};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

const WORLD: f64 = 10_000.0;

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
}

fn gen_uniform_points(count: usize) -> Vec<Point2D<f64>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(Point2D::new(rng.next_f64() * WORLD, rng.next_f64() * WORLD));
    }
    out
}

fn gen_query_windows(count: usize, extent: f64) -> Vec<Aabb2D<f64>> {
    let mut rng = Rng::new(0x0123_4567_89AB_CDEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.next_f64() * (WORLD - extent);
        let y = rng.next_f64() * (WORLD - extent);
        out.push(Aabb2D::<f64>::from_xywh(x, y, extent, extent));
    }
    out
}

fn build_tree(points: &[Point2D<f64>], capacity: usize) -> QuadTree<f64, u32> {
    let mut tree = QuadTree::with_capacity(Aabb2D::<f64>::from_xywh(0.0, 0.0, WORLD, WORLD), capacity);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "bench payloads are small indices"
    )]
    for (i, p) in points.iter().enumerate() {
        assert!(tree.try_insert(*p, i as u32), "bench points are in bounds");
    }
    tree
}

fn bench_build(c: &mut Criterion) {
    let points = gen_uniform_points(100_000);
    let mut group = c.benchmark_group("build");
    group.throughput(Throughput::Elements(points.len() as u64));
    for capacity in [4_usize, 8, 16] {
        group.bench_function(format!("uniform_100k_cap{capacity}"), |b| {
            b.iter_batched(
                || points.clone(),
                |pts| black_box(build_tree(&pts, capacity)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_query_window(c: &mut Criterion) {
    let points = gen_uniform_points(100_000);
    let windows = gen_query_windows(256, 200.0);
    let mut group = c.benchmark_group("query_window");
    group.throughput(Throughput::Elements(windows.len() as u64));
    for capacity in [4_usize, 8, 16] {
        let tree = build_tree(&points, capacity);
        let mut out = Vec::new();
        group.bench_function(format!("uniform_100k_cap{capacity}"), |b| {
            b.iter(|| {
                for w in &windows {
                    out.clear();
                    tree.query_into(black_box(*w), &mut out);
                    black_box(out.len());
                }
            });
        });
    }
    group.finish();
}

fn bench_query_linear_baseline(c: &mut Criterion) {
    let points = gen_uniform_points(100_000);
    let windows = gen_query_windows(256, 200.0);
    let mut group = c.benchmark_group("query_window");
    group.throughput(Throughput::Elements(windows.len() as u64));
    group.bench_function("uniform_100k_linear_scan", |b| {
        b.iter(|| {
            for w in &windows {
                let hits = points
                    .iter()
                    .filter(|p| black_box(w).contains_point(**p))
                    .count();
                black_box(hits);
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_query_window,
    bench_query_linear_baseline
);
criterion_main!(benches);
