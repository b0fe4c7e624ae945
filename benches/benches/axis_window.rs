// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_axis_window::{AxisDimension, Window, update_window};

const VIEWPORT: f64 = 1_080.0;
const SCROLL_STEPS: usize = 256;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

fn uniform(len: usize) -> AxisDimension<f64> {
    AxisDimension::new(len, 24.0).unwrap()
}

/// Roughly one row in eight gets a measured height between 8 and 120px.
fn measured(len: usize, seed: u64) -> AxisDimension<f64> {
    let mut dim = uniform(len);
    let mut rng = Lcg::new(seed);
    let sizes: Vec<(usize, f64)> = (0..len / 8)
        .map(|_| {
            let index = rng.next_u32() as usize % len;
            let size = 8.0 + f64::from(rng.next_u32() % 113);
            (index, size)
        })
        .collect();
    dim.set_sizes(sizes).unwrap();
    dim
}

/// Scroll positions for a smooth wheel scroll of `step` pixels per frame.
fn wheel_positions(step: f64) -> Vec<f64> {
    (0..SCROLL_STEPS).map(|i| i as f64 * step).collect()
}

fn run_scroll(positions: &[f64], dim: &AxisDimension<f64>, incremental: bool) -> Window<f64> {
    let mut window = Window::new();
    for &position in positions {
        let previous = incremental.then_some(&window);
        window = update_window(position, previous, dim.len(), VIEWPORT, dim).unwrap();
    }
    window
}

fn bench_wheel_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis_window/wheel_scroll");
    group.throughput(Throughput::Elements(SCROLL_STEPS as u64));

    // Hypothesis: recombination is O(shift) per frame while a rebuild is
    // O(window length), so the gap widens with larger viewports and smaller
    // steps.
    for len in [10_000_usize, 1_000_000] {
        for (label, dim) in [("uniform", uniform(len)), ("measured", measured(len, 7))] {
            let positions = wheel_positions(13.0);
            group.bench_with_input(
                BenchmarkId::new(format!("incremental/{label}"), len),
                &dim,
                |b, dim| b.iter(|| black_box(run_scroll(&positions, dim, true))),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("rebuild/{label}"), len),
                &dim,
                |b, dim| b.iter(|| black_box(run_scroll(&positions, dim, false))),
            );
        }
    }

    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis_window/locate");

    for overrides in [0_usize, 1_000, 100_000] {
        let len = 1_000_000;
        let mut dim = uniform(len);
        let mut rng = Lcg::new(11);
        dim.set_sizes((0..overrides).map(|_| (rng.next_u32() as usize % len, 40.0)))
            .unwrap();
        let positions: Vec<f64> = (0..1_024)
            .map(|_| f64::from(rng.next_u32()) % dim.real_size())
            .collect();

        group.throughput(Throughput::Elements(positions.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(overrides), &dim, |b, dim| {
            b.iter(|| {
                for &position in &positions {
                    black_box(understory_axis_window::locate(position, dim));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_wheel_scroll, bench_locate);
criterion_main!(benches);
