//! Benchmarks for torus stepping and root projection.

use std::hint::black_box;

use criterion::Criterion;
use e8_fractal::dsp::{roots::RootSystem, torus::PhaseTorus};

pub fn bench_torus(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/torus");
    let roots = RootSystem::generate().unwrap();
    let mut torus = PhaseTorus::with_state(
        [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8],
        [0.012, 0.014, 0.016, 0.018, 0.02, 0.022, 0.024, 0.026],
    );
    let mut phases = vec![0.0f32; roots.len()];

    group.bench_function("generate_roots", |b| {
        b.iter(|| black_box(RootSystem::generate().unwrap()))
    });

    group.bench_function("advance", |b| {
        b.iter(|| torus.advance(black_box(1e-3)))
    });

    // All 240 projections, once per tick
    group.bench_function("phases_240", |b| {
        b.iter(|| torus.phases_into(black_box(roots.roots()), black_box(&mut phases)))
    });

    group.finish();
}
