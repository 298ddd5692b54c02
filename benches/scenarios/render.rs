//! Benchmarks for rendered stereo blocks.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use e8_fractal::{EngineConfig, SynthesisEngine};

use crate::BLOCK_SIZES;

pub fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/render");

    for &size in BLOCK_SIZES {
        let mut left = vec![0.0f32; size];
        let mut right = vec![0.0f32; size];

        // Default patch: 8 nodes, one tick every 48 samples
        let mut engine = SynthesisEngine::new(EngineConfig::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("8_nodes", size), &size, |b, _| {
            b.iter(|| engine.render_into(black_box(&mut left), black_box(&mut right), 0.2))
        });

        let mut wide = SynthesisEngine::new(EngineConfig::default().with_nodes(32)).unwrap();
        group.bench_with_input(BenchmarkId::new("32_nodes", size), &size, |b, _| {
            b.iter(|| wide.render_into(black_box(&mut left), black_box(&mut right), 0.2))
        });
    }

    group.finish();
}
