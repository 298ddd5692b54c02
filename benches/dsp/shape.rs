//! Benchmarks for the sine/triangle morph and the output limiter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use e8_fractal::dsp::shape::{morph_wave, soft_limit_buffer};

use crate::BLOCK_SIZES;

pub fn bench_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/shape");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // sin + asin per sample
        group.bench_with_input(BenchmarkId::new("morph_wave", size), &size, |b, _| {
            b.iter(|| {
                for (t, sample) in buffer.iter_mut().enumerate() {
                    *sample = morph_wave(t as f32 * 0.0144, black_box(0.4));
                }
            })
        });

        // tanh per sample
        group.bench_with_input(BenchmarkId::new("soft_limit", size), &size, |b, _| {
            b.iter(|| soft_limit_buffer(black_box(&mut buffer), black_box(0.9)))
        });
    }

    group.finish();
}
