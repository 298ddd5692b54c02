//! Benchmarks for a single control tick.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use e8_fractal::{EngineConfig, MacroParam, ModulationEngine};

pub fn bench_control(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/control");

    for &nodes in &[8usize, 32, 128] {
        let config = EngineConfig::default().with_nodes(nodes);

        let mut engine = ModulationEngine::new(&config).unwrap();
        group.bench_with_input(BenchmarkId::new("tick", nodes), &nodes, |b, _| {
            b.iter(|| {
                engine.control_step();
                black_box(engine.outputs());
            })
        });

        // No torsion: skips the generator draws
        let mut calm = ModulationEngine::new(&config).unwrap();
        calm.macros_mut().set(MacroParam::EntropyBloom, 0.0);
        group.bench_with_input(BenchmarkId::new("tick_no_bloom", nodes), &nodes, |b, _| {
            b.iter(|| {
                calm.control_step();
                black_box(calm.outputs());
            })
        });
    }

    group.finish();
}
