//! Benchmarks for node-state feedback and projection.

use std::hint::black_box;

use criterion::Criterion;
use e8_fractal::dsp::qutrit::QutritState;

pub fn bench_qutrit(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/qutrit");

    // Inside the ball: early return
    let mut inside = QutritState::from_components([0.1; 8]);
    group.bench_function("project_inside", |b| {
        b.iter(|| black_box(&mut inside).soft_project(1.2))
    });

    // Outside the ball: sqrt + tanh + rescale
    group.bench_function("project_outside", |b| {
        b.iter(|| {
            let mut state = QutritState::from_components([2.0; 8]);
            state.soft_project(black_box(1.2));
            black_box(state)
        })
    });

    let mut state = QutritState::new();
    group.bench_function("relax_three", |b| {
        b.iter(|| {
            for component in [0, 3, 7] {
                state.relax(component, black_box(0.3), 0.8, 1e-3);
            }
        })
    });

    group.finish();
}
