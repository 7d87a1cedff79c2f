//! Benchmarks for the cloth substep.

use criterion::{criterion_group, criterion_main, Criterion};
use clothsim::*;

fn bench_substep_64(c: &mut Criterion) {
    let params = Parameters::for_grid(64);
    let collider = Collider::new(NVec3::zeros(), 0.3);

    c.bench_function("cloth_64x64_serial_substep", |b| {
        let mut state = initialize(64, params.quad_size, NVec2::zeros());
        b.iter(|| {
            substep_with(ExecutionMode::Serial, &mut state, &params, &SPRING_OFFSETS, &collider);
        });
    });

    c.bench_function("cloth_64x64_parallel_substep", |b| {
        let mut state = initialize(64, params.quad_size, NVec2::zeros());
        b.iter(|| {
            substep_with(ExecutionMode::Parallel, &mut state, &params, &SPRING_OFFSETS, &collider);
        });
    });
}

fn bench_frame_128(c: &mut Criterion) {
    let params = Parameters::for_grid(128);
    let collider = Collider::new(NVec3::zeros(), 0.3);
    let substeps = params.substeps_per_frame();

    c.bench_function("cloth_128x128_one_frame", |b| {
        b.iter(|| {
            let mut state = initialize(128, params.quad_size, NVec2::zeros());
            run_substeps(ExecutionMode::Parallel, &mut state, &params, &SPRING_OFFSETS, &collider, substeps);
            extract_vertices(state.positions(), 128)
        });
    });
}

fn bench_topology(c: &mut Criterion) {
    c.bench_function("topology_256", |b| {
        b.iter(|| build_topology(256));
    });
}

criterion_group!(benches, bench_substep_64, bench_frame_128, bench_topology);
criterion_main!(benches);
