use std::time::Instant;

use crate::simulation::collider::Collider;
use crate::simulation::forces::ExecutionMode;
use crate::simulation::integrator::{run_substeps, substep_with};
use crate::simulation::params::Parameters;
use crate::simulation::states::{initialize, ClothState, NVec2, NVec3};
use crate::simulation::topology::SPRING_OFFSETS;

/// Helper to build a flat cloth of side `n` with the classic constants
fn make_cloth(n: usize) -> (ClothState, Parameters, Collider) {
    let params = Parameters::for_grid(n);
    // deterministic placement, no rand needed
    let state = initialize(n, params.quad_size, NVec2::zeros());
    let collider = Collider::new(NVec3::zeros(), 0.3);
    (state, params, collider)
}

/// Time one substep in both schedules for a range of grid sizes
pub fn bench_substep() {
    let ns = [32, 64, 128, 256, 512];
    let steps = 20; // substeps per measurement

    for n in ns {
        let (template, params, collider) = make_cloth(n);

        // Serial
        let mut serial = template.clone();
        // Warm up
        substep_with(ExecutionMode::Serial, &mut serial, &params, &SPRING_OFFSETS, &collider);

        let t0 = Instant::now();
        run_substeps(ExecutionMode::Serial, &mut serial, &params, &SPRING_OFFSETS, &collider, steps);
        let serial_per_step = t0.elapsed().as_secs_f64() / steps as f64;

        // Parallel
        let mut parallel = template.clone();
        // Warm up
        substep_with(ExecutionMode::Parallel, &mut parallel, &params, &SPRING_OFFSETS, &collider);

        let t1 = Instant::now();
        run_substeps(ExecutionMode::Parallel, &mut parallel, &params, &SPRING_OFFSETS, &collider, steps);
        let parallel_per_step = t1.elapsed().as_secs_f64() / steps as f64;

        println!(
            "n = {:4} ({:7} particles), serial step = {:9.6} s, parallel step = {:9.6} s",
            n, n * n, serial_per_step, parallel_per_step
        );
    }
}

/// Per-substep cost over a finer range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_substep_curve() {
    println!("n,serial_ms,parallel_ms");

    for n in (16..=512).step_by(16) {
        // small grids: average over more steps to smooth noise
        let steps = if n <= 128 { 50 } else { 5 };
        let (template, params, collider) = make_cloth(n);

        let mut serial = template.clone();
        let t0 = Instant::now();
        run_substeps(ExecutionMode::Serial, &mut serial, &params, &SPRING_OFFSETS, &collider, steps);
        let ms_serial = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut parallel = template.clone();
        let t1 = Instant::now();
        run_substeps(ExecutionMode::Parallel, &mut parallel, &params, &SPRING_OFFSETS, &collider, steps);
        let ms_parallel = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_serial, ms_parallel);
    }
}
