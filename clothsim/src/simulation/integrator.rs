//! Fixed-step explicit integrator for the cloth
//!
//! One substep is three passes over all particles. Each pass finishes
//! before the next starts, since later passes read other particles'
//! results from earlier ones:
//! 1. gravity kick
//! 2. spring + dashpot forces, evaluated against a frozen snapshot and
//!    committed afterwards
//! 3. drag decay, sphere collision projection, position update

use rayon::prelude::*;

use super::collider::Collider;
use super::forces::{ExecutionMode, ForceSet};
use super::params::Parameters;
use super::states::{ClothState, NVec3};
use super::topology::SpringOffset;

/// Advance `state` by one step of `params.dt`, scheduling passes in parallel
pub fn substep(
    state: &mut ClothState,
    params: &Parameters,
    spring_offsets: &[SpringOffset],
    collider: &Collider,
) {
    substep_with(ExecutionMode::Parallel, state, params, spring_offsets, collider);
}

/// Advance `state` by one step of `params.dt` using the given schedule.
/// Serial and parallel runs give identical results.
pub fn substep_with(
    mode: ExecutionMode,
    state: &mut ClothState,
    params: &Parameters,
    spring_offsets: &[SpringOffset],
    collider: &Collider,
) {
    let n = state.particle_count();
    if n == 0 { // empty cloth, nothing to do
        return;
    }
    let dt = params.dt; // substep size

    // Pass 1: gravity kick for every particle
    // v <- v + g dt
    let gravity_kick = params.gravity * dt;
    match mode {
        ExecutionMode::Serial => state.velocities_mut().iter_mut().for_each(|v| *v += gravity_kick),
        ExecutionMode::Parallel => state.velocities_mut().par_iter_mut().for_each(|v| *v += gravity_kick),
    }

    // Pass 2: spring + dashpot force per particle, f_i, evaluated against the
    // post-gravity state. force[i] holds f_i, nothing is written to the state
    // until every particle has been evaluated
    let mut force = vec![NVec3::zeros(); n];
    ForceSet::cloth(params, spring_offsets).accumulate_forces(&*state, &mut force, mode);

    // Commit with unit mass: v <- v + f dt
    let commit = |(v, f): (&mut NVec3, &NVec3)| *v += *f * dt;
    match mode {
        ExecutionMode::Serial => state.velocities_mut().iter_mut().zip(force.iter()).for_each(commit),
        ExecutionMode::Parallel => state.velocities_mut().par_iter_mut().zip(force.par_iter()).for_each(commit),
    }

    // Pass 3: per particle, independent of every other particle
    let decay = (-params.drag_damping * dt).exp(); // exact decay of dv/dt = -drag v over dt
    let advance = |(x, v): (&mut NVec3, &mut NVec3)| {
        // Drag: v <- v exp(-drag dt)
        *v *= decay;
        // Inside the ball, with n = (x - c) / |x - c|:
        // v <- v - min(v . n, 0) n
        collider.project_velocity(x, v);
        // Drift with the corrected velocity: x <- x + v dt
        *x += dt * *v;
    };
    let (x, v) = state.split_mut();
    match mode {
        ExecutionMode::Serial => x.iter_mut().zip(v.iter_mut()).for_each(advance),
        ExecutionMode::Parallel => x.par_iter_mut().zip(v.par_iter_mut()).for_each(advance),
    }
}

/// Run `count` substeps back to back
pub fn run_substeps(
    mode: ExecutionMode,
    state: &mut ClothState,
    params: &Parameters,
    spring_offsets: &[SpringOffset],
    collider: &Collider,
    count: usize,
) {
    for _ in 0..count {
        substep_with(mode, state, params, spring_offsets, collider);
    }
}
