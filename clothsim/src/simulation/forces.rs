//! Internal force contributors for the cloth
//!
//! Defines the [`Force`] trait and the two spring-axis terms: elastic
//! spring force and dashpot damping. Both walk the fixed spring offsets of
//! a particle and read only the state snapshot they are handed.

use rayon::prelude::*;

use super::params::Parameters;
use super::states::{ClothState, NVec3};
use super::topology::{neighbour, rest_length, SpringOffset};

/// Below this separation a spring has no usable direction and is skipped
pub const MIN_SPRING_LENGTH: f64 = 1e-12;

/// How the per-particle passes are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    Serial,
    #[default]
    Parallel,
}

/// Trait for force sources acting on a single particle of a [`ClothState`]
/// Implementations must only read `state`, so particles can be evaluated
/// in any order or concurrently
pub trait Force {
    fn force_on(&self, state: &ClothState, idx: usize) -> NVec3;
}

/// Collection of force terms (springs, dashpots, ...)
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per particle
pub struct ForceSet<'a> {
    terms: Vec<Box<dyn Force + Send + Sync + 'a>>,
}

impl<'a> ForceSet<'a> {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Spring and dashpot terms for the given constants and offsets
    pub fn cloth(params: &Parameters, offsets: &'a [SpringOffset]) -> Self {
        Self::new()
            .with(SpringForce {
                spring_y: params.spring_y,
                quad_size: params.quad_size,
                offsets,
            })
            .with(DashpotDamping {
                dashpot_damping: params.dashpot_damping,
                quad_size: params.quad_size,
                offsets,
            })
    }

    /// Add a force term
    pub fn with(mut self, term: impl Force + Send + Sync + 'a) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces for all particles of `state`
    /// - `out[k]` is overwritten with the sum of contributions from all terms
    /// - `state` is borrowed immutably for the whole pass, so no particle
    ///   observes another particle's result
    pub fn accumulate_forces(&self, state: &ClothState, out: &mut [NVec3], mode: ExecutionMode) {
        let total = |idx: usize| {
            self.terms
                .iter()
                .fold(NVec3::zeros(), |acc, term| acc + term.force_on(state, idx))
        };

        match mode {
            ExecutionMode::Serial => {
                for (idx, f) in out.iter_mut().enumerate() {
                    *f = total(idx);
                }
            }
            ExecutionMode::Parallel => {
                out.par_iter_mut().enumerate().for_each(|(idx, f)| *f = total(idx));
            }
        }
    }
}

impl Default for ForceSet<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Visit every in-bounds spring of particle `idx` with
/// (neighbour index, unit direction from neighbour to particle, current length, offset).
/// Zero-length springs are skipped.
#[inline]
fn for_each_spring(
    state: &ClothState,
    idx: usize,
    offsets: &[SpringOffset],
    mut visit: impl FnMut(usize, NVec3, f64, SpringOffset),
) {
    let n = state.n();
    let x = state.positions();
    let (i, j) = (idx / n, idx % n); // grid coordinates of particle idx
    let xi = x[idx];

    for &offset in offsets {
        // j = i + offset, springs that leave the grid do not exist
        let Some(k) = neighbour(i, j, offset, n) else {
            continue;
        };
        // x_ij = x_i - x_j, l = |x_ij|
        let x_ij = xi - x[k];
        let current_dist = x_ij.norm();
        // No direction for coincident particles, the spring is dropped this substep
        if current_dist <= MIN_SPRING_LENGTH {
            continue;
        }
        // d = x_ij / l points from the neighbour to particle idx
        visit(k, x_ij / current_dist, current_dist, offset);
    }
}

/// Hookean spring along each offset, relative to the rest length
/// `quad_size * |offset|`
pub struct SpringForce<'a> {
    pub spring_y: f64,
    pub quad_size: f64,
    pub offsets: &'a [SpringOffset],
}

impl Force for SpringForce<'_> {
    fn force_on(&self, state: &ClothState, idx: usize) -> NVec3 {
        let mut force = NVec3::zeros();
        for_each_spring(state, idx, self.offsets, |_, d, current_dist, offset| {
            // l0 = quad_size * |offset|
            let rest_dist = rest_length(offset, self.quad_size);
            // f = -Y * d * (l / l0 - 1), pulls back when stretched, pushes when compressed
            force -= self.spring_y * (current_dist / rest_dist - 1.0) * d;
        });
        force
    }
}

/// Viscous damping of the relative velocity projected on each spring axis
pub struct DashpotDamping<'a> {
    pub dashpot_damping: f64,
    pub quad_size: f64,
    pub offsets: &'a [SpringOffset],
}

impl Force for DashpotDamping<'_> {
    fn force_on(&self, state: &ClothState, idx: usize) -> NVec3 {
        let v = state.velocities();
        let vi = v[idx];
        let mut force = NVec3::zeros();
        for_each_spring(state, idx, self.offsets, |k, d, _, _| {
            // relative velocity, only its component along d is damped
            let v_ij = vi - v[k];
            // f = -(v_ij . d) * d * c * quad_size
            force -= v_ij.dot(&d) * self.dashpot_damping * self.quad_size * d;
        });
        force
    }
}
