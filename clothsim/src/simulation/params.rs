//! Physical constants for one cloth substep
//!
//! `Parameters` holds:
//! - the fixed step size `dt` and the grid spacing `quad_size`,
//! - the external gravity vector,
//! - the spring stiffness and the two damping coefficients
//!
//! All of these are read-only during a substep; callers may change them
//! between frames.

use super::states::NVec3;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size
    pub quad_size: f64, // rest spacing between grid neighbours
    pub gravity: NVec3, // gravitational acceleration
    pub spring_y: f64, // spring stiffness (Young's modulus)
    pub dashpot_damping: f64, // damping along spring axes
    pub drag_damping: f64, // uniform air drag
}

impl Parameters {
    /// The classic setup for an n×n cloth spanning one unit
    pub fn for_grid(n: usize) -> Self {
        let quad_size = 1.0 / n as f64;
        Self {
            dt: 4e-2 / n as f64,
            quad_size,
            gravity: NVec3::new(0.0, -9.8, 0.0),
            spring_y: 3e4,
            dashpot_damping: 1e4,
            drag_damping: 1.0,
        }
    }

    /// Substeps needed to cover one 60 Hz frame at this `dt`
    pub fn substeps_per_frame(&self) -> usize {
        ((1.0 / 60.0) / self.dt).max(1.0) as usize
    }
}
