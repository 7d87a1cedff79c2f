//! Particle state for the cloth grid.
//!
//! `ClothState` owns the n×n position and velocity arrays, stored flat with
//! particle (i, j) at index `i * n + j`. It holds no update logic; the
//! integrator mutates it in place and the render adapter reads it.
//!
//! Both arrays always hold exactly n² entries. They are only handed out as
//! slices, so callers can edit particles but never resize the grid.

use nalgebra::{Vector2, Vector3};
use rand::Rng;

use crate::error::ClothError;

pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

/// Height of the horizontal plane the cloth starts in
pub const PLANE_HEIGHT: f64 = 0.6;

/// Half-width of the uniform placement jitter
pub const JITTER_RANGE: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct ClothState {
    x: Vec<NVec3>, // positions
    v: Vec<NVec3>, // velocities
    n: usize,      // grid side
}

/// Draw the single 2D placement offset shared by every particle,
/// uniform in [-0.05, 0.05] on both axes
pub fn random_jitter<R: Rng>(rng: &mut R) -> NVec2 {
    NVec2::new(
        (rng.gen::<f64>() - 0.5) * 2.0 * JITTER_RANGE,
        (rng.gen::<f64>() - 0.5) * 2.0 * JITTER_RANGE,
    )
}

/// Seed a flat n×n cloth at `PLANE_HEIGHT`, shifted by `jitter`, at rest
pub fn initialize(n: usize, quad_size: f64, jitter: NVec2) -> ClothState {
    let mut x = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            x.push(NVec3::new(
                i as f64 * quad_size - 0.5 + jitter.x,
                PLANE_HEIGHT,
                j as f64 * quad_size - 0.5 + jitter.y,
            ));
        }
    }

    ClothState {
        x,
        v: vec![NVec3::zeros(); n * n],
        n,
    }
}

impl ClothState {
    /// Wrap existing position/velocity arrays for an n×n grid
    pub fn from_parts(n: usize, x: Vec<NVec3>, v: Vec<NVec3>) -> Result<Self, ClothError> {
        let expected = n * n;
        if x.len() != expected {
            return Err(ClothError::StateSizeMismatch { expected, found: x.len() });
        }
        if v.len() != expected {
            return Err(ClothError::StateSizeMismatch { expected, found: v.len() });
        }
        Ok(Self { x, v, n })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn particle_count(&self) -> usize {
        self.x.len()
    }

    /// Linear index of grid particle (i, j)
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        i * self.n + j
    }

    pub fn positions(&self) -> &[NVec3] {
        &self.x
    }

    pub fn velocities(&self) -> &[NVec3] {
        &self.v
    }

    pub fn positions_mut(&mut self) -> &mut [NVec3] {
        &mut self.x
    }

    pub fn velocities_mut(&mut self) -> &mut [NVec3] {
        &mut self.v
    }

    /// Both arrays at once, for passes that update x from v
    pub fn split_mut(&mut self) -> (&mut [NVec3], &mut [NVec3]) {
        (&mut self.x, &mut self.v)
    }

    pub fn position(&self, i: usize, j: usize) -> NVec3 {
        self.x[self.index(i, j)]
    }

    pub fn velocity(&self, i: usize, j: usize) -> NVec3 {
        self.v[self.index(i, j)]
    }

    /// Mean particle position
    pub fn centroid(&self) -> NVec3 {
        if self.x.is_empty() {
            return NVec3::zeros();
        }
        let sum = self.x.iter().fold(NVec3::zeros(), |acc, p| acc + p);
        sum / self.x.len() as f64
    }

    pub fn max_speed(&self) -> f64 {
        self.v.iter().map(|v| v.norm()).fold(0.0, f64::max)
    }

    /// False once any position or velocity component is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|p| p.iter().all(|c| c.is_finite()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn jitter_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let j = random_jitter(&mut rng);
            assert!(j.x.abs() <= JITTER_RANGE && j.y.abs() <= JITTER_RANGE);
        }
    }

    #[test]
    fn jitter_shifts_whole_grid_uniformly() {
        let jitter = NVec2::new(0.03, -0.02);
        let flat = initialize(5, 0.1, NVec2::zeros());
        let shifted = initialize(5, 0.1, jitter);
        for (a, b) in flat.positions().iter().zip(shifted.positions().iter()) {
            let d = b - a;
            assert!((d.x - 0.03).abs() < 1e-6);
            assert_eq!(d.y, 0.0);
            assert!((d.z + 0.02).abs() < 1e-6);
        }
    }

    #[test]
    fn index_is_row_major_in_i() {
        let s = initialize(4, 0.25, NVec2::zeros());
        assert_eq!(s.index(2, 3), 11);
        let p = s.position(2, 3);
        assert!((p.x - 0.0).abs() < 1e-6);
        assert!((p.z - 0.25).abs() < 1e-6);
    }

    #[test]
    fn from_parts_rejects_wrong_length() {
        let err = ClothState::from_parts(3, vec![NVec3::zeros(); 8], vec![NVec3::zeros(); 9]);
        assert_eq!(err.unwrap_err(), ClothError::StateSizeMismatch { expected: 9, found: 8 });
    }

    #[test]
    fn non_finite_detected() {
        let mut s = initialize(2, 0.5, NVec2::zeros());
        assert!(s.is_finite());
        s.velocities_mut()[3].y = f64::NAN;
        assert!(!s.is_finite());
    }
}
