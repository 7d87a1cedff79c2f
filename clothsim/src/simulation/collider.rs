//! The single static sphere the cloth collides with.
//!
//! The center may be moved between substeps (see [`Oscillation`]); within a
//! substep it is read-only.

use super::states::NVec3;

#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    pub center: NVec3,
    pub radius: f64,
}

impl Collider {
    pub fn new(center: NVec3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// True when `p` is inside or on the surface
    #[inline]
    pub fn contains(&self, p: &NVec3) -> bool {
        (p - self.center).norm() <= self.radius
    }

    /// Remove the inward normal component of `v` for a particle at `p`.
    ///
    /// Outward and tangential motion is left as is; there is no bounce.
    /// A particle exactly at the center has no normal and is left alone.
    #[inline]
    pub fn project_velocity(&self, p: &NVec3, v: &mut NVec3) {
        if !self.contains(p) {
            return;
        }
        // n = (p - c) / |p - c|
        if let Some(normal) = (p - self.center).try_normalize(f64::EPSILON) {
            // only a negative v . n is removed
            *v -= v.dot(&normal).min(0.0) * normal;
        }
    }
}

/// Sinusoidal motion of the collider center around its rest position
#[derive(Debug, Clone, PartialEq)]
pub struct Oscillation {
    pub axis: NVec3,
    pub amplitude: f64,
    pub frequency: f64, // Hz
}

impl Oscillation {
    /// Displacement from the rest center at time `t`
    pub fn offset(&self, t: f64) -> NVec3 {
        let phase = 2.0 * std::f64::consts::PI * self.frequency * t;
        self.axis * (self.amplitude * phase.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball() -> Collider {
        Collider::new(NVec3::zeros(), 1.0)
    }

    #[test]
    fn inward_velocity_removed() {
        let mut v = NVec3::new(0.0, -2.0, 1.0);
        ball().project_velocity(&NVec3::new(0.0, 0.9, 0.0), &mut v);
        assert_eq!(v, NVec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn outward_velocity_kept() {
        let mut v = NVec3::new(0.0, 3.0, 0.0);
        ball().project_velocity(&NVec3::new(0.0, 0.5, 0.0), &mut v);
        assert_eq!(v, NVec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn outside_particle_untouched() {
        let mut v = NVec3::new(0.0, -3.0, 0.0);
        ball().project_velocity(&NVec3::new(0.0, 1.5, 0.0), &mut v);
        assert_eq!(v, NVec3::new(0.0, -3.0, 0.0));
    }

    #[test]
    fn surface_counts_as_contact() {
        let mut v = NVec3::new(-1.0, 0.0, 0.0);
        assert!(ball().contains(&NVec3::new(1.0, 0.0, 0.0)));
        ball().project_velocity(&NVec3::new(1.0, 0.0, 0.0), &mut v);
        assert_eq!(v, NVec3::zeros());
    }

    #[test]
    fn center_particle_is_skipped() {
        let mut v = NVec3::new(0.3, -0.2, 0.1);
        ball().project_velocity(&NVec3::zeros(), &mut v);
        assert_eq!(v, NVec3::new(0.3, -0.2, 0.1));
    }

    #[test]
    fn oscillation_returns_to_rest_each_period() {
        let osc = Oscillation { axis: NVec3::x(), amplitude: 0.2, frequency: 2.0 };
        assert!(osc.offset(0.0).norm() < 1e-6);
        assert!((osc.offset(0.125).x - 0.2).abs() < 1e-5);
        assert!(osc.offset(0.5).norm() < 1e-5);
    }
}
