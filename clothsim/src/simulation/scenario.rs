//! Build fully-initialized cloth scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - engine settings (`Engine`)
//! - physical constants (`Parameters`)
//! - grid topology (`Topology`)
//! - particle state (`ClothState`, at rest in the start plane)
//! - the collision sphere and its optional motion
//!
//! The scenario owns its state exclusively; the collider only moves
//! between frames, never inside a substep.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::{ColliderConfig, ScenarioConfig};
use crate::error::ClothError;
use crate::render::adapter::{extract_vertices, vertex_buffer};
use crate::simulation::collider::{Collider, Oscillation};
use crate::simulation::engine::Engine;
use crate::simulation::forces::ExecutionMode;
use crate::simulation::integrator::run_substeps;
use crate::simulation::params::Parameters;
use crate::simulation::states::{initialize, random_jitter, ClothState, NVec2, NVec3};
use crate::simulation::topology::{build_topology, Topology};

/// Runtime bundle for one cloth simulation
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub topology: Topology,
    pub state: ClothState,
    pub collider: Collider,
    pub rest_center: NVec3, // collider center the oscillation is relative to
    pub oscillation: Option<Oscillation>,
    pub t: f64, // simulated time
    rng: StdRng,
}

/// Map a config vector to `NVec3`, rejecting anything but 3 components
fn vec3(field: &'static str, values: &[f64]) -> Result<NVec3, ClothError> {
    match values {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(ClothError::InvalidVector { field, len: values.len() }),
    }
}

fn build_collider(cfg: &ColliderConfig) -> Result<(Collider, Option<Oscillation>), ClothError> {
    if !(cfg.radius.is_finite() && cfg.radius >= 0.0) {
        return Err(ClothError::InvalidRadius(cfg.radius));
    }
    let center = vec3("collider.center", &cfg.center)?;

    let oscillation = match &cfg.oscillation {
        Some(osc) => Some(Oscillation {
            axis: vec3("collider.oscillation.axis", &osc.axis)?,
            amplitude: osc.amplitude,
            frequency: osc.frequency,
        }),
        None => None,
    };

    Ok((Collider::new(center, cfg.radius), oscillation))
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ClothError> {
        let p_cfg = &cfg.parameters;
        if !(p_cfg.quad_size.is_finite() && p_cfg.quad_size > 0.0) {
            return Err(ClothError::InvalidQuadSize(p_cfg.quad_size));
        }
        if !(p_cfg.dt.is_finite() && p_cfg.dt > 0.0) {
            return Err(ClothError::InvalidTimeStep(p_cfg.dt));
        }

        // Topology first: it rejects n < 2
        let topology = build_topology(p_cfg.n)?;
        debug!(
            "topology: n = {}, {} indices, {} colors",
            topology.n,
            topology.indices.len(),
            topology.colors.len()
        );

        let parameters = Parameters {
            dt: p_cfg.dt,
            quad_size: p_cfg.quad_size,
            gravity: vec3("parameters.gravity", &p_cfg.gravity)?,
            spring_y: p_cfg.spring_y,
            dashpot_damping: p_cfg.dashpot_damping,
            drag_damping: p_cfg.drag_damping,
        };

        let (collider, oscillation) = build_collider(&cfg.collider)?;

        let e_cfg = &cfg.engine;
        if e_cfg.substeps == 0 {
            return Err(ClothError::ZeroCount { field: "engine.substeps" });
        }
        if e_cfg.report_every == 0 {
            return Err(ClothError::ZeroCount { field: "engine.report_every" });
        }
        let engine = Engine {
            substeps: e_cfg.substeps,
            frames: e_cfg.frames,
            mode: if e_cfg.parallel { ExecutionMode::Parallel } else { ExecutionMode::Serial },
            report_every: e_cfg.report_every,
        };

        let mut rng = match e_cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let jitter = random_jitter(&mut rng);
        debug!("placement jitter = ({:.4}, {:.4})", jitter.x, jitter.y);
        let state = initialize(topology.n, parameters.quad_size, jitter);

        info!(
            "built cloth scenario: {}x{} particles, dt = {:e}, {} substeps/frame, {:?}",
            topology.n, topology.n, parameters.dt, engine.substeps, engine.mode
        );

        Ok(Self {
            engine,
            parameters,
            topology,
            state,
            rest_center: collider.center,
            collider,
            oscillation,
            t: 0.0,
            rng,
        })
    }

    /// Run one rendered frame worth of substeps, then move the collider
    pub fn step_frame(&mut self) {
        run_substeps(
            self.engine.mode,
            &mut self.state,
            &self.parameters,
            &self.topology.spring_offsets,
            &self.collider,
            self.engine.substeps,
        );
        self.t += self.engine.substeps as f64 * self.parameters.dt;

        if let Some(osc) = &self.oscillation {
            self.collider.center = self.rest_center + osc.offset(self.t);
        }

        if !self.state.is_finite() {
            warn!("cloth state became non-finite at t = {:.4}", self.t);
        }
    }

    /// Put the cloth back in the start plane with the given offset, at t = 0
    pub fn reset_with(&mut self, jitter: NVec2) {
        self.state = initialize(self.topology.n, self.parameters.quad_size, jitter);
        self.collider.center = self.rest_center;
        self.t = 0.0;
    }

    /// Reset with a fresh random offset drawn from the scenario's generator
    pub fn reset(&mut self) {
        let jitter = random_jitter(&mut self.rng);
        self.reset_with(jitter);
    }

    /// Current vertex positions in index-buffer order
    pub fn vertices(&self) -> Result<Vec<NVec3>, ClothError> {
        extract_vertices(self.state.positions(), self.topology.n)
    }

    /// Current vertex positions as flat `[x, y, z]` triples
    pub fn vertex_buffer(&self) -> Result<Vec<[f32; 3]>, ClothError> {
        vertex_buffer(self.state.positions(), self.topology.n)
    }
}
