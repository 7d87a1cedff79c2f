//! Configuration types for loading cloth scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! cloth scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – frame loop options (substeps, frames, scheduling, seed)
//! - [`ParametersConfig`] – grid size and physical constants
//! - [`ColliderConfig`]   – the sphere and its optional motion
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   substeps: 53            # substeps per rendered frame
//!   frames: 600             # frames to run headless
//!   parallel: true          # rayon passes, false -> single thread
//!   report_every: 60        # frames between log lines
//!   seed: 42                # optional, fixes the placement jitter
//!
//! parameters:
//!   n: 128                  # particles per side
//!   quad_size: 0.0078125    # rest spacing
//!   dt: 3.125e-4            # substep size
//!   gravity: [0.0, -9.8, 0.0]
//!   spring_y: 3.0e4
//!   dashpot_damping: 1.0e4
//!   drag_damping: 1.0
//!
//! collider:
//!   center: [0.0, 0.0, 0.0]
//!   radius: 0.3
//!   oscillation:            # optional
//!     axis: [1.0, 0.0, 0.0]
//!     amplitude: 0.2
//!     frequency: 0.5
//! ```
//!
//! The scenario builder validates this and maps it into the runtime types.

use serde::Deserialize;

/// Frame loop configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub substeps: usize, // substeps per frame
    pub frames: usize, // frames to simulate when run headless
    #[serde(default = "default_parallel")]
    pub parallel: bool, // `true` - rayon passes, `false` - serial
    #[serde(default = "default_report_every")]
    pub report_every: usize, // frames between diagnostics lines
    pub seed: Option<u64>, // fixes the random placement offset when set
}

fn default_parallel() -> bool {
    true
}

fn default_report_every() -> usize {
    60
}

/// Grid size and physical constants
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub n: usize,             // particles per side
    pub quad_size: f64,       // rest spacing between neighbours
    pub dt: f64,              // substep size
    pub gravity: Vec<f64>,    // gravitational acceleration, 3 components
    pub spring_y: f64,        // spring stiffness
    pub dashpot_damping: f64, // damping along spring axes
    pub drag_damping: f64,    // uniform air drag
}

/// Sinusoidal collider motion applied between frames
#[derive(Deserialize, Debug, Clone)]
pub struct OscillationConfig {
    pub axis: Vec<f64>,  // direction of motion, 3 components
    pub amplitude: f64,  // peak displacement
    pub frequency: f64,  // cycles per second of simulated time
}

/// The collision sphere
#[derive(Deserialize, Debug, Clone)]
pub struct ColliderConfig {
    pub center: Vec<f64>, // rest center, 3 components
    pub radius: f64,
    pub oscillation: Option<OscillationConfig>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // frame loop configuration
    pub parameters: ParametersConfig, // grid and physical constants
    pub collider: ColliderConfig, // collision sphere
}
