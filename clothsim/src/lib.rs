pub mod simulation;
pub mod configuration;
pub mod render;
pub mod benchmark;
pub mod error;

pub use simulation::states::{ClothState, NVec2, NVec3, initialize, random_jitter};
pub use simulation::params::Parameters;
pub use simulation::topology::{Topology, SpringOffset, SPRING_OFFSETS, build_topology};
pub use simulation::collider::{Collider, Oscillation};
pub use simulation::forces::{Force, ForceSet, SpringForce, DashpotDamping, ExecutionMode};
pub use simulation::integrator::{substep, substep_with, run_substeps};
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, ColliderConfig, OscillationConfig, ScenarioConfig};

pub use render::adapter::{extract_vertices, vertex_buffer};

pub use benchmark::benchmark::{bench_substep, bench_substep_curve};

pub use error::ClothError;
