pub mod states;
pub mod params;
pub mod engine;
pub mod topology;
pub mod collider;
pub mod forces;
pub mod integrator;
pub mod scenario;
