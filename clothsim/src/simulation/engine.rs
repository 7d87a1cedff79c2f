//! High-level runtime engine settings
//!
//! Frame pacing and scheduling used when running a `Scenario`

use super::forces::ExecutionMode;

#[derive(Debug, Clone)]
pub struct Engine {
    pub substeps: usize, // substeps per rendered frame
    pub frames: usize, // frames to run headless
    pub mode: ExecutionMode, // serial or rayon passes
    pub report_every: usize, // frames between diagnostics
}
