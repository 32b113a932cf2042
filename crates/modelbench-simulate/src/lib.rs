//! Response simulation for the modelbench evaluation pipeline
//!
//! This crate provides:
//! - `SimulatorConfig`: seed plus the roster of simulated responders
//! - Category-specific response generators driven by an explicit `StdRng`
//! - Per-model output artifacts (outputs/<model>_outputs.csv)
//! - The ad hoc chat generation contract used by the playground

pub mod artifact;
pub mod chat;
pub mod config;
pub mod generator;

pub use artifact::{load_all_outputs, output_path, write_outputs};
pub use chat::generate_response;
pub use config::{ModelSpec, SimulatorConfig};
pub use generator::{generate_outputs_for_model, simulate_response};

use serde::{Deserialize, Serialize};

/// One simulated response for a (task, model) pair
///
/// The `(task_id, model_name)` pair is unique within a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOutput {
    pub task_id: String,
    pub model_name: String,
    pub response: String,
}
