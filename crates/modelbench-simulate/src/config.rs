//! Simulation configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One simulated responder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Responder name, used in artifact rows and file names
    pub name: String,
    /// Probability in [0, 1] that the responder emits the reference answer
    pub quality: f64,
}

/// Simulation configuration
///
/// The seed is supplied once per pipeline run; a single RNG built from it
/// is threaded through every generator call, so rerunning with the same
/// config produces byte-identical outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// RNG seed for the whole run
    pub seed: u64,
    /// Responders to simulate, in generation order
    pub models: Vec<ModelSpec>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            models: vec![
                ModelSpec {
                    name: "llama3_dummy".to_string(),
                    quality: 0.8,
                },
                ModelSpec {
                    name: "mistral_dummy".to_string(),
                    quality: 0.7,
                },
                ModelSpec {
                    name: "gpt4_dummy".to_string(),
                    quality: 0.9,
                },
            ],
        }
    }
}

impl SimulatorConfig {
    /// Load a configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read simulator config at {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse simulator config at {}", path.display()))
    }
}
