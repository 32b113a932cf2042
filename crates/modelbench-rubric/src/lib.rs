//! Automatic scoring for the modelbench evaluation pipeline
//!
//! This crate provides:
//! - Per-category scoring rules (the rubric)
//! - The outputs-to-tasks join producing one scored row per model output
//! - Reading and writing the auto_scores artifact

pub mod artifact;
pub mod score;

pub use artifact::{load_scores, write_scores};
pub use score::{apply_rubric, score_math_reasoning, score_sentiment, token_overlap_score};

use modelbench_tasks::TaskCategory;
use serde::{Deserialize, Serialize};

/// A model output joined with its task and scored
///
/// One-to-one with `ModelOutput`; column order is the artifact contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOutput {
    pub task_id: String,
    pub category: TaskCategory,
    pub prompt: String,
    pub reference_answer: String,
    pub model_name: String,
    pub response: String,
    /// Rubric correctness in [0, 1]
    pub auto_correctness: f64,
}
