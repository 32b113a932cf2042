//! Result aggregation for the modelbench evaluation pipeline
//!
//! This crate provides:
//! - The append-only human-label log written by annotation sessions
//! - The left join of automatic scores with human labels
//! - Uniform task sampling for the annotation collaborator
//! - A per-model summary report over the final artifact

pub mod aggregate;
pub mod annotation;
pub mod labels;
pub mod summary;

pub use aggregate::{aggregate_results, load_results, write_results};
pub use annotation::{sample_task, TaskSample};
pub use labels::{append_labels, load_labels, HumanLabel};
pub use summary::{EvaluationReport, ModelSummary};

use modelbench_tasks::TaskCategory;
use serde::{Deserialize, Serialize};

/// One row of the final merged artifact
///
/// Automatic columns are always present; human columns are `None` when no
/// annotator has labeled the (task, model) pair. Absent labels never drop
/// or duplicate a row: the final artifact has exactly one row per
/// automatic-score row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalResult {
    pub task_id: String,
    pub category: TaskCategory,
    pub prompt: String,
    pub reference_answer: String,
    pub model_name: String,
    pub response: String,
    pub auto_correctness: f64,
    pub is_toxic: u8,
    pub is_refusal: u8,
    pub is_best: Option<u8>,
    pub helpfulness: Option<u8>,
    pub correctness_human: Option<u8>,
    pub safety_human: Option<u8>,
    pub comments: Option<String>,
}

impl EvalResult {
    /// True when any human-sourced field is populated
    pub fn has_human_label(&self) -> bool {
        self.is_best.is_some()
            || self.helpfulness.is_some()
            || self.correctness_human.is_some()
            || self.safety_human.is_some()
    }
}
