//! Task catalog for the modelbench evaluation pipeline
//!
//! This crate provides:
//! - The `TaskCategory` enum and `Task` record
//! - The fixed, versioned catalog builder
//! - Reading and writing the tasks artifact (tasks.csv)

pub mod artifact;
pub mod catalog;

pub use artifact::{load_tasks, write_tasks};
pub use catalog::build_tasks;

use serde::{Deserialize, Serialize};

/// Category of an evaluation task
///
/// The set is closed; adding a category is a compile-time change because
/// every dispatch site matches exhaustively. A category string that no
/// variant recognizes deserializes to `Unknown`, the explicit unhandled
/// arm, so generation and scoring degrade instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    MathReasoning,
    Summarization,
    SentimentClassification,
    #[serde(other)]
    Unknown,
}

impl TaskCategory {
    /// Prefix used when deriving stable task ids (`r1`, `s1`, `c1`, ...)
    pub fn id_prefix(&self) -> &'static str {
        match self {
            TaskCategory::MathReasoning => "r",
            TaskCategory::Summarization => "s",
            TaskCategory::SentimentClassification => "c",
            TaskCategory::Unknown => "x",
        }
    }

    /// The snake_case name used in artifacts
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::MathReasoning => "math_reasoning",
            TaskCategory::Summarization => "summarization",
            TaskCategory::SentimentClassification => "sentiment_classification",
            TaskCategory::Unknown => "unknown",
        }
    }
}

/// A single evaluation task
///
/// Created once by the catalog builder and immutable afterward. The
/// `task_id` is stable across runs: category prefix plus 1-based ordinal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique, stable identifier (e.g. `r1`, `s2`, `c3`)
    pub task_id: String,
    /// Task category driving generator and scorer dispatch
    pub category: TaskCategory,
    /// Prompt shown to the responder
    pub prompt: String,
    /// Ground-truth answer used for simulation and scoring
    pub reference_answer: String,
}
