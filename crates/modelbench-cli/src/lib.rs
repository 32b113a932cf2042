//! Pipeline orchestration for the modelbench CLI
//!
//! Each stage reads the artifacts of the previous stage and fully
//! rewrites its own; the human-label log is the only artifact that grows
//! across runs instead of being replaced.

pub mod layout;
pub mod pipeline;

pub use layout::DataLayout;
pub use pipeline::{
    run_aggregate, run_all, run_guardrails, run_report, run_score, run_simulate, run_tasks,
};
