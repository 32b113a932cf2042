//! The append-only human-label log

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// One human judgment of a (task, model) response
///
/// Zero or more labels may exist per pair; annotation sessions append
/// across pipeline runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanLabel {
    pub task_id: String,
    pub model_name: String,
    /// 1 if the annotator judged this model best for the task
    pub is_best: u8,
    /// 0-5
    pub helpfulness: u8,
    /// 0-5
    pub correctness_human: u8,
    /// 0-5
    pub safety_human: u8,
    pub comments: String,
}

/// Load the human-label log
///
/// An absent file is not an error: annotation may simply not have happened
/// yet, so this returns an empty set and logs the fact.
pub fn load_labels(path: &Path) -> Result<Vec<HumanLabel>> {
    if !path.exists() {
        info!(path = %path.display(), "No human labels found; continuing with auto scores only");
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open human labels at {}", path.display()))?;

    let mut labels = Vec::new();
    for record in reader.deserialize() {
        let label: HumanLabel = record.context("Failed to parse human label record")?;
        labels.push(label);
    }
    Ok(labels)
}

/// Append labels to the log
///
/// Reads the existing log, extends it, and rewrites the whole file.
/// At-least-once and non-atomic: callers must not write concurrently.
pub fn append_labels(path: &Path, new_labels: &[HumanLabel]) -> Result<()> {
    let mut all = load_labels(path)?;
    all.extend_from_slice(new_labels);

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to write human labels at {}", path.display()))?;
    for label in &all {
        writer.serialize(label).with_context(|| {
            format!(
                "Failed to write label for task {} / model {}",
                label.task_id, label.model_name
            )
        })?;
    }
    writer.flush().context("Failed to flush human labels")?;
    Ok(())
}
