//! Reading and writing the auto_scores artifact

use crate::ScoredOutput;
use anyhow::{Context, Result};
use std::path::Path;

/// Write scored outputs to a CSV artifact, replacing any previous file
pub fn write_scores(path: &Path, scored: &[ScoredOutput]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create scores artifact at {}", path.display()))?;
    for row in scored {
        writer.serialize(row).with_context(|| {
            format!(
                "Failed to write score for task {} / model {}",
                row.task_id, row.model_name
            )
        })?;
    }
    writer.flush().context("Failed to flush scores artifact")?;
    Ok(())
}

/// Load scored outputs from a CSV artifact
pub fn load_scores(path: &Path) -> Result<Vec<ScoredOutput>> {
    if !path.exists() {
        anyhow::bail!(
            "Scores artifact not found at {}. Run `modelbench score` first.",
            path.display()
        );
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open scores artifact at {}", path.display()))?;

    let mut scored = Vec::new();
    for record in reader.deserialize() {
        let row: ScoredOutput = record.context("Failed to parse scored record")?;
        scored.push(row);
    }
    Ok(scored)
}
