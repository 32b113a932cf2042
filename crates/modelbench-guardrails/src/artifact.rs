//! Reading and writing the guardrail-augmented scores artifact

use crate::GuardrailedOutput;
use anyhow::{Context, Result};
use std::path::Path;

/// Write guardrail-augmented scores, replacing any previous artifact
pub fn write_guardrailed(path: &Path, rows: &[GuardrailedOutput]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| {
        format!("Failed to create guardrails artifact at {}", path.display())
    })?;
    for row in rows {
        writer.serialize(row).with_context(|| {
            format!(
                "Failed to write guardrail row for task {} / model {}",
                row.task_id, row.model_name
            )
        })?;
    }
    writer.flush().context("Failed to flush guardrails artifact")?;
    Ok(())
}

/// Load guardrail-augmented scores from a CSV artifact
pub fn load_guardrailed(path: &Path) -> Result<Vec<GuardrailedOutput>> {
    if !path.exists() {
        anyhow::bail!(
            "Guardrails artifact not found at {}. Run `modelbench guardrails` first.",
            path.display()
        );
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open guardrails artifact at {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: GuardrailedOutput = record.context("Failed to parse guardrail record")?;
        rows.push(row);
    }
    Ok(rows)
}
