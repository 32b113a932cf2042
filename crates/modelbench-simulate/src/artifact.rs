//! Per-model output artifacts

use crate::ModelOutput;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Path of one responder's output artifact inside the outputs directory
pub fn output_path(outputs_dir: &Path, model_name: &str) -> PathBuf {
    outputs_dir.join(format!("{}_outputs.csv", model_name))
}

/// Write one responder's outputs, replacing any previous artifact
pub fn write_outputs(outputs_dir: &Path, model_name: &str, outputs: &[ModelOutput]) -> Result<()> {
    std::fs::create_dir_all(outputs_dir).with_context(|| {
        format!(
            "Failed to create outputs directory at {}",
            outputs_dir.display()
        )
    })?;

    let path = output_path(outputs_dir, model_name);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create outputs artifact at {}", path.display()))?;
    for output in outputs {
        writer
            .serialize(output)
            .with_context(|| format!("Failed to write output for task {}", output.task_id))?;
    }
    writer.flush().context("Failed to flush outputs artifact")?;
    Ok(())
}

/// Load every `*_outputs.csv` artifact in the outputs directory
///
/// An absent directory or a directory with no output artifacts means the
/// simulate stage has not run; both fail fast.
pub fn load_all_outputs(outputs_dir: &Path) -> Result<Vec<ModelOutput>> {
    if !outputs_dir.is_dir() {
        anyhow::bail!(
            "Outputs directory not found at {}. Run `modelbench simulate` first.",
            outputs_dir.display()
        );
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(outputs_dir).with_context(|| {
        format!(
            "Failed to read outputs directory at {}",
            outputs_dir.display()
        )
    })? {
        let path = entry.context("Failed to read outputs directory entry")?.path();
        let is_outputs_csv = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with("_outputs.csv"));
        if is_outputs_csv {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        anyhow::bail!(
            "No output artifacts found in {}. Run `modelbench simulate` first.",
            outputs_dir.display()
        );
    }

    // Stable order regardless of directory iteration order
    paths.sort();

    let mut outputs = Vec::new();
    for path in paths {
        let mut reader = csv::Reader::from_path(&path)
            .with_context(|| format!("Failed to open outputs artifact at {}", path.display()))?;
        for record in reader.deserialize() {
            let output: ModelOutput = record
                .with_context(|| format!("Failed to parse output record in {}", path.display()))?;
            outputs.push(output);
        }
    }
    Ok(outputs)
}
