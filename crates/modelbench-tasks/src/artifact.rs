//! Reading and writing the tasks artifact

use crate::Task;
use anyhow::{Context, Result};
use std::path::Path;

/// Write the task catalog to a CSV artifact, replacing any previous file
pub fn write_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create tasks artifact at {}", path.display()))?;
    for task in tasks {
        writer
            .serialize(task)
            .with_context(|| format!("Failed to write task {}", task.task_id))?;
    }
    writer.flush().context("Failed to flush tasks artifact")?;
    Ok(())
}

/// Load the task catalog from a CSV artifact
///
/// Missing file is a fail-fast error: the tasks stage must run before any
/// downstream stage can consume the catalog.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    if !path.exists() {
        anyhow::bail!(
            "Tasks artifact not found at {}. Run `modelbench tasks` first.",
            path.display()
        );
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open tasks artifact at {}", path.display()))?;

    let mut tasks = Vec::new();
    for record in reader.deserialize() {
        let task: Task = record.context("Failed to parse task record")?;
        tasks.push(task);
    }
    Ok(tasks)
}
