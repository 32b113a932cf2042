//! Left join of automatic scores with human labels

use crate::{EvalResult, HumanLabel};
use anyhow::{Context, Result};
use modelbench_guardrails::GuardrailedOutput;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Merge automatic scores with human labels on (task_id, model_name)
///
/// Left join anchored at the automatic side: the result has exactly one
/// row per guardrailed score, whatever the label set looks like. When a
/// pair was labeled more than once across annotation sessions, the most
/// recently appended label wins (the log is ordered by append time).
pub fn aggregate_results(auto: &[GuardrailedOutput], labels: &[HumanLabel]) -> Vec<EvalResult> {
    let mut latest: HashMap<(&str, &str), &HumanLabel> = HashMap::new();
    for label in labels {
        latest.insert((label.task_id.as_str(), label.model_name.as_str()), label);
    }
    info!(
        auto_rows = auto.len(),
        labeled_pairs = latest.len(),
        "Aggregating automatic scores with human labels"
    );

    auto.iter()
        .map(|row| {
            let label = latest.get(&(row.task_id.as_str(), row.model_name.as_str()));
            EvalResult {
                task_id: row.task_id.clone(),
                category: row.category,
                prompt: row.prompt.clone(),
                reference_answer: row.reference_answer.clone(),
                model_name: row.model_name.clone(),
                response: row.response.clone(),
                auto_correctness: row.auto_correctness,
                is_toxic: row.is_toxic,
                is_refusal: row.is_refusal,
                is_best: label.map(|l| l.is_best),
                helpfulness: label.map(|l| l.helpfulness),
                correctness_human: label.map(|l| l.correctness_human),
                safety_human: label.map(|l| l.safety_human),
                comments: label.map(|l| l.comments.clone()),
            }
        })
        .collect()
}

/// Write the final merged artifact, replacing any previous file
pub fn write_results(path: &Path, results: &[EvalResult]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create results artifact at {}", path.display()))?;
    for row in results {
        writer.serialize(row).with_context(|| {
            format!(
                "Failed to write result for task {} / model {}",
                row.task_id, row.model_name
            )
        })?;
    }
    writer.flush().context("Failed to flush results artifact")?;
    Ok(())
}

/// Load the final merged artifact
pub fn load_results(path: &Path) -> Result<Vec<EvalResult>> {
    if !path.exists() {
        anyhow::bail!(
            "Results artifact not found at {}. Run `modelbench aggregate` first.",
            path.display()
        );
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open results artifact at {}", path.display()))?;

    let mut results = Vec::new();
    for record in reader.deserialize() {
        let row: EvalResult = record.context("Failed to parse result record")?;
        results.push(row);
    }
    Ok(results)
}
