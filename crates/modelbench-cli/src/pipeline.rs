//! Pipeline stage runners

use crate::DataLayout;
use anyhow::{Context, Result};
use modelbench_guardrails::{apply_guardrails, load_guardrailed, write_guardrailed};
use modelbench_report::{aggregate_results, load_labels, load_results, write_results, EvaluationReport};
use modelbench_rubric::{apply_rubric, load_scores, write_scores};
use modelbench_simulate::{
    generate_outputs_for_model, load_all_outputs, write_outputs, SimulatorConfig,
};
use modelbench_tasks::{build_tasks, load_tasks, write_tasks};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn ensure_dir(path: &std::path::Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))
}

/// Build the fixed task catalog and write tasks.csv
pub fn run_tasks(layout: &DataLayout) -> Result<()> {
    ensure_dir(layout.data_dir())?;

    let tasks = build_tasks();
    write_tasks(&layout.tasks_path(), &tasks)?;
    println!(
        "Saved {} tasks to {}",
        tasks.len(),
        layout.tasks_path().display()
    );
    Ok(())
}

/// Simulate every configured responder over the task catalog
///
/// One RNG is seeded from the config for the whole run; models are
/// generated in config order, so identical configs give identical
/// artifacts.
pub fn run_simulate(layout: &DataLayout, config: &SimulatorConfig) -> Result<()> {
    let tasks = load_tasks(&layout.tasks_path())?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    for model in &config.models {
        let outputs = generate_outputs_for_model(&mut rng, &tasks, &model.name, model.quality)?;
        write_outputs(&layout.outputs_dir(), &model.name, &outputs)?;
        println!(
            "Saved {} outputs for {} (quality {})",
            outputs.len(),
            model.name,
            model.quality
        );
    }
    Ok(())
}

/// Score every model output against its task reference
pub fn run_score(layout: &DataLayout) -> Result<()> {
    let tasks = load_tasks(&layout.tasks_path())?;
    let outputs = load_all_outputs(&layout.outputs_dir())?;

    let scored = apply_rubric(&tasks, &outputs)?;
    write_scores(&layout.scores_path(), &scored)?;
    println!(
        "Saved {} auto-scored rows to {}",
        scored.len(),
        layout.scores_path().display()
    );
    Ok(())
}

/// Annotate scored outputs with toxicity and refusal flags
pub fn run_guardrails(layout: &DataLayout) -> Result<()> {
    let scored = load_scores(&layout.scores_path())?;

    let flagged = apply_guardrails(scored);
    write_guardrailed(&layout.guardrails_path(), &flagged)?;
    println!(
        "Saved guardrail-augmented scores to {}",
        layout.guardrails_path().display()
    );
    Ok(())
}

/// Merge automatic scores with any human labels into the final artifact
pub fn run_aggregate(layout: &DataLayout) -> Result<()> {
    let auto = load_guardrailed(&layout.guardrails_path())?;
    let labels = load_labels(&layout.labels_path())?;

    let results = aggregate_results(&auto, &labels);
    ensure_dir(&layout.artifacts_dir())?;
    write_results(&layout.results_path(), &results)?;
    println!(
        "Saved {} aggregated rows to {}",
        results.len(),
        layout.results_path().display()
    );
    Ok(())
}

/// Summarize the final artifact into markdown and JSON reports
pub fn run_report(layout: &DataLayout) -> Result<()> {
    let results = load_results(&layout.results_path())?;

    let report = EvaluationReport::from_results(&results);
    ensure_dir(&layout.artifacts_dir())?;

    let markdown = report.to_markdown();
    std::fs::write(layout.report_markdown_path(), &markdown)
        .context("Failed to write markdown report")?;
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    std::fs::write(layout.report_json_path(), json).context("Failed to write JSON report")?;

    println!("{}", markdown);
    println!("Saved report to {}", layout.report_markdown_path().display());
    Ok(())
}

/// Run the five pipeline stages in order
pub fn run_all(layout: &DataLayout, config: &SimulatorConfig) -> Result<()> {
    info!(data_dir = %layout.data_dir().display(), seed = config.seed, "Starting full pipeline run");
    run_tasks(layout)?;
    run_simulate(layout, config)?;
    run_score(layout)?;
    run_guardrails(layout)?;
    run_aggregate(layout)?;
    Ok(())
}
