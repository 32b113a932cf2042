//! Task sampling for the annotation collaborator

use modelbench_guardrails::GuardrailedOutput;
use modelbench_tasks::TaskCategory;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// One task with every model's response to it, presented together
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSample {
    pub task_id: String,
    pub category: TaskCategory,
    pub prompt: String,
    /// (model_name, response) pairs, sorted by model name
    pub responses: Vec<(String, String)>,
}

/// Uniformly sample one task and collect all model responses for it
///
/// Rows are grouped by `task_id` before sampling so every task is equally
/// likely regardless of how many models answered it. Returns `None` when
/// there are no rows to sample from.
pub fn sample_task(rng: &mut StdRng, rows: &[GuardrailedOutput]) -> Option<TaskSample> {
    let mut task_ids: Vec<&str> = rows.iter().map(|row| row.task_id.as_str()).collect();
    task_ids.sort_unstable();
    task_ids.dedup();

    let task_id = *task_ids.choose(rng)?;

    let mut subset: Vec<&GuardrailedOutput> = rows
        .iter()
        .filter(|row| row.task_id == task_id)
        .collect();
    subset.sort_by(|a, b| a.model_name.cmp(&b.model_name));

    let first = subset.first()?;
    Some(TaskSample {
        task_id: task_id.to_string(),
        category: first.category,
        prompt: first.prompt.clone(),
        responses: subset
            .iter()
            .map(|row| (row.model_name.clone(), row.response.clone()))
            .collect(),
    })
}
