//! Category-specific scoring rules

use crate::ScoredOutput;
use anyhow::Result;
use modelbench_simulate::ModelOutput;
use modelbench_tasks::{Task, TaskCategory};
use std::collections::{HashMap, HashSet};

/// Absolute difference below which a numeric answer earns full credit
const EXACT_CREDIT_TOLERANCE: f64 = 1e-3;

/// Score a numeric-reasoning answer
///
/// Full credit within the tolerance; otherwise credit decays linearly with
/// the absolute difference, normalized by `max(1, |ref|)` so references
/// near zero do not explode the penalty, floored at zero. Either side
/// failing to parse scores 0.0.
pub fn score_math_reasoning(pred: &str, reference: &str) -> f64 {
    let pred_val: f64 = match pred.trim().parse() {
        Ok(v) => v,
        Err(_) => return 0.0,
    };
    let ref_val: f64 = match reference.trim().parse() {
        Ok(v) => v,
        Err(_) => return 0.0,
    };

    let diff = (pred_val - ref_val).abs();
    if diff < EXACT_CREDIT_TOLERANCE {
        return 1.0;
    }
    (1.0 - diff / ref_val.abs().max(1.0)).max(0.0)
}

/// Score a sentiment label: exact match after trimming and lowercasing
pub fn score_sentiment(pred: &str, reference: &str) -> f64 {
    if pred.trim().to_lowercase() == reference.trim().to_lowercase() {
        1.0
    } else {
        0.0
    }
}

/// Token-overlap score between prediction and reference
///
/// Lowercased whitespace tokens, set semantics (duplicates in either side
/// do not inflate the score), normalized by the reference token count.
/// An empty reference scores 0.0.
pub fn token_overlap_score(pred: &str, reference: &str) -> f64 {
    let pred_lower = pred.to_lowercase();
    let ref_lower = reference.to_lowercase();
    let pred_tokens: HashSet<&str> = pred_lower.split_whitespace().collect();
    let ref_tokens: HashSet<&str> = ref_lower.split_whitespace().collect();

    if ref_tokens.is_empty() {
        return 0.0;
    }
    let overlap = pred_tokens.intersection(&ref_tokens).count();
    overlap as f64 / ref_tokens.len() as f64
}

fn score_for_category(category: TaskCategory, pred: &str, reference: &str) -> f64 {
    match category {
        TaskCategory::MathReasoning => score_math_reasoning(pred, reference),
        TaskCategory::SentimentClassification => score_sentiment(pred, reference),
        TaskCategory::Summarization => token_overlap_score(pred, reference),
        TaskCategory::Unknown => 0.0,
    }
}

/// Join model outputs with their tasks and score every row
///
/// The join is anchored at the outputs: every output must resolve its
/// task by `task_id`. A dangling id is a data-integrity error, not a row
/// to drop silently.
pub fn apply_rubric(tasks: &[Task], outputs: &[ModelOutput]) -> Result<Vec<ScoredOutput>> {
    let by_id: HashMap<&str, &Task> = tasks
        .iter()
        .map(|task| (task.task_id.as_str(), task))
        .collect();

    let mut scored = Vec::with_capacity(outputs.len());
    for output in outputs {
        let task = by_id.get(output.task_id.as_str()).ok_or_else(|| {
            anyhow::anyhow!(
                "Output for model {} references unknown task {}",
                output.model_name,
                output.task_id
            )
        })?;

        let auto_correctness =
            score_for_category(task.category, &output.response, &task.reference_answer);

        scored.push(ScoredOutput {
            task_id: output.task_id.clone(),
            category: task.category,
            prompt: task.prompt.clone(),
            reference_answer: task.reference_answer.clone(),
            model_name: output.model_name.clone(),
            response: output.response.clone(),
            auto_correctness,
        });
    }
    Ok(scored)
}
