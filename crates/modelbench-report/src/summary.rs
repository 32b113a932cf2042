//! Per-model summary report over the final artifact

use crate::EvalResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate metrics for one model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub model_name: String,
    /// Number of scored responses
    pub samples: usize,
    /// Mean rubric correctness over all responses
    pub mean_auto_correctness: f64,
    /// Fraction of responses flagged toxic
    pub toxicity_rate: f64,
    /// Fraction of responses flagged as refusals
    pub refusal_rate: f64,
    /// Mean human helpfulness over labeled responses, if any were labeled
    pub mean_helpfulness: Option<f64>,
    /// Mean human correctness over labeled responses
    pub mean_correctness_human: Option<f64>,
    /// Mean human safety over labeled responses
    pub mean_safety_human: Option<f64>,
}

/// Summary of an evaluation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Per-model summaries, sorted by model name
    pub models: Vec<ModelSummary>,
    /// Mean rubric correctness across every response of every model
    pub overall_auto_correctness: f64,
    /// Report generation time, RFC 3339
    pub timestamp: String,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn optional_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(mean(values))
    }
}

impl EvaluationReport {
    /// Build a report from the final merged artifact
    pub fn from_results(results: &[EvalResult]) -> Self {
        let mut by_model: BTreeMap<&str, Vec<&EvalResult>> = BTreeMap::new();
        for row in results {
            by_model.entry(row.model_name.as_str()).or_default().push(row);
        }

        let models = by_model
            .into_iter()
            .map(|(model_name, rows)| {
                let auto: Vec<f64> = rows.iter().map(|r| r.auto_correctness).collect();
                let toxic: Vec<f64> = rows.iter().map(|r| f64::from(r.is_toxic)).collect();
                let refusal: Vec<f64> = rows.iter().map(|r| f64::from(r.is_refusal)).collect();
                let helpfulness: Vec<f64> = rows
                    .iter()
                    .filter_map(|r| r.helpfulness.map(f64::from))
                    .collect();
                let correctness: Vec<f64> = rows
                    .iter()
                    .filter_map(|r| r.correctness_human.map(f64::from))
                    .collect();
                let safety: Vec<f64> = rows
                    .iter()
                    .filter_map(|r| r.safety_human.map(f64::from))
                    .collect();

                ModelSummary {
                    model_name: model_name.to_string(),
                    samples: rows.len(),
                    mean_auto_correctness: mean(&auto),
                    toxicity_rate: mean(&toxic),
                    refusal_rate: mean(&refusal),
                    mean_helpfulness: optional_mean(&helpfulness),
                    mean_correctness_human: optional_mean(&correctness),
                    mean_safety_human: optional_mean(&safety),
                }
            })
            .collect::<Vec<_>>();

        let overall: Vec<f64> = results.iter().map(|r| r.auto_correctness).collect();

        Self {
            models,
            overall_auto_correctness: mean(&overall),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Format the report as markdown
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str("# Evaluation Report\n\n");
        md.push_str(&format!("**Timestamp**: {}\n\n", self.timestamp));
        md.push_str(&format!(
            "**Overall Auto Correctness**: {:.2}%\n\n",
            self.overall_auto_correctness * 100.0
        ));

        md.push_str("## Model Performance\n\n");
        md.push_str("| Model | Samples | Auto Correctness | Toxicity | Refusals |\n");
        md.push_str("|-------|---------|------------------|----------|----------|\n");
        for model in &self.models {
            md.push_str(&format!(
                "| {} | {} | {:.2}% | {:.2}% | {:.2}% |\n",
                model.model_name,
                model.samples,
                model.mean_auto_correctness * 100.0,
                model.toxicity_rate * 100.0,
                model.refusal_rate * 100.0
            ));
        }

        let labeled: Vec<&ModelSummary> = self
            .models
            .iter()
            .filter(|m| m.mean_helpfulness.is_some())
            .collect();
        if !labeled.is_empty() {
            md.push_str("\n## Human-Centered Metrics\n\n");
            md.push_str("| Model | Helpfulness | Correctness | Safety |\n");
            md.push_str("|-------|-------------|-------------|--------|\n");
            for model in labeled {
                md.push_str(&format!(
                    "| {} | {:.2} | {:.2} | {:.2} |\n",
                    model.model_name,
                    model.mean_helpfulness.unwrap_or(0.0),
                    model.mean_correctness_human.unwrap_or(0.0),
                    model.mean_safety_human.unwrap_or(0.0)
                ));
            }
        }

        md
    }
}
