//! On-disk layout of pipeline artifacts

use std::path::{Path, PathBuf};

/// Where each pipeline artifact lives under the data root
#[derive(Debug, Clone)]
pub struct DataLayout {
    data_dir: PathBuf,
}

impl DataLayout {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.data_dir.join("tasks.csv")
    }

    pub fn outputs_dir(&self) -> PathBuf {
        self.data_dir.join("outputs")
    }

    pub fn scores_path(&self) -> PathBuf {
        self.data_dir.join("auto_scores.csv")
    }

    pub fn guardrails_path(&self) -> PathBuf {
        self.data_dir.join("auto_scores_with_guardrails.csv")
    }

    pub fn labels_path(&self) -> PathBuf {
        self.data_dir.join("labels_humans.csv")
    }

    pub fn artifacts_dir(&self) -> PathBuf {
        self.data_dir.join("artifacts")
    }

    pub fn results_path(&self) -> PathBuf {
        self.artifacts_dir().join("eval_results.csv")
    }

    pub fn report_markdown_path(&self) -> PathBuf {
        self.artifacts_dir().join("report.md")
    }

    pub fn report_json_path(&self) -> PathBuf {
        self.artifacts_dir().join("report.json")
    }
}
