// File-based persistence for generated plan artifacts

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::OutputConfig;
use crate::models::{PlanDocument, TrainingPlan};

/// Store for the plan document and the rendered Markdown files
pub struct PlanStore {
    directory: PathBuf,
    plan_file: String,
    plan_data_file: String,
    task_file: String,
}

impl PlanStore {
    pub fn new(output: &OutputConfig) -> Self {
        Self {
            directory: output.directory.clone(),
            plan_file: output.plan_file.clone(),
            plan_data_file: output.plan_data_file.clone(),
            task_file: output.task_file.clone(),
        }
    }

    fn ensure_directory(&self) -> Result<()> {
        fs::create_dir_all(&self.directory).context("Failed to create output directory")
    }

    /// Save the plan document as pretty-printed JSON
    pub fn save_document(&self, document: &PlanDocument) -> Result<PathBuf> {
        self.ensure_directory()?;

        let path = self.directory.join(&self.plan_data_file);
        let contents =
            serde_json::to_string_pretty(document).context("Failed to serialize plan document")?;

        fs::write(&path, contents).context("Failed to write plan document")?;

        tracing::debug!("Saved plan document to {:?}", path);
        Ok(path)
    }

    /// Load the previously saved plan document
    pub fn load_document(&self) -> Result<PlanDocument> {
        let path = self.directory.join(&self.plan_data_file);

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read plan document at {}", path.display()))?;

        serde_json::from_str(&contents).context("Failed to parse plan document")
    }

    /// Write the rendered training plan Markdown
    pub fn write_plan_markdown(&self, plan: &TrainingPlan) -> Result<PathBuf> {
        self.ensure_directory()?;

        let path = self.directory.join(&self.plan_file);
        fs::write(&path, plan.to_markdown()).context("Failed to write training plan file")?;

        tracing::debug!("Saved training plan to {:?}", path);
        Ok(path)
    }

    /// Write an already formatted practice task document
    pub fn write_practice_task(&self, task: &str) -> Result<PathBuf> {
        self.ensure_directory()?;

        let path = self.directory.join(&self.task_file);
        fs::write(&path, task).context("Failed to write practice task file")?;

        tracing::debug!("Saved practice task to {:?}", path);
        Ok(path)
    }
}
