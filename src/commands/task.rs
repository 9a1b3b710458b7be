use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use crate::api::TrainerClient;
use crate::config::Config;
use crate::prompt;
use crate::storage::PlanStore;

#[derive(Args)]
pub struct TaskCommand {
    /// Milestone number from the saved plan (1-based)
    #[arg(short, long, default_value_t = 1)]
    milestone: usize,
}

impl TaskCommand {
    pub async fn execute(self) -> Result<()> {
        if self.milestone == 0 {
            bail!("Milestone numbers start at 1");
        }

        let config = Config::load()?;
        let store = PlanStore::new(&config.output);

        let document = store
            .load_document()
            .context("No saved training plan found. Run 'python-trainer plan' first.")?;

        let milestone = document
            .plan
            .milestones
            .get(self.milestone - 1)
            .with_context(|| {
                format!(
                    "The saved plan has {} milestones, there is no milestone {}",
                    document.plan.milestones.len(),
                    self.milestone
                )
            })?;

        println!(
            "Generating a practice task for milestone {}: {}",
            self.milestone,
            milestone.name.bold()
        );
        println!();

        let client = TrainerClient::new(&config)?;
        let task_prompt = prompt::practice_task_prompt(&document.profile, milestone);

        let spinner = super::spinner("Generating practice task...");
        let result = client.get_practice_task(&task_prompt).await;
        spinner.finish_and_clear();

        match result {
            Ok(task) => {
                let path = store.write_practice_task(&task)?;
                println!("{} Saved practice task to {}", "✓".green(), path.display());
                Ok(())
            }
            Err(e) => {
                println!("{} Failed to generate practice task: {}", "✗".red(), e);
                Err(e.into())
            }
        }
    }
}
