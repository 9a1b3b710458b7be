use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

use crate::api::TrainerClient;
use crate::config::Config;
use crate::models::{ExperienceLevel, LearningStyle, PlanDocument, UserProfile};
use crate::prompt;
use crate::storage::PlanStore;

#[derive(Args)]
pub struct PlanCommand {
    /// Programming experience level (beginner, intermediate, advanced)
    #[arg(short, long)]
    experience: Option<String>,

    /// Prior Python experience, if any
    #[arg(short, long)]
    python_experience: Option<String>,

    /// What the user wants to achieve with Python
    #[arg(short, long)]
    goal: Option<String>,

    /// Preferred learning style (hands-on, theoretical, balanced)
    #[arg(short, long)]
    style: Option<String>,

    /// Skip the practice task prompt after the plan is generated
    #[arg(long)]
    skip_task: bool,
}

impl PlanCommand {
    pub async fn execute(self) -> Result<()> {
        println!("Python Trainer - Training Plan");
        println!();

        let profile = self.collect_profile()?;

        let config = Config::load()?;
        let client = TrainerClient::new(&config)?;
        let plan_prompt = prompt::training_plan_prompt(&profile);

        println!();
        let spinner = super::spinner("Generating training plan...");
        let result = client.get_training_plan(&plan_prompt).await;
        spinner.finish_and_clear();

        let plan = match result {
            Ok(plan) => plan,
            Err(e) => {
                println!("{} Failed to generate training plan: {}", "✗".red(), e);
                return Err(e.into());
            }
        };

        println!("{} Training plan generated", "✓".green());
        println!();
        for (index, milestone) in plan.milestones.iter().enumerate() {
            println!("  {}. {}", index + 1, milestone.name.bold());
        }
        println!();

        let store = PlanStore::new(&config.output);
        let document = PlanDocument::new(profile, plan);
        let markdown_path = store.write_plan_markdown(&document.plan)?;
        store.save_document(&document)?;
        println!("Saved training plan to {}", markdown_path.display());

        if !self.skip_task && !document.plan.milestones.is_empty() {
            println!();
            let generate = Confirm::new()
                .with_prompt("Generate a practice task for the first milestone?")
                .default(true)
                .interact()?;

            if generate {
                let task_prompt =
                    prompt::practice_task_prompt(&document.profile, &document.plan.milestones[0]);

                let spinner = super::spinner("Generating practice task...");
                let result = client.get_practice_task(&task_prompt).await;
                spinner.finish_and_clear();

                match result {
                    Ok(task) => {
                        let task_path = store.write_practice_task(&task)?;
                        println!("{} Saved practice task to {}", "✓".green(), task_path.display());
                    }
                    Err(e) => {
                        println!("{} Failed to generate practice task: {}", "✗".red(), e);
                        return Err(e.into());
                    }
                }
            }
        }

        Ok(())
    }

    /// Build the user profile from flags, prompting for anything omitted
    fn collect_profile(&self) -> Result<UserProfile> {
        let programming_experience = match &self.experience {
            Some(raw) => raw.parse()?,
            None => {
                let levels = [
                    ExperienceLevel::Beginner,
                    ExperienceLevel::Intermediate,
                    ExperienceLevel::Advanced,
                ];
                let index = Select::new()
                    .with_prompt("Programming experience level")
                    .items(&levels)
                    .default(0)
                    .interact()?;
                levels[index]
            }
        };

        let python_experience = match &self.python_experience {
            Some(answer) => Some(answer.clone()),
            None => {
                let answer: String = Input::new()
                    .with_prompt("Prior Python experience (leave empty if none)")
                    .allow_empty(true)
                    .interact_text()?;
                if answer.trim().is_empty() {
                    None
                } else {
                    Some(answer)
                }
            }
        };

        let learning_goal = match &self.goal {
            Some(goal) => goal.clone(),
            None => Input::new()
                .with_prompt("What do you want to achieve with Python?")
                .interact_text()?,
        };

        let learning_style = match &self.style {
            Some(raw) => raw.parse()?,
            None => {
                let styles = [
                    LearningStyle::HandsOn,
                    LearningStyle::Theoretical,
                    LearningStyle::Balanced,
                ];
                let index = Select::new()
                    .with_prompt("Preferred learning style")
                    .items(&styles)
                    .default(0)
                    .interact()?;
                styles[index]
            }
        };

        Ok(UserProfile {
            programming_experience,
            python_experience,
            learning_goal,
            learning_style,
        })
    }
}
