use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserProfile;

/// Structured training plan produced from a completion response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingPlan {
    pub milestones: Vec<Milestone>,
}

/// A named unit of the plan with an objective and topics to cover
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    pub name: String,
    pub objective: String,
    pub topics: Vec<String>,
}

impl TrainingPlan {
    /// Render the plan as a Markdown document
    pub fn to_markdown(&self) -> String {
        let mut doc = String::from("# Python Training Plan\n");

        for (index, milestone) in self.milestones.iter().enumerate() {
            doc.push_str(&format!(
                "\n## Milestone {}: {}\n\n**Objective:** {}\n\n**Topics:**\n",
                index + 1,
                milestone.name,
                milestone.objective
            ));
            for topic in &milestone.topics {
                doc.push_str(&format!("- {}\n", topic));
            }
        }

        doc
    }
}

/// Saved plan artifact: the profile it was generated for, the plan itself,
/// and when it was generated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDocument {
    pub profile: UserProfile,
    pub plan: TrainingPlan,
    pub generated_at: DateTime<Utc>,
}

impl PlanDocument {
    pub fn new(profile: UserProfile, plan: TrainingPlan) -> Self {
        Self {
            profile,
            plan,
            generated_at: Utc::now(),
        }
    }
}
