pub mod plan;
pub mod profile;

pub use plan::{Milestone, PlanDocument, TrainingPlan};
pub use profile::{ExperienceLevel, LearningStyle, UserProfile};
