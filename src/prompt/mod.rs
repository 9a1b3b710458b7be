//! Prompt templates for the completion endpoint.

use crate::models::{Milestone, UserProfile};

/// System instruction sent with every completion request
pub const SYSTEM_PROMPT: &str = "You are a helpful AI assistant that creates Python training \
plans, explains programming concepts, and designs practice tasks.";

/// Label used when the optional Python experience field is absent or empty
const NOT_SPECIFIED: &str = "Not specified";

/// Build the training plan prompt from a user profile.
///
/// Embeds every profile field; `python_experience` falls back to
/// "Not specified" when absent or empty.
pub fn training_plan_prompt(profile: &UserProfile) -> String {
    let python_experience = profile
        .python_experience
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(NOT_SPECIFIED);

    format!(
        "Create a Python training plan for a user with the following profile:\n\
         Experience level: {}\n\
         Python knowledge: {}\n\
         Learning goal: {}\n\
         Preferred learning style: {}\n\
         \n\
         The plan should include several milestones with milestone names, objectives, and topics to cover.\n\
         Each milestone should be tailored to the user's experience level and learning style.\n\
         Respond with a single JSON object of the form:\n\
         {{\"milestones\": [{{\"name\": \"...\", \"objective\": \"...\", \"topics\": [\"...\", \"...\"]}}]}}",
        profile.programming_experience,
        python_experience,
        profile.learning_goal,
        profile.learning_style
    )
}

/// Build the practice task prompt for one milestone of a generated plan.
pub fn practice_task_prompt(profile: &UserProfile, milestone: &Milestone) -> String {
    format!(
        "The user is working through a Python training plan and has reached the milestone \"{}\".\n\
         Milestone objective: {}\n\
         Topics to cover: {}\n\
         \n\
         Experience level: {}\n\
         Preferred learning style: {}\n\
         \n\
         Explain the key concepts behind these topics, then design one practice task that applies them.\n\
         Keep the explanations and the task suited to the user's experience level and learning style.",
        milestone.name,
        milestone.objective,
        milestone.topics.join(", "),
        profile.programming_experience,
        profile.learning_style
    )
}
