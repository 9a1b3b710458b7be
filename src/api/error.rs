use thiserror::Error;

/// Errors raised by the plan generation pipeline
#[derive(Error, Debug)]
pub enum TrainerError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Could not parse the completion response: {0}")]
    Parse(String),

    #[error("Invalid training plan: {0}")]
    Validation(String),
}
