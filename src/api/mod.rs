use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;
use crate::models::TrainingPlan;
use crate::prompt::SYSTEM_PROMPT;

mod error;
mod parse;

pub use error::TrainerError;
pub use parse::parse_training_plan;

/// Fixed sampling temperature for completion requests
const TEMPERATURE: f32 = 0.7;

/// Upper bound on generated tokens per response
const MAX_TOKENS: u32 = 3000;

/// Heading placed above a generated practice task
const PRACTICE_TASK_HEADING: &str = "# Concept Explanations and Practice Task";

/// Chat completion request body (OpenAI-compatible)
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A single message of a chat completion request
#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

/// Chat completion response body
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// One completion choice
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

/// Message payload of a completion choice
#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Client for the chat completion endpoint
pub struct TrainerClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl TrainerClient {
    /// Create a new client from process configuration
    pub fn new(config: &Config) -> Result<Self, TrainerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .build()
            .map_err(|e| {
                TrainerError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            api_key: config.api.api_key.clone(),
            model: config.api.model.clone(),
        })
    }

    /// Request a training plan for the given prompt
    pub async fn get_training_plan(&self, prompt: &str) -> Result<TrainingPlan, TrainerError> {
        let response = self.send_chat_request(prompt).await?;
        let plan = parse::parse_training_plan(&response)?;

        tracing::info!("Generated training plan with {} milestones", plan.milestones.len());
        Ok(plan)
    }

    /// Request concept explanations and a practice task for the given prompt
    pub async fn get_practice_task(&self, prompt: &str) -> Result<String, TrainerError> {
        let response = self.send_chat_request(prompt).await?;
        Ok(format_practice_task(&response))
    }

    /// Send a prompt to the completion endpoint and return the trimmed text
    /// of the first choice.
    ///
    /// Fails before any network I/O when no model is configured.
    pub async fn send_chat_request(&self, prompt: &str) -> Result<String, TrainerError> {
        if self.model.is_empty() {
            return Err(TrainerError::Configuration(
                "Model name is not set. Set MODEL_NAME or api.model in the config file."
                    .to_string(),
            ));
        }

        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        tracing::debug!("Sending completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                TrainerError::Request(format!("Unable to reach the completion endpoint: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TrainerError::Request(format!(
                "Completion request failed with status {}: {}",
                status, body
            )));
        }

        let completion: ChatResponse = response.json().await.map_err(|e| {
            TrainerError::Request(format!("Failed to decode completion response: {}", e))
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                TrainerError::Request("Completion response contained no usable content".to_string())
            })?;

        tracing::debug!("Received completion response ({} characters)", content.len());
        Ok(content)
    }
}

/// Wrap a practice task response under its Markdown heading
pub fn format_practice_task(response: &str) -> String {
    format!("{}\n\n{}", PRACTICE_TASK_HEADING, response.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = Config::default();
        let client = TrainerClient::new(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_format_practice_task() {
        assert_eq!(
            format_practice_task("Use loops for repetition."),
            "# Concept Explanations and Practice Task\n\nUse loops for repetition."
        );
    }

    #[test]
    fn test_format_practice_task_trims_whitespace() {
        assert_eq!(
            format_practice_task("\n  Use loops for repetition.  \n"),
            "# Concept Explanations and Practice Task\n\nUse loops for repetition."
        );
    }
}
