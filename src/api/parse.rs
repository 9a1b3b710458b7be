use serde_json::Value;

use super::TrainerError;
use crate::models::TrainingPlan;

/// Parse a completion response into a training plan.
///
/// Tries the whole text as JSON first, then falls back to the substring from
/// the first `{` to the last `}`. Models tend to wrap the payload in prose;
/// the greedy cut can still misfire when the text holds several separate
/// objects, in which case the inner parse fails and the error propagates.
pub fn parse_training_plan(response: &str) -> Result<TrainingPlan, TrainerError> {
    let value = extract_json(response)?;

    serde_json::from_value(value).map_err(|e| {
        TrainerError::Validation(format!(
            "Response does not match the training plan shape: {}",
            e
        ))
    })
}

fn extract_json(response: &str) -> Result<Value, TrainerError> {
    if let Ok(value) = serde_json::from_str(response) {
        return Ok(value);
    }

    let start = response.find('{');
    let end = response.rfind('}');

    match (start, end) {
        (Some(start), Some(end)) if start < end => serde_json::from_str(&response[start..=end])
            .map_err(|e| {
                TrainerError::Parse(format!(
                    "Could not extract valid JSON from the response: {}",
                    e
                ))
            }),
        _ => Err(TrainerError::Parse(
            "Could not extract valid JSON from the response".to_string(),
        )),
    }
}
