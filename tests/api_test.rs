use mockito::Server;
use serde_json::json;

use python_trainer::api::{format_practice_task, TrainerClient, TrainerError};
use python_trainer::config::Config;

fn test_config(base_url: &str, model: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.api_key = "test-key".to_string();
    config.api.model = model.to_string();
    config
}

fn completion_body(content: &str) -> String {
    json!({
        "choices": [
            {"message": {"role": "assistant", "content": content}}
        ]
    })
    .to_string()
}

fn plan_json() -> serde_json::Value {
    json!({
        "milestones": [
            {
                "name": "Python Basics",
                "objective": "Get comfortable with core syntax",
                "topics": ["variables", "loops"]
            }
        ]
    })
}

#[tokio::test]
async fn test_get_training_plan_with_clean_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&plan_json().to_string()))
        .create_async()
        .await;

    let client = TrainerClient::new(&test_config(&server.url(), "gpt-4o-mini")).unwrap();
    let plan = client.get_training_plan("prompt").await.unwrap();

    assert_eq!(plan.milestones.len(), 1);
    assert_eq!(plan.milestones[0].name, "Python Basics");
    assert_eq!(plan.milestones[0].topics, vec!["variables", "loops"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_training_plan_with_json_in_prose() {
    let mut server = Server::new_async().await;
    let content = format!("Sure! Here is your plan: {} Hope this helps!", plan_json());
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&content))
        .create_async()
        .await;

    let client = TrainerClient::new(&test_config(&server.url(), "gpt-4o-mini")).unwrap();
    let plan = client.get_training_plan("prompt").await.unwrap();

    assert_eq!(plan.milestones[0].objective, "Get comfortable with core syntax");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_training_plan_without_json_is_parse_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("I cannot produce a plan right now."))
        .create_async()
        .await;

    let client = TrainerClient::new(&test_config(&server.url(), "gpt-4o-mini")).unwrap();
    let err = client.get_training_plan("prompt").await.unwrap_err();

    assert!(matches!(err, TrainerError::Parse(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_training_plan_with_missing_field_is_validation_error() {
    let mut server = Server::new_async().await;
    let content = json!({"milestones": [{"name": "Basics", "topics": []}]}).to_string();
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&content))
        .create_async()
        .await;

    let client = TrainerClient::new(&test_config(&server.url(), "gpt-4o-mini")).unwrap();
    let err = client.get_training_plan("prompt").await.unwrap_err();

    assert!(matches!(err, TrainerError::Validation(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_choices_is_request_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"choices": []}).to_string())
        .create_async()
        .await;

    let client = TrainerClient::new(&test_config(&server.url(), "gpt-4o-mini")).unwrap();
    let err = client.send_chat_request("prompt").await.unwrap_err();

    assert!(matches!(err, TrainerError::Request(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_request_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = TrainerClient::new(&test_config(&server.url(), "gpt-4o-mini")).unwrap();
    let err = client.send_chat_request("prompt").await.unwrap_err();

    assert!(matches!(err, TrainerError::Request(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_model_fails_before_any_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let client = TrainerClient::new(&test_config(&server.url(), "")).unwrap();
    let err = client.send_chat_request("prompt").await.unwrap_err();

    assert!(matches!(err, TrainerError::Configuration(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_practice_task_wraps_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Use loops for repetition."))
        .create_async()
        .await;

    let client = TrainerClient::new(&test_config(&server.url(), "gpt-4o-mini")).unwrap();
    let task = client.get_practice_task("prompt").await.unwrap();

    assert_eq!(
        task,
        "# Concept Explanations and Practice Task\n\nUse loops for repetition."
    );
    mock.assert_async().await;
}

#[test]
fn test_format_practice_task_is_exact() {
    assert_eq!(
        format_practice_task("Use loops for repetition."),
        "# Concept Explanations and Practice Task\n\nUse loops for repetition."
    );
}
