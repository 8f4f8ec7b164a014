//! Integration tests for ChatInferenceProvider using wiremock

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mdforge_llm::ChatInferenceProvider;
use mdforge_llm::domain::{InferenceProvider, LlmError};
use mdforge_llm::prompts::README_SYSTEM_PROMPT;

const MODEL_PATH: &str = "/models/google/gemma-3-27b-it";

fn create_provider(mock_server: &MockServer) -> ChatInferenceProvider {
    ChatInferenceProvider::new(
        "Gemma",
        format!("{}{}", mock_server.uri(), MODEL_PATH),
        "hf_test_token",
    )
    .with_timeout(10)
}

#[tokio::test]
async fn test_chat_provider_sends_messages_and_reads_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("Authorization", "Bearer hf_test_token"))
        .and(body_partial_json(serde_json::json!({
            "inputs": [
                { "role": "system", "content": [{ "type": "text", "text": README_SYSTEM_PROMPT }] },
                { "role": "user", "content": [{ "type": "text", "text": "TASK: test" }] }
            ],
            "parameters": {
                "max_new_tokens": 2048,
                "temperature": 0.7,
                "do_sample": true,
                "return_full_text": false
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{ "generated_text": "# Foo\n\nBody" }])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = create_provider(&mock_server);
    let text = provider.invoke("TASK: test").await.unwrap();

    assert_eq!(text, "# Foo\n\nBody");
}

#[tokio::test]
async fn test_chat_provider_reads_object_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "generated_text": "# Single" })),
        )
        .mount(&mock_server)
        .await;

    let text = create_provider(&mock_server).invoke("p").await.unwrap();
    assert_eq!(text, "# Single");
}

#[tokio::test]
async fn test_chat_provider_unexpected_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "estimated_time": 20.0 })),
        )
        .mount(&mock_server)
        .await;

    let err = create_provider(&mock_server).invoke("p").await.unwrap_err();
    assert_eq!(err.to_string(), "Unexpected response format from Gemma API");
}

#[tokio::test]
async fn test_chat_provider_rate_limited_with_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "12")
                .set_body_string("Rate limit reached"),
        )
        .mount(&mock_server)
        .await;

    let err = create_provider(&mock_server).invoke("p").await.unwrap_err();
    match err {
        LlmError::RateLimited { retry_after, .. } => assert_eq!(retry_after, Some(12)),
        other => panic!("Expected RateLimited, got {:?}", other),
    }
}

#[tokio::test]
async fn test_chat_provider_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid token"))
        .mount(&mock_server)
        .await;

    let err = create_provider(&mock_server).invoke("p").await.unwrap_err();
    assert!(matches!(err, LlmError::Authentication(_)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_chat_provider_model_loading_is_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(serde_json::json!({ "error": "Model is currently loading" })),
        )
        .mount(&mock_server)
        .await;

    let err = create_provider(&mock_server).invoke("p").await.unwrap_err();
    assert!(matches!(err, LlmError::ServiceUnavailable(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_chat_provider_network_error() {
    let provider = ChatInferenceProvider::new("Gemma", "http://127.0.0.1:9/unreachable", "t")
        .with_timeout(2);

    let err = provider.invoke("p").await.unwrap_err();
    assert!(matches!(err, LlmError::Network(_) | LlmError::Timeout { .. }));
}
