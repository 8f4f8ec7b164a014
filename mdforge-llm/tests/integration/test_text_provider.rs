//! Integration tests for TextInferenceProvider using wiremock

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mdforge_llm::TextInferenceProvider;
use mdforge_llm::domain::{InferenceProvider, LlmError};
use mdforge_llm::prompts::README_SYSTEM_PROMPT;

const MODEL_PATH: &str = "/models/mistralai/Mistral-7B-Instruct-v0.2";

fn create_provider(mock_server: &MockServer) -> TextInferenceProvider {
    TextInferenceProvider::new(
        "Mistral",
        format!("{}{}", mock_server.uri(), MODEL_PATH),
        "hf_test_token",
    )
    .with_timeout(10)
}

#[tokio::test]
async fn test_text_provider_sends_single_string_input() {
    let mock_server = MockServer::start().await;
    let expected_input = format!("{}\n\nTASK: test", README_SYSTEM_PROMPT);

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("Authorization", "Bearer hf_test_token"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(serde_json::json!({
            "inputs": expected_input,
            "parameters": { "top_p": 0.95, "max_new_tokens": 2048 }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{ "generated_text": "# Foo" }])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let text = create_provider(&mock_server).invoke("TASK: test").await.unwrap();
    assert_eq!(text, "# Foo");
}

#[tokio::test]
async fn test_text_provider_reads_bare_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!("# Bare")))
        .mount(&mock_server)
        .await;

    let text = create_provider(&mock_server).invoke("p").await.unwrap();
    assert_eq!(text, "# Bare");
}

#[tokio::test]
async fn test_text_provider_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let err = create_provider(&mock_server).invoke("p").await.unwrap_err();
    assert!(matches!(err, LlmError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_text_provider_empty_batch_is_unexpected_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let err = create_provider(&mock_server).invoke("p").await.unwrap_err();
    assert_eq!(err, LlmError::unexpected_format("Mistral"));
}

#[tokio::test]
async fn test_text_provider_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_string("Model not found"))
        .mount(&mock_server)
        .await;

    let err = create_provider(&mock_server).invoke("p").await.unwrap_err();
    assert!(matches!(err, LlmError::ModelNotFound(_)));
}

#[tokio::test]
async fn test_text_provider_bad_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(422).set_body_string("inputs too long"))
        .mount(&mock_server)
        .await;

    let err = create_provider(&mock_server).invoke("p").await.unwrap_err();
    assert!(matches!(err, LlmError::InvalidRequest(ref msg) if msg.contains("inputs too long")));
}
