//! Unit tests for GenerateReadmeUseCase

use std::sync::Arc;
use std::time::Duration;

use mdforge_core::domain::{GenerationRequest, ProjectInfo};
use mdforge_llm::domain::LlmError;
use mdforge_llm::{GenerateReadmeUseCase, GenerationError, ResponseValidator};
use tokio_util::sync::CancellationToken;

#[path = "../common/mod.rs"]
mod common;

use common::{MockProvider, create_project_request, valid_readme};

fn use_case(primary: &Arc<MockProvider>, fallback: &Arc<MockProvider>) -> GenerateReadmeUseCase {
    GenerateReadmeUseCase::new(
        primary.clone(),
        fallback.clone(),
        ResponseValidator::default(),
        Duration::from_secs(5),
    )
}

/// Primary answer accepted, fallback never called
#[tokio::test]
async fn test_primary_success_skips_fallback() {
    let body = format!("# Foo\n\n{}", "x".repeat(223));
    assert_eq!(body.chars().count(), 230);

    let primary = Arc::new(MockProvider::new("Gemma").with_content(body.clone()));
    let fallback = Arc::new(MockProvider::new("Mistral").with_content(valid_readme("Other")));

    let markdown = use_case(&primary, &fallback)
        .execute(&create_project_request(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(markdown, body);
    assert_eq!(primary.call_count(), 1);
    assert_eq!(fallback.call_count(), 0);
}

/// Primary returns short junk, fallback answer is used
#[tokio::test]
async fn test_short_primary_answer_falls_back_once() {
    let primary = Arc::new(MockProvider::new("Gemma").with_content("# Foo"));
    let fallback = Arc::new(MockProvider::new("Mistral").with_content(valid_readme("Foo")));

    let markdown = use_case(&primary, &fallback)
        .execute(&create_project_request(), &CancellationToken::new())
        .await
        .unwrap();

    assert!(markdown.starts_with("# Foo"));
    assert_eq!(primary.call_count(), 1);
    assert_eq!(fallback.call_count(), 1);
}

/// Both providers receive the same prompt
#[tokio::test]
async fn test_fallback_receives_same_prompt() {
    let primary = Arc::new(MockProvider::new("Gemma").with_error(LlmError::network("reset")));
    let fallback = Arc::new(MockProvider::new("Mistral").with_content(valid_readme("Foo")));

    use_case(&primary, &fallback)
        .execute(&create_project_request(), &CancellationToken::new())
        .await
        .unwrap();

    let first = primary.captured_prompts.lock().await.clone();
    let second = fallback.captured_prompts.lock().await.clone();
    assert_eq!(first, second);
    assert!(first[0].starts_with("TASK: Create a professional Project README"));
}

/// Both fail: the fallback's error is reported
#[tokio::test]
async fn test_both_fail_reports_fallback_error() {
    let primary = Arc::new(MockProvider::new("Gemma").with_error(LlmError::network("reset")));
    let fallback = Arc::new(
        MockProvider::new("Mistral").with_error(LlmError::unexpected_format("Mistral")),
    );

    let err = use_case(&primary, &fallback)
        .execute(&create_project_request(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error generating README: Unexpected response format from Mistral API"
    );
    assert_eq!(primary.call_count(), 1);
    assert_eq!(fallback.call_count(), 1);
}

/// Both answer, neither answer is usable
#[tokio::test]
async fn test_both_unusable_reports_invalid_content() {
    let filler = "-".repeat(120);
    let primary = Arc::new(MockProvider::new("Gemma").with_content(filler.clone()));
    let fallback = Arc::new(MockProvider::new("Mistral").with_content("too short"));

    let uc = use_case(&primary, &fallback);
    let err = uc
        .execute(&create_project_request(), &CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err, GenerationError::InvalidContent);

    let text = uc
        .execute_to_string(&create_project_request(), &CancellationToken::new())
        .await;
    assert_eq!(
        text,
        "Error: Generated content appears to be invalid. Please try again."
    );
}

/// A hung primary is cut off by the attempt deadline and the fallback runs
#[tokio::test]
async fn test_timeout_triggers_fallback() {
    let primary = Arc::new(
        MockProvider::new("Gemma")
            .with_content(valid_readme("Slow"))
            .with_delay(Duration::from_secs(30)),
    );
    let fallback = Arc::new(MockProvider::new("Mistral").with_content(valid_readme("Foo")));

    let uc = GenerateReadmeUseCase::new(
        primary.clone(),
        fallback.clone(),
        ResponseValidator::default(),
        Duration::from_millis(50),
    );

    let markdown = uc
        .execute(&create_project_request(), &CancellationToken::new())
        .await
        .unwrap();

    assert!(markdown.starts_with("# Foo"));
    assert_eq!(fallback.call_count(), 1);
}

/// Cancellation aborts the in-flight attempt and skips the fallback
#[tokio::test]
async fn test_cancellation_skips_fallback() {
    let primary = Arc::new(
        MockProvider::new("Gemma")
            .with_content(valid_readme("Slow"))
            .with_delay(Duration::from_secs(30)),
    );
    let fallback = Arc::new(MockProvider::new("Mistral").with_content(valid_readme("Foo")));
    let uc = use_case(&primary, &fallback);

    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        canceller.cancel();
    });

    let err = uc
        .execute(&create_project_request(), &token)
        .await
        .unwrap_err();

    assert_eq!(err, GenerationError::Cancelled);
    assert_eq!(fallback.call_count(), 0);
}

/// Output is cleaned: fences and chatter removed
#[tokio::test]
async fn test_output_is_sanitized() {
    let raw = format!("Here you go!\n```markdown\n{}```\nHope it helps.", valid_readme("Foo"));
    let primary = Arc::new(MockProvider::new("Gemma").with_content(raw));
    let fallback = Arc::new(MockProvider::new("Mistral"));

    let markdown = use_case(&primary, &fallback)
        .execute(&create_project_request(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(markdown, valid_readme("Foo").trim());
}

/// Answer without any heading gets the project name as title
#[tokio::test]
async fn test_missing_heading_uses_project_name() {
    let primary = Arc::new(MockProvider::new("Gemma").with_content("plain words ".repeat(20)));
    let fallback = Arc::new(MockProvider::new("Mistral"));

    let request = GenerationRequest::new(
        "template",
        ProjectInfo::project("My Project", "A tool")
            .with_features(["Fast"])
            .with_tech_stack(["Rust"]),
    );
    let markdown = use_case(&primary, &fallback)
        .execute(&request, &CancellationToken::new())
        .await
        .unwrap();

    assert!(markdown.starts_with("# My Project\n\nplain words"));
}
