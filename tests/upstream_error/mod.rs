//! Integration tests for upstream failures: non-success statuses and
//! replies without usable completion content.

use claims::assert_matches;
use fixture_gen_rs::{Error, generate};
use serde_json::json;
use wiremock::ResponseTemplate;

use crate::support;

#[tokio::test]
async fn non_success_status_is_reported_with_the_body() {
    let body = json!({ "error": { "message": "insufficient quota", "type": "insufficient_quota" } });
    let server = support::mock_endpoint_with(ResponseTemplate::new(429).set_body_json(body)).await;
    let config = support::config_for(&server);

    let error = generate(&config).await.expect_err("generation should fail");

    assert_matches!(
        &error,
        Error::Upstream { status: 429, body } if body.contains("insufficient quota")
    );
    assert!(error.to_string().contains("ERROR OpenAI:"));
    assert_eq!(error.exit_code(), 3);
}

#[tokio::test]
async fn oversized_error_bodies_are_truncated() {
    let huge = "e".repeat(5_000);
    let server =
        support::mock_endpoint_with(ResponseTemplate::new(500).set_body_string(huge)).await;
    let config = support::config_for(&server);

    let error = generate(&config).await.expect_err("generation should fail");

    assert_matches!(
        error,
        Error::Upstream { status: 500, body } if body.chars().count() == 600
    );
}

#[tokio::test]
async fn reply_without_choices_is_an_empty_completion() {
    let server = support::mock_endpoint_with(
        ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })),
    )
    .await;
    let config = support::config_for(&server);

    let error = generate(&config).await.expect_err("generation should fail");

    assert_matches!(error, Error::EmptyCompletion);
    assert_eq!(error.exit_code(), 3);
}

#[tokio::test]
async fn reply_with_null_content_is_an_empty_completion() {
    let body = json!({
        "choices": [ { "index": 0, "message": { "role": "assistant", "content": null } } ]
    });
    let server = support::mock_endpoint_with(ResponseTemplate::new(200).set_body_json(body)).await;
    let config = support::config_for(&server);

    let error = generate(&config).await.expect_err("generation should fail");

    assert_matches!(error, Error::EmptyCompletion);
}
