//! Integration tests for the success path against a mocked endpoint.

use std::fs;

use fixture_gen_rs::generate;
use serde_json::json;

use crate::support;

const METADATA: &str = r#"{"_schema":"2.0"}"#;
const SAMPLE_CODE: &str = "// TODO [ID:TODO-001] [P:1] x";

fn completion_content() -> String {
    json!({
        "metadata_json": METADATA,
        "sample_code_ts": SAMPLE_CODE,
    })
    .to_string()
}

#[tokio::test]
async fn writes_both_fixture_files_under_requirements() {
    // Arrange
    let server = support::mock_completion_endpoint(&completion_content()).await;
    let config = support::config_for(&server);

    // Act
    let fixture_dir = generate(&config).await.expect("generation should succeed");

    // Assert
    let out_dir = fixture_dir.join("requirements");
    assert_eq!(
        fs::read_to_string(out_dir.join("metadata.json")).expect("metadata file should exist"),
        METADATA
    );
    assert_eq!(
        fs::read_to_string(out_dir.join("sample-code.ts")).expect("sample file should exist"),
        SAMPLE_CODE
    );

    fs::remove_dir_all(&fixture_dir).ok();
}

#[tokio::test]
async fn successive_runs_use_distinct_directories() {
    // Each run gets its own mock so the per-server expectations stay simple.
    let first_server = support::mock_completion_endpoint(&completion_content()).await;
    let second_server = support::mock_completion_endpoint(&completion_content()).await;

    let first_dir = generate(&support::config_for(&first_server))
        .await
        .expect("first run should succeed");
    let second_dir = generate(&support::config_for(&second_server))
        .await
        .expect("second run should succeed");

    assert_ne!(first_dir, second_dir);
    assert!(first_dir.join("requirements").join("metadata.json").exists());
    assert!(
        second_dir
            .join("requirements")
            .join("metadata.json")
            .exists()
    );

    fs::remove_dir_all(&first_dir).ok();
    fs::remove_dir_all(&second_dir).ok();
}
