//! # Generation Endpoint Tests
//!
//! End-to-end tests for `POST /generate/{content_type}` against a scripted
//! generation service.

mod common;

use anyhow::Result;
use common::{TestApp, INVOKE_PATH};
use httpmock::prelude::*;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_blog_generation_fills_fallbacks_and_renders() -> Result<()> {
    let app = TestApp::spawn().await?;
    let mock = app.mock_server.mock(|when, then| {
        when.method(POST)
            .path(INVOKE_PATH)
            .body_contains("remote work")
            .body_contains("response_json_schema");
        then.status(200).json_body(json!({
            "title": "Remote Work 101",
            "content": "Intro paragraph.\n\nMore text."
        }));
    });

    let response = app
        .generate("blog", json!({ "topic": "remote work", "tone": "Casual" }))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await?;
    let result = &body["result"];
    assert_eq!(result["content_type"], "blog");
    assert_eq!(result["result"]["data"]["title"], "Remote Work 101");
    assert_eq!(result["result"]["data"]["reading_time"], "5 min read");
    assert_eq!(result["result"]["data"]["word_count"], "800+");
    assert_eq!(
        result["rendered"],
        "# Remote Work 101\n\n5 min read | 800+ words | casual tone\n\nIntro paragraph.\n\nMore text.\n"
    );
    assert!(body.get("debug").is_none());

    mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_debug_flag_returns_prompt_and_schema() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_server.mock(|when, then| {
        when.method(POST).path(INVOKE_PATH);
        then.status(200).json_body(json!({
            "titles": ["A", "B"],
            "description": "desc",
            "tags": ["x"]
        }));
    });

    let response = app
        .client
        .post(format!("{}/generate/youtube?debug=true", app.address))
        .json(&json!({ "topic": "sourdough baking" }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await?;
    let prompt = body["debug"]["prompt"].as_str().expect("prompt should be a string");
    assert!(prompt.contains("sourdough baking"));
    assert!(prompt.contains("general audience"));
    assert!(prompt.contains("engaging"));

    let schema = &body["debug"]["response_json_schema"];
    assert_eq!(schema["type"], "object");
    let keys: Vec<&String> = schema["properties"].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["titles", "description", "tags"]);

    assert_eq!(body["result"]["content_type"], "youtube_metadata");
    Ok(())
}

#[tokio::test]
async fn test_blank_topic_is_rejected_without_calling_the_service() -> Result<()> {
    let app = TestApp::spawn().await?;
    let mock = app.mock_server.mock(|when, then| {
        when.method(POST).path(INVOKE_PATH);
        then.status(200).json_body(json!({}));
    });

    let response = app.generate("instagram", json!({ "topic": "   " })).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["error"], "A topic is required.");

    assert_eq!(mock.hits(), 0);
    Ok(())
}

#[tokio::test]
async fn test_unsupported_blog_tone_is_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .generate("blog", json!({ "topic": "tea", "tone": "sarcastic" }))
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert!(body["error"].as_str().unwrap().contains("sarcastic"));

    Ok(())
}

#[tokio::test]
async fn test_unknown_content_type_is_not_found() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app.generate("tiktok", json!({ "topic": "tea" })).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_upstream_failure_maps_to_bad_gateway_with_generic_message() -> Result<()> {
    let app = TestApp::spawn().await?;
    let mock = app.mock_server.mock(|when, then| {
        when.method(POST).path(INVOKE_PATH);
        then.status(500).body("model overloaded");
    });

    let response = app
        .generate("youtube", json!({ "topic": "home espresso" }))
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json().await?;
    assert_eq!(
        body["error"],
        "Failed to generate YouTube content. Please try again."
    );

    // One request per submission, no retries.
    assert_eq!(mock.hits(), 1);
    Ok(())
}

#[tokio::test]
async fn test_instagram_without_captions_returns_empty_set() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_server.mock(|when, then| {
        when.method(POST).path(INVOKE_PATH);
        then.status(200).json_body(json!({}));
    });

    let response = app
        .generate("instagram", json!({ "topic": "latte art", "audience": "baristas" }))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await?;
    assert_eq!(body["result"]["result"]["data"]["captions"], json!([]));
    assert_eq!(
        body["result"]["rendered"],
        "# Your Instagram Captions (0)\n"
    );
    Ok(())
}

#[tokio::test]
async fn test_instagram_captions_get_positional_labels() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_server.mock(|when, then| {
        when.method(POST)
            .path(INVOKE_PATH)
            .body_contains("baristas");
        then.status(200).json_body(json!({
            "captions": [
                { "text": "First", "hashtags": "#one", "tone": "Playful" },
                { "text": "Second", "hashtags": "#two" }
            ]
        }));
    });

    let response = app
        .generate("instagram_caption", json!({ "topic": "latte art", "audience": "baristas" }))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await?;
    let captions = &body["result"]["result"]["data"]["captions"];
    assert_eq!(captions[0]["tone"], "Playful");
    assert_eq!(captions[1]["tone"], "Caption 2");
    Ok(())
}

#[tokio::test]
async fn test_generator_overrides_from_config_are_applied() -> Result<()> {
    let app = TestApp::spawn_with_yaml(
        r#"
generators:
  blog:
    template: "Write about {topic} in a {tone} voice for {audience}."
    default_tone: "friendly"
    reading_time_fallback: "3 min read"
"#,
    )
    .await?;
    let mock = app.mock_server.mock(|when, then| {
        when.method(POST)
            .path(INVOKE_PATH)
            .body_contains("Write about rust in a friendly voice for general audience.");
        then.status(200).json_body(json!({ "title": "Rust", "content": "Body" }));
    });

    let response = app.generate("blog", json!({ "topic": "rust" })).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await?;
    assert_eq!(body["result"]["result"]["data"]["reading_time"], "3 min read");
    assert_eq!(body["result"]["result"]["data"]["word_count"], "800+");
    let rendered = body["result"]["rendered"].as_str().unwrap();
    assert!(
        rendered.contains("3 min read | 800+ words | friendly tone"),
        "got: {rendered}"
    );

    mock.assert();
    Ok(())
}
