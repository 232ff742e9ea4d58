use anyhow::Result;
use clap::Parser;
use httpmock::prelude::*;
use record_etl::adapters::http::ApiClient;
use record_etl::core::pipeline;
use record_etl::{CliArgs, ProcessStatus, Settings};
use reqwest::Method;
use serde_json::{json, Number, Value};
use std::collections::HashMap;

#[tokio::test]
async fn test_call_parses_json_response() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/todos/1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"id": 1, "title": "delectus aut autem"}));
    });

    let client = ApiClient::new();
    let outcome = client
        .call(&server.url("/todos/1"), Method::GET, &HashMap::new(), None)
        .await;

    mock.assert();
    assert!(outcome.success);
    assert_eq!(outcome.status_code, Some(200));
    assert_eq!(outcome.data["title"], "delectus aut autem");
    assert_eq!(outcome.message, "API request successful");
}

#[tokio::test]
async fn test_call_non_json_body_keeps_success() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/plain");
        then.status(200).body("just some text");
    });

    let client = ApiClient::new();
    let outcome = client
        .call(&server.url("/plain"), Method::GET, &HashMap::new(), None)
        .await;

    assert!(outcome.success);
    assert_eq!(outcome.status_code, Some(200));
    assert_eq!(outcome.data, Value::String("just some text".to_string()));
    assert_eq!(
        outcome.message,
        "API request successful but response is not JSON"
    );
}

#[tokio::test]
async fn test_call_failure_names_the_status_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404)
            .header("Content-Type", "application/json")
            .json_body(json!({"error": "not found"}));
    });

    let client = ApiClient::new();
    let outcome = client
        .call(&server.url("/missing"), Method::GET, &HashMap::new(), None)
        .await;

    assert!(!outcome.success);
    assert_eq!(outcome.status_code, Some(404));
    assert!(outcome.message.contains("404"));
    // Error bodies are still parsed when they are JSON.
    assert_eq!(outcome.data["error"], "not found");
}

#[tokio::test]
async fn test_call_transport_failure_is_contained() {
    // Nothing listens here; the connection is refused.
    let client = ApiClient::new();
    let outcome = client
        .call("http://127.0.0.1:9/none", Method::GET, &HashMap::new(), None)
        .await;

    assert!(!outcome.success);
    assert!(outcome.status_code.is_none());
    assert!(outcome.message.contains("Error making API request"));
    assert!(!outcome.message.is_empty());
}

#[tokio::test]
async fn test_post_attaches_json_body_and_headers() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/records")
            .header("x-request-source", "record-etl")
            .json_body(json!({"name": "Posted", "value": 3}));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(json!({"created": true}));
    });

    let headers = HashMap::from([("x-request-source".to_string(), "record-etl".to_string())]);
    let body = json!({"name": "Posted", "value": 3});

    let client = ApiClient::new();
    let outcome = client
        .call(&server.url("/records"), Method::POST, &headers, Some(&body))
        .await;

    mock.assert();
    assert!(outcome.success);
    assert_eq!(outcome.status_code, Some(201));
}

#[tokio::test]
async fn test_end_to_end_api_pipeline() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/todos/1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "userId": 1,
                "id": 1,
                "title": "delectus aut autem",
                "completed": false
            }));
    });

    let url = server.url("/todos/1");
    let args = CliArgs::parse_from(["record-etl", "--api", &url]);
    let result = pipeline::run(&args, &Settings::default()).await?;

    mock.assert();
    assert_eq!(result.status, ProcessStatus::Processed);
    assert_eq!(result.name.as_deref(), Some("delectus aut autem"));
    assert_eq!(result.original_value, Some(Number::from(1)));
    assert_eq!(result.processed_value, Some(Number::from(2)));
    Ok(())
}

#[tokio::test]
async fn test_api_failure_short_circuits_the_transform() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/broken");
        then.status(500);
    });

    let url = server.url("/broken");
    let args = CliArgs::parse_from(["record-etl", "--api", &url]);
    let result = pipeline::run(&args, &Settings::default()).await?;

    mock.assert();
    // A reported failure, not a crash: the transform never ran.
    assert_eq!(result.status, ProcessStatus::Error);
    assert!(result.message.unwrap().contains("500"));
    assert!(result.processed_value.is_none());
    Ok(())
}
