//! Integration tests for the Gemini API client against a mock HTTP server

mod common;

use menu_roulette::domain::errors::GenerationError;
use menu_roulette::domain::models::GenerationConfig;
use menu_roulette::domain::ports::TextGenerator;
use menu_roulette::infrastructure::gemini::{GeminiApiError, GeminiClient, GeminiClientConfig};
use mockito::{Matcher, Server};
use std::time::Duration;

const PATH: &str = "/v1beta/models/gemini-2.5-pro:generateContent";

fn client_for(server: &Server, timeout_secs: u64) -> GeminiClient {
    let generation = GenerationConfig {
        base_url: server.url(),
        timeout_secs,
        ..GenerationConfig::default()
    };
    GeminiClient::new(GeminiClientConfig::from_generation(
        &generation,
        "test-api-key".to_string(),
    ))
    .expect("Failed to create client")
}

#[tokio::test]
async fn test_generate_content_success_with_mock() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("x-goog-api-key", "test-api-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(serde_json::json!({
                "generationConfig": {"maxOutputTokens": 1024}
            })),
            Matcher::Regex(r#""role":"user""#.to_string()),
            Matcher::Regex(r#""text":"hello""#.to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::gemini_body("김치찌개:든든해요"))
        .create_async()
        .await;

    let client = client_for(&server, 5);
    let text = client.generate_content("hello").await.expect("request failed");

    assert_eq!(text, "김치찌개:든든해요");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_statuses_are_classified() {
    let cases: [(usize, fn(&GeminiApiError) -> bool); 5] = [
        (400, |e| matches!(e, GeminiApiError::InvalidRequest(_))),
        (403, |e| matches!(e, GeminiApiError::AuthenticationFailed(_))),
        (404, |e| matches!(e, GeminiApiError::ModelNotFound(_))),
        (429, |e| matches!(e, GeminiApiError::QuotaExceeded(_))),
        (503, |e| matches!(e, GeminiApiError::ServerError(_, _))),
    ];

    for (status, expected) in cases {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .with_status(status)
            .with_body(r#"{"error": {"code": 0, "message": "nope", "status": "X"}}"#)
            .expect(1)
            .create_async()
            .await;

        let err = client_for(&server, 5)
            .generate_content("hi")
            .await
            .unwrap_err();
        assert!(expected(&err), "status {status} gave {err:?}");

        // No retries: exactly one request per call
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_failure_surfaces_as_service_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let err = client_for(&server, 5).generate("hi").await.unwrap_err();
    assert!(matches!(err, GenerationError::Service(msg) if msg.contains("boom")));
}

#[tokio::test]
async fn test_blocked_response_is_empty_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#)
        .create_async()
        .await;

    let err = client_for(&server, 5).generate_content("hi").await.unwrap_err();
    assert!(matches!(err, GeminiApiError::EmptyResponse(reason) if reason == "SAFETY"));
}

#[tokio::test]
async fn test_invalid_json_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = client_for(&server, 5).generate_content("hi").await.unwrap_err();
    assert!(matches!(err, GeminiApiError::JsonError(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let generation = GenerationConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..GenerationConfig::default()
    };
    let client = GeminiClient::new(GeminiClientConfig::from_generation(
        &generation,
        "test-api-key".to_string(),
    ))
    .unwrap();

    let start = std::time::Instant::now();
    let err = client.generate_content("hi").await.unwrap_err();

    assert!(matches!(
        err,
        GeminiApiError::NetworkError(_) | GeminiApiError::Timeout
    ));
    assert!(start.elapsed() < Duration::from_secs(10));
}
