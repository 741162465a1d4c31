//! Integration tests for `HttpDispatcher` against a stub HTTP service.
//!
//! Every test starts its own `wiremock` server so no real network is used.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cardioqa::sources::{DispatchError, HttpDispatcher, QueryTransport};
use cardioqa::state::QueryRequest;

fn heart_attack_body() -> serde_json::Value {
    json!({
        "response": "**Warning**: call emergency services",
        "safety_score": 92,
        "confidence": "High",
        "knowledge_sources": 12,
        "top_similarity": 0.81,
        "warnings": [],
        "response_time": 1.2
    })
}

#[tokio::test]
/// What: A successful call posts the JSON request to `/query` and decodes the answer.
///
/// Inputs:
/// - Stub expecting `{"query": ..., "include_metadata": true}` once.
///
/// Output:
/// - Decoded `QueryResponse` with the stubbed values.
///
/// Details:
/// - Base URL with a trailing slash must still reach `/query`.
async fn dispatcher_posts_json_and_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "query": "What are the warning signs of a heart attack?",
            "include_metadata": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(heart_attack_body()))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = HttpDispatcher::new(&format!("{}/", server.uri()), None);
    let resp = dispatcher
        .dispatch(QueryRequest::new("What are the warning signs of a heart attack?"))
        .await
        .expect("success");
    assert!((resp.safety_score - 92.0).abs() < f64::EPSILON);
    assert_eq!(resp.confidence, "High");
    assert_eq!(resp.knowledge_sources, 12);
    assert!(resp.warnings.is_empty());
}

#[tokio::test]
/// What: Non-success statuses keep the status code and any JSON body.
///
/// Inputs:
/// - 404 with `{"detail": ...}`, then a bare 500 with a text body.
///
/// Output:
/// - `Status` errors carrying the body for 404 and `None` for the text body.
async fn dispatcher_reports_status_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"detail": "No relevant cardiac information found"})),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let dispatcher = HttpDispatcher::new(&server.uri(), None);
    let first = dispatcher
        .dispatch(QueryRequest::new("What is a murmur?"))
        .await
        .expect_err("404");
    assert_eq!(
        first,
        DispatchError::Status {
            status: 404,
            body: Some(json!({"detail": "No relevant cardiac information found"})),
        }
    );
    let second = dispatcher
        .dispatch(QueryRequest::new("What is a murmur?"))
        .await
        .expect_err("500");
    assert_eq!(
        second,
        DispatchError::Status {
            status: 500,
            body: None
        }
    );
}

#[tokio::test]
async fn dispatcher_rejects_malformed_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "partial"})))
        .mount(&server)
        .await;

    let dispatcher = HttpDispatcher::new(&server.uri(), None);
    let err = dispatcher
        .dispatch(QueryRequest::new("What is a murmur?"))
        .await
        .expect_err("decode");
    assert!(matches!(err, DispatchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
/// What: A request exceeding the configured timeout becomes a transport error.
///
/// Inputs:
/// - Stub delaying 2s, dispatcher timeout 200ms.
///
/// Output:
/// - `DispatchError::Transport`.
async fn dispatcher_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(heart_attack_body())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let dispatcher = HttpDispatcher::new(&server.uri(), Some(Duration::from_millis(200)));
    let err = dispatcher
        .dispatch(QueryRequest::new("What is a murmur?"))
        .await
        .expect_err("timeout");
    assert!(matches!(err, DispatchError::Transport(_)), "got {err:?}");
}
