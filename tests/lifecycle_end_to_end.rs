//! End-to-end lifecycle tests: controller + HTTP dispatcher + stub service.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cardioqa::logic::{
    ConfidenceCategory, FALLBACK_MESSAGE, LifecycleController, SafetyCategory,
    confidence_category, safety_category, submit_and_wait,
};
use cardioqa::sources::HttpDispatcher;
use cardioqa::state::LifecycleState;

async fn stub(status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
/// What: The heart-attack example ends in `Success` with high bands and no alerts.
///
/// Inputs:
/// - Stub answering 92 / "High" / 12 sources / 0.81 / no warnings / 1.2s.
///
/// Output:
/// - `Success`; `high-safety`, `high-confidence`; zero warnings; nothing in flight.
async fn heart_attack_question_succeeds() {
    let server = stub(
        200,
        json!({
            "response": "**Warning signs** include *chest pain*.",
            "safety_score": 92,
            "confidence": "High",
            "knowledge_sources": 12,
            "top_similarity": 0.81,
            "warnings": [],
            "response_time": 1.2
        }),
    )
    .await;
    let dispatcher = HttpDispatcher::new(&server.uri(), None);
    let mut controller = LifecycleController::new();

    let applied = submit_and_wait(
        &mut controller,
        &dispatcher,
        "What are the warning signs of a heart attack?",
    )
    .await;

    assert!(applied);
    let LifecycleState::Success { response } = controller.state() else {
        panic!("expected success, got {:?}", controller.state());
    };
    assert_eq!(safety_category(response.safety_score), SafetyCategory::High);
    assert_eq!(safety_category(response.safety_score).as_str(), "high-safety");
    assert_eq!(
        confidence_category(&response.confidence),
        ConfidenceCategory::High
    );
    assert!(response.warnings.is_empty());
    assert_eq!(controller.in_flight(), None);
}

#[tokio::test]
/// What: Service details are shown verbatim; detail-less failures use the fallback.
///
/// Inputs:
/// - 503 with `{"detail": "System not fully initialized"}`, then a 500 with `{}`.
///
/// Output:
/// - `Failure` with the detail, then `Failure` with the fallback message.
async fn service_errors_are_classified() {
    let server = stub(503, json!({"detail": "System not fully initialized"})).await;
    let dispatcher = HttpDispatcher::new(&server.uri(), None);
    let mut controller = LifecycleController::new();
    submit_and_wait(&mut controller, &dispatcher, "Is coffee bad for my heart?").await;
    assert_eq!(
        controller.state().error(),
        Some("System not fully initialized")
    );

    let server = stub(500, json!({})).await;
    let dispatcher = HttpDispatcher::new(&server.uri(), None);
    submit_and_wait(&mut controller, &dispatcher, "Is coffee bad for my heart?").await;
    assert_eq!(controller.state().error(), Some(FALLBACK_MESSAGE));
}

#[tokio::test]
/// What: Short questions never reach the service.
///
/// Inputs:
/// - Stub expecting zero calls; question `"  hi  "`.
///
/// Output:
/// - Validation failure, no request recorded.
async fn short_question_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let dispatcher = HttpDispatcher::new(&server.uri(), None);
    let mut controller = LifecycleController::default();
    let applied = submit_and_wait(&mut controller, &dispatcher, "  hi  ").await;
    assert!(!applied);
    assert_eq!(
        controller.state().error(),
        Some(cardioqa::logic::VALIDATION_MESSAGE)
    );
}

#[tokio::test]
async fn unreachable_service_uses_fallback_message() {
    // Port 9 (discard) on localhost is expected to refuse connections.
    let dispatcher = HttpDispatcher::new("http://127.0.0.1:9", None);
    let mut controller = LifecycleController::default();
    submit_and_wait(&mut controller, &dispatcher, "What is tachycardia?").await;
    assert_eq!(controller.state().error(), Some(FALLBACK_MESSAGE));
}
