//! Tests for the HTTP routes, driven through the router without a socket.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;
use triage_common::{IntentCatalog, PhraseEntry};
use triaged::routes::{decode_message, ChatbotResponse, HealthResponse};
use triaged::server::{app, AppState};

fn test_app() -> Router {
    app(AppState::new(IntentCatalog::builtin().unwrap()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn ask(app: Router, uri: &str) -> String {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK);
    let response: ChatbotResponse = serde_json::from_slice(&body).unwrap();
    response.answer
}

#[tokio::test]
async fn test_root() {
    let (status, body) = get(test_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Hello, world");
}

#[tokio::test]
async fn test_chatbot_match() {
    assert_eq!(
        ask(test_app(), "/api/chatbot/Headache").await,
        "It could be due to stress or a tension headache"
    );
    assert_eq!(ask(test_app(), "/api/chatbot/Hello").await, "Hi, How may I help you");
}

#[tokio::test]
async fn test_chatbot_percent_encoded_message() {
    assert_eq!(
        ask(test_app(), "/api/chatbot/Cough%20and%20Sore%20Throat").await,
        "You may be suffering from a common cold or flu"
    );
}

#[tokio::test]
async fn test_chatbot_invalid_utf8_gets_fallback() {
    assert_eq!(ask(test_app(), "/api/chatbot/%FF").await, "Sorry, I don't");
    assert_eq!(ask(test_app(), "/api/chatbot/Head%FFache").await, "Sorry, I don't");
}

#[test]
fn test_decode_message() {
    assert_eq!(decode_message("Shortness%20of%20Breath"), "Shortness of Breath");
    assert_eq!(decode_message("Hello"), "Hello");
    assert_eq!(decode_message("%FFHello"), "\u{FFFD}Hello");
}

#[tokio::test]
async fn test_chatbot_fallback() {
    assert_eq!(
        ask(test_app(), "/api/chatbot/gibberish%20nonsense").await,
        "Sorry, I don't"
    );
}

#[tokio::test]
async fn test_chatbot_uses_injected_catalog() {
    let catalog = IntentCatalog::load(vec![PhraseEntry::new("Rash", "It could be an allergy")]).unwrap();
    let app = app(AppState::new(catalog));
    assert_eq!(ask(app.clone(), "/api/chatbot/rashes").await, "It could be an allergy");
    assert_eq!(ask(app, "/api/chatbot/Headache").await, "Sorry, I don't");
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(test_app(), "/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.intents, 9);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/chatbot/Hello")
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _) = get(test_app(), "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
