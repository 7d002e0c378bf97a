//! API routes for triaged

use crate::server::AppState;
use axum::{
    extract::State,
    http::Uri,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

type AppStateArc = Arc<AppState>;

// ============================================================================
// Root Route
// ============================================================================

pub fn root_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(root))
}

async fn root() -> &'static str {
    "Hello, world"
}

// ============================================================================
// Chatbot Routes
// ============================================================================

/// Response envelope for a chatbot message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatbotResponse {
    pub answer: String,
}

pub fn chatbot_routes() -> Router<AppStateArc> {
    Router::new().route("/api/chatbot/:message", get(chatbot_message))
}

/// Percent-decode a raw path segment, replacing invalid UTF-8 rather than rejecting it
pub fn decode_message(raw: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}

async fn chatbot_message(
    State(state): State<AppStateArc>,
    uri: Uri,
) -> Json<ChatbotResponse> {
    // `:message` is always the last segment; path extractors reject invalid UTF-8
    let raw = uri.path().rsplit('/').next().unwrap_or_default();
    let message = decode_message(raw);
    let answer = state.catalog.resolve(&message);

    Json(ChatbotResponse {
        answer: answer.to_string(),
    })
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// Phrase entries loaded into the catalog
    pub intents: usize,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        intents: state.catalog.len(),
    })
}
