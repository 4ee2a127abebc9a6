//! Axum routes for the automarker service.

use axum::{
    extract::{DefaultBodyLimit, Json, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::content::{MAX_WORDS, QUESTION_TEXT, TARGET_WORDS, TEMPLATE_TEXT};
use crate::marker::MIN_WORDS_GATE;
use crate::text::{clamp_utf16, MAX_ANSWER_CHARS};
use crate::types::MarkResult;

use super::middleware::{metrics_middleware, record_mark, require_session};
use super::state::ServiceState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "fethink_prompting_session";

/// Maximum accepted request body size.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

// ============================================================================
// Request/Response Types
// ============================================================================

/// `{ok: true}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkBody {
    /// Always `true`.
    pub ok: bool,
}

/// `{ok: false, error: <code>}`
///
/// The error code is the only thing a rejected caller ever sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `false`.
    pub ok: bool,
    /// Machine-readable error code (`invalid_code`, `unauthorized`).
    pub error: String,
}

impl ErrorBody {
    /// Create an error body with a machine-readable code.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

/// Response from the marking endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MarkResponse {
    /// Always `true`; gating is reported inside `result`.
    pub ok: bool,
    /// Marking outcome.
    pub result: MarkResult,
}

/// Front-end configuration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    /// Always `true`.
    pub ok: bool,
    /// Scenario the learner writes a prompt for.
    pub question_text: String,
    /// Role/Task/Context/Format scaffold shown in the editor.
    pub template_text: String,
    /// Human-readable target length, e.g. `20–300`.
    pub target_words: String,
    /// Word count below which answers are gated.
    pub min_words_gate: usize,
    /// Soft upper bound on answer length.
    pub max_words: usize,
    /// Link back to the course page.
    pub course_back_url: String,
    /// Link to the next lesson.
    pub next_lesson_url: String,
}

/// Service health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Fingerprint of the active rule table.
    pub rubric_fingerprint: String,
    /// Session lifetime in minutes.
    pub session_minutes: u32,
}

/// Simple liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    /// Always `alive`.
    pub status: String,
}

/// Read `key` from a JSON object as a string.
///
/// Absent keys, non-string values, and non-object bodies read as `""`.
fn string_field<'a>(body: &'a Value, key: &str) -> &'a str {
    body.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Answer text from a mark request: `answerText`, else `answer`.
fn answer_text(body: &Value) -> &str {
    match string_field(body, "answerText") {
        "" => string_field(body, "answer"),
        text => text,
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// Check the access code and set the session cookie.
async fn unlock_handler(
    State(state): State<ServiceState>,
    jar: CookieJar,
    body: Option<Json<Value>>,
) -> Response {
    let body = body.map(|Json(v)| v).unwrap_or(Value::Null);

    if !state.gate.validate_code(string_field(&body, "code")) {
        info!("unlock rejected");
        return (StatusCode::UNAUTHORIZED, Json(ErrorBody::new("invalid_code"))).into_response();
    }

    let issued = state.gate.issue_session();
    info!(expires_at = issued.claims.exp, "session issued");

    let cookie = Cookie::build((SESSION_COOKIE, issued.token.to_string()))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(issued.max_age_secs));

    (jar.add(cookie), Json(OkBody { ok: true })).into_response()
}

/// Mark an answer. Requires a session; see [`require_session`].
async fn mark_handler(
    State(state): State<ServiceState>,
    body: Option<Json<Value>>,
) -> Json<MarkResponse> {
    let body = body.map(|Json(v)| v).unwrap_or(Value::Null);
    let answer = clamp_utf16(answer_text(&body), MAX_ANSWER_CHARS);

    let result = state.engine.mark(answer);
    record_mark(result.word_count(), result.is_gated(), result.score());

    Json(MarkResponse { ok: true, result })
}

/// Question, template and navigation links for the front end.
async fn config_handler(State(state): State<ServiceState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        ok: true,
        question_text: QUESTION_TEXT.to_string(),
        template_text: TEMPLATE_TEXT.to_string(),
        target_words: TARGET_WORDS.to_string(),
        min_words_gate: MIN_WORDS_GATE,
        max_words: MAX_WORDS,
        course_back_url: state.config.course_back_url.clone(),
        next_lesson_url: state.config.next_lesson_url.clone(),
    })
}

/// Health check endpoint.
async fn health_handler(State(state): State<ServiceState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        rubric_fingerprint: state.rubric_fingerprint().to_string(),
        session_minutes: state.gate.ttl_minutes(),
    })
}

/// Liveness probe. Does not check anything beyond the process answering.
async fn liveness_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "alive".to_string(),
    })
}

// ============================================================================
// Router Construction
// ============================================================================

/// Create the Axum router for the automarker service.
pub fn create_router(state: ServiceState) -> Router {
    let marking = Router::new()
        .route("/api/mark", post(mark_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/api/unlock", post(unlock_handler))
        .route("/api/config", get(config_handler))
        .merge(marking)
        .route("/health", get(health_handler))
        .route("/health/live", get(liveness_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(metrics_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_text_prefers_answer_text() {
        let body = json!({"answerText": "primary", "answer": "fallback"});
        assert_eq!(answer_text(&body), "primary");
    }

    #[test]
    fn test_answer_text_falls_back_to_answer() {
        assert_eq!(answer_text(&json!({"answer": "fallback"})), "fallback");
        assert_eq!(answer_text(&json!({"answerText": "", "answer": "fallback"})), "fallback");
        assert_eq!(answer_text(&json!({"answerText": 42, "answer": "fallback"})), "fallback");
    }

    #[test]
    fn test_non_string_reads_empty() {
        assert_eq!(answer_text(&json!({"answerText": ["a", "b"]})), "");
        assert_eq!(answer_text(&Value::Null), "");
        assert_eq!(string_field(&json!({"code": 123}), "code"), "");
    }
}
