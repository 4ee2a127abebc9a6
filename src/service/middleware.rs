//! Service middleware and metric events.
//!
//! ## Metric Events
//!
//! Emitted under target `prompt_automarker::metrics`:
//!
//! - `request_metric` - path, method, status, latency
//! - `mark_metric` - word count, gated flag, score
//! - `session_check_metric` - valid / invalid

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use std::time::Instant;
use tracing::info;

use super::routes::{ErrorBody, SESSION_COOKIE};
use super::state::ServiceState;

/// Records request count and latency.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    info!(
        target: "prompt_automarker::metrics",
        metric_type = "request",
        path = %path,
        method = %method,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "request_metric"
    );

    response
}

/// Rejects requests without a live session cookie.
///
/// Runs before the body is read, so an unauthorized caller learns nothing
/// beyond the fixed `unauthorized` code.
pub async fn require_session(
    State(state): State<ServiceState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let token = jar.get(SESSION_COOKIE).map(|c| c.value());
    let valid = state.gate.check_session(token);
    record_session_check(valid);

    if !valid {
        return (StatusCode::UNAUTHORIZED, Json(ErrorBody::new("unauthorized"))).into_response();
    }
    next.run(request).await
}

/// Record a session check outcome.
pub fn record_session_check(valid: bool) {
    let result = if valid { "valid" } else { "invalid" };
    info!(
        target: "prompt_automarker::metrics",
        metric_type = "session_check",
        result = result,
        "session_check_metric"
    );
}

/// Record a marking outcome. Never logs the answer itself.
///
/// Gated answers have no score, so the field is recorded as `None`.
pub fn record_mark(word_count: usize, gated: bool, score: Option<u8>) {
    info!(
        target: "prompt_automarker::metrics",
        metric_type = "mark",
        word_count = word_count,
        gated = gated,
        score = ?score,
        "mark_metric"
    );
}
