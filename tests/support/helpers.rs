// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use axum::body;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::Value;

pub fn build_test_state(
    store: Arc<dyn kawaraban_core::domain::content::ContentStore>,
    now: DateTime<Utc>,
) -> kawaraban_core::presentation::http::state::HttpState {
    // Build services with a fixed clock so publishability is deterministic
    let clock: Arc<dyn kawaraban_core::application::ports::time::Clock> =
        Arc::new(mocks::FixedClock(now));
    let services = Arc::new(
        kawaraban_core::application::services::ApplicationServices::new(store, clock),
    );

    kawaraban_core::presentation::http::state::HttpState { services }
}

pub fn make_test_router(
    store: Arc<dyn kawaraban_core::domain::content::ContentStore>,
) -> axum::Router {
    let state = build_test_state(store, mocks::fixed_now());
    kawaraban_core::presentation::http::routes::build_router(state)
}

/// レスポンスボディをJSONとして読み出す
pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorBody JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    // Check status first
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {}",
        ct
    );
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(
        err_field, expected_error,
        "unexpected error field: {}",
        err_field
    );
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorBody"
    );
}
