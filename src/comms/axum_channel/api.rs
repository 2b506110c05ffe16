//! Axum handlers for `/api/*` routes.
//!
//! Each handler receives [`AxumState`] via [`axum::extract::State`] and
//! returns an axum [`Response`]. The empty-input check lives here, at the
//! channel boundary: a whitespace-only request yields the static message and
//! never reaches the provider.

use std::str::FromStr;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;
use uuid::Uuid;

use crate::chat::EMPTY_REQUEST_MESSAGE;
use crate::roles::SpecialistRole;

use super::AxumState;

/// Guard timeout around one ask round-trip. Generous on top of the
/// provider's own request timeout so the HTTP client always gets an answer.
const ANSWER_TIMEOUT: Duration = Duration::from_secs(120);

// ── Request types ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct AnswerRequest {
    role: String,
    request: String,
    session_id: Option<Uuid>,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a JSON error response body.
fn json_error(code: &str, msg: impl std::fmt::Display) -> Json<serde_json::Value> {
    Json(json!({ "error": code, "message": format!("{msg}") }))
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// GET /api/health - live provider reachability probe.
pub(super) async fn health(State(state): State<AxumState>) -> Response {
    let body = match tokio::time::timeout(Duration::from_secs(6), state.comms.ping()).await {
        Ok(Ok(())) => json!({
            "status": "ok",
            "provider": state.comms.provider_id(),
            "model": state.comms.model(),
        }),
        Ok(Err(e)) => {
            warn!(channel_id = %state.channel_id, "provider ping failed: {e}");
            json!({
                "status": "unreachable",
                "provider": state.comms.provider_id(),
                "model": state.comms.model(),
                "message": e.to_string(),
            })
        }
        Err(_) => {
            warn!(channel_id = %state.channel_id, "provider ping timed out");
            json!({
                "status": "unreachable",
                "provider": state.comms.provider_id(),
                "model": state.comms.model(),
                "message": "ping timed out",
            })
        }
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// GET /api/roles - the five specialist personas for the form's selector.
pub(super) async fn roles() -> Response {
    let roles: Vec<_> = SpecialistRole::ALL
        .into_iter()
        .map(|r| json!({ "id": r.id(), "label": r.label() }))
        .collect();
    (StatusCode::OK, Json(json!({ "roles": roles }))).into_response()
}

/// POST /api/answer
pub(super) async fn answer(
    State(state): State<AxumState>,
    Json(req): Json<AnswerRequest>,
) -> Response {
    // Closed role set: unknown selections are rejected here, not forwarded.
    let role = match SpecialistRole::from_str(&req.role) {
        Ok(role) => role,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, json_error("invalid_role", e)).into_response();
        }
    };

    // Empty or whitespace-only request: static message, no history mutation,
    // no remote call. Trimming is for this check only; the user entry keeps
    // the submitted text as-is.
    if req.request.trim().is_empty() {
        let body = json!({
            "session_id": req.session_id,
            "reply": EMPTY_REQUEST_MESSAGE,
        });
        return (StatusCode::OK, Json(body)).into_response();
    }

    match tokio::time::timeout(
        ANSWER_TIMEOUT,
        state.comms.ask(req.session_id, role, &req.request),
    )
    .await
    {
        Ok(Ok(reply)) => {
            let body = json!({
                "session_id": reply.session_id,
                "reply": reply.reply,
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        Ok(Err(e)) => {
            warn!(channel_id = %state.channel_id, "answer request failed: {e}");
            (StatusCode::BAD_GATEWAY, json_error("internal", e)).into_response()
        }
        Err(_) => (
            StatusCode::GATEWAY_TIMEOUT,
            json_error("timeout", "LLM request timed out"),
        )
            .into_response(),
    }
}
