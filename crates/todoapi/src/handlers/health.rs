//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (pings the storage backend)

use axum::{extract::State, http::StatusCode};

use crate::{context::Reply, state::AppState};

/// GET /livez - Basic liveness probe.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Returns 200 when the storage backend answers a ping, 503 otherwise.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Reply {
    match state.todo_repo.ping().await {
        Ok(()) => Reply::success(StatusCode::OK, serde_json::json!({ "storage": "ok" })),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            Reply::failure(StatusCode::SERVICE_UNAVAILABLE, e.to_string())
        }
    }
}
