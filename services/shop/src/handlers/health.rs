use axum::{extract::State, http::StatusCode};

use crate::infra::db::ping;
use crate::state::AppState;

/// `GET /readyz`: 200 once the database answers, 503 otherwise.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match ping(&state.db).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
