//! Snapshot API endpoint.

use api_types::snapshot::Snapshot;
use axum::{Json, extract::State};

use crate::{ServerError, convert::map_snapshot, server::ServerState};

/// Handle requests for the combined income/expenses/projects document.
pub async fn get(State(state): State<ServerState>) -> Result<Json<Snapshot>, ServerError> {
    let snapshot = state.engine.snapshot().await?;
    Ok(Json(map_snapshot(snapshot)))
}
