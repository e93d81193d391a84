//! Project ("mission") API endpoints.

use api_types::{
    Changes, Created,
    project::{ProjectNew, SaveContribution},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

pub async fn project_new(
    State(state): State<ServerState>,
    payload: Result<Json<ProjectNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Created>), ServerError> {
    let Json(payload) = payload?;
    let id = state
        .engine
        .create_project(&payload.name, payload.goal)
        .await?;
    tracing::debug!(id, goal = payload.goal, "project created");

    Ok((StatusCode::CREATED, Json(Created { id })))
}

/// Adds to `saved`. A missing project answers `changes: 0`.
pub async fn save(
    State(state): State<ServerState>,
    payload: Result<Json<SaveContribution>, JsonRejection>,
) -> Result<Json<Changes>, ServerError> {
    let Json(payload) = payload?;
    let changes = state
        .engine
        .save_contribution(payload.project_id, payload.amount)
        .await?;
    tracing::debug!(
        project_id = payload.project_id,
        amount = payload.amount,
        changes,
        "contribution saved"
    );

    Ok(Json(Changes { changes }))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(project_id): Path<i64>,
) -> Result<Json<Changes>, ServerError> {
    let changes = state.engine.delete_project(project_id).await?;
    tracing::debug!(project_id, changes, "project deleted");

    Ok(Json(Changes { changes }))
}
