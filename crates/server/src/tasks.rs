//! Task ("action plan") API endpoints.

use api_types::{
    Changes, Created,
    task::{TaskNew, TaskStatusUpdate},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{ServerError, convert::status_to_engine, server::ServerState};

pub async fn task_new(
    State(state): State<ServerState>,
    payload: Result<Json<TaskNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Created>), ServerError> {
    let Json(payload) = payload?;
    let id = state
        .engine
        .create_task(payload.project_id, &payload.description)
        .await?;
    tracing::debug!(id, project_id = payload.project_id, "task created");

    Ok((StatusCode::CREATED, Json(Created { id })))
}

/// Overwrites a task status. Only `todo` and `done` get past the body
/// extractor.
pub async fn set_status(
    State(state): State<ServerState>,
    Path(task_id): Path<i64>,
    payload: Result<Json<TaskStatusUpdate>, JsonRejection>,
) -> Result<Json<Changes>, ServerError> {
    let Json(payload) = payload?;
    let changes = state
        .engine
        .set_task_status(task_id, status_to_engine(payload.status))
        .await?;
    tracing::debug!(task_id, status = payload.status.as_str(), changes, "task status set");

    Ok(Json(Changes { changes }))
}
