//! Income and expense API endpoints.

use api_types::{Created, expense::ExpenseNew, income::IncomeNew};
use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use chrono::{DateTime, FixedOffset, Utc};

use crate::{ServerError, server::ServerState};

fn occurred_at(date: Option<DateTime<FixedOffset>>) -> DateTime<Utc> {
    date.map(|d| d.with_timezone(&Utc)).unwrap_or_else(Utc::now)
}

pub async fn income_new(
    State(state): State<ServerState>,
    payload: Result<Json<IncomeNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Created>), ServerError> {
    let Json(payload) = payload?;
    let id = state
        .engine
        .create_income(&payload.source, payload.amount, occurred_at(payload.date))
        .await?;
    tracing::debug!(id, amount = payload.amount, "income logged");

    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn expense_new(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Created>), ServerError> {
    let Json(payload) = payload?;
    let id = state
        .engine
        .create_expense(
            &payload.description,
            payload.amount,
            occurred_at(payload.date),
        )
        .await?;
    tracing::debug!(id, amount = payload.amount, "expense logged");

    Ok((StatusCode::CREATED, Json(Created { id })))
}
