use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::Value;

use crate::analysis::prediction::{predict, Prediction};
use crate::dto::{self, CreateCycleLogRequest};
use crate::error::{AppError, AppResult};
use crate::models::cycle_log::CycleLog;
use crate::AppState;

/// POST /api/cycle — persists the entry, then predicts the next cycle from
/// the full history including the row just written.
pub async fn create_cycle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Prediction>)> {
    let Json(body) = body.map_err(|e| AppError::invalid_body(e.body_text()))?;
    let request: CreateCycleLogRequest = dto::from_json(body)?;
    let new_log = request.validate()?;

    state.store.create_cycle_log(new_log).await?;

    let logs = state.store.cycle_logs().await?;
    let starts: Vec<_> = logs.iter().map(|log| log.start_date).collect();
    let prediction = predict(&starts, Utc::now());

    Ok((StatusCode::CREATED, Json(prediction)))
}

/// GET /api/cycle — the full table, newest start date first.
pub async fn list_cycles(State(state): State<AppState>) -> AppResult<Json<Vec<CycleLog>>> {
    let logs = state.store.cycle_logs().await?;
    Ok(Json(logs))
}
