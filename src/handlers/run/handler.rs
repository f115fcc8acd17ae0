//! Run handler implementations

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    models::ExecutionResult,
    services::RunService,
    state::AppState,
};

use super::{
    request::{RunBatchRequest, RunRequest},
    response::RunBatchResponse,
};

/// Execute code once and return the raw sandbox result
pub async fn run_code(
    State(state): State<AppState>,
    Json(payload): Json<RunRequest>,
) -> AppResult<Json<ExecutionResult>> {
    payload.validate()?;

    let result = RunService::run(state.judge(), &payload).await?;

    Ok(Json(result))
}

/// Judge code against caller-supplied test cases
pub async fn run_batch(
    State(state): State<AppState>,
    Json(payload): Json<RunBatchRequest>,
) -> AppResult<Json<RunBatchResponse>> {
    payload.validate()?;

    let results = RunService::run_batch(state.judge(), payload).await?;

    Ok(Json(RunBatchResponse { results }))
}
