//! Admin handler implementations

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{audit::ErrorLogQuery, error::AppResult, services::AdminService, state::AppState};

use super::response::{ClearErrorLogsResponse, ErrorLogsResponse};

/// Recent error log entries, newest first
pub async fn list_error_logs(
    State(state): State<AppState>,
    Query(query): Query<ErrorLogQuery>,
) -> AppResult<Json<ErrorLogsResponse>> {
    let entries = AdminService::error_logs(state.error_log(), &query).await?;

    Ok(Json(ErrorLogsResponse {
        count: entries.len(),
        entries,
    }))
}

/// Delete the error log file
pub async fn clear_error_logs(State(state): State<AppState>) -> AppResult<Json<ClearErrorLogsResponse>> {
    let cleared = AdminService::clear_error_logs(state.error_log()).await?;

    Ok(Json(ClearErrorLogsResponse { cleared }))
}
