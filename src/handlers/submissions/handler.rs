//! Submission handler implementations

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::{error::AppResult, services::SubmissionService, state::AppState};

use super::{
    request::{ListSubmissionsQuery, SubmitRequest},
    response::{SubmissionSummary, SubmitResponse},
};

/// Judge a submission and record its verdict
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> AppResult<Json<SubmitResponse>> {
    payload.validate()?;

    let status = SubmissionService::submit(state.store(), state.judge().clone(), payload).await?;

    Ok(Json(SubmitResponse { status }))
}

/// List a team's submissions
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(query): Query<ListSubmissionsQuery>,
) -> AppResult<Json<Vec<SubmissionSummary>>> {
    let submissions = SubmissionService::list_team_submissions(state.db(), query.team_id).await?;

    Ok(Json(submissions))
}
