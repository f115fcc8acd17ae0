//! Problem handler implementations

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{error::AppResult, services::ProblemService, state::AppState};

use super::{
    request::TestCasesQuery,
    response::{ProblemResponse, TestCaseResponse},
};

/// List all problems
pub async fn list_problems(State(state): State<AppState>) -> AppResult<Json<Vec<ProblemResponse>>> {
    let problems = ProblemService::list_problems(state.db()).await?;

    Ok(Json(problems.into_iter().map(ProblemResponse::from).collect()))
}

/// List the visible test cases of a problem
pub async fn list_test_cases(
    State(state): State<AppState>,
    Query(query): Query<TestCasesQuery>,
) -> AppResult<Json<Vec<TestCaseResponse>>> {
    let cases = ProblemService::visible_test_cases(state.db(), query.problem_id).await?;

    Ok(Json(cases))
}
