//! Authentication handler implementations

use axum::{extract::State, Json};
use validator::Validate;

use crate::{error::AppResult, services::AuthService, state::AppState};

use super::{request::LoginRequest, response::LoginResponse};

/// Login with team name and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    payload.validate()?;

    let team = AuthService::login(state.db(), &payload.team_name, &payload.password).await?;

    tracing::info!(team_id = team.id, "Team logged in");

    Ok(Json(LoginResponse {
        team_id: team.id,
        team_name: team.name,
        authenticated: true,
    }))
}
