//! Authentication response DTOs

use serde::Serialize;

/// Successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub team_id: i32,
    pub team_name: String,
    pub authenticated: bool,
}
