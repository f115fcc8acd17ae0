//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

/// Team login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub team_name: String,

    #[validate(length(min = 1))]
    pub password: String,
}
