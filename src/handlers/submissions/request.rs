//! Submission request DTOs

use serde::Deserialize;
use validator::Validate;

/// Submit a fix for a problem
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitRequest {
    pub problem_id: i32,
    pub team_id: i32,

    #[validate(length(min = 1))]
    pub code: String,

    #[validate(length(min = 1))]
    pub language: String,
}

/// List submissions query parameters
#[derive(Debug, Deserialize)]
pub struct ListSubmissionsQuery {
    pub team_id: i32,
}
