//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::SubmissionStatus;

/// Submit response
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: SubmissionStatus,
}

/// One row of a team's submission list
#[derive(Debug, Serialize)]
pub struct SubmissionSummary {
    pub problem_id: i32,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
}
