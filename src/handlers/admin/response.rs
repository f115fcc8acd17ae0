//! Admin response DTOs

use serde::Serialize;

use crate::models::ErrorLogEntry;

/// Error log listing
#[derive(Debug, Serialize)]
pub struct ErrorLogsResponse {
    pub count: usize,
    pub entries: Vec<ErrorLogEntry>,
}

/// Result of clearing the error log
#[derive(Debug, Serialize)]
pub struct ClearErrorLogsResponse {
    pub cleared: bool,
}
