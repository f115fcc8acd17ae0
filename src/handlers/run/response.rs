//! Run response DTOs

use serde::Serialize;

/// Result for one ad-hoc test case, in request order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchCaseResult {
    pub passed: bool,
    pub actual_output: String,
    pub expected_output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Batch run response
#[derive(Debug, Serialize)]
pub struct RunBatchResponse {
    pub results: Vec<BatchCaseResult>,
}
