//! Run request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::models::JudgeCase;

/// Run code once with custom stdin
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RunRequest {
    #[validate(length(min = 1))]
    pub language: String,

    #[validate(length(min = 1))]
    pub code: String,

    #[serde(default)]
    pub stdin: String,
}

/// Run code against ad-hoc test cases
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RunBatchRequest {
    #[validate(length(min = 1))]
    pub language: String,

    #[validate(length(min = 1))]
    pub code: String,

    pub test_cases: Vec<BatchTestCase>,
}

/// A caller-supplied test case with no database identity
#[derive(Debug, Clone, Deserialize)]
pub struct BatchTestCase {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub expected_output: String,
}

impl From<BatchTestCase> for JudgeCase {
    fn from(case: BatchTestCase) -> Self {
        JudgeCase::new(case.input, case.expected_output)
    }
}
