//! Problem response DTOs

use serde::Serialize;

use crate::models::{Problem, TestCase};

/// Problem as handed to teams
#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    pub id: i32,
    pub title: String,
    pub buggy_file_blob: String,
}

impl From<Problem> for ProblemResponse {
    fn from(p: Problem) -> Self {
        Self {
            id: p.id,
            title: p.title,
            buggy_file_blob: p.buggy_file_blob,
        }
    }
}

/// Visible test case
#[derive(Debug, Serialize)]
pub struct TestCaseResponse {
    pub test_case_id: i32,
    pub input_data: String,
    pub expected_output: String,
}

impl From<TestCase> for TestCaseResponse {
    fn from(tc: TestCase) -> Self {
        Self {
            test_case_id: tc.test_case_id,
            input_data: tc.input_data,
            expected_output: tc.expected_output,
        }
    }
}
