//! Test case model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Test case database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestCase {
    pub test_case_id: i32,
    pub problem_id: i32,
    pub input_data: String,
    pub expected_output: String,
    /// Hidden cases are never listed to teams but always judged
    pub is_hidden: bool,
}

impl TestCase {
    /// Copy this case out as judge input
    pub fn to_judge_case(&self) -> JudgeCase {
        JudgeCase {
            input: self.input_data.clone(),
            expected_output: self.expected_output.clone(),
        }
    }
}

/// One stdin/expected-output pair, with or without a database identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgeCase {
    pub input: String,
    pub expected_output: String,
}

impl JudgeCase {
    pub fn new(input: impl Into<String>, expected_output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected_output: expected_output.into(),
        }
    }
}
