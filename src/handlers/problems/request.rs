//! Problem request DTOs

use serde::Deserialize;

/// Test case listing query parameters
#[derive(Debug, Deserialize)]
pub struct TestCasesQuery {
    pub problem_id: i32,
}
