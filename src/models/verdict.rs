//! Per-test-case verdict model

use serde::{Deserialize, Serialize};

/// Outcome of judging one code submission against one test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub passed: bool,
    /// Normalized program output that was compared
    pub actual_output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Verdict {
    /// A verdict for a case whose execution never produced a result
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            passed: false,
            actual_output: String::new(),
            error: Some(error.into()),
        }
    }
}
