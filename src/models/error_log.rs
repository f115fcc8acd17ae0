//! Error audit trail entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Classification of a recorded error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The submitted program failed to compile
    CompilationError,
    /// The submitted program crashed or exited non-zero
    RuntimeError,
    /// The judge could not execute a submission test case
    SubmissionError,
    /// The judge could not execute an ad-hoc batch case
    BatchExecutionError,
    /// A submit or run request failed as a whole
    #[serde(rename = "APIError")]
    ApiError,
    /// A batch run request failed as a whole
    #[serde(rename = "BatchAPIError")]
    BatchApiError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompilationError => "CompilationError",
            Self::RuntimeError => "RuntimeError",
            Self::SubmissionError => "SubmissionError",
            Self::BatchExecutionError => "BatchExecutionError",
            Self::ApiError => "APIError",
            Self::BatchApiError => "BatchAPIError",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who and what an error entry is about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogContext {
    pub endpoint: Option<String>,
    pub team_id: Option<i32>,
    pub problem_id: Option<i32>,
    pub language: Option<String>,
    pub code: Option<String>,
}

impl LogContext {
    pub fn for_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: Some(endpoint.to_string()),
            ..Default::default()
        }
    }

    pub fn with_submission(mut self, team_id: i32, problem_id: i32) -> Self {
        self.team_id = Some(team_id);
        self.problem_id = Some(problem_id);
        self
    }

    pub fn with_program(mut self, language: &str, code: &str) -> Self {
        self.language = Some(language.to_string());
        self.code = Some(code.to_string());
        self
    }
}

/// One immutable line of the error audit trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorLogEntry {
    pub timestamp: DateTime<Utc>,
    pub error_type: ErrorKind,
    pub error_message: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub team_id: Option<i32>,
    #[serde(default)]
    pub problem_id: Option<i32>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub stdin: Option<String>,
    #[serde(default)]
    pub additional_info: Map<String, Value>,
}

impl ErrorLogEntry {
    pub fn new(error_type: ErrorKind, error_message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            error_type,
            error_message: error_message.into(),
            endpoint: None,
            team_id: None,
            problem_id: None,
            language: None,
            code: None,
            stdin: None,
            additional_info: Map::new(),
        }
    }

    pub fn with_context(mut self, ctx: &LogContext) -> Self {
        self.endpoint = ctx.endpoint.clone();
        self.team_id = ctx.team_id;
        self.problem_id = ctx.problem_id;
        self.language = ctx.language.clone();
        self.code = ctx.code.clone();
        self
    }

    pub fn with_stdin(mut self, stdin: &str) -> Self {
        self.stdin = Some(stdin.to_string());
        self
    }

    pub fn with_info(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.additional_info.insert(key.to_string(), value.into());
        self
    }
}
