//! Program failure classification
//!
//! Compile and run stages are inspected independently, so one result can
//! yield both a compilation and a runtime classification.

use crate::{
    constants::{COMPILATION_FAILED_MESSAGE, RUNTIME_FAILED_MESSAGE},
    models::{ErrorKind, ExecutionResult, StageResult},
};

/// A program-level failure found in an execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: ErrorKind,
    pub message: String,
    pub exit_code: Option<i32>,
}

/// Classify an execution result, compile stage first
pub fn classify(result: &ExecutionResult) -> Vec<Classification> {
    let stages = [
        (result.compile.as_ref(), ErrorKind::CompilationError, COMPILATION_FAILED_MESSAGE),
        (result.run.as_ref(), ErrorKind::RuntimeError, RUNTIME_FAILED_MESSAGE),
    ];

    stages
        .into_iter()
        .filter_map(|(stage, kind, fallback)| classify_stage(stage?, kind, fallback))
        .collect()
}

fn classify_stage(stage: &StageResult, kind: ErrorKind, fallback: &str) -> Option<Classification> {
    if !stage.has_stderr() && !stage.exited_abnormally() {
        return None;
    }

    let message = stage.failure_message(fallback);
    if message.trim().is_empty() {
        return None;
    }

    Some(Classification {
        kind,
        message,
        exit_code: stage.code,
    })
}
