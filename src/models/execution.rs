//! Sandbox execution result model
//!
//! Mirrors the Piston response: an optional compile stage (absent for
//! interpreted languages) and an optional run stage (absent when the
//! compile stage failed).

use serde::{Deserialize, Deserializer, Serialize};

/// Outcome of one sandbox execution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compile: Option<StageResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run: Option<StageResult>,
}

/// Output of a single compile or run stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stdout: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stderr: String,
    /// Exit code; `None` when the process was killed by a signal
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal: Option<String>,
    /// Interleaved stdout and stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl ExecutionResult {
    pub fn has_compile_phase(&self) -> bool {
        self.compile.is_some()
    }

    pub fn has_run_phase(&self) -> bool {
        self.run.is_some()
    }

    /// The program's observable answer: first non-empty of run stdout,
    /// run stderr, run output; trimmed at both ends.
    pub fn actual_output(&self) -> String {
        let Some(run) = &self.run else {
            return String::new();
        };

        [Some(run.stdout.as_str()), Some(run.stderr.as_str()), run.output.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}

impl StageResult {
    /// Non-zero exit, or terminated by a signal without an exit code
    pub fn exited_abnormally(&self) -> bool {
        match self.code {
            Some(code) => code != 0,
            None => self.signal.is_some(),
        }
    }

    pub fn has_stderr(&self) -> bool {
        !self.stderr.is_empty()
    }

    /// stderr, else stdout, else `fallback`; only an empty field falls through
    pub fn failure_message(&self, fallback: &str) -> String {
        if self.has_stderr() {
            self.stderr.clone()
        } else if !self.stdout.is_empty() {
            self.stdout.clone()
        } else {
            fallback.to_string()
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_stage(stdout: &str, stderr: &str, output: Option<&str>) -> ExecutionResult {
        ExecutionResult {
            run: Some(StageResult {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
                code: Some(0),
                signal: None,
                output: output.map(str::to_string),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_actual_output_prefers_stdout() {
        assert_eq!(run_stage("5\n", "warn", None).actual_output(), "5");
    }

    #[test]
    fn test_actual_output_falls_back_to_stderr_then_output() {
        assert_eq!(run_stage("", "Traceback\n", None).actual_output(), "Traceback");
        assert_eq!(run_stage("", "", Some(" 42 ")).actual_output(), "42");
        assert_eq!(run_stage("", "", None).actual_output(), "");
        assert_eq!(ExecutionResult::default().actual_output(), "");
    }

    #[test]
    fn test_signal_without_code_is_abnormal() {
        let killed = StageResult {
            code: None,
            signal: Some("SIGKILL".to_string()),
            ..Default::default()
        };
        assert!(killed.exited_abnormally());
        assert!(!StageResult { code: Some(0), ..Default::default() }.exited_abnormally());
    }

    #[test]
    fn test_failure_message_chain() {
        let stage = StageResult {
            stdout: "partial".to_string(),
            stderr: String::new(),
            code: Some(1),
            ..Default::default()
        };
        assert_eq!(stage.failure_message("Compilation failed"), "partial");

        let blank = StageResult {
            stdout: "partial".to_string(),
            stderr: "  \n".to_string(),
            code: Some(1),
            ..Default::default()
        };
        assert_eq!(blank.failure_message("Compilation failed"), "  \n");
        assert_eq!(
            StageResult::default().failure_message("Compilation failed"),
            "Compilation failed"
        );
    }

    #[test]
    fn test_deserializes_piston_shape_with_nulls() {
        let body = r#"{
            "language": "python",
            "version": "3.10.0",
            "run": {"stdout": null, "stderr": "", "code": null, "signal": "SIGKILL", "output": ""}
        }"#;
        let result: ExecutionResult = serde_json::from_str(body).unwrap();
        assert!(!result.has_compile_phase());
        assert!(result.has_run_phase());
        assert!(result.run.unwrap().exited_abnormally());
    }
}
