//! Test-case judging
//!
//! A [`Judge`] runs one program against one test case through the sandbox,
//! records program failures in the error log and compares outputs. For a
//! whole request it fans out over a bounded set of concurrent judge tasks
//! scoped to that request.

use std::collections::HashMap;
use std::sync::Arc;

use futures::{stream::FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::{
    audit::{classify, Classification, ErrorLog},
    error::{AppError, AppResult},
    executor::CodeExecutor,
    models::{ErrorKind, ErrorLogEntry, ExecutionResult, JudgeCase, LogContext, Verdict},
};

/// What is being judged and on whose behalf
#[derive(Debug, Clone)]
pub struct JudgeContext {
    pub language: String,
    pub code: String,
    pub log: LogContext,
    /// Recorded when the sandbox call itself fails
    pub failure_kind: ErrorKind,
}

impl JudgeContext {
    pub fn new(language: &str, code: &str, log: LogContext, failure_kind: ErrorKind) -> Self {
        Self {
            language: language.to_string(),
            code: code.to_string(),
            log: log.with_program(language, code),
            failure_kind,
        }
    }
}

/// Runs code against test cases
#[derive(Clone)]
pub struct Judge {
    executor: Arc<dyn CodeExecutor>,
    error_log: Arc<ErrorLog>,
    max_parallel: usize,
}

impl Judge {
    pub fn new(executor: Arc<dyn CodeExecutor>, error_log: Arc<ErrorLog>, max_parallel: usize) -> Self {
        Self {
            executor,
            error_log,
            max_parallel: max_parallel.max(1),
        }
    }

    pub fn executor(&self) -> &dyn CodeExecutor {
        self.executor.as_ref()
    }

    pub fn error_log(&self) -> &ErrorLog {
        &self.error_log
    }

    /// Concurrency for a request with `case_count` cases
    pub fn parallelism(&self, case_count: usize) -> usize {
        case_count.clamp(1, self.max_parallel)
    }

    /// Judge one case. Never fails: a broken sandbox call becomes a failed
    /// verdict and an error log entry.
    pub async fn judge(&self, case: &JudgeCase, ctx: &JudgeContext) -> Verdict {
        let result = match self.executor.execute(&ctx.language, &ctx.code, &case.input).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    endpoint = ctx.log.endpoint.as_deref().unwrap_or_default(),
                    team_id = ?ctx.log.team_id,
                    problem_id = ?ctx.log.problem_id,
                    error = %e,
                    "Sandbox call failed"
                );
                let entry = ErrorLogEntry::new(ctx.failure_kind, e.to_string())
                    .with_context(&ctx.log)
                    .with_stdin(&case.input);
                self.error_log.append(&entry).await;
                return Verdict::failed(format!("Execution failed: {}", e));
            }
        };

        let actual_output = result.actual_output();
        let passed = actual_output == case.expected_output.trim();

        let failures = self.record_program_errors(&result, &case.input, &ctx.log).await;

        Verdict {
            passed,
            actual_output,
            error: failures.into_iter().next().map(|c| c.message),
        }
    }

    /// Log compile and runtime failures of the executed program
    pub async fn record_program_errors(
        &self,
        result: &ExecutionResult,
        stdin: &str,
        log: &LogContext,
    ) -> Vec<Classification> {
        let failures = classify(result);

        for failure in &failures {
            let mut entry = ErrorLogEntry::new(failure.kind, failure.message.clone())
                .with_context(log)
                .with_stdin(stdin);
            if let Some(code) = failure.exit_code {
                entry = entry.with_info("exit_code", code);
            }
            self.error_log.append(&entry).await;
        }

        failures
    }

    /// Judge every case, at most `parallelism(cases.len())` at a time.
    ///
    /// Each case runs in its own task, so a dropped caller does not cancel
    /// dispatched work, and the call returns only once every task has
    /// finished. Verdicts come back in the order of `cases`.
    pub async fn judge_all(&self, cases: Vec<JudgeCase>, ctx: JudgeContext) -> AppResult<Vec<Verdict>> {
        let total = cases.len();
        let permits = Arc::new(Semaphore::new(self.parallelism(total)));
        let ctx = Arc::new(ctx);

        debug!(cases = total, parallelism = self.parallelism(total), "Dispatching judges");

        let mut pending: FuturesUnordered<_> = cases
            .into_iter()
            .enumerate()
            .map(|(index, case)| {
                let judge = self.clone();
                let permits = permits.clone();
                let ctx = ctx.clone();
                let task = tokio::spawn(async move {
                    // the semaphore is never closed
                    let _permit = permits.acquire_owned().await.ok();
                    judge.judge(&case, &ctx).await
                });
                async move { (index, task.await) }
            })
            .collect();

        let mut verdicts: HashMap<usize, Verdict> = HashMap::with_capacity(total);
        let mut failure: Option<AppError> = None;

        while let Some((index, outcome)) = pending.next().await {
            match outcome {
                Ok(verdict) => {
                    verdicts.insert(index, verdict);
                }
                Err(e) => {
                    warn!(index, error = %e, "Judge task died");
                    failure.get_or_insert(AppError::Judging(format!("judge task failed: {}", e)));
                }
            }
        }

        if let Some(e) = failure {
            return Err(e);
        }

        (0..total)
            .map(|index| {
                verdicts
                    .remove(&index)
                    .ok_or_else(|| AppError::Judging(format!("missing verdict for case {}", index)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;
    use crate::{
        audit::ErrorLogQuery,
        executor::MockCodeExecutor,
        test_utils::executor::{arithmetic, ran, unavailable, ScriptedExecutor},
    };

    fn judge_with(executor: Arc<dyn CodeExecutor>, dir: &TempDir) -> Judge {
        let log = Arc::new(ErrorLog::new(dir.path().join("error_log.jsonl")));
        Judge::new(executor, log, 20)
    }

    fn context() -> JudgeContext {
        JudgeContext::new(
            "python",
            "print(sum(map(int, input().split())))",
            LogContext::for_endpoint("/submit").with_submission(1, 1),
            ErrorKind::SubmissionError,
        )
    }

    async fn logged(judge: &Judge) -> Vec<ErrorLogEntry> {
        judge
            .error_log()
            .recent(&ErrorLogQuery::default())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_outputs_compare_trimmed_at_the_ends_only() {
        let cases = [
            ("5", "5\n", true),
            ("5", "5 \n", true),
            ("5", " 5", true),
            ("5 6", "56", false),
            ("56", "5 6", false),
        ];

        for (printed, expected, should_pass) in cases {
            let dir = TempDir::new().unwrap();
            let printed = printed.to_string();
            let executor = ScriptedExecutor::new(move |_, _| Ok(ran(&printed, "", 0)));
            let judge = judge_with(Arc::new(executor), &dir);

            let verdict = judge.judge(&JudgeCase::new("", expected), &context()).await;
            assert_eq!(verdict.passed, should_pass, "expected {expected:?}");
        }
    }

    #[tokio::test]
    async fn test_stderr_counts_as_output_when_stdout_empty() {
        let dir = TempDir::new().unwrap();
        let executor = ScriptedExecutor::new(|_, _| Ok(ran("", "NameError: name 'x' is not defined\n", 1)));
        let judge = judge_with(Arc::new(executor), &dir);

        let verdict = judge.judge(&JudgeCase::new("", "5"), &context()).await;

        assert!(!verdict.passed);
        assert_eq!(verdict.actual_output, "NameError: name 'x' is not defined");
        assert!(verdict.error.is_some());

        let entries = logged(&judge).await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].error_type, ErrorKind::RuntimeError);
        assert_eq!(entries[0].team_id, Some(1));
        assert_eq!(entries[0].additional_info["exit_code"], 1);
    }

    #[tokio::test]
    async fn test_sandbox_failure_becomes_failed_verdict() {
        let dir = TempDir::new().unwrap();
        let mut executor = MockCodeExecutor::new();
        executor.expect_execute().times(1).returning(|_, _, _| Err(unavailable()));
        let judge = judge_with(Arc::new(executor), &dir);

        let verdict = judge.judge(&JudgeCase::new("2 3", "5"), &context()).await;

        assert!(!verdict.passed);
        assert!(verdict.error.unwrap().starts_with("Execution failed"));

        let entries = logged(&judge).await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].error_type, ErrorKind::SubmissionError);
        assert_eq!(entries[0].stdin.as_deref(), Some("2 3"));
    }

    #[tokio::test]
    async fn test_failing_case_does_not_abort_siblings() {
        let dir = TempDir::new().unwrap();
        let executor = ScriptedExecutor::new(|code, stdin| {
            if stdin == "boom" {
                Err(unavailable())
            } else {
                arithmetic(code, stdin)
            }
        });
        let judge = judge_with(Arc::new(executor), &dir);

        let verdicts = judge
            .judge_all(
                vec![
                    JudgeCase::new("1 1", "2"),
                    JudgeCase::new("boom", "0"),
                    JudgeCase::new("2 2", "4"),
                ],
                context(),
            )
            .await
            .unwrap();

        let passed: Vec<_> = verdicts.iter().map(|v| v.passed).collect();
        assert_eq!(passed, vec![true, false, true]);
    }

    #[tokio::test]
    async fn test_verdicts_keep_input_order() {
        let dir = TempDir::new().unwrap();
        // later cases finish first
        let executor = ScriptedExecutor::new(arithmetic).with_delay(|stdin| {
            let first: u64 = stdin.split_whitespace().next().unwrap().parse().unwrap();
            Duration::from_millis(60 - first * 10)
        });
        let judge = judge_with(Arc::new(executor), &dir);

        let cases: Vec<_> = (1..=5)
            .map(|a| JudgeCase::new(format!("{a} 10"), format!("{}", a + 10)))
            .collect();
        let verdicts = judge.judge_all(cases, context()).await.unwrap();

        let outputs: Vec<_> = verdicts.iter().map(|v| v.actual_output.as_str()).collect();
        assert_eq!(outputs, vec!["11", "12", "13", "14", "15"]);
        assert!(verdicts.iter().all(|v| v.passed));
    }

    #[tokio::test]
    async fn test_never_more_than_twenty_in_flight() {
        let dir = TempDir::new().unwrap();
        let executor = Arc::new(
            ScriptedExecutor::new(arithmetic).with_delay(|_| Duration::from_millis(20)),
        );
        let judge = judge_with(executor.clone(), &dir);

        let cases: Vec<_> = (0..37).map(|i| JudgeCase::new(format!("{i} 0"), i.to_string())).collect();
        let verdicts = judge.judge_all(cases, context()).await.unwrap();

        assert_eq!(verdicts.len(), 37);
        assert_eq!(executor.calls(), 37);
        assert!(executor.max_in_flight() <= 20);
        assert!(executor.max_in_flight() > 1);
    }

    #[tokio::test]
    async fn test_small_requests_use_small_pools() {
        let dir = TempDir::new().unwrap();
        let judge = judge_with(Arc::new(ScriptedExecutor::new(arithmetic)), &dir);

        assert_eq!(judge.parallelism(3), 3);
        assert_eq!(judge.parallelism(37), 20);
        assert_eq!(judge.parallelism(0), 1);
        assert!(judge.judge_all(Vec::new(), context()).await.unwrap().is_empty());
    }
}
