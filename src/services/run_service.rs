//! Ad-hoc code runs
//!
//! Nothing here is persisted: `/run` returns the raw sandbox result and
//! `/run-batch` judges caller-supplied cases.

use tracing::{info, warn};

use crate::{
    constants::endpoints,
    error::{AppError, AppResult},
    handlers::run::{BatchCaseResult, RunBatchRequest, RunRequest},
    models::{ErrorKind, ErrorLogEntry, ExecutionResult, JudgeCase, LogContext},
    services::judge_service::{Judge, JudgeContext},
};

/// Run service for business logic
pub struct RunService;

impl RunService {
    /// Execute once with custom stdin
    pub async fn run(judge: &Judge, payload: &RunRequest) -> AppResult<ExecutionResult> {
        let log = LogContext::for_endpoint(endpoints::RUN).with_program(&payload.language, &payload.code);

        let result = match judge
            .executor()
            .execute(&payload.language, &payload.code, &payload.stdin)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                warn!(language = %payload.language, error = %e, "Run failed");
                let entry = ErrorLogEntry::new(ErrorKind::ApiError, e.to_string())
                    .with_context(&log)
                    .with_stdin(&payload.stdin);
                judge.error_log().append(&entry).await;
                return Err(e.into());
            }
        };

        let failures = judge.record_program_errors(&result, &payload.stdin, &log).await;
        if !failures.is_empty() {
            info!(
                language = %payload.language,
                failures = failures.len(),
                "Run finished with program errors"
            );
        }

        Ok(result)
    }

    /// Judge code against caller-supplied cases. Results follow the
    /// order of the request.
    pub async fn run_batch(judge: &Judge, payload: RunBatchRequest) -> AppResult<Vec<BatchCaseResult>> {
        let log = LogContext::for_endpoint(endpoints::RUN_BATCH);
        let expected: Vec<String> = payload
            .test_cases
            .iter()
            .map(|case| case.expected_output.clone())
            .collect();
        let cases: Vec<JudgeCase> = payload.test_cases.into_iter().map(JudgeCase::from).collect();

        let ctx = JudgeContext::new(&payload.language, &payload.code, log, ErrorKind::BatchExecutionError);
        let log = ctx.log.clone();

        let verdicts = match judge.judge_all(cases, ctx).await {
            Ok(verdicts) => verdicts,
            Err(e) => {
                warn!(language = %payload.language, error = %e, "Batch run failed");
                judge
                    .error_log()
                    .append(&ErrorLogEntry::new(ErrorKind::BatchApiError, e.to_string()).with_context(&log))
                    .await;
                return Err(match e {
                    AppError::Judging(_) => e,
                    other => AppError::Judging(other.to_string()),
                });
            }
        };

        let results: Vec<BatchCaseResult> = verdicts
            .into_iter()
            .zip(expected)
            .map(|(verdict, expected_output)| BatchCaseResult {
                passed: verdict.passed,
                actual_output: verdict.actual_output,
                expected_output,
                error: verdict.error,
            })
            .collect();

        info!(
            language = %payload.language,
            cases = results.len(),
            passed = results.iter().filter(|r| r.passed).count(),
            "Batch run judged"
        );

        Ok(results)
    }
}
