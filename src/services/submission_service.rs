//! Submission service
//!
//! Judges a team's fix against every test case of the problem, hidden ones
//! included, and keeps a single verdict per (team, problem).

use std::sync::Arc;

use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::{
    constants::endpoints,
    db::{repositories::SubmissionRepository, ContestStore},
    error::{AppError, AppResult},
    handlers::submissions::{SubmissionSummary, SubmitRequest},
    models::{ErrorKind, ErrorLogEntry, LogContext, SubmissionStatus, TestCase},
    services::judge_service::{Judge, JudgeContext},
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Judge and record a submission.
    ///
    /// Runs detached from the caller: once started, every judge and the
    /// final upsert complete even if the request goes away.
    pub async fn submit(
        store: Arc<dyn ContestStore>,
        judge: Judge,
        payload: SubmitRequest,
    ) -> AppResult<SubmissionStatus> {
        let log = LogContext::for_endpoint(endpoints::SUBMIT)
            .with_submission(payload.team_id, payload.problem_id)
            .with_program(&payload.language, &payload.code);

        let worker = judge.clone();
        let outcome = tokio::spawn(async move { Self::judge_and_record(store.as_ref(), &worker, payload).await })
            .await
            .unwrap_or_else(|e| Err(AppError::Judging(format!("submission task failed: {}", e))));

        match outcome {
            Ok(status) => Ok(status),
            Err(e) => {
                warn!(team_id = ?log.team_id, problem_id = ?log.problem_id, error = %e, "Submission failed");
                judge
                    .error_log()
                    .append(&ErrorLogEntry::new(ErrorKind::ApiError, e.to_string()).with_context(&log))
                    .await;

                Err(match e {
                    AppError::NotFound(_) | AppError::Judging(_) => e,
                    other => AppError::Judging(other.to_string()),
                })
            }
        }
    }

    async fn judge_and_record(
        store: &dyn ContestStore,
        judge: &Judge,
        payload: SubmitRequest,
    ) -> AppResult<SubmissionStatus> {
        let problem = store
            .find_problem(payload.problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        let team = store
            .find_team(payload.team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        let test_cases = store.list_test_cases(problem.id, true).await?;
        let cases = test_cases.iter().map(TestCase::to_judge_case).collect::<Vec<_>>();
        let total = cases.len();

        let ctx = JudgeContext::new(
            &payload.language,
            &payload.code,
            LogContext::for_endpoint(endpoints::SUBMIT).with_submission(team.id, problem.id),
            ErrorKind::SubmissionError,
        );
        let verdicts = judge.judge_all(cases, ctx).await?;

        let passed = verdicts.iter().filter(|v| v.passed).count();
        let status = SubmissionStatus::from_verdicts(verdicts.iter().map(|v| v.passed));

        let previous = store.find_submission(team.id, problem.id).await?;
        store
            .upsert_submission(team.id, problem.id, &payload.code, status, Utc::now())
            .await?;

        info!(
            team_id = team.id,
            problem_id = problem.id,
            language = %payload.language,
            cases = total,
            passed,
            status = %status,
            resubmission = previous.is_some(),
            "Submission judged"
        );

        Ok(status)
    }

    /// List a team's submissions
    pub async fn list_team_submissions(pool: &PgPool, team_id: i32) -> AppResult<Vec<SubmissionSummary>> {
        let submissions = SubmissionRepository::list_for_team(pool, team_id).await?;

        submissions
            .into_iter()
            .map(|s| -> AppResult<SubmissionSummary> {
                let status = s
                    .status
                    .parse::<SubmissionStatus>()
                    .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;
                Ok(SubmissionSummary {
                    problem_id: s.problem_id,
                    status,
                    submitted_at: s.submitted_at,
                })
            })
            .collect()
    }
}
