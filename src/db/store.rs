//! Persistence contract used by the judging pipeline
//!
//! Judging only reads problems, teams and test cases and writes a single
//! submission row; this trait is that surface. `PgContestStore` serves it
//! from the shared connection pool.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
    db::repositories::{ProblemRepository, SubmissionRepository, TeamRepository},
    error::AppResult,
    models::{Problem, Submission, SubmissionStatus, Team, TestCase},
};

#[async_trait]
pub trait ContestStore: Send + Sync {
    async fn find_problem(&self, id: i32) -> AppResult<Option<Problem>>;

    async fn find_team(&self, id: i32) -> AppResult<Option<Team>>;

    async fn list_test_cases(&self, problem_id: i32, include_hidden: bool) -> AppResult<Vec<TestCase>>;

    async fn find_submission(&self, team_id: i32, problem_id: i32) -> AppResult<Option<Submission>>;

    async fn upsert_submission(
        &self,
        team_id: i32,
        problem_id: i32,
        code: &str,
        status: SubmissionStatus,
        submitted_at: DateTime<Utc>,
    ) -> AppResult<Submission>;
}

/// PostgreSQL-backed store
#[derive(Debug, Clone)]
pub struct PgContestStore {
    pool: PgPool,
}

impl PgContestStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContestStore for PgContestStore {
    async fn find_problem(&self, id: i32) -> AppResult<Option<Problem>> {
        ProblemRepository::find_by_id(&self.pool, id).await
    }

    async fn find_team(&self, id: i32) -> AppResult<Option<Team>> {
        TeamRepository::find_by_id(&self.pool, id).await
    }

    async fn list_test_cases(&self, problem_id: i32, include_hidden: bool) -> AppResult<Vec<TestCase>> {
        ProblemRepository::get_test_cases(&self.pool, problem_id, include_hidden).await
    }

    async fn find_submission(&self, team_id: i32, problem_id: i32) -> AppResult<Option<Submission>> {
        SubmissionRepository::find(&self.pool, team_id, problem_id).await
    }

    async fn upsert_submission(
        &self,
        team_id: i32,
        problem_id: i32,
        code: &str,
        status: SubmissionStatus,
        submitted_at: DateTime<Utc>,
    ) -> AppResult<Submission> {
        SubmissionRepository::upsert(
            &self.pool,
            team_id,
            problem_id,
            code,
            status.as_str(),
            submitted_at,
        )
        .await
    }
}
