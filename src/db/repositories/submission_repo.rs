//! Submission repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{error::AppResult, models::Submission};

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Find the submission of a team for a problem
    pub async fn find(pool: &PgPool, team_id: i32, problem_id: i32) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"SELECT * FROM submissions WHERE team_id = $1 AND problem_id = $2"#,
        )
        .bind(team_id)
        .bind(problem_id)
        .fetch_optional(pool)
        .await?;

        Ok(submission)
    }

    /// Insert the submission, or overwrite code, status and timestamp of
    /// the existing one. Concurrent upserts on one key: last commit wins.
    pub async fn upsert(
        pool: &PgPool,
        team_id: i32,
        problem_id: i32,
        code: &str,
        status: &str,
        submitted_at: DateTime<Utc>,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (team_id, problem_id, submitted_at, code_file_blob, status)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (team_id, problem_id) DO UPDATE SET
                submitted_at = EXCLUDED.submitted_at,
                code_file_blob = EXCLUDED.code_file_blob,
                status = EXCLUDED.status
            RETURNING *
            "#,
        )
        .bind(team_id)
        .bind(problem_id)
        .bind(submitted_at)
        .bind(code)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// List a team's submissions
    pub async fn list_for_team(pool: &PgPool, team_id: i32) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"SELECT * FROM submissions WHERE team_id = $1 ORDER BY problem_id"#,
        )
        .bind(team_id)
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }

    /// Count submissions for a (team, problem) key
    pub async fn count_for_key(pool: &PgPool, team_id: i32, problem_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM submissions WHERE team_id = $1 AND problem_id = $2"#,
        )
        .bind(team_id)
        .bind(problem_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
