//! Problem repository

use sqlx::PgPool;

use crate::{error::AppResult, models::{Problem, TestCase}};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Create a new problem
    pub async fn create(pool: &PgPool, title: &str, buggy_file_blob: &str) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (title, buggy_file_blob)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(buggy_file_blob)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Find problem by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// List all problems
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Problem>> {
        let problems = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems ORDER BY id"#)
            .fetch_all(pool)
            .await?;

        Ok(problems)
    }

    /// Add test case to problem
    pub async fn add_test_case(
        pool: &PgPool,
        problem_id: i32,
        input_data: &str,
        expected_output: &str,
        is_hidden: bool,
    ) -> AppResult<TestCase> {
        let test_case = sqlx::query_as::<_, TestCase>(
            r#"
            INSERT INTO test_cases (problem_id, input_data, expected_output, is_hidden)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(problem_id)
        .bind(input_data)
        .bind(expected_output)
        .bind(is_hidden)
        .fetch_one(pool)
        .await?;

        Ok(test_case)
    }

    /// Get test cases for a problem, hidden ones only when asked
    pub async fn get_test_cases(
        pool: &PgPool,
        problem_id: i32,
        include_hidden: bool,
    ) -> AppResult<Vec<TestCase>> {
        let test_cases = sqlx::query_as::<_, TestCase>(
            r#"
            SELECT * FROM test_cases
            WHERE problem_id = $1 AND ($2 OR NOT is_hidden)
            ORDER BY test_case_id
            "#,
        )
        .bind(problem_id)
        .bind(include_hidden)
        .fetch_all(pool)
        .await?;

        Ok(test_cases)
    }
}
