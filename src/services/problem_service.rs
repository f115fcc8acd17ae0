//! Problem service

use sqlx::PgPool;

use crate::{
    db::repositories::ProblemRepository,
    error::AppResult,
    handlers::problems::TestCaseResponse,
    models::Problem,
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    pub async fn list_problems(pool: &PgPool) -> AppResult<Vec<Problem>> {
        ProblemRepository::list(pool).await
    }

    /// Test cases a team may see. Hidden cases are never listed.
    pub async fn visible_test_cases(pool: &PgPool, problem_id: i32) -> AppResult<Vec<TestCaseResponse>> {
        let cases = ProblemRepository::get_test_cases(pool, problem_id, false).await?;

        Ok(cases.into_iter().map(TestCaseResponse::from).collect())
    }
}
