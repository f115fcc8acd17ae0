//! Team repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Team};

/// Repository for team database operations
pub struct TeamRepository;

impl TeamRepository {
    /// Create a new team with an already hashed password
    pub async fn create(pool: &PgPool, name: &str, password_hash: &str) -> AppResult<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name, password_hash)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

        Ok(team)
    }

    /// Find team by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(r#"SELECT * FROM teams WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(team)
    }

    /// Find team by its unique name
    pub async fn find_by_name(pool: &PgPool, name: &str) -> AppResult<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(r#"SELECT * FROM teams WHERE name = $1"#)
            .bind(name)
            .fetch_optional(pool)
            .await?;

        Ok(team)
    }
}
