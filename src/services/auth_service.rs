//! Team authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sqlx::PgPool;
use tracing::debug;

use crate::{
    db::repositories::TeamRepository,
    error::{AppError, AppResult},
    models::Team,
};

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Check a team's name and password
    pub async fn login(pool: &PgPool, team_name: &str, password: &str) -> AppResult<Team> {
        let team = TeamRepository::find_by_name(pool, team_name)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &team.password_hash)? {
            debug!(team_id = team.id, "Login rejected: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        Ok(team)
    }

    /// Hash a password into an argon2 PHC string
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against a stored hash
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
