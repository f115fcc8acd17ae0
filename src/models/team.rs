//! Team model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Team database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Team {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
