//! Problem model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Problem database model
///
/// `buggy_file_blob` is the broken program handed to teams; they submit a fix.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub id: i32,
    pub title: String,
    pub buggy_file_blob: String,
}
