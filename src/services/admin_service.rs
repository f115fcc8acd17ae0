//! Admin service: error audit trail access

use crate::{
    audit::{ErrorLog, ErrorLogQuery},
    error::{AppError, AppResult},
    models::ErrorLogEntry,
};

/// Admin service for system management
pub struct AdminService;

impl AdminService {
    /// Newest entries first, filtered by `query`
    pub async fn error_logs(log: &ErrorLog, query: &ErrorLogQuery) -> AppResult<Vec<ErrorLogEntry>> {
        log.recent(query)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to read error log: {}", e)))
    }

    /// Remove the log file. Returns false when there was nothing to clear.
    pub async fn clear_error_logs(log: &ErrorLog) -> AppResult<bool> {
        let cleared = log
            .clear()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to clear error log: {}", e)))?;

        tracing::info!(path = %log.path().display(), cleared, "Error log cleared");

        Ok(cleared)
    }
}
