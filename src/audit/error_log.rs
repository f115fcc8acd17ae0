//! JSON Lines error log sink
//!
//! One entry per line, appended under a process-wide lock so concurrent
//! judges never interleave partial lines. Writes are best effort: a failed
//! append is reported through `tracing` and otherwise ignored.

use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};
use tracing::error;

use crate::{
    constants::DEFAULT_ERROR_LOG_LIMIT,
    models::{ErrorKind, ErrorLogEntry},
};

/// Filters for reading the error log
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorLogQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
    pub error_type: Option<ErrorKind>,
    pub team_id: Option<i32>,
}

fn default_limit() -> usize {
    DEFAULT_ERROR_LOG_LIMIT
}

impl Default for ErrorLogQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_ERROR_LOG_LIMIT,
            error_type: None,
            team_id: None,
        }
    }
}

impl ErrorLogQuery {
    fn matches(&self, entry: &ErrorLogEntry) -> bool {
        self.error_type.is_none_or(|kind| entry.error_type == kind)
            && self.team_id.is_none_or(|team| entry.team_id == Some(team))
    }
}

/// Append-only error log backed by a single file
#[derive(Debug)]
pub struct ErrorLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an entry; never fails
    pub async fn append(&self, entry: &ErrorLogEntry) {
        if let Err(e) = self.try_append(entry).await {
            error!(
                path = %self.path.display(),
                error = %e,
                entry = ?entry,
                "Failed to write to error log"
            );
        }
    }

    async fn try_append(&self, entry: &ErrorLogEntry) -> std::io::Result<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let _guard = self.lock.lock().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await
    }

    /// Most recent entries first, filtered and capped at `query.limit`.
    /// Unparseable lines are skipped.
    pub async fn recent(&self, query: &ErrorLogQuery) -> std::io::Result<Vec<ErrorLogEntry>> {
        let contents = {
            let _guard = self.lock.lock().await;
            match fs::read_to_string(&self.path).await {
                Ok(contents) => contents,
                Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(Vec::new()),
                Err(e) => return Err(e),
            }
        };

        Ok(contents
            .lines()
            .rev()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| serde_json::from_str::<ErrorLogEntry>(line).ok())
            .filter(|entry| query.matches(entry))
            .take(query.limit)
            .collect())
    }

    /// Delete the whole log. Returns whether there was anything to delete.
    pub async fn clear(&self) -> std::io::Result<bool> {
        let _guard = self.lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}
