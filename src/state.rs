//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    audit::ErrorLog,
    config::Config,
    db::{ContestStore, PgContestStore},
    services::Judge,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    db: PgPool,

    /// Persistence contract used by the judging pipeline
    store: Arc<dyn ContestStore>,

    /// Sandbox client, error log and parallelism bound
    judge: Judge,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state backed by Postgres
    pub fn new(db: PgPool, judge: Judge, config: Config) -> Self {
        let store = Arc::new(PgContestStore::new(db.clone()));
        Self::with_store(db, store, judge, config)
    }

    /// Create a state with a custom submission store
    pub fn with_store(db: PgPool, store: Arc<dyn ContestStore>, judge: Judge, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                store,
                judge,
                config,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a handle to the submission store
    pub fn store(&self) -> Arc<dyn ContestStore> {
        self.inner.store.clone()
    }

    pub fn judge(&self) -> &Judge {
        &self.inner.judge
    }

    pub fn error_log(&self) -> &ErrorLog {
        self.inner.judge.error_log()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
