//! Remote code execution
//!
//! The sandbox is an external black box: one call runs one
//! (language, code, stdin) triple and reports compile/run output.
//! Calls are single-shot; there is no retry and no local timeout beyond
//! what the transport enforces.

pub mod piston;

use async_trait::async_trait;

use crate::models::ExecutionResult;

pub use piston::PistonClient;

/// Failure of the execution call itself, as opposed to the executed program
#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    #[error("sandbox request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("sandbox returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed sandbox response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Runs untrusted code somewhere else
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeExecutor: Send + Sync {
    async fn execute(
        &self,
        language: &str,
        code: &str,
        stdin: &str,
    ) -> Result<ExecutionResult, ExecutorError>;
}
