//! Piston sandbox client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{config::SandboxConfig, constants::PISTON_ANY_VERSION, models::ExecutionResult};

use super::{CodeExecutor, ExecutorError};

/// Execute request body
#[derive(Debug, Serialize)]
struct ExecuteRequest<'a> {
    language: &'a str,
    version: &'a str,
    files: [SourceFile<'a>; 1],
    stdin: &'a str,
}

#[derive(Debug, Serialize)]
struct SourceFile<'a> {
    content: &'a str,
}

/// Piston reports request problems as `{"message": "..."}`
#[derive(Debug, Deserialize)]
struct PistonErrorBody {
    message: String,
}

/// HTTP client for a Piston `execute` endpoint
#[derive(Debug, Clone)]
pub struct PistonClient {
    http: Client,
    url: String,
}

impl PistonClient {
    /// Create a client from sandbox configuration
    pub fn new(config: &SandboxConfig) -> Result<Self, ExecutorError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl CodeExecutor for PistonClient {
    async fn execute(
        &self,
        language: &str,
        code: &str,
        stdin: &str,
    ) -> Result<ExecutionResult, ExecutorError> {
        let request = ExecuteRequest {
            language,
            version: PISTON_ANY_VERSION,
            files: [SourceFile { content: code }],
            stdin,
        };

        debug!(language = %language, code_len = code.len(), "Sending code to sandbox");

        let response = self.http.post(&self.url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<PistonErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            return Err(ExecutorError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
