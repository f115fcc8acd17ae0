//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_ERROR_LOG_PATH, DEFAULT_MAX_PARALLEL_CASES,
    DEFAULT_PISTON_TIMEOUT_SECONDS, DEFAULT_PISTON_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub sandbox: SandboxConfig,
    pub judge: JudgeConfig,
    pub audit: AuditConfig,
    pub admin: AdminConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_format: LogFormat,
}

/// Diagnostic log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Remote execution sandbox configuration
#[derive(Debug, Clone)]
pub struct SandboxConfig {
    pub url: String,
    /// Transport timeout; the judge itself never enforces one
    pub timeout: Duration,
}

/// Judging configuration
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// Upper bound of in-flight judge invocations for one request
    pub max_parallel_cases: usize,
}

/// Error audit trail configuration
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub error_log_path: PathBuf,
}

/// Organizer access configuration
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Bearer token for admin routes; `None` disables them
    pub token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            sandbox: SandboxConfig::from_env()?,
            judge: JudgeConfig::from_env()?,
            audit: AuditConfig::from_env(),
            admin: AdminConfig::from_env(),
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                Ok("pretty") | Err(_) => LogFormat::Pretty,
                Ok(_) => return Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
            },
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS)?,
        })
    }
}

impl SandboxConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("PISTON_URL").unwrap_or_else(|_| DEFAULT_PISTON_URL.to_string()),
            timeout: Duration::from_secs(parse_var(
                "PISTON_TIMEOUT_SECONDS",
                DEFAULT_PISTON_TIMEOUT_SECONDS,
            )?),
        })
    }
}

impl JudgeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let max_parallel_cases = parse_var("JUDGE_MAX_PARALLEL_CASES", DEFAULT_MAX_PARALLEL_CASES)?;
        if max_parallel_cases == 0 {
            return Err(ConfigError::InvalidValue("JUDGE_MAX_PARALLEL_CASES".to_string()));
        }
        Ok(Self { max_parallel_cases })
    }
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            max_parallel_cases: DEFAULT_MAX_PARALLEL_CASES,
        }
    }
}

impl AuditConfig {
    fn from_env() -> Self {
        Self {
            error_log_path: PathBuf::from(
                env::var("ERROR_LOG_PATH").unwrap_or_else(|_| DEFAULT_ERROR_LOG_PATH.to_string()),
            ),
        }
    }
}

impl AdminConfig {
    fn from_env() -> Self {
        Self {
            token: env::var("ADMIN_TOKEN").ok().filter(|t| !t.is_empty()),
        }
    }
}

/// Read an optional variable, falling back to `default` when unset
fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        Err(_) => Ok(default),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
