//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// SANDBOX DEFAULTS
// =============================================================================

/// Public Piston execute endpoint
pub const DEFAULT_PISTON_URL: &str = "https://emkc.org/api/v2/piston/execute";

/// Transport timeout for a single sandbox call
pub const DEFAULT_PISTON_TIMEOUT_SECONDS: u64 = 30;

/// Version selector sent to the sandbox (latest installed)
pub const PISTON_ANY_VERSION: &str = "*";

// =============================================================================
// JUDGING DEFAULTS
// =============================================================================

/// Upper bound of simultaneous judge invocations per request
pub const DEFAULT_MAX_PARALLEL_CASES: usize = 20;

/// Fallback message when a failed compile printed nothing
pub const COMPILATION_FAILED_MESSAGE: &str = "Compilation failed";

/// Fallback message when a failed run printed nothing
pub const RUNTIME_FAILED_MESSAGE: &str = "Runtime error";

// =============================================================================
// AUDIT LOG DEFAULTS
// =============================================================================

/// Default location of the JSON Lines error log
pub const DEFAULT_ERROR_LOG_PATH: &str = "logs/error_log.jsonl";

/// Default number of entries returned by an error log read
pub const DEFAULT_ERROR_LOG_LIMIT: usize = 100;

// =============================================================================
// REQUEST LIMITS
// =============================================================================

/// Maximum accepted request body size in bytes
pub const MAX_REQUEST_BODY_BYTES: usize = 8 * 1024 * 1024;

// =============================================================================
// API ENDPOINTS
// =============================================================================

/// Endpoint names recorded in audit entries
pub mod endpoints {
    pub const SUBMIT: &str = "/submit";
    pub const RUN: &str = "/run";
    pub const RUN_BATCH: &str = "/run-batch";
}
