//! HTTP middleware

pub mod auth;
pub mod logging;

pub use auth::admin_token_middleware;
pub use logging::logging_middleware;
