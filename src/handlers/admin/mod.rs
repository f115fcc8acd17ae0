//! Organizer handlers, behind the admin token

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Admin routes
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/error-logs",
        get(handler::list_error_logs).delete(handler::clear_error_logs),
    )
}
