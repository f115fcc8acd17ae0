//! Problem and visible test case handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Problem routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/problems", get(handler::list_problems))
        .route("/testcases", get(handler::list_test_cases))
}
