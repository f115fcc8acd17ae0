//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod health;
pub mod problems;
pub mod run;
pub mod submissions;

use axum::{middleware, Router};

use crate::{middleware::admin_token_middleware, state::AppState};

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(problems::routes())
        .merge(submissions::routes())
        .merge(run::routes())
        .nest(
            "/admin",
            admin::routes().route_layer(middleware::from_fn_with_state(state, admin_token_middleware)),
        )
}
