//! Admin token middleware

use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{error::AppError, state::AppState};

/// Require `Authorization: Bearer <ADMIN_TOKEN>`. Without a configured
/// token every request is rejected.
pub async fn admin_token_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let Some(expected) = state.config().admin.token.as_deref() else {
        debug!(path = %path, "Admin auth failed: no admin token configured");
        return Err(AppError::Unauthorized);
    };

    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) if token == expected => Ok(next.run(request).await),
        Some(_) => {
            debug!(path = %path, "Admin auth failed: wrong token");
            Err(AppError::Unauthorized)
        }
        None => {
            debug!(path = %path, "Admin auth failed: missing bearer token");
            Err(AppError::Unauthorized)
        }
    }
}
