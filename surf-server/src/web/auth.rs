//! API key check applied to every data route.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::error::AppError;
use super::state::AppState;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Reject the request unless `x-api-key` equals the configured secret.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if provided != Some(&*state.api_key) {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
