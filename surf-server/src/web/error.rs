//! Application errors and their HTTP mapping.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::report::ReportError;

use super::dto::ErrorResponse;

/// Detail returned when the API key is missing or wrong.
pub const API_KEY_INCORRECT: &str = "API Key incorrect";

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Missing or wrong `x-api-key`
    Unauthorized,
    /// Query string missing a parameter or carrying a malformed one
    BadRequest { message: String },
    /// Lookup miss or upstream failure; `cause` is logged, not returned
    Internal { message: String, cause: String },
    /// Request the service deliberately does not serve
    NotImplemented { message: String },
}

impl AppError {
    /// A failed report; the logged cause says whether it was a lookup
    /// miss or which status the provider failed with.
    pub fn report(message: impl Into<String>, err: ReportError) -> Self {
        let cause = match err.upstream_status() {
            Some(status) => format!("upstream {status}: {err}"),
            None if err.is_not_found() => format!("not found: {err}"),
            None => err.to_string(),
        };
        AppError::Internal {
            message: message.into(),
            cause,
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized => {
                warn!("Rejected request with incorrect API key");
                (StatusCode::BAD_REQUEST, API_KEY_INCORRECT.to_string())
            }
            AppError::BadRequest { message } => {
                warn!("Bad request: {message}");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message, cause } => {
                error!("{message} ({cause})");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            AppError::NotImplemented { message } => {
                warn!("{message}");
                (StatusCode::NOT_IMPLEMENTED, message)
            }
        };

        let body = Json(ErrorResponse { detail: message });
        (status, body).into_response()
    }
}
