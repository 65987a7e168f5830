//! Provider client error types.

use reqwest::StatusCode;

use crate::catalog::NotFound;

/// Errors from the provider HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Spot or region key is not in the catalog
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-200 status
    #[error("provider returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// 200 response whose body does not match the expected schema
    #[error("JSON parse error: {message}")]
    Decode { message: String, body: String },
}

impl ProviderError {
    /// The HTTP status this failure is reported with.
    ///
    /// Upstream statuses pass through; decode and transport failures are
    /// reported as internal errors. `None` for catalog misses, which never
    /// reach the provider.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ProviderError::NotFound(_) => None,
            ProviderError::Status { status, .. } => Some(*status),
            ProviderError::Http(e) => Some(e.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)),
            ProviderError::Decode { .. } => Some(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}
