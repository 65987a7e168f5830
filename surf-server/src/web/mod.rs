//! Web layer for the surf API.
//!
//! Every data route checks the `x-api-key` header and answers with the
//! normalized report as JSON, or `{"detail": ...}` on failure.

mod auth;
mod dto;
mod error;
mod routes;
mod state;

pub use auth::{API_KEY_HEADER, require_api_key};
pub use dto::*;
pub use error::{API_KEY_INCORRECT, AppError};
pub use routes::create_router;
pub use state::AppState;
