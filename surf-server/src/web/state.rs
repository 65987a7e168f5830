//! Application state for the web layer.

use std::sync::Arc;

use crate::report::SurfReports;

/// Shared application state.
///
/// Contains everything the handlers need; cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Report builder over the provider client
    pub reports: Arc<SurfReports>,

    /// Secret expected in the `x-api-key` header
    pub api_key: Arc<str>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(reports: SurfReports, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            reports: Arc::new(reports),
            api_key: api_key.into(),
        }
    }
}
