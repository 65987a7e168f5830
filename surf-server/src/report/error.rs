//! Report error types.

use reqwest::StatusCode;

use crate::catalog::NotFound;
use crate::provider::ProviderError;

/// Errors building a normalized report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Spot or region key is not in the catalog
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// Region has no representative buoy configured
    #[error("region {0} has no buoy configured")]
    NoBuoy(String),

    /// Region's buoy is missing from the nearby-buoys result
    #[error("buoy {buoy_id} not among buoys near {region}")]
    BuoyMissing { region: String, buoy_id: String },

    /// Provider returned no day records
    #[error("no conditions reported for region {0}")]
    NoConditions(String),

    /// Timestamp cannot be represented as a datetime
    #[error("timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    /// Upstream call failed
    #[error(transparent)]
    Provider(ProviderError),
}

impl ReportError {
    /// Whether this is a lookup miss rather than an upstream failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ReportError::NotFound(_)
                | ReportError::NoBuoy(_)
                | ReportError::BuoyMissing { .. }
                | ReportError::NoConditions(_)
                | ReportError::Provider(ProviderError::NotFound(_))
        )
    }

    /// Status the upstream failure is reported with, if the provider was
    /// reached.
    pub fn upstream_status(&self) -> Option<StatusCode> {
        match self {
            ReportError::Provider(e) => e.status(),
            _ => None,
        }
    }
}

impl From<ProviderError> for ReportError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound(e) => ReportError::NotFound(e),
            other => ReportError::Provider(other),
        }
    }
}
