//! Catalog error types.

use super::id::InvalidProviderId;

/// A spot or region key that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFound {
    #[error("unknown spot: {0}")]
    Spot(String),

    #[error("unknown region: {0}")]
    Region(String),
}

/// Errors raised while building the catalog from its entry table.
///
/// These are startup failures: a catalog that builds successfully never
/// produces them afterwards.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Same key appears twice in one table
    #[error("duplicate {kind} key: {key}")]
    DuplicateKey { kind: &'static str, key: String },

    /// Provider ID is malformed
    #[error("{key}: {source}")]
    InvalidId {
        key: String,
        #[source]
        source: InvalidProviderId,
    },

    /// Timezone name is not in the tz database
    #[error("{key}: unknown timezone {timezone:?}")]
    UnknownTimezone { key: String, timezone: String },

    /// Latitude or longitude out of range
    #[error("{key}: coordinates out of range ({latitude}, {longitude})")]
    InvalidCoordinates {
        key: String,
        latitude: f64,
        longitude: f64,
    },

    /// A required text field is empty
    #[error("{key}: empty {field}")]
    EmptyField { key: String, field: &'static str },

    /// Spot references a region that does not exist
    #[error("spot {spot} references unknown region {region}")]
    DanglingRegion { spot: String, region: String },
}
