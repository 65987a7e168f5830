//! Surf data provider client.
//!
//! HTTP client for the third-party surf forecast API. Every data request
//! carries the configured access token as an `accesstoken` query
//! parameter; login is a separate POST whose token is never applied.
//!
//! Outcomes are classified the same way for every endpoint:
//! - 200 with a body matching the expected schema decodes to a typed response
//! - any other status is a `ProviderError::Status`
//! - a 200 whose body does not decode is a `ProviderError::Decode`

mod client;
mod error;
mod types;

pub use client::{
    DEFAULT_CONDITIONS_DAYS, DEFAULT_FORECAST_DAYS, DEFAULT_INTERVAL_HOURS, Endpoint,
    ForecastQuery, ProviderClient,
};
pub use error::ProviderError;
pub use types::{
    Buoy, BuoyReading, ConditionsResponse, DailyConditions, Location, NearbyResponse, Rating,
    RatingInterval, RatingResponse, Report, Surf, Swell, TideInterval, TideResponse, UnitMap,
    Units, WaveInterval, WaveResponse, WindInterval, WindResponse,
};

#[cfg(test)]
pub(crate) use types::sample_units;
