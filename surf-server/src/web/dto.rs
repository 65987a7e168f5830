//! Query parameters and response bodies for the web layer.

use serde::{Deserialize, Serialize};

use crate::provider::{DEFAULT_CONDITIONS_DAYS, DEFAULT_FORECAST_DAYS};

fn default_conditions_days() -> u32 {
    DEFAULT_CONDITIONS_DAYS
}

fn default_forecast_days() -> u32 {
    DEFAULT_FORECAST_DAYS
}

/// Query for `GET /conditions`.
#[derive(Debug, Deserialize)]
pub struct ConditionsQuery {
    /// Spot key (e.g., "pipeline")
    pub spot: String,

    /// Days of conditions to request
    #[serde(default = "default_conditions_days")]
    pub days: u32,

    /// Report today's record in the region's timezone instead of the first
    #[serde(default)]
    pub now: bool,
}

/// Query carrying only a spot key.
#[derive(Debug, Deserialize)]
pub struct SpotQuery {
    pub spot: String,
}

/// Query for spot endpoints that take a day count.
#[derive(Debug, Deserialize)]
pub struct DaysQuery {
    pub spot: String,
    pub days: u32,
}

/// Query for `GET /wind`.
#[derive(Debug, Deserialize)]
pub struct WindQuery {
    pub spot: String,
    pub days: u32,

    /// Ask the provider for bias-corrected wind; on unless set false
    pub corrected: Option<bool>,
}

/// Query for interval forecasts.
#[derive(Debug, Deserialize)]
pub struct ForecastParams {
    pub spot: String,

    #[serde(default = "default_forecast_days")]
    pub days: u32,

    /// Hours between intervals; the provider default when absent
    pub interval_hours: Option<u32>,
}

/// Query for `GET /wave`.
#[derive(Debug, Deserialize)]
pub struct WaveQuery {
    pub spot: String,

    #[serde(default = "default_forecast_days")]
    pub days: u32,

    pub interval_hours: Option<u32>,

    /// Report maximum rather than typical heights
    #[serde(default)]
    pub max_heights: bool,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub detail: String,
}
