//! Normalized report types returned by the API.

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::Serialize;

use crate::provider::{Rating, Surf, Swell, UnitMap, Units};

/// Map from formatted interval time to that interval's values, in time
/// order.
///
/// Keys are machine-local times at second precision; intervals that
/// format to the same key keep the first one's position and the last
/// one's values.
pub type IntervalMap<T> = IndexMap<String, T>;

/// Latest reading from a region's representative buoy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestBuoyData {
    pub name: String,
    pub source_id: String,
    pub buoy_local_datetime: DateTime<FixedOffset>,
    pub wave_height: f64,
    pub wave_period: f64,
    pub swells: Vec<Swell>,
}

/// Which half of the day a sub-report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HalfDay {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

/// AM or PM conditions within a regional report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionsReport {
    #[serde(rename = "type")]
    pub half: HalfDay,
    pub report_local_datetime: DateTime<FixedOffset>,
    pub observation: String,
    pub rating: Option<String>,
    pub min_height: f64,
    pub max_height: f64,
}

/// One day of conditions for a region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalReport {
    pub region_name: String,
    pub report_local_datetime: DateTime<FixedOffset>,
    pub observation: String,
    pub am_report: ConditionsReport,
    pub pm_report: ConditionsReport,
}

/// Wave values for one interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveSummary {
    pub surf: Surf,
    pub swells: Vec<Swell>,
}

/// Wind values for one interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindSummary {
    pub speed: f64,
    pub direction: f64,
    pub direction_type: String,
    pub optimal_score: i32,
}

/// Rating for one interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    pub rating: Rating,
}

/// Tide values for one interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TideSummary {
    pub height: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Wind forecast for a spot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindReport {
    pub spot_name: String,
    /// Time the report was produced, in the spot's region timezone
    pub report_local_datetime: DateTime<FixedOffset>,
    pub intervals: IntervalMap<WindSummary>,
}

/// Wave forecast for a spot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveReport {
    pub spot_name: String,
    pub units: UnitMap,
    pub intervals: IntervalMap<WaveSummary>,
}

/// Rating forecast for a spot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingReport {
    pub spot_name: String,
    pub intervals: IntervalMap<RatingSummary>,
}

/// Tide predictions for a spot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TideReport {
    pub spot_name: String,
    pub units: Units,
    pub intervals: IntervalMap<TideSummary>,
}

/// Wave and wind for the same interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullInterval {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave: Option<WaveSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind: Option<WindSummary>,
}

/// Combined wave and wind forecast for a spot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullReport {
    pub spot_name: String,
    /// Wave units
    pub units: UnitMap,
    pub intervals: IntervalMap<FullInterval>,
}
