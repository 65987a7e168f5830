//! Normalized surf reports.
//!
//! Turns provider responses into the service's own output records:
//!
//! - buoy readings and regional conditions carry datetimes converted with
//!   the region's timezone, never the provider's `utcOffset`
//! - forecast intervals are keyed by their timestamp formatted in the
//!   machine's local time zone (`%m/%d/%Y %H:%M:%S`)
//!
//! [`SurfReports`] ties these to the provider client for a spot key.

mod buoy;
mod conditions;
mod error;
mod intervals;
mod model;
mod service;
pub mod time;

pub use buoy::{find_buoy, latest_buoy_data};
pub use conditions::{DaySelection, regional_report};
pub use error::ReportError;
pub use intervals::{
    merge_wave_and_wind, rating_intervals, tide_intervals, wave_intervals, wind_intervals,
};
pub use model::{
    ConditionsReport, FullInterval, FullReport, HalfDay, IntervalMap, LatestBuoyData,
    RatingReport, RatingSummary, RegionalReport, TideReport, TideSummary, WaveReport,
    WaveSummary, WindReport, WindSummary,
};
pub use service::{FULL_REPORT_INTERVAL_HOURS, SurfReports};
