//! Interval-keyed maps for spot forecasts.
//!
//! Each interval is keyed by its timestamp formatted in machine-local
//! time. The provider's granularity is hours, so key collisions only
//! happen for sub-second duplicates; the later interval wins.

use crate::provider::{RatingInterval, TideInterval, WaveInterval, WindInterval};

use super::error::ReportError;
use super::model::{
    FullInterval, IntervalMap, RatingSummary, TideSummary, WaveSummary, WindSummary,
};
use super::time::interval_key;

/// Key each item by its formatted timestamp.
fn keyed<I, T, F>(
    items: &[I],
    timestamp: fn(&I) -> i64,
    summarize: F,
) -> Result<IntervalMap<T>, ReportError>
where
    F: Fn(&I) -> T,
{
    let mut out = IntervalMap::new();
    for item in items {
        out.insert(interval_key(timestamp(item))?, summarize(item));
    }
    Ok(out)
}

fn wave_summary(i: &WaveInterval) -> WaveSummary {
    WaveSummary {
        surf: i.surf,
        swells: i.swells.clone(),
    }
}

fn wind_summary(i: &WindInterval) -> WindSummary {
    WindSummary {
        speed: i.speed,
        direction: i.direction,
        direction_type: i.direction_type.clone(),
        optimal_score: i.optimal_score,
    }
}

/// Surf range and swells per interval.
pub fn wave_intervals(
    intervals: &[WaveInterval],
) -> Result<IntervalMap<WaveSummary>, ReportError> {
    keyed(intervals, |i| i.timestamp, wave_summary)
}

/// Wind speed and direction per interval.
pub fn wind_intervals(
    intervals: &[WindInterval],
) -> Result<IntervalMap<WindSummary>, ReportError> {
    keyed(intervals, |i| i.timestamp, wind_summary)
}

/// Surf rating per interval.
pub fn rating_intervals(
    intervals: &[RatingInterval],
) -> Result<IntervalMap<RatingSummary>, ReportError> {
    keyed(intervals, |i| i.timestamp, |i| RatingSummary {
        rating: i.rating.clone(),
    })
}

/// Tide height and type per interval.
pub fn tide_intervals(
    intervals: &[TideInterval],
) -> Result<IntervalMap<TideSummary>, ReportError> {
    keyed(intervals, |i| i.timestamp, |i| TideSummary {
        height: i.height,
        kind: i.kind.clone(),
    })
}

/// Line wave and wind intervals up by key, earliest first.
///
/// A time present in only one forecast gets an entry with the other side
/// empty.
pub fn merge_wave_and_wind(
    wave: &[WaveInterval],
    wind: &[WindInterval],
) -> Result<IntervalMap<FullInterval>, ReportError> {
    let mut times: Vec<i64> = wave
        .iter()
        .map(|i| i.timestamp)
        .chain(wind.iter().map(|i| i.timestamp))
        .collect();
    times.sort_unstable();
    times.dedup();

    let mut out = IntervalMap::with_capacity(times.len());
    for time in times {
        out.entry(interval_key(time)?).or_insert(FullInterval {
            wave: None,
            wind: None,
        });
    }

    // Every key was inserted above
    for i in wave {
        if let Some(entry) = out.get_mut(&interval_key(i.timestamp)?) {
            entry.wave = Some(wave_summary(i));
        }
    }
    for i in wind {
        if let Some(entry) = out.get_mut(&interval_key(i.timestamp)?) {
            entry.wind = Some(wind_summary(i));
        }
    }

    Ok(out)
}
