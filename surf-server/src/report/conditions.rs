//! Regional conditions normalization.

use chrono::NaiveDate;

use crate::catalog::Region;
use crate::provider::{ConditionsResponse, DailyConditions, Report};

use super::error::ReportError;
use super::model::{ConditionsReport, HalfDay, RegionalReport};
use super::time::region_local;

/// Which day record of a conditions response to report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelection {
    /// The first record, whatever its date
    First,
    /// The record for this region-local date, falling back to the first
    On(NaiveDate),
}

/// Build a regional report from one day of a conditions response.
///
/// The day, AM and PM timestamps are each converted in the region's
/// timezone.
pub fn regional_report(
    region: &Region,
    conditions: &ConditionsResponse,
    selection: DaySelection,
) -> Result<RegionalReport, ReportError> {
    let days = &conditions.data.conditions;
    let first = days
        .first()
        .ok_or_else(|| ReportError::NoConditions(region.key.clone()))?;

    let day = match selection {
        DaySelection::First => first,
        DaySelection::On(date) => days
            .iter()
            .find(|d| d.forecast_day == date)
            .unwrap_or(first),
    };

    day_report(region, day)
}

fn day_report(region: &Region, day: &DailyConditions) -> Result<RegionalReport, ReportError> {
    Ok(RegionalReport {
        region_name: region.full_name.clone(),
        report_local_datetime: region_local(day.timestamp, region.timezone)?,
        observation: day.observation.clone(),
        am_report: half_day_report(region, HalfDay::Am, &day.am)?,
        pm_report: half_day_report(region, HalfDay::Pm, &day.pm)?,
    })
}

fn half_day_report(
    region: &Region,
    half: HalfDay,
    report: &Report,
) -> Result<ConditionsReport, ReportError> {
    Ok(ConditionsReport {
        half,
        report_local_datetime: region_local(report.timestamp, region.timezone)?,
        observation: report.observation.clone(),
        rating: report.rating.clone(),
        min_height: report.min_height,
        max_height: report.max_height,
    })
}
