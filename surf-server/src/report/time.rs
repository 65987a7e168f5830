//! Timestamp conversion.
//!
//! Two conversions are used, deliberately different:
//! - buoy and conditions reports use the *region's* timezone
//! - interval map keys use the *machine's* local timezone

use chrono::{DateTime, FixedOffset, Local};
use chrono_tz::Tz;

use super::error::ReportError;

/// Key format for interval maps, second precision.
pub const INTERVAL_KEY_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Convert an epoch timestamp into wall-clock time in `tz`.
///
/// The provider's own UTC offset field is never used; the region's
/// timezone decides the offset, including any DST in effect at that
/// instant.
pub fn region_local(timestamp: i64, tz: Tz) -> Result<DateTime<FixedOffset>, ReportError> {
    let utc = DateTime::from_timestamp(timestamp, 0)
        .ok_or(ReportError::InvalidTimestamp(timestamp))?;
    Ok(utc.with_timezone(&tz).fixed_offset())
}

/// Format an epoch timestamp as an interval map key in machine-local time.
pub fn interval_key(timestamp: i64) -> Result<String, ReportError> {
    let utc = DateTime::from_timestamp(timestamp, 0)
        .ok_or(ReportError::InvalidTimestamp(timestamp))?;
    Ok(utc
        .with_timezone(&Local)
        .format(INTERVAL_KEY_FORMAT)
        .to_string())
}
