//! Buoy reading normalization.

use tracing::warn;

use crate::catalog::Region;
use crate::provider::{Buoy, NearbyResponse};

use super::error::ReportError;
use super::model::LatestBuoyData;
use super::time::region_local;

/// Find a buoy by provider ID.
pub fn find_buoy<'a>(buoys: &'a [Buoy], buoy_id: &str) -> Option<&'a Buoy> {
    buoys.iter().find(|b| b.id == buoy_id)
}

/// Pick the region's buoy out of a nearby-buoys response and present its
/// latest reading in region-local time.
///
/// A buoy that is not online is reported anyway, with a warning.
pub fn latest_buoy_data(
    region: &Region,
    nearby: &NearbyResponse,
) -> Result<LatestBuoyData, ReportError> {
    let buoy_id = region
        .buoy_id
        .as_deref()
        .ok_or_else(|| ReportError::NoBuoy(region.key.clone()))?;

    let buoy = find_buoy(&nearby.data, buoy_id).ok_or_else(|| ReportError::BuoyMissing {
        region: region.key.clone(),
        buoy_id: buoy_id.to_string(),
    })?;

    if !buoy.is_online() {
        warn!("Buoy {} is not online (status {})", buoy.id, buoy.status);
    }

    let reading = &buoy.latest_data;
    Ok(LatestBuoyData {
        name: buoy.name.clone(),
        source_id: buoy.source_id.clone(),
        buoy_local_datetime: region_local(reading.timestamp, region.timezone)?,
        wave_height: reading.height,
        wave_period: reading.period,
        swells: reading.swells.clone(),
    })
}
