//! Report assembly over the provider client.

use chrono::Utc;
use tracing::debug;

use crate::catalog::Catalog;
use crate::provider::{ForecastQuery, ProviderClient};

use super::buoy::latest_buoy_data;
use super::conditions::{DaySelection, regional_report};
use super::error::ReportError;
use super::intervals::{
    merge_wave_and_wind, rating_intervals, tide_intervals, wave_intervals, wind_intervals,
};
use super::model::{
    FullReport, LatestBuoyData, RatingReport, RegionalReport, TideReport, WaveReport, WindReport,
};

/// Interval granularity used for the combined wave and wind report.
pub const FULL_REPORT_INTERVAL_HOURS: u32 = 3;

/// Builds normalized reports for catalog spots.
///
/// Every method takes a spot key, resolves it through the client's
/// catalog, fetches what it needs from the provider, and normalizes.
#[derive(Debug, Clone)]
pub struct SurfReports {
    client: ProviderClient,
}

impl SurfReports {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }

    pub fn catalog(&self) -> &Catalog {
        self.client.catalog()
    }

    /// Log in to the provider; see [`ProviderClient::login`].
    pub async fn login(&self) -> bool {
        self.client.login().await
    }

    /// Latest reading from the buoy representing the spot's region.
    pub async fn buoy_reading(&self, spot_key: &str) -> Result<LatestBuoyData, ReportError> {
        let (_, region) = self.catalog().region_for_spot(spot_key)?;
        debug!("Looking for buoy near {} ({})", region.key, region.full_name);

        let nearby = self.client.nearby(region.latitude, region.longitude).await?;
        latest_buoy_data(region, &nearby)
    }

    /// Conditions for the spot's region.
    ///
    /// With `now` set, reports the day that is today in the region's
    /// timezone when the provider returned it.
    pub async fn region_conditions(
        &self,
        spot_key: &str,
        days: u32,
        now: bool,
    ) -> Result<RegionalReport, ReportError> {
        let (_, region) = self.catalog().region_for_spot(spot_key)?;
        let conditions = self.client.conditions(&region.key, days).await?;

        let selection = if now {
            DaySelection::On(Utc::now().with_timezone(&region.timezone).date_naive())
        } else {
            DaySelection::First
        };

        regional_report(region, &conditions, selection)
    }

    /// Wind forecast, stamped with the current time in the spot's region.
    pub async fn wind_report(
        &self,
        spot_key: &str,
        query: &ForecastQuery,
    ) -> Result<WindReport, ReportError> {
        let (_, region) = self.catalog().region_for_spot(spot_key)?;
        let wind = self.client.wind(spot_key, query).await?;

        Ok(WindReport {
            intervals: wind_intervals(&wind.data.wind)?,
            spot_name: wind.spot,
            report_local_datetime: Utc::now().with_timezone(&region.timezone).fixed_offset(),
        })
    }

    pub async fn wave_report(
        &self,
        spot_key: &str,
        query: &ForecastQuery,
    ) -> Result<WaveReport, ReportError> {
        let wave = self.client.wave(spot_key, query).await?;

        Ok(WaveReport {
            intervals: wave_intervals(&wave.data.wave)?,
            spot_name: wave.spot,
            units: wave.associated.units,
        })
    }

    pub async fn rating_report(
        &self,
        spot_key: &str,
        query: &ForecastQuery,
    ) -> Result<RatingReport, ReportError> {
        let rating = self.client.rating(spot_key, query).await?;

        Ok(RatingReport {
            intervals: rating_intervals(&rating.data.rating)?,
            spot_name: rating.spot,
        })
    }

    pub async fn tide_report(&self, spot_key: &str, days: u32) -> Result<TideReport, ReportError> {
        let tides = self.client.tides(spot_key, days).await?;

        Ok(TideReport {
            intervals: tide_intervals(&tides.data.tides)?,
            spot_name: tides.spot,
            units: tides.associated.units,
        })
    }

    /// Wave and wind at three-hour intervals, side by side.
    ///
    /// Both forecasts are fetched concurrently; either failing fails the
    /// report.
    pub async fn full_report(&self, spot_key: &str, days: u32) -> Result<FullReport, ReportError> {
        let query = ForecastQuery::new(days).with_interval_hours(FULL_REPORT_INTERVAL_HOURS);
        let (wave, wind) = futures::try_join!(
            self.client.wave(spot_key, &query),
            self.client.wind(spot_key, &query),
        )?;

        let intervals = merge_wave_and_wind(&wave.data.wave, &wind.data.wind)?;

        Ok(FullReport {
            spot_name: wave.spot,
            units: wave.associated.units,
            intervals,
        })
    }
}
