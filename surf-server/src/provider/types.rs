//! Provider API response DTOs.
//!
//! These types map directly to the provider's JSON responses. Fields the
//! provider may omit are `Option`; everything else is required, so a body
//! missing a required field fails to decode.
//!
//! The provider does not echo the spot or region a response is for. The
//! client fills in `spot` / `region` after decoding.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize an epoch timestamp that may carry a fractional part.
///
/// Fractions are floored to whole seconds.
fn epoch_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = f64::deserialize(deserializer)?;
    if !secs.is_finite() || secs.abs() > i64::MAX as f64 {
        return Err(serde::de::Error::custom(format!(
            "timestamp out of range: {secs}"
        )));
    }
    Ok(secs.floor() as i64)
}

/// Units as the conditions and wave endpoints report them: any subset of
/// measurement names, e.g. `{"waveHeight": "FT"}`.
pub type UnitMap = BTreeMap<String, String>;

/// Units the wind, tide and nearby-buoy endpoints report, one per
/// measurement kind. All six are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Units {
    pub temperature: String,
    pub tide_height: String,
    pub swell_height: String,
    pub wave_height: String,
    pub wind_speed: String,
    pub pressure: String,
}

/// Latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// Response from the regional conditions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionsResponse {
    pub associated: ConditionsAssociated,
    pub data: ConditionsData,
    /// Region key this response is for (filled in by the client).
    #[serde(skip)]
    pub region: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionsAssociated {
    pub units: UnitMap,
    pub utc_offset: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionsData {
    pub conditions: Vec<DailyConditions>,
}

/// Forecaster credited with a human report.
#[derive(Debug, Clone, Deserialize)]
pub struct Forecaster {
    pub name: Option<String>,
    pub avatar: Option<String>,
}

/// One day of regional conditions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyConditions {
    #[serde(deserialize_with = "epoch_seconds")]
    pub timestamp: i64,
    /// Calendar day of the forecast, in region-local time
    pub forecast_day: NaiveDate,
    pub forecaster: Option<Forecaster>,
    /// Whether a human forecaster wrote this day's report
    pub human: bool,
    pub observation: String,
    pub am: Report,
    pub pm: Report,
    pub utc_offset: i32,
}

/// Half-day (AM or PM) conditions report.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(deserialize_with = "epoch_seconds")]
    pub timestamp: i64,
    pub observation: String,
    /// Rating key (e.g., "FAIR_TO_GOOD")
    pub rating: Option<String>,
    pub min_height: f64,
    pub max_height: f64,
    pub plus: bool,
    /// Height relative to a surfer (e.g., "Waist to chest")
    pub human_relation: String,
    pub occasional_height: Option<f64>,
}

/// Response from the spot wave forecast endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WaveResponse {
    pub associated: WaveAssociated,
    pub data: WaveData,
    /// Spot name this response is for (filled in by the client).
    #[serde(skip)]
    pub spot: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveAssociated {
    pub units: UnitMap,
    pub utc_offset: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WaveData {
    pub wave: Vec<WaveInterval>,
}

/// Surf height range for an interval.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Surf {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub optimal_score: Option<i32>,
}

/// A single swell component.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Swell {
    pub height: Option<f64>,
    pub period: Option<f64>,
    pub direction: Option<f64>,
    pub direction_min: Option<f64>,
    pub optimal_score: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveInterval {
    #[serde(deserialize_with = "epoch_seconds")]
    pub timestamp: i64,
    pub probability: Option<f64>,
    pub utc_offset: i32,
    pub surf: Surf,
    pub swells: Vec<Swell>,
}

/// Response from the spot rating endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RatingResponse {
    pub associated: RatingAssociated,
    pub data: RatingData,
    /// Spot name this response is for (filled in by the client).
    #[serde(skip)]
    pub spot: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingAssociated {
    pub location: Location,
    pub run_initialization_timestamp: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RatingData {
    pub rating: Vec<RatingInterval>,
}

/// Rating label and numeric value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Rating {
    pub key: String,
    pub value: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingInterval {
    #[serde(deserialize_with = "epoch_seconds")]
    pub timestamp: i64,
    pub utc_offset: i32,
    pub rating: Rating,
}

/// Response from the spot wind forecast endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WindResponse {
    pub associated: WindAssociated,
    pub data: WindData,
    /// Spot name this response is for (filled in by the client).
    #[serde(skip)]
    pub spot: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindAssociated {
    pub units: Units,
    pub utc_offset: i32,
    pub location: Location,
    pub run_initialization_timestamp: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindData {
    pub wind: Vec<WindInterval>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindInterval {
    #[serde(deserialize_with = "epoch_seconds")]
    pub timestamp: i64,
    pub utc_offset: i32,
    pub speed: f64,
    /// Degrees true
    pub direction: f64,
    /// "Offshore", "Onshore", or "Cross-shore"
    pub direction_type: String,
    pub gust: f64,
    pub optimal_score: i32,
}

/// Response from the spot tides endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TideResponse {
    pub associated: TideAssociated,
    pub data: TideData,
    /// Spot name this response is for (filled in by the client).
    #[serde(skip)]
    pub spot: String,
}

/// Tide station the forecast is taken from.
#[derive(Debug, Clone, Deserialize)]
pub struct TideLocation {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub lon: f64,
    pub lat: f64,
    pub mean: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TideAssociated {
    pub units: Units,
    pub utc_offset: i32,
    pub tide_location: TideLocation,
    pub run_initialization_timestamp: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TideData {
    pub tides: Vec<TideInterval>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TideInterval {
    #[serde(deserialize_with = "epoch_seconds")]
    pub timestamp: i64,
    pub utc_offset: i32,
    /// "HIGH", "LOW", or "NORMAL"
    #[serde(rename = "type")]
    pub kind: String,
    pub height: f64,
}

/// Response from the nearby-buoys endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct NearbyResponse {
    pub associated: NearbyAssociated,
    pub data: Vec<Buoy>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NearbyAssociated {
    pub units: Units,
}

/// Latest reading from a buoy.
#[derive(Debug, Clone, Deserialize)]
pub struct BuoyReading {
    #[serde(deserialize_with = "epoch_seconds")]
    pub timestamp: i64,
    pub height: f64,
    pub period: f64,
    pub direction: f64,
    pub swells: Vec<Swell>,
}

/// A buoy near the queried coordinates.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buoy {
    pub id: String,
    pub name: String,
    /// Identifier assigned by the buoy's operator (e.g., NDBC station number)
    pub source_id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// "ONLINE" when reporting normally
    pub status: String,
    pub abbr_timezone: String,
    pub latest_data: BuoyReading,
}

impl Buoy {
    /// Whether the provider reports this buoy as online.
    pub fn is_online(&self) -> bool {
        self.status == "ONLINE"
    }
}

/// Response from the login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// A complete `Units` object as the provider sends it.
#[cfg(test)]
pub(crate) fn sample_units() -> serde_json::Value {
    serde_json::json!({
        "temperature": "F", "tideHeight": "FT", "swellHeight": "FT",
        "waveHeight": "FT", "windSpeed": "KTS", "pressure": "MB"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_conditions() {
        let json = r#"{
            "associated": {"units": {"waveHeight": "FT"}, "utcOffset": -10},
            "data": {"conditions": [{
                "timestamp": 1700042400,
                "forecastDay": "2023-11-15",
                "forecaster": {"name": "Kaimana", "avatar": null},
                "human": true,
                "observation": "Building NW swell.",
                "am": {"timestamp": 1700042400, "observation": "Clean early.",
                       "rating": "FAIR", "minHeight": 4, "maxHeight": 6,
                       "plus": false, "humanRelation": "Head high", "occasionalHeight": null},
                "pm": {"timestamp": 1700064000, "observation": "Trades pick up.",
                       "rating": null, "minHeight": 3, "maxHeight": 5,
                       "plus": true, "humanRelation": "Shoulder high"},
                "utcOffset": -10
            }]}
        }"#;

        let resp: ConditionsResponse = serde_json::from_str(json).unwrap();
        assert!(resp.region.is_empty());
        assert_eq!(resp.associated.units["waveHeight"], "FT");

        let day = &resp.data.conditions[0];
        assert_eq!(day.forecast_day, NaiveDate::from_ymd_opt(2023, 11, 15).unwrap());
        assert_eq!(day.am.rating.as_deref(), Some("FAIR"));
        assert_eq!(day.pm.rating, None);
        assert_eq!(day.am.max_height, 6.0);
        assert!(day.pm.occasional_height.is_none());
    }

    #[test]
    fn deserialize_wave_interval_with_fractional_timestamp() {
        let json = r#"{
            "timestamp": 1700000000.75,
            "probability": 100,
            "utcOffset": -10,
            "surf": {"min": 3, "max": 5, "optimalScore": 2},
            "swells": [{"height": 2.1, "period": 14, "direction": 315.5,
                        "directionMin": 300.2, "optimalScore": 1}]
        }"#;

        let interval: WaveInterval = serde_json::from_str(json).unwrap();
        assert_eq!(interval.timestamp, 1_700_000_000);
        assert_eq!(interval.surf.max, Some(5.0));
        assert_eq!(interval.swells[0].period, Some(14.0));
    }

    #[test]
    fn deserialize_wind() {
        let json = r#"{
            "associated": {
                "units": {"temperature": "F", "tideHeight": "FT", "swellHeight": "FT",
                          "waveHeight": "FT", "windSpeed": "KTS", "pressure": "MB"},
                "utcOffset": -10,
                "location": {"lat": 21.66, "lon": -158.05},
                "runInitializationTimestamp": 1699963200
            },
            "data": {"wind": [{
                "timestamp": 1700000000, "utcOffset": -10, "speed": 12.3,
                "direction": 65.4, "directionType": "Cross-shore", "gust": 18.0,
                "optimalScore": 0
            }]}
        }"#;

        let resp: WindResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.associated.units.wind_speed, "KTS");
        assert_eq!(resp.data.wind[0].direction_type, "Cross-shore");
    }

    #[test]
    fn deserialize_tide_type() {
        let json = r#"{"timestamp": 1700000000, "utcOffset": -10, "type": "HIGH", "height": 1.9}"#;
        let tide: TideInterval = serde_json::from_str(json).unwrap();
        assert_eq!(tide.kind, "HIGH");
    }

    #[test]
    fn missing_required_field_fails() {
        // No "speed"
        let json = r#"{"timestamp": 1700000000, "utcOffset": -10, "direction": 65,
                       "directionType": "Offshore", "gust": 18, "optimalScore": 0}"#;
        assert!(serde_json::from_str::<WindInterval>(json).is_err());
    }

    #[test]
    fn deserialize_buoy() {
        let json = r#"{
            "id": "44448078-cecd-11eb-94ae-024238d3b313",
            "name": "Waimea Bay",
            "sourceId": "51201",
            "latitude": 21.671,
            "longitude": -158.117,
            "status": "ONLINE",
            "abbrTimezone": "HST",
            "latestData": {"timestamp": 1700000000, "height": 6.2, "period": 13,
                           "direction": 320, "swells": []}
        }"#;

        let buoy: Buoy = serde_json::from_str(json).unwrap();
        assert!(buoy.is_online());
        assert_eq!(buoy.source_id, "51201");
        assert_eq!(buoy.latest_data.period, 13.0);
    }

    #[test]
    fn strict_units_need_every_kind() {
        let partial = r#"{"waveHeight": "FT", "windSpeed": "KTS"}"#;
        assert!(serde_json::from_str::<Units>(partial).is_err());

        let wind = r#"{
            "associated": {"units": {}, "utcOffset": -10,
                           "location": {"lat": 21.66, "lon": -158.05},
                           "runInitializationTimestamp": 1699963200},
            "data": {"wind": []}
        }"#;
        assert!(serde_json::from_str::<WindResponse>(wind).is_err());
    }

    #[test]
    fn conditions_units_are_required() {
        let json = r#"{"associated": {"utcOffset": -10}, "data": {"conditions": []}}"#;
        assert!(serde_json::from_str::<ConditionsResponse>(json).is_err());

        let json = r#"{"associated": {"units": {}, "utcOffset": -10}, "data": {"conditions": []}}"#;
        assert!(serde_json::from_str::<ConditionsResponse>(json).is_ok());
    }
}
