//! Surf data provider HTTP client.
//!
//! One async method per provider endpoint. Each resolves the catalog
//! entry it was given, builds the endpoint's query parameters, issues the
//! request, and decodes the body into the matching response type.

use std::sync::Arc;

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::catalog::Catalog;
use crate::config::{ProviderConfig, ProviderPaths};

use super::error::ProviderError;
use super::types::{
    ConditionsResponse, LoginResponse, NearbyResponse, RatingResponse, TideResponse,
    WaveResponse, WindResponse,
};

/// Default number of days for regional conditions.
pub const DEFAULT_CONDITIONS_DAYS: u32 = 8;

/// Default number of days for spot forecasts.
pub const DEFAULT_FORECAST_DAYS: u32 = 3;

/// Default forecast interval granularity in hours.
pub const DEFAULT_INTERVAL_HOURS: u32 = 8;

/// Device fingerprint sent with login.
const DEVICE_ID: &str = "Chrome-109.0.0.0";
const DEVICE_TYPE: &str = "Chrome 109.0.0.0 on OS X 10.15.7 64-bit";

/// Maximum number of body characters kept in errors and logs.
const BODY_EXCERPT_CHARS: usize = 500;

/// Query parameter list for a provider request.
type Params = Vec<(&'static str, String)>;

/// Provider endpoint kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Conditions,
    Wave,
    Rating,
    Wind,
    Tides,
    Nearby,
}

impl Endpoint {
    /// Path suffix for this endpoint.
    pub fn path(self, paths: &ProviderPaths) -> &str {
        match self {
            Endpoint::Login => &paths.login,
            Endpoint::Conditions => &paths.conditions,
            Endpoint::Wave => &paths.wave,
            Endpoint::Rating => &paths.rating,
            Endpoint::Wind => &paths.wind,
            Endpoint::Tides => &paths.tides,
            Endpoint::Nearby => &paths.nearby,
        }
    }
}

/// Options for spot forecast requests (wave, rating, wind).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastQuery {
    /// Number of days to forecast
    pub days: u32,
    /// Interval granularity in hours
    pub interval_hours: u32,
    /// Ask for maximum rather than typical heights (wave only)
    pub max_heights: bool,
    /// Ask for corrected wind (wind only)
    pub corrected: bool,
}

impl ForecastQuery {
    /// Create a query for the given number of days with default options.
    pub fn new(days: u32) -> Self {
        Self {
            days,
            interval_hours: DEFAULT_INTERVAL_HOURS,
            max_heights: false,
            corrected: true,
        }
    }

    /// Set interval granularity.
    pub fn with_interval_hours(mut self, hours: u32) -> Self {
        self.interval_hours = hours;
        self
    }

    /// Set whether to request maximum heights.
    pub fn with_max_heights(mut self, max_heights: bool) -> Self {
        self.max_heights = max_heights;
        self
    }

    /// Set whether to request corrected wind.
    pub fn with_corrected(mut self, corrected: bool) -> Self {
        self.corrected = corrected;
        self
    }
}

impl Default for ForecastQuery {
    fn default() -> Self {
        Self::new(DEFAULT_FORECAST_DAYS)
    }
}

/// Login request body.
#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    #[serde(rename = "authorizationString")]
    authorization_string: &'a str,
    device_id: &'a str,
    device_type: &'a str,
    forced: bool,
    grant_type: &'a str,
    password: &'a str,
    username: &'a str,
}

/// Surf data provider API client.
///
/// Cheap to clone; the HTTP connection pool and catalog are shared.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    config: Arc<ProviderConfig>,
    catalog: Arc<Catalog>,
}

impl ProviderClient {
    /// Create a new provider client.
    pub fn new(config: ProviderConfig, catalog: Arc<Catalog>) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
            catalog,
        })
    }

    /// The catalog used to resolve spot and region keys.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Log in to the provider with the configured credentials.
    ///
    /// Returns whether login succeeded. The returned token is logged but
    /// not applied; data requests keep using the configured access token.
    pub async fn login(&self) -> bool {
        match self.fetch_token().await {
            Ok(token) => {
                info!("New access token: {token}");
                true
            }
            Err(e) => {
                error!("Provider login failed: {e}");
                false
            }
        }
    }

    async fn fetch_token(&self) -> Result<String, ProviderError> {
        let body = LoginBody {
            authorization_string: &self.config.auth_string,
            device_id: DEVICE_ID,
            device_type: DEVICE_TYPE,
            forced: true,
            grant_type: "password",
            password: &self.config.password,
            username: &self.config.username,
        };

        let url = self.url(Endpoint::Login);
        debug!("POST {url}");

        let response = self
            .http
            .post(&url)
            .query(&[("isShortLived", "false")])
            .json(&body)
            .send()
            .await?;

        let login: LoginResponse = decode_response(Endpoint::Login, response).await?;
        Ok(login.access_token)
    }

    /// Get regional conditions for the next `days` days.
    pub async fn conditions(
        &self,
        region_key: &str,
        days: u32,
    ) -> Result<ConditionsResponse, ProviderError> {
        let region = self.catalog.lookup_region(region_key)?;
        let params = vec![
            ("subregionId", region.region_id.to_string()),
            ("days", days.to_string()),
        ];

        let mut response: ConditionsResponse = self.get_json(Endpoint::Conditions, params).await?;
        response.region = region.key.clone();
        Ok(response)
    }

    /// Get the wave forecast for a spot.
    pub async fn wave(
        &self,
        spot_key: &str,
        query: &ForecastQuery,
    ) -> Result<WaveResponse, ProviderError> {
        let spot = self.catalog.lookup_spot(spot_key)?;
        let mut params = spot_params(spot.spot_id.as_str(), query.days);
        params.push(("intervalHours", query.interval_hours.to_string()));
        params.push(("maxHeights", query.max_heights.to_string()));

        let mut response: WaveResponse = self.get_json(Endpoint::Wave, params).await?;
        response.spot = spot.name.clone();
        Ok(response)
    }

    /// Get the surf rating forecast for a spot.
    pub async fn rating(
        &self,
        spot_key: &str,
        query: &ForecastQuery,
    ) -> Result<RatingResponse, ProviderError> {
        let spot = self.catalog.lookup_spot(spot_key)?;
        let mut params = spot_params(spot.spot_id.as_str(), query.days);
        params.push(("intervalHours", query.interval_hours.to_string()));

        let mut response: RatingResponse = self.get_json(Endpoint::Rating, params).await?;
        response.spot = spot.name.clone();
        Ok(response)
    }

    /// Get the wind forecast for a spot.
    pub async fn wind(
        &self,
        spot_key: &str,
        query: &ForecastQuery,
    ) -> Result<WindResponse, ProviderError> {
        let spot = self.catalog.lookup_spot(spot_key)?;
        let mut params = spot_params(spot.spot_id.as_str(), query.days);
        params.push(("intervalHours", query.interval_hours.to_string()));
        params.push(("corrected", query.corrected.to_string()));

        let mut response: WindResponse = self.get_json(Endpoint::Wind, params).await?;
        response.spot = spot.name.clone();
        Ok(response)
    }

    /// Get tide predictions for a spot.
    pub async fn tides(&self, spot_key: &str, days: u32) -> Result<TideResponse, ProviderError> {
        let spot = self.catalog.lookup_spot(spot_key)?;
        let params = spot_params(spot.spot_id.as_str(), days);

        let mut response: TideResponse = self.get_json(Endpoint::Tides, params).await?;
        response.spot = spot.name.clone();
        Ok(response)
    }

    /// Get buoys near a coordinate.
    pub async fn nearby(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<NearbyResponse, ProviderError> {
        let params = vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
        ];
        self.get_json(Endpoint::Nearby, params).await
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.config.base_url, endpoint.path(&self.config.paths))
    }

    /// Issue a GET with the access token appended and decode the body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        mut params: Params,
    ) -> Result<T, ProviderError> {
        params.push(("accesstoken", self.config.access_token.clone()));

        let url = self.url(endpoint);
        debug!("GET {url} ({endpoint:?})");

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .inspect_err(|e| error!("Failed GET {url}: {e}"))?;

        decode_response(endpoint, response).await
    }
}

/// Parameters shared by every spot endpoint.
fn spot_params(spot_id: &str, days: u32) -> Params {
    vec![("spotId", spot_id.to_string()), ("days", days.to_string())]
}

/// Classify a provider response and decode its body.
///
/// Logs status and body on any failure.
async fn decode_response<T: DeserializeOwned>(
    endpoint: Endpoint,
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    let status = response.status();

    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        let body = excerpt(&body);
        error!("{endpoint:?} request failed with {status}: {body}");
        return Err(ProviderError::Status { status, body });
    }

    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| {
        let body = excerpt(&body);
        error!("{endpoint:?} response did not decode: {e}; body: {body}");
        ProviderError::Decode {
            message: e.to_string(),
            body,
        }
    })
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}
