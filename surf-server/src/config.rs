//! Service configuration.
//!
//! Everything is read from the environment once at startup. A `vars.env`
//! file in the working directory, if present, is loaded first.

use std::net::SocketAddr;
use std::path::Path;

/// Default request timeout for provider calls, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default address to listen on.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Default path prefix for the API routes.
const DEFAULT_ROUTE_PREFIX: &str = "/surf";

/// Errors loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Path suffixes for each provider endpoint, appended to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderPaths {
    pub login: String,
    pub conditions: String,
    pub wave: String,
    pub rating: String,
    pub wind: String,
    pub tides: String,
    pub nearby: String,
}

impl Default for ProviderPaths {
    fn default() -> Self {
        Self {
            login: "/trusted/token".to_string(),
            conditions: "/kbyg/regions/forecasts/conditions".to_string(),
            wave: "/kbyg/spots/forecasts/wave".to_string(),
            rating: "/kbyg/spots/forecasts/rating".to_string(),
            wind: "/kbyg/spots/forecasts/wind".to_string(),
            tides: "/kbyg/spots/forecasts/tides".to_string(),
            nearby: "/kbyg/buoys/nearby".to_string(),
        }
    }
}

/// Configuration for the provider client.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Account username for login
    pub username: String,
    /// Account password for login
    pub password: String,
    /// Pre-shared authorization string sent with login
    pub auth_string: String,
    /// Access token sent with every data request
    pub access_token: String,
    /// Base URL for the provider API
    pub base_url: String,
    /// Per-endpoint path suffixes
    pub paths: ProviderPaths,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Create a new config with the given base URL and access token.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            auth_string: String::new(),
            access_token: access_token.into(),
            base_url: base_url.into(),
            paths: ProviderPaths::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set login credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        auth_string: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self.auth_string = auth_string.into();
        self
    }

    /// Set custom endpoint paths.
    pub fn with_paths(mut self, paths: ProviderPaths) -> Self {
        self.paths = paths;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone)]
pub struct SurfConfig {
    /// Provider client settings
    pub provider: ProviderConfig,
    /// Secret expected in the `x-api-key` header
    pub api_key: String,
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// Path prefix the API is mounted under
    pub route_prefix: String,
}

impl SurfConfig {
    /// Load configuration from the process environment.
    ///
    /// Reads `vars.env` from the working directory first, if it exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env_file("vars.env");
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let paths = ProviderPaths {
            login: required("LOGIN_PATH")?,
            conditions: required("CONDITIONS_PATH")?,
            wave: required("WAVE_PATH")?,
            rating: required("RATING_PATH")?,
            wind: required("WIND_PATH")?,
            tides: required("TIDES_PATH")?,
            nearby: required("NEARBY_PATH")?,
        };

        let timeout_secs = match lookup("SURF_TIMEOUT_SECS") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "SURF_TIMEOUT_SECS",
                value,
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let base_url = required("SURFLINE_BASE_URL")?;
        let provider = ProviderConfig::new(base_url, required("ACCESS_TOKEN")?)
            .with_credentials(
                lookup("SURFLINE_USERNAME").unwrap_or_default(),
                lookup("SURFLINE_PASSWORD").unwrap_or_default(),
                lookup("AUTH_STRING").unwrap_or_default(),
            )
            .with_paths(paths)
            .with_timeout(timeout_secs);

        let bind_value =
            lookup("SURF_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value.parse().map_err(|_| ConfigError::Invalid {
            name: "SURF_BIND_ADDR",
            value: bind_value,
        })?;

        let route_prefix = lookup("SURF_ROUTE_PREFIX")
            .map(|p| normalize_prefix(&p))
            .unwrap_or_else(|| DEFAULT_ROUTE_PREFIX.to_string());

        Ok(Self {
            provider,
            api_key: required("MAIN_API_KEY")?,
            bind_addr,
            route_prefix,
        })
    }
}

/// Load variables from an env file into the process environment.
///
/// Returns whether the file was found. Variables already set are kept.
pub fn load_env_file(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match dotenv::from_path(path) {
        Ok(()) => {
            tracing::debug!("Loaded environment from {}", path.display());
            true
        }
        Err(e) => {
            tracing::debug!("No env file at {}: {}", path.display(), e);
            false
        }
    }
}

/// Strip trailing slashes and ensure a leading one. Empty means "mount at root".
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
