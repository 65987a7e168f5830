//! Validated region and spot records.

use chrono_tz::Tz;

use super::error::CatalogError;
use super::id::ProviderId;
use super::table::{RegionEntry, SpotEntry};

/// A geographic grouping of spots sharing a timezone and a representative buoy.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Catalog key (e.g., "oahu_north_shore")
    pub key: String,
    /// Provider subregion ID
    pub region_id: ProviderId,
    /// Human-readable name (e.g., "North Shore Oahu")
    pub full_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Timezone used for all region-local datetimes
    pub timezone: Tz,
    /// Provider ID of the region's representative buoy, if one is known
    pub buoy_id: Option<String>,
}

/// A named surf location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spot {
    /// Catalog key (e.g., "pipeline")
    pub key: String,
    /// Provider spot ID
    pub spot_id: ProviderId,
    /// Human-readable name (e.g., "Pipeline")
    pub name: String,
    /// ISO country code
    pub country: String,
    /// Key of the owning region, resolved through the catalog
    pub region: String,
}

impl Region {
    /// Validate a raw table row.
    pub(super) fn from_entry(entry: &RegionEntry) -> Result<Self, CatalogError> {
        let key = entry.key;
        require_non_empty(key, "key", key)?;
        require_non_empty(key, "full_name", entry.full_name)?;

        let region_id = ProviderId::parse(entry.region_id).map_err(|source| {
            CatalogError::InvalidId {
                key: key.to_string(),
                source,
            }
        })?;

        let timezone: Tz = entry
            .timezone
            .parse()
            .map_err(|_| CatalogError::UnknownTimezone {
                key: key.to_string(),
                timezone: entry.timezone.to_string(),
            })?;

        let lat_ok = (-90.0..=90.0).contains(&entry.latitude);
        let lon_ok = (-180.0..=180.0).contains(&entry.longitude);
        if !lat_ok || !lon_ok {
            return Err(CatalogError::InvalidCoordinates {
                key: key.to_string(),
                latitude: entry.latitude,
                longitude: entry.longitude,
            });
        }

        if let Some(buoy_id) = entry.buoy_id {
            require_non_empty(key, "buoy_id", buoy_id)?;
        }

        Ok(Self {
            key: key.to_string(),
            region_id,
            full_name: entry.full_name.to_string(),
            latitude: entry.latitude,
            longitude: entry.longitude,
            timezone,
            buoy_id: entry.buoy_id.map(str::to_string),
        })
    }
}

impl Spot {
    /// Validate a raw table row. Region existence is checked by the catalog.
    pub(super) fn from_entry(entry: &SpotEntry) -> Result<Self, CatalogError> {
        let key = entry.key;
        require_non_empty(key, "key", key)?;
        require_non_empty(key, "name", entry.name)?;
        require_non_empty(key, "region", entry.region)?;

        let spot_id =
            ProviderId::parse(entry.spot_id).map_err(|source| CatalogError::InvalidId {
                key: key.to_string(),
                source,
            })?;

        Ok(Self {
            key: key.to_string(),
            spot_id,
            name: entry.name.to_string(),
            country: entry.country.to_string(),
            region: entry.region.to_string(),
        })
    }
}

fn require_non_empty(key: &str, field: &'static str, value: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::EmptyField {
            key: key.to_string(),
            field,
        });
    }
    Ok(())
}
