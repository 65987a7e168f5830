//! Spot and region lookup.

use std::collections::HashMap;

use super::error::{CatalogError, NotFound};
use super::region::{Region, Spot};
use super::table::{REGIONS, RegionEntry, SPOTS, SpotEntry};

/// Read-only spot/region lookup, built once at startup.
///
/// Every spot in a built catalog resolves to exactly one region.
#[derive(Debug, Clone)]
pub struct Catalog {
    regions: HashMap<String, Region>,
    spots: HashMap<String, Spot>,
}

impl Catalog {
    /// Build the catalog from the built-in tables.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_entries(REGIONS, SPOTS)
    }

    /// Build a catalog from raw entries, rejecting any malformed row.
    pub fn from_entries(
        regions: &[RegionEntry],
        spots: &[SpotEntry],
    ) -> Result<Self, CatalogError> {
        let mut region_map = HashMap::with_capacity(regions.len());
        for entry in regions {
            let region = Region::from_entry(entry)?;
            if region_map.contains_key(&region.key) {
                return Err(CatalogError::DuplicateKey {
                    kind: "region",
                    key: region.key,
                });
            }
            region_map.insert(region.key.clone(), region);
        }

        let mut spot_map = HashMap::with_capacity(spots.len());
        for entry in spots {
            let spot = Spot::from_entry(entry)?;
            if !region_map.contains_key(&spot.region) {
                return Err(CatalogError::DanglingRegion {
                    spot: spot.key,
                    region: spot.region,
                });
            }
            if spot_map.contains_key(&spot.key) {
                return Err(CatalogError::DuplicateKey {
                    kind: "spot",
                    key: spot.key,
                });
            }
            spot_map.insert(spot.key.clone(), spot);
        }

        Ok(Self {
            regions: region_map,
            spots: spot_map,
        })
    }

    /// Look up a region by key.
    pub fn lookup_region(&self, key: &str) -> Result<&Region, NotFound> {
        self.regions
            .get(key)
            .ok_or_else(|| NotFound::Region(key.to_string()))
    }

    /// Look up a spot by key.
    pub fn lookup_spot(&self, key: &str) -> Result<&Spot, NotFound> {
        self.spots
            .get(key)
            .ok_or_else(|| NotFound::Spot(key.to_string()))
    }

    /// Look up a spot together with its owning region.
    pub fn region_for_spot(&self, key: &str) -> Result<(&Spot, &Region), NotFound> {
        let spot = self.lookup_spot(key)?;
        let region = self.lookup_region(&spot.region)?;
        Ok((spot, region))
    }

    /// All spot keys, sorted.
    pub fn spot_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.spots.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// All region keys, sorted.
    pub fn region_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.regions.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_builds() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.region_keys().len(), REGIONS.len());
        assert_eq!(
            catalog.spot_keys(),
            vec!["bowls", "haleiwa", "laniakea", "pipeline"]
        );
    }

    #[test]
    fn every_spot_resolves_to_a_region() {
        let catalog = Catalog::builtin().unwrap();
        for key in catalog.spot_keys() {
            let (spot, region) = catalog.region_for_spot(key).unwrap();
            assert_eq!(spot.region, region.key);
            assert!(!region.timezone.name().is_empty());
        }
    }

    #[test]
    fn pipeline_is_on_the_north_shore() {
        let catalog = Catalog::builtin().unwrap();
        let (spot, region) = catalog.region_for_spot("pipeline").unwrap();
        assert_eq!(spot.name, "Pipeline");
        assert_eq!(spot.spot_id.as_str(), "5842041f4e65fad6a7708890");
        assert_eq!(region.full_name, "North Shore Oahu");
        assert_eq!(region.region_id.as_str(), "58581a836630e24c44878fcb");
    }

    #[test]
    fn unknown_keys_are_not_found() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.lookup_spot("mavericks"),
            Err(NotFound::Spot("mavericks".into()))
        );
        assert_eq!(
            catalog.lookup_region("bali"),
            Err(NotFound::Region("bali".into()))
        );
        assert!(catalog.region_for_spot("").is_err());
    }

    #[test]
    fn reject_dangling_region() {
        let spots = [SpotEntry {
            key: "pipeline",
            spot_id: "5842041f4e65fad6a7708890",
            name: "Pipeline",
            country: "US",
            region: "nowhere",
        }];
        let err = Catalog::from_entries(REGIONS, &spots).unwrap_err();
        assert!(matches!(err, CatalogError::DanglingRegion { .. }));
    }

    #[test]
    fn reject_duplicate_region() {
        let regions = [REGIONS[0], REGIONS[0]];
        let err = Catalog::from_entries(&regions, &[]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateKey {
                kind: "region",
                key: "oahu_north_shore".into(),
            }
        );
    }

    #[test]
    fn reject_duplicate_spot() {
        let spots = [SPOTS[0], SPOTS[0]];
        let err = Catalog::from_entries(REGIONS, &spots).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateKey { kind: "spot", .. }));
    }
}
