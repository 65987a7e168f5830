//! Built-in spot and region entries.
//!
//! Raw, unvalidated rows. `Catalog::builtin` checks every row when the
//! catalog is built.

/// One row of the region table.
#[derive(Debug, Clone, Copy)]
pub struct RegionEntry {
    pub key: &'static str,
    pub region_id: &'static str,
    pub full_name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: &'static str,
    pub buoy_id: Option<&'static str>,
}

/// One row of the spot table.
#[derive(Debug, Clone, Copy)]
pub struct SpotEntry {
    pub key: &'static str,
    pub spot_id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub region: &'static str,
}

pub const REGIONS: &[RegionEntry] = &[
    RegionEntry {
        key: "oahu_north_shore",
        region_id: "58581a836630e24c44878fcb",
        full_name: "North Shore Oahu",
        latitude: 21.604,
        longitude: -158.109,
        timezone: "HST",
        buoy_id: Some("44448078-cecd-11eb-94ae-024238d3b313"),
    },
    RegionEntry {
        key: "oahu_south_shore",
        region_id: "58581a836630e24c44878fcd",
        full_name: "South Shore Oahu",
        latitude: 21.274,
        longitude: -157.846,
        timezone: "HST",
        buoy_id: None,
    },
    RegionEntry {
        key: "san_francisco",
        region_id: "58581a836630e24c44879010",
        full_name: "San Francisco",
        latitude: 37.754,
        longitude: -122.511,
        timezone: "America/Los_Angeles",
        buoy_id: None,
    },
    RegionEntry {
        key: "costa_rica_north",
        region_id: "58581a836630e24c4487901e",
        full_name: "North Costa Rica",
        latitude: 10.281,
        longitude: -85.862,
        timezone: "America/Costa_Rica",
        buoy_id: None,
    },
    RegionEntry {
        key: "costa_rica_central",
        region_id: "58581a836630e24c44878fea",
        full_name: "Central Costa Rica",
        latitude: 9.616,
        longitude: -84.629,
        timezone: "America/Costa_Rica",
        buoy_id: None,
    },
    RegionEntry {
        key: "costa_rica_south",
        region_id: "58581a836630e24c4487904a",
        full_name: "South Costa Rica",
        latitude: 8.738,
        longitude: -83.611,
        timezone: "America/Costa_Rica",
        buoy_id: None,
    },
    RegionEntry {
        key: "costa_rica_caribbean",
        region_id: "58581a836630e24c4487901f",
        full_name: "Caribbean Costa Rica",
        latitude: 9.658,
        longitude: -82.755,
        timezone: "America/Costa_Rica",
        buoy_id: None,
    },
    RegionEntry {
        key: "fiji_south",
        region_id: "58581a836630e24c44878ffa",
        full_name: "South Fiji",
        latitude: -17.856,
        longitude: 177.196,
        timezone: "Pacific/Fiji",
        buoy_id: None,
    },
];

pub const SPOTS: &[SpotEntry] = &[
    SpotEntry {
        key: "pipeline",
        spot_id: "5842041f4e65fad6a7708890",
        name: "Pipeline",
        country: "US",
        region: "oahu_north_shore",
    },
    SpotEntry {
        key: "laniakea",
        spot_id: "5842041f4e65fad6a7708898",
        name: "Laniakea",
        country: "US",
        region: "oahu_north_shore",
    },
    SpotEntry {
        key: "haleiwa",
        spot_id: "5842041f4e65fad6a7708df5",
        name: "Haleiwa",
        country: "US",
        region: "oahu_north_shore",
    },
    SpotEntry {
        key: "bowls",
        spot_id: "5842041f4e65fad6a7708b42",
        name: "Ala Moana Bowls",
        country: "US",
        region: "oahu_south_shore",
    },
];
