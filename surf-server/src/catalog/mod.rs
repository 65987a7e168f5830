//! Spot and region catalog.
//!
//! Static mapping from human-readable spot and region keys to the
//! identifiers the surf data provider expects. Built once at startup
//! from the tables in `table`, and read-only afterwards.
//!
//! Spots refer to their region by key; resolving a spot's region always
//! goes through the catalog.

mod error;
mod id;
mod lookup;
mod region;
mod table;

pub use error::{CatalogError, NotFound};
pub use id::{InvalidProviderId, ProviderId};
pub use lookup::Catalog;
pub use region::{Region, Spot};
pub use table::{REGIONS, RegionEntry, SPOTS, SpotEntry};
