//! Fixture registry: the demo dataset as TOML baked into the binary.
//!
//! Each `.toml` file in `packages/fixtures/data/` is embedded at compile
//! time via [`include_str!`] and parsed once at startup. Editing the demo
//! dataset means editing those files; there is no runtime load step.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use vector_map_analytics_models::{
    CasesByPeriod, DailyOperations, FoggingInstance, ResourceAllocation, ZonePerformance,
};
use vector_map_zone_models::{Hotspot, Zone};

use crate::{FixtureError, PopularLocation};

/// TOML documents embedded at compile time.
pub const ZONES_TOML: &str = include_str!("../data/zones.toml");
/// Hotspot records, grouped by zone.
pub const HOTSPOTS_TOML: &str = include_str!("../data/hotspots.toml");
/// Fogging, case trend, zone performance and resource records.
pub const OPERATIONS_TOML: &str = include_str!("../data/operations.toml");
/// Named places for the map center control.
pub const LOCATIONS_TOML: &str = include_str!("../data/locations.toml");

#[derive(Debug, Deserialize)]
struct ZonesFile {
    zones: Vec<Zone>,
}

#[derive(Debug, Deserialize)]
struct HotspotsFile {
    hotspots: Vec<Hotspot>,
}

/// Contents of `operations.toml`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationsFile {
    /// Fogging operations over the reporting window.
    pub fogging: Vec<FoggingInstance>,
    /// Weekly case trend, oldest first.
    pub cases_trend: Vec<CasesByPeriod>,
    /// Per-zone performance rows.
    pub zone_performance: Vec<ZonePerformance>,
    /// Today's field operations.
    pub daily_operations: DailyOperations,
    /// Budget and equipment.
    pub resource_allocation: ResourceAllocation,
}

#[derive(Debug, Deserialize)]
struct LocationsFile {
    locations: Vec<PopularLocation>,
}

fn parse<T: DeserializeOwned>(file: &'static str, toml_str: &str) -> Result<T, FixtureError> {
    toml::de::from_str(toml_str).map_err(|e| FixtureError::Parse {
        file,
        message: e.to_string(),
    })
}

/// Parses a zones document.
///
/// # Errors
///
/// Returns [`FixtureError::Parse`] if the document is malformed.
pub fn parse_zones(toml_str: &str) -> Result<Vec<Zone>, FixtureError> {
    parse::<ZonesFile>("zones.toml", toml_str).map(|f| f.zones)
}

/// Parses a hotspots document.
///
/// # Errors
///
/// Returns [`FixtureError::Parse`] if the document is malformed.
pub fn parse_hotspots(toml_str: &str) -> Result<Vec<Hotspot>, FixtureError> {
    parse::<HotspotsFile>("hotspots.toml", toml_str).map(|f| f.hotspots)
}

/// Parses an operations document.
///
/// # Errors
///
/// Returns [`FixtureError::Parse`] if the document is malformed.
pub fn parse_operations(toml_str: &str) -> Result<OperationsFile, FixtureError> {
    parse("operations.toml", toml_str)
}

/// Parses a locations document.
///
/// # Errors
///
/// Returns [`FixtureError::Parse`] if the document is malformed.
pub fn parse_locations(toml_str: &str) -> Result<Vec<PopularLocation>, FixtureError> {
    parse::<LocationsFile>("locations.toml", toml_str).map(|f| f.locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_documents_parse() {
        assert_eq!(parse_zones(ZONES_TOML).unwrap().len(), 9);
        assert_eq!(parse_hotspots(HOTSPOTS_TOML).unwrap().len(), 67);
        assert_eq!(parse_locations(LOCATIONS_TOML).unwrap().len(), 20);

        let ops = parse_operations(OPERATIONS_TOML).unwrap();
        assert_eq!(ops.fogging.len(), 27);
        assert_eq!(ops.cases_trend.len(), 11);
        assert_eq!(ops.zone_performance.len(), 9);
        assert_eq!(ops.resource_allocation.total_budget, 5_000_000);
    }

    #[test]
    fn malformed_document_names_file() {
        let err = parse_zones("[[zones]]\nid = 3").unwrap_err();
        assert!(err.to_string().contains("zones.toml"), "{err}");
    }
}
