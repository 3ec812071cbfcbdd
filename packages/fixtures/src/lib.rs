#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The vector map's demo dataset.
//!
//! Zones, hotspots, operational records and popular locations are authored
//! as TOML (see [`registry`]) and loaded once into a [`Fixtures`] value that
//! the rest of the workspace borrows from. Loading checks the one
//! cross-record invariant the data relies on: every hotspot's zone
//! reference names an existing zone.

pub mod registry;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vector_map_analytics_models::{
    CasesByPeriod, DailyOperations, FoggingInstance, ResourceAllocation, ZonePerformance,
};
use vector_map_zone_models::{Hotspot, LatLng, Zone, find_zone, hotspots_in_zone};

/// Errors that can occur while loading fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A TOML document failed to parse.
    #[error("Failed to parse {file}: {message}")]
    Parse {
        /// Fixture file name.
        file: &'static str,
        /// Parser message.
        message: String,
    },

    /// A hotspot references a zone that does not exist.
    #[error("Hotspot {hotspot_id} references unknown zone {zone_id}")]
    UnknownZone {
        /// Offending hotspot.
        hotspot_id: String,
        /// The dangling zone id.
        zone_id: String,
    },

    /// Two records of the same kind share an id.
    #[error("Duplicate {kind} id {id}")]
    DuplicateId {
        /// Record kind (`"zone"`, `"hotspot"`, `"fogging"`).
        kind: &'static str,
        /// The repeated id.
        id: String,
    },
}

/// A named place offered by the map center control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularLocation {
    /// Display name (also the lookup key).
    pub name: String,
    /// Coordinates to recenter on.
    pub center: LatLng,
}

/// The complete in-memory dataset.
#[derive(Debug, Clone)]
pub struct Fixtures {
    /// Zones, in display order.
    pub zones: Vec<Zone>,
    /// Hotspots, grouped by zone.
    pub hotspots: Vec<Hotspot>,
    /// Fogging operations, oldest first within each block.
    pub fogging: Vec<FoggingInstance>,
    /// Weekly case trend, oldest first.
    pub cases_trend: Vec<CasesByPeriod>,
    /// Per-zone performance rows.
    pub zone_performance: Vec<ZonePerformance>,
    /// Today's field operations.
    pub daily_operations: DailyOperations,
    /// Budget and equipment.
    pub resource_allocation: ResourceAllocation,
    /// Center control shortcuts.
    pub locations: Vec<PopularLocation>,
}

impl Fixtures {
    /// Parses and validates the embedded dataset.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if a document fails to parse or the records
    /// violate an invariant.
    pub fn load() -> Result<Self, FixtureError> {
        Self::from_toml(
            registry::ZONES_TOML,
            registry::HOTSPOTS_TOML,
            registry::OPERATIONS_TOML,
            registry::LOCATIONS_TOML,
        )
    }

    /// Returns the embedded dataset.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed or inconsistent. The
    /// documents are compiled in, so this is covered by the crate's tests.
    #[must_use]
    pub fn embedded() -> Self {
        Self::load().unwrap_or_else(|e| panic!("Embedded fixtures are invalid: {e}"))
    }

    /// Parses and validates a dataset from TOML documents.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if a document fails to parse or the records
    /// violate an invariant.
    pub fn from_toml(
        zones: &str,
        hotspots: &str,
        operations: &str,
        locations: &str,
    ) -> Result<Self, FixtureError> {
        let zones = registry::parse_zones(zones)?;
        let hotspots = registry::parse_hotspots(hotspots)?;
        let ops = registry::parse_operations(operations)?;
        let locations = registry::parse_locations(locations)?;

        let fixtures = Self {
            zones,
            hotspots,
            fogging: ops.fogging,
            cases_trend: ops.cases_trend,
            zone_performance: ops.zone_performance,
            daily_operations: ops.daily_operations,
            resource_allocation: ops.resource_allocation,
            locations,
        };
        fixtures.validate()?;

        log::debug!(
            "Loaded {} zones, {} hotspots, {} fogging operations",
            fixtures.zones.len(),
            fixtures.hotspots.len(),
            fixtures.fogging.len()
        );

        Ok(fixtures)
    }

    /// Checks id uniqueness and hotspot zone references.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), FixtureError> {
        ensure_unique("zone", self.zones.iter().map(|z| z.id.as_str()))?;
        ensure_unique("hotspot", self.hotspots.iter().map(|h| h.id.as_str()))?;
        ensure_unique("fogging", self.fogging.iter().map(|f| f.id.as_str()))?;

        for hotspot in &self.hotspots {
            if let Some(zone_id) = &hotspot.zone_id
                && self.zone(zone_id).is_none()
            {
                return Err(FixtureError::UnknownZone {
                    hotspot_id: hotspot.id.clone(),
                    zone_id: zone_id.clone(),
                });
            }
        }

        Ok(())
    }

    /// Returns the zone with the given id, if any.
    #[must_use]
    pub fn zone(&self, zone_id: &str) -> Option<&Zone> {
        find_zone(&self.zones, zone_id)
    }

    /// Returns the hotspots belonging to a zone. Empty for unknown ids.
    #[must_use]
    pub fn zone_hotspots(&self, zone_id: &str) -> Vec<&Hotspot> {
        hotspots_in_zone(&self.hotspots, zone_id)
    }

    /// Looks up a popular location by exact name.
    #[must_use]
    pub fn location(&self, name: &str) -> Option<&PopularLocation> {
        self.locations.iter().find(|l| l.name == name)
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), FixtureError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_ZONE: &str = r#"
[[zones]]
id = "zone-1"
name = "Shivajinagar"
riskLevel = "high"
coordinates = [[18.53, 73.84], [18.54, 73.86], [18.52, 73.85]]
metrics = { population = 100, recentCases = 5, trapCount = 2, temperature = 33, humidity = 78, caseTrend = "increasing" }
riskComponents = { breeding = 45, environmental = 35, transmission = 20 }
drivers = []

[zones.recommendation]
action = "Fog"
priority = "immediate"
details = "Now."
"#;

    fn hotspot_doc(zone_id: &str) -> String {
        format!(
            r#"
[[hotspots]]
id = "h-1"
name = "Pond"
center = [18.53, 73.85]
area = 20
riskLevel = "high"
cases = 4
lastUpdated = "1 day ago"
zoneId = "{zone_id}"
"#
        )
    }

    #[test]
    fn embedded_dataset_is_consistent() {
        let fixtures = Fixtures::load().unwrap();
        assert_eq!(fixtures.zones.len(), 9);
        assert_eq!(fixtures.hotspots.len(), 67);
        for hotspot in &fixtures.hotspots {
            let zone_id = hotspot.zone_id.as_deref().unwrap();
            assert!(fixtures.zone(zone_id).is_some(), "{} dangles", hotspot.id);
        }
    }

    #[test]
    fn shipped_zone_cases_sum() {
        let fixtures = Fixtures::embedded();
        let total: u32 = fixtures.zones.iter().map(|z| z.metrics.recent_cases).sum();
        assert_eq!(total, 428);
    }

    #[test]
    fn rejects_dangling_zone_reference() {
        let err = Fixtures::from_toml(
            ONE_ZONE,
            &hotspot_doc("zone-9"),
            registry::OPERATIONS_TOML,
            registry::LOCATIONS_TOML,
        )
        .unwrap_err();
        assert!(matches!(err, FixtureError::UnknownZone { ref zone_id, .. } if zone_id == "zone-9"));
    }

    #[test]
    fn rejects_duplicate_zone_ids() {
        let doubled = format!("{ONE_ZONE}\n{ONE_ZONE}");
        let err = Fixtures::from_toml(
            &doubled,
            &hotspot_doc("zone-1"),
            registry::OPERATIONS_TOML,
            registry::LOCATIONS_TOML,
        )
        .unwrap_err();
        assert!(matches!(err, FixtureError::DuplicateId { kind: "zone", .. }));
    }

    #[test]
    fn lookups_are_empty_for_unknown_ids() {
        let fixtures = Fixtures::embedded();
        assert!(fixtures.zone("zone-404").is_none());
        assert!(fixtures.zone_hotspots("zone-404").is_empty());
        assert_eq!(fixtures.zone_hotspots("pond-area").len(), 9);
        assert!(fixtures.location("Nowhere").is_none());
    }

    #[test]
    fn location_lookup_by_name() {
        let fixtures = Fixtures::embedded();
        let pond = fixtures.location("Lotus pond - MMCOE").unwrap();
        assert_eq!(pond.center, LatLng::new(18.491_292, 73.800_823));
    }
}
