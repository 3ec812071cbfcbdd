#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Zone, hotspot and risk classification types.
//!
//! This crate defines the records the whole vector map is built from: named
//! polygonal zones carrying aggregate risk metrics, and point-like breeding
//! sites (hotspots) that optionally belong to a zone. Records are immutable
//! once loaded and live for the lifetime of the process.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Risk classification attached to zones and hotspots independently.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    /// Routine monitoring is sufficient.
    Low,
    /// Preventive measures should be scheduled.
    Medium,
    /// Immediate intervention is warranted.
    High,
}

impl RiskLevel {
    /// Returns all variants, highest risk first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::High, Self::Medium, Self::Low]
    }

    /// Upper-case badge text (e.g. `"HIGH"`).
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// Direction of the recent case count for a zone.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CaseTrend {
    /// Cases are rising.
    Increasing,
    /// Cases are flat.
    Stable,
    /// Cases are falling.
    Decreasing,
}

/// How strongly a risk driver contributes to a zone's classification.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DriverImpact {
    /// Minor contribution.
    Low,
    /// Moderate contribution.
    Medium,
    /// Major contribution.
    High,
}

/// Whether a driver is a structural property of the zone or a passing
/// condition.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DriverKind {
    /// Infrastructure, land use, population and the like.
    Static,
    /// Weather, recent rainfall, seasonal accumulation.
    Transient,
}

/// Urgency of a zone's recommended action.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
    /// Act within 24 hours.
    Immediate,
    /// Plan into the next operations cycle.
    Scheduled,
    /// Keep watching, no action needed.
    Monitor,
}

/// A WGS84 coordinate pair.
///
/// Serialized as a `[lat, lng]` array, which is how fixtures author
/// polygons and hotspot centers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    /// Creates a coordinate from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns the `GeoJSON` position order (`[lng, lat]`).
    #[must_use]
    pub const fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(value: LatLng) -> Self {
        [value.lat, value.lng]
    }
}

/// Aggregate metrics for a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneMetrics {
    /// Resident population.
    pub population: u32,
    /// Cases reported in the recent window.
    pub recent_cases: u32,
    /// Mosquito traps deployed.
    pub trap_count: u32,
    /// Ambient temperature in °C.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Direction of the case count.
    pub case_trend: CaseTrend,
}

/// Percentage contributions to a zone's risk. Not required to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskComponents {
    /// Breeding-site pressure.
    pub breeding: u8,
    /// Environmental suitability.
    pub environmental: u8,
    /// Human transmission pressure.
    pub transmission: u8,
}

/// One factor behind a zone's risk classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskDriver {
    /// Human-readable description.
    pub factor: String,
    /// Contribution strength.
    pub impact: DriverImpact,
    /// Static or transient.
    #[serde(rename = "type")]
    pub kind: DriverKind,
    /// Recency label such as "2 days ago".
    pub last_updated: String,
}

/// Recommended operational response for a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Short action headline.
    pub action: String,
    /// Urgency.
    pub priority: Priority,
    /// Free-text operational details.
    pub details: String,
}

/// A named polygonal administrative area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Unique zone identifier (e.g. `"zone-1"`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Overall risk classification.
    pub risk_level: RiskLevel,
    /// Boundary ring, in drawing order. Not explicitly closed.
    pub coordinates: Vec<LatLng>,
    /// Aggregate metrics.
    pub metrics: ZoneMetrics,
    /// Risk breakdown percentages.
    pub risk_components: RiskComponents,
    /// Ordered risk drivers, most relevant first.
    pub drivers: Vec<RiskDriver>,
    /// Recommended response.
    pub recommendation: Recommendation,
}

impl Zone {
    /// Returns the center of the boundary's bounding box.
    ///
    /// This is where the zone's name label is anchored on the map. Returns
    /// `None` for an empty boundary.
    #[must_use]
    pub fn label_anchor(&self) -> Option<LatLng> {
        let first = self.coordinates.first()?;
        let (mut south, mut west, mut north, mut east) = (first.lat, first.lng, first.lat, first.lng);
        for point in &self.coordinates[1..] {
            south = south.min(point.lat);
            north = north.max(point.lat);
            west = west.min(point.lng);
            east = east.max(point.lng);
        }
        Some(LatLng::new(f64::midpoint(south, north), f64::midpoint(west, east)))
    }
}

/// A point-like candidate breeding site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    /// Unique hotspot identifier (e.g. `"shiv-1"`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Point location.
    pub center: LatLng,
    /// Footprint in m².
    pub area: f64,
    /// Risk classification of the site itself.
    pub risk_level: RiskLevel,
    /// Cases attributed to the site.
    pub cases: u32,
    /// Recency label such as "1 day ago".
    pub last_updated: String,
    /// Owning zone, referenced weakly by id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
}

impl Hotspot {
    /// Returns `true` if this hotspot belongs to the zone with the given id.
    #[must_use]
    pub fn belongs_to(&self, zone_id: &str) -> bool {
        self.zone_id.as_deref() == Some(zone_id)
    }
}

/// Returns the zone with the given id, if any.
#[must_use]
pub fn find_zone<'a>(zones: &'a [Zone], zone_id: &str) -> Option<&'a Zone> {
    zones.iter().find(|zone| zone.id == zone_id)
}

/// Returns the hotspots owned by the given zone, in fixture order.
///
/// An unknown zone id yields an empty list.
#[must_use]
pub fn hotspots_in_zone<'a>(hotspots: &'a [Hotspot], zone_id: &str) -> Vec<&'a Hotspot> {
    hotspots.iter().filter(|h| h.belongs_to(zone_id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotspot(id: &str, zone_id: Option<&str>) -> Hotspot {
        Hotspot {
            id: id.to_string(),
            name: id.to_string(),
            center: LatLng::new(18.5, 73.8),
            area: 20.0,
            risk_level: RiskLevel::High,
            cases: 3,
            last_updated: "1 day ago".to_string(),
            zone_id: zone_id.map(str::to_string),
        }
    }

    #[test]
    fn risk_level_parses_lowercase() {
        assert_eq!("high".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert_eq!(RiskLevel::Medium.to_string(), "medium");
        assert!("HIGHEST".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn lat_lng_serializes_as_pair() {
        let point = LatLng::new(18.491_292, 73.800_823);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, "[18.491292,73.800823]");
        let back: LatLng = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
        assert_eq!(point.to_lng_lat(), [73.800_823, 18.491_292]);
    }

    #[test]
    fn driver_kind_uses_type_key() {
        let driver: RiskDriver = serde_json::from_str(
            r#"{"factor":"Pond","impact":"high","type":"static","lastUpdated":"1 day ago"}"#,
        )
        .unwrap();
        assert_eq!(driver.kind, DriverKind::Static);
        assert_eq!(driver.impact, DriverImpact::High);
    }

    #[test]
    fn hotspots_filtered_by_zone() {
        let hotspots = vec![
            hotspot("a", Some("zone-1")),
            hotspot("b", Some("zone-2")),
            hotspot("c", None),
            hotspot("d", Some("zone-1")),
        ];
        let ids: Vec<&str> = hotspots_in_zone(&hotspots, "zone-1")
            .iter()
            .map(|h| h.id.as_str())
            .collect();
        assert_eq!(ids, ["a", "d"]);
        assert!(hotspots_in_zone(&hotspots, "nowhere").is_empty());
    }

    #[test]
    fn label_anchor_is_bbox_center() {
        let zone = Zone {
            id: "z".to_string(),
            name: "Z".to_string(),
            risk_level: RiskLevel::Low,
            coordinates: vec![
                LatLng::new(18.0, 73.0),
                LatLng::new(18.2, 73.4),
                LatLng::new(18.1, 73.1),
            ],
            metrics: ZoneMetrics {
                population: 1,
                recent_cases: 0,
                trap_count: 0,
                temperature: 25.0,
                humidity: 50.0,
                case_trend: CaseTrend::Stable,
            },
            risk_components: RiskComponents {
                breeding: 10,
                environmental: 10,
                transmission: 10,
            },
            drivers: Vec::new(),
            recommendation: Recommendation {
                action: "Watch".to_string(),
                priority: Priority::Monitor,
                details: String::new(),
            },
        };
        let anchor = zone.label_anchor().unwrap();
        assert!((anchor.lat - 18.1).abs() < 1e-9);
        assert!((anchor.lng - 73.2).abs() < 1e-9);
    }
}
