//! The zone detail panel.

use chrono::{DateTime, Utc};
use serde::Serialize;
use vector_map_analytics::hotspot_summary;
use vector_map_analytics_models::{ChartSlice, HotspotSummary, Percentage};
use vector_map_fixtures::Fixtures;
use vector_map_zone_models::{
    Recommendation, RiskComponents, RiskDriver, RiskLevel, Zone, ZoneMetrics,
};

use crate::timestamp::format_detail_timestamp;

/// Everything shown for a selected zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDetail {
    /// Zone id.
    pub zone_id: String,
    /// Zone name.
    pub name: String,
    /// Risk classification.
    pub risk_level: RiskLevel,
    /// Badge text, e.g. `"HIGH RISK"`.
    pub badge: String,
    /// Why the zone has its risk level.
    pub explanation: &'static str,
    /// Key risk drivers.
    pub drivers: Vec<RiskDriver>,
    /// Contextual metrics.
    pub metrics: ZoneMetrics,
    /// Risk component pie.
    pub risk_breakdown: Vec<ChartSlice>,
    /// Hotspots in the zone.
    pub hotspots: HotspotSummary,
    /// Recommended action.
    pub recommendation: Recommendation,
    /// When the panel was rendered.
    pub last_updated: String,
}

/// Explanation text per risk level.
#[must_use]
pub const fn risk_explanation(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => {
            "This area shows elevated risk due to multiple converging factors. Immediate attention is warranted to prevent outbreak escalation."
        }
        RiskLevel::Medium => {
            "This area has moderate risk factors that require monitoring. Preventive measures should be scheduled."
        }
        RiskLevel::Low => {
            "This area currently shows low risk indicators. Continue routine surveillance to maintain status."
        }
    }
}

/// Breeding, environmental and transmission slices.
#[must_use]
pub fn risk_breakdown(components: &RiskComponents) -> Vec<ChartSlice> {
    let parts = [
        ("Breeding", components.breeding, "#ef4444"),
        ("Environmental", components.environmental, "#f59e0b"),
        ("Transmission", components.transmission, "#3b82f6"),
    ];
    let total: f64 = parts.iter().map(|(_, v, _)| f64::from(*v)).sum();

    parts
        .into_iter()
        .map(|(name, value, color)| ChartSlice {
            name: name.to_string(),
            value: f64::from(value),
            share: Percentage::of(f64::from(value), total),
            color: color.to_string(),
        })
        .collect()
}

/// Builds the detail panel for a zone.
#[must_use]
pub fn build_detail(fixtures: &Fixtures, zone: &Zone, now: DateTime<Utc>) -> ZoneDetail {
    let hotspots = fixtures.zone_hotspots(&zone.id);

    ZoneDetail {
        zone_id: zone.id.clone(),
        name: zone.name.clone(),
        risk_level: zone.risk_level,
        badge: format!("{} RISK", zone.risk_level.badge()),
        explanation: risk_explanation(zone.risk_level),
        drivers: zone.drivers.clone(),
        metrics: zone.metrics.clone(),
        risk_breakdown: risk_breakdown(&zone.risk_components),
        hotspots: hotspot_summary(&hotspots),
        recommendation: zone.recommendation.clone(),
        last_updated: format_detail_timestamp(now),
    }
}

/// Detail panel for the selected zone id.
///
/// No selection, or an id with no matching zone, yields no panel.
#[must_use]
pub fn zone_detail(
    fixtures: &Fixtures,
    selected: Option<&str>,
    now: DateTime<Utc>,
) -> Option<ZoneDetail> {
    let zone = fixtures.zone(selected?)?;
    Some(build_detail(fixtures, zone, now))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_or_missing_selection_has_no_panel() {
        let fixtures = Fixtures::embedded();
        assert!(zone_detail(&fixtures, None, Utc::now()).is_none());
        assert!(zone_detail(&fixtures, Some("zone-404"), Utc::now()).is_none());
    }

    #[test]
    fn panel_for_known_zone() {
        let fixtures = Fixtures::embedded();
        let zone = &fixtures.zones[0];
        let detail = zone_detail(&fixtures, Some(&zone.id), Utc::now()).unwrap();

        assert_eq!(detail.name, zone.name);
        assert_eq!(detail.badge, format!("{} RISK", zone.risk_level.badge()));
        assert_eq!(detail.explanation, risk_explanation(zone.risk_level));
        assert_eq!(
            detail.hotspots.total as usize,
            fixtures.zone_hotspots(&zone.id).len()
        );
    }

    #[test]
    fn breakdown_shares() {
        let slices = risk_breakdown(&RiskComponents {
            breeding: 45,
            environmental: 35,
            transmission: 20,
        });
        let names: Vec<_> = slices.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Breeding", "Environmental", "Transmission"]);
        assert_eq!(slices[0].share.format(0), "45%");
        assert_eq!(slices[2].color, "#3b82f6");

        let empty = risk_breakdown(&RiskComponents {
            breeding: 0,
            environmental: 0,
            transmission: 0,
        });
        assert!(empty.iter().all(|s| s.share == Percentage::Unavailable));
    }
}
