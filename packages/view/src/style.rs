//! Styling rules for zones, hotspots and grid cells.

use serde::Serialize;
use vector_map_zone_models::{Hotspot, RiskLevel, Zone};

use crate::layers::{LayerKind, ZoneView, layer_kind};

/// Red used for bad zone metrics.
pub const RED: &str = "#ef4444";
/// Amber used for middling zone metrics.
pub const AMBER: &str = "#f59e0b";
/// Green used for good zone metrics.
pub const GREEN: &str = "#22c55e";

/// Outline weight of a selected zone.
pub const SELECTED_WEIGHT: f64 = 5.0;
/// Outline weight of an unselected zone.
pub const DEFAULT_WEIGHT: f64 = 3.0;
/// Outline weight of an unselected zone under the pointer.
pub const HOVER_WEIGHT: f64 = 4.0;

/// Zone outline color for the given rule.
#[must_use]
pub const fn zone_color(zone: &Zone, rule: ZoneView) -> &'static str {
    let m = &zone.metrics;
    match rule {
        ZoneView::Risk => match zone.risk_level {
            RiskLevel::High => RED,
            RiskLevel::Medium => AMBER,
            RiskLevel::Low => GREEN,
        },
        ZoneView::Temperature => {
            if m.temperature > 32.0 {
                RED
            } else if m.temperature > 28.0 {
                AMBER
            } else {
                GREEN
            }
        }
        ZoneView::Population => threshold_above(m.population, 50_000, 25_000),
        ZoneView::Cases => threshold_above(m.recent_cases, 50, 20),
        ZoneView::Traps => {
            if m.trap_count < 3 {
                RED
            } else if m.trap_count < 6 {
                AMBER
            } else {
                GREEN
            }
        }
    }
}

const fn threshold_above(value: u32, red: u32, amber: u32) -> &'static str {
    if value > red {
        RED
    } else if value > amber {
        AMBER
    } else {
        GREEN
    }
}

/// Picks the rule zones are colored by.
///
/// Any active grid layer forces risk coloring. Otherwise the first active
/// zone-view layer in activation order wins, falling back to risk.
#[must_use]
pub fn zone_rule<S: AsRef<str>>(active_layers: &[S]) -> ZoneView {
    let kinds: Vec<LayerKind> = active_layers
        .iter()
        .filter_map(|id| layer_kind(id.as_ref()))
        .collect();

    if kinds.iter().any(|k| matches!(k, LayerKind::Grid(_))) {
        return ZoneView::Risk;
    }

    kinds
        .into_iter()
        .find_map(|k| match k {
            LayerKind::Zone(view) => Some(view),
            LayerKind::Grid(_) => None,
        })
        .unwrap_or(ZoneView::Risk)
}

/// Path style for a zone outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStyle {
    /// Stroke and fill color.
    pub color: &'static str,
    /// Always 0; zones are drawn as outlines.
    pub fill_opacity: f64,
    /// Stroke weight.
    pub weight: f64,
    /// Stroke weight while hovered.
    pub hover_weight: f64,
    /// Stroke opacity.
    pub opacity: f64,
}

/// Outline style for a zone under a rule.
#[must_use]
pub const fn zone_style(zone: &Zone, rule: ZoneView, selected: bool) -> ZoneStyle {
    let weight = if selected {
        SELECTED_WEIGHT
    } else {
        DEFAULT_WEIGHT
    };
    ZoneStyle {
        color: zone_color(zone, rule),
        fill_opacity: 0.0,
        weight,
        hover_weight: if selected { SELECTED_WEIGHT } else { HOVER_WEIGHT },
        opacity: 1.0,
    }
}

/// Circle style for a hotspot marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotStyle {
    /// Stroke and fill color.
    pub color: &'static str,
    /// Fill opacity.
    pub fill_opacity: f64,
    /// Stroke weight.
    pub weight: f64,
    /// Radius in meters of a circle with the hotspot's area.
    pub radius_meters: f64,
}

/// Hotspot marker color by risk.
#[must_use]
pub const fn hotspot_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "#dc2626",
        RiskLevel::Medium => "#ea580c",
        RiskLevel::Low => "#16a34a",
    }
}

/// Marker style for a hotspot.
#[must_use]
pub fn hotspot_style(hotspot: &Hotspot) -> HotspotStyle {
    HotspotStyle {
        color: hotspot_color(hotspot.risk_level),
        fill_opacity: 0.6,
        weight: 2.0,
        radius_meters: (hotspot.area / std::f64::consts::PI).sqrt(),
    }
}

/// Area at and above which a hotspot gets a text label.
pub const LABEL_MIN_AREA: f64 = 100.0;

/// `"{area}m² - {cases} cases"` for hotspots of at least
/// [`LABEL_MIN_AREA`].
#[must_use]
pub fn hotspot_label(hotspot: &Hotspot) -> Option<String> {
    (hotspot.area >= LABEL_MIN_AREA)
        .then(|| format!("{}m² - {} cases", hotspot.area, hotspot.cases))
}

/// Popup lines: area, cases, risk and recency.
#[must_use]
pub fn hotspot_popup(hotspot: &Hotspot) -> Vec<String> {
    vec![
        format!("Area: {} m²", hotspot.area),
        format!("Cases: {}", hotspot.cases),
        format!("Risk: {}", hotspot.risk_level.badge()),
        format!("Updated: {}", hotspot.last_updated),
    ]
}

/// Rectangle style for grid cells. The fill comes from the layer's color
/// scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellStyle {
    /// Fill opacity.
    pub fill_opacity: f64,
    /// Stroke color.
    pub color: &'static str,
    /// Stroke weight.
    pub weight: f64,
    /// Stroke opacity.
    pub opacity: f64,
}

/// Style shared by every grid cell.
pub const CELL_STYLE: CellStyle = CellStyle {
    fill_opacity: 0.25,
    color: "#ffffff",
    weight: 0.5,
    opacity: 0.15,
};

#[cfg(test)]
mod tests {
    use vector_map_fixtures::Fixtures;

    use super::*;

    fn zone_with(temperature: f64, population: u32, cases: u32, traps: u32) -> Zone {
        let mut zone = Fixtures::embedded().zones.remove(0);
        zone.metrics.temperature = temperature;
        zone.metrics.population = population;
        zone.metrics.recent_cases = cases;
        zone.metrics.trap_count = traps;
        zone
    }

    #[test]
    fn metric_thresholds_are_strict() {
        let hot = zone_with(32.5, 50_001, 51, 2);
        assert_eq!(zone_color(&hot, ZoneView::Temperature), RED);
        assert_eq!(zone_color(&hot, ZoneView::Population), RED);
        assert_eq!(zone_color(&hot, ZoneView::Cases), RED);
        assert_eq!(zone_color(&hot, ZoneView::Traps), RED);

        let edge = zone_with(32.0, 50_000, 50, 3);
        assert_eq!(zone_color(&edge, ZoneView::Temperature), AMBER);
        assert_eq!(zone_color(&edge, ZoneView::Population), AMBER);
        assert_eq!(zone_color(&edge, ZoneView::Cases), AMBER);
        assert_eq!(zone_color(&edge, ZoneView::Traps), AMBER);

        let calm = zone_with(28.0, 25_000, 20, 6);
        assert_eq!(zone_color(&calm, ZoneView::Temperature), GREEN);
        assert_eq!(zone_color(&calm, ZoneView::Population), GREEN);
        assert_eq!(zone_color(&calm, ZoneView::Cases), GREEN);
        assert_eq!(zone_color(&calm, ZoneView::Traps), GREEN);
    }

    #[test]
    fn risk_colors() {
        let mut zone = zone_with(30.0, 1, 1, 1);
        zone.risk_level = RiskLevel::Medium;
        assert_eq!(zone_color(&zone, ZoneView::Risk), AMBER);
        assert_eq!(zone_color(&zone, zone_rule(&["cases", "water-index"])), AMBER);
        assert_eq!(zone_color(&zone, zone_rule(&["nope"])), AMBER);
    }

    #[test]
    fn rule_selection() {
        assert_eq!(zone_rule::<&str>(&[]), ZoneView::Risk);
        assert_eq!(zone_rule(&["bogus"]), ZoneView::Risk);
        assert_eq!(zone_rule(&["cases", "traps"]), ZoneView::Cases);
        assert_eq!(zone_rule(&["traps", "risk"]), ZoneView::Traps);
        assert_eq!(zone_rule(&["cases", "water-index"]), ZoneView::Risk);
    }

    #[test]
    fn selected_zone_is_thicker() {
        let zone = zone_with(30.0, 1, 1, 1);
        let selected = zone_style(&zone, ZoneView::Risk, true);
        let normal = zone_style(&zone, ZoneView::Risk, false);
        assert!((selected.weight - 5.0).abs() < f64::EPSILON);
        assert!((normal.weight - 3.0).abs() < f64::EPSILON);
        assert!((normal.hover_weight - 4.0).abs() < f64::EPSILON);
        assert!(normal.fill_opacity.abs() < f64::EPSILON);
    }

    #[test]
    fn hotspot_marker() {
        let fixtures = Fixtures::embedded();
        let mut hotspot = fixtures.hotspots[0].clone();
        hotspot.area = 100.0 * std::f64::consts::PI;
        hotspot.cases = 4;
        hotspot.risk_level = RiskLevel::Low;

        let style = hotspot_style(&hotspot);
        assert!((style.radius_meters - 10.0).abs() < 1e-9);
        assert_eq!(style.color, "#16a34a");
        assert!(hotspot_label(&hotspot).unwrap().ends_with("m² - 4 cases"));
        assert!(hotspot_popup(&hotspot).contains(&"Risk: LOW".to_string()));

        hotspot.area = 99.0;
        assert!(hotspot_label(&hotspot).is_none());
        hotspot.area = 100.0;
        assert_eq!(hotspot_label(&hotspot).unwrap(), "100m² - 4 cases");
    }
}
