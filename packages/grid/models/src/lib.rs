#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Grid cell, grid layer and color scale types.
//!
//! A grid layer is a heatmap-style overlay for one environmental or risk
//! factor: a flat list of small rectangles around each hotspot, each holding
//! a normalized value in `[0, 1]` that a [`ColorScale`] buckets into a fill
//! color.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use vector_map_zone_models::LatLng;

/// Four-bucket palette mapping a normalized value to a fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorScale {
    /// Green through amber to red.
    Heat,
    /// Pale to deep blue.
    Water,
    /// Pale to dark green.
    Vegetation,
    /// Cream through orange to red.
    Temperature,
}

impl ColorScale {
    /// Colors for the `> 0.75`, `> 0.5`, `> 0.25` and remaining buckets.
    #[must_use]
    pub const fn palette(self) -> [&'static str; 4] {
        match self {
            Self::Heat => ["#dc2626", "#f59e0b", "#fbbf24", "#22c55e"],
            Self::Water => ["#1e40af", "#3b82f6", "#60a5fa", "#dbeafe"],
            Self::Vegetation => ["#15803d", "#22c55e", "#86efac", "#dcfce7"],
            Self::Temperature => ["#dc2626", "#f97316", "#fbbf24", "#fef3c7"],
        }
    }

    /// Returns the fill color for a value.
    #[must_use]
    pub fn color(self, value: f64) -> &'static str {
        let [top, upper, lower, bottom] = self.palette();
        if value > 0.75 {
            top
        } else if value > 0.5 {
            upper
        } else if value > 0.25 {
            lower
        } else {
            bottom
        }
    }
}

/// The factors a grid layer can describe.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GridFactor {
    /// Standing water.
    WaterIndex,
    /// Vegetation cover.
    VegetationIndex,
    /// Surface temperature.
    TemperatureGrid,
    /// Relative humidity.
    HumidityGrid,
    /// Breeding potential.
    BreedingSites,
    /// Larvae count.
    LarvaeDensity,
    /// Composite risk.
    RiskScoreGrid,
}

impl GridFactor {
    /// Returns all factors in layer-control order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::WaterIndex,
            Self::VegetationIndex,
            Self::TemperatureGrid,
            Self::HumidityGrid,
            Self::BreedingSites,
            Self::LarvaeDensity,
            Self::RiskScoreGrid,
        ]
    }

    /// Layer id, also the prefix of every cell id in the layer.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::WaterIndex => "water-index",
            Self::VegetationIndex => "vegetation-index",
            Self::TemperatureGrid => "temperature-grid",
            Self::HumidityGrid => "humidity-grid",
            Self::BreedingSites => "breeding-sites",
            Self::LarvaeDensity => "larvae-density",
            Self::RiskScoreGrid => "risk-score-grid",
        }
    }

    /// Short human-readable name.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::WaterIndex => "Water Index",
            Self::VegetationIndex => "Vegetation Index",
            Self::TemperatureGrid => "Temperature Grid",
            Self::HumidityGrid => "Humidity Grid",
            Self::BreedingSites => "Breeding Sites",
            Self::LarvaeDensity => "Larvae Density",
            Self::RiskScoreGrid => "Risk Score Grid",
        }
    }

    /// Palette used to draw the layer.
    #[must_use]
    pub const fn color_scale(self) -> ColorScale {
        match self {
            Self::WaterIndex => ColorScale::Water,
            Self::VegetationIndex => ColorScale::Vegetation,
            Self::TemperatureGrid => ColorScale::Temperature,
            Self::HumidityGrid | Self::BreedingSites | Self::LarvaeDensity | Self::RiskScoreGrid => {
                ColorScale::Heat
            }
        }
    }

    /// Looks up a factor by layer id.
    #[must_use]
    pub fn from_layer_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.id() == id)
    }
}

/// A small synthetic rectangle carrying one normalized factor value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    /// `{layer}-{zone}-{hotspotIndex}-{row}-{col}`.
    pub id: String,
    /// South-west and north-east corners.
    pub bounds: [LatLng; 2],
    /// Cell center.
    pub center: LatLng,
    /// Normalized value in `[0, 1]`.
    pub value: f64,
    /// Display label such as `"72.0%"`.
    pub label: String,
}

/// All cells for one factor across every zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayer {
    /// Layer id (the factor's id).
    pub id: String,
    /// Display name, e.g. `"Water Index (200m² grid)"`.
    pub name: String,
    /// Cells in generation order. Later cells draw over earlier ones.
    pub cells: Vec<GridCell>,
    /// Value-to-color mapping.
    pub color_scale: ColorScale,
}

impl GridLayer {
    /// Fill color for one of this layer's cells.
    #[must_use]
    pub fn cell_color(&self, cell: &GridCell) -> &'static str {
        self.color_scale.color(cell.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_scale_buckets() {
        assert_eq!(ColorScale::Heat.color(0.9), "#dc2626");
        assert_eq!(ColorScale::Heat.color(0.75), "#f59e0b");
        assert_eq!(ColorScale::Heat.color(0.5), "#fbbf24");
        assert_eq!(ColorScale::Heat.color(0.25), "#22c55e");
        assert_eq!(ColorScale::Heat.color(0.0), "#22c55e");
    }

    #[test]
    fn factor_ids_round_trip() {
        for factor in GridFactor::all() {
            assert_eq!(GridFactor::from_layer_id(factor.id()), Some(*factor));
            assert_eq!(factor.to_string(), factor.id());
        }
        assert_eq!(GridFactor::from_layer_id("risk"), None);
    }

    #[test]
    fn scales_match_factors() {
        assert_eq!(GridFactor::WaterIndex.color_scale(), ColorScale::Water);
        assert_eq!(GridFactor::VegetationIndex.color_scale(), ColorScale::Vegetation);
        assert_eq!(GridFactor::TemperatureGrid.color_scale(), ColorScale::Temperature);
        assert_eq!(GridFactor::LarvaeDensity.color_scale(), ColorScale::Heat);
    }
}
