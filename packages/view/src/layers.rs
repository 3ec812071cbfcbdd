//! The layer control catalog.
//!
//! Twelve toggleable layers in four categories. Zone-view layers recolor
//! the zone outlines; the rest are grid layers drawn as cell overlays.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use vector_map_grid_models::GridFactor;

/// Heading a layer is grouped under in the layer control.
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
#[serde(rename_all = "camelCase")]
pub enum LayerCategory {
    /// Zone outline coloring.
    #[strum(serialize = "Zone View")]
    ZoneView,
    /// Environmental grid layers.
    #[strum(serialize = "Feature Layers")]
    FeatureLayers,
    /// Breeding factor grid layers.
    #[strum(serialize = "Factor Layers")]
    FactorLayers,
    /// Composite risk grid layer.
    #[strum(serialize = "Risk Analysis")]
    RiskAnalysis,
}

impl LayerCategory {
    /// Returns all categories in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::ZoneView,
            Self::FeatureLayers,
            Self::FactorLayers,
            Self::RiskAnalysis,
        ]
    }
}

/// Metric a zone outline can be colored by.
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
pub enum ZoneView {
    /// Zone risk level.
    Risk,
    /// Mean temperature.
    Temperature,
    /// Resident population.
    Population,
    /// Recent case count.
    Cases,
    /// Trap count.
    Traps,
}

/// What a layer id renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Recolors zone outlines.
    Zone(ZoneView),
    /// Draws a grid overlay.
    Grid(GridFactor),
}

/// One entry in the layer control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerDescriptor {
    /// Layer id used in the active-layer list.
    pub id: &'static str,
    /// Short label.
    pub label: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Group heading.
    pub category: LayerCategory,
}

/// Every layer in the control, in display order.
pub const LAYER_CATALOG: [LayerDescriptor; 12] = [
    LayerDescriptor {
        id: "risk",
        label: "Risk Level",
        description: "Overall risk assessment",
        category: LayerCategory::ZoneView,
    },
    LayerDescriptor {
        id: "temperature",
        label: "Temperature",
        description: "Temperature distribution",
        category: LayerCategory::ZoneView,
    },
    LayerDescriptor {
        id: "population",
        label: "Population",
        description: "Population density",
        category: LayerCategory::ZoneView,
    },
    LayerDescriptor {
        id: "cases",
        label: "Cases",
        description: "Recent case distribution",
        category: LayerCategory::ZoneView,
    },
    LayerDescriptor {
        id: "traps",
        label: "Traps",
        description: "Trap coverage",
        category: LayerCategory::ZoneView,
    },
    LayerDescriptor {
        id: "water-index",
        label: "Water Index",
        description: "Standing water (200m² grid)",
        category: LayerCategory::FeatureLayers,
    },
    LayerDescriptor {
        id: "vegetation-index",
        label: "Vegetation",
        description: "Vegetation coverage (200m² grid)",
        category: LayerCategory::FeatureLayers,
    },
    LayerDescriptor {
        id: "temperature-grid",
        label: "Temperature Grid",
        description: "Surface temperature (200m² grid)",
        category: LayerCategory::FeatureLayers,
    },
    LayerDescriptor {
        id: "humidity-grid",
        label: "Humidity",
        description: "Relative humidity (200m² grid)",
        category: LayerCategory::FeatureLayers,
    },
    LayerDescriptor {
        id: "breeding-sites",
        label: "Breeding Sites",
        description: "Breeding potential (200m² grid)",
        category: LayerCategory::FactorLayers,
    },
    LayerDescriptor {
        id: "larvae-density",
        label: "Larvae Density",
        description: "Larvae count (200m² grid)",
        category: LayerCategory::FactorLayers,
    },
    LayerDescriptor {
        id: "risk-score-grid",
        label: "Risk Score Grid",
        description: "Composite risk (200m² grid)",
        category: LayerCategory::RiskAnalysis,
    },
];

/// Looks up a catalog entry by id.
#[must_use]
pub fn descriptor(layer_id: &str) -> Option<&'static LayerDescriptor> {
    LAYER_CATALOG.iter().find(|l| l.id == layer_id)
}

/// Catalog entries under one heading.
pub fn in_category(category: LayerCategory) -> impl Iterator<Item = &'static LayerDescriptor> {
    LAYER_CATALOG.iter().filter(move |l| l.category == category)
}

/// Classifies a layer id. Unknown ids render nothing and yield `None`.
#[must_use]
pub fn layer_kind(layer_id: &str) -> Option<LayerKind> {
    layer_id
        .parse::<ZoneView>()
        .map(LayerKind::Zone)
        .ok()
        .or_else(|| GridFactor::from_layer_id(layer_id).map(LayerKind::Grid))
}

/// Whether a layer id names a grid layer.
#[must_use]
pub fn is_grid_layer(layer_id: &str) -> bool {
    matches!(layer_kind(layer_id), Some(LayerKind::Grid(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_kind() {
        for entry in &LAYER_CATALOG {
            let kind = layer_kind(entry.id).unwrap();
            match kind {
                LayerKind::Zone(_) => assert_eq!(entry.category, LayerCategory::ZoneView),
                LayerKind::Grid(_) => assert_ne!(entry.category, LayerCategory::ZoneView),
            }
        }
        for factor in GridFactor::all() {
            assert!(descriptor(factor.id()).is_some(), "{factor}");
        }
    }

    #[test]
    fn category_sizes() {
        let sizes: Vec<_> = LayerCategory::all()
            .iter()
            .map(|c| in_category(*c).count())
            .collect();
        assert_eq!(sizes, [5, 4, 2, 1]);
        assert_eq!(LayerCategory::FactorLayers.to_string(), "Factor Layers");
    }

    #[test]
    fn unknown_ids() {
        assert!(layer_kind("heatwave").is_none());
        assert!(descriptor("heatwave").is_none());
        assert!(!is_grid_layer("risk"));
        assert!(is_grid_layer("larvae-density"));
    }
}
