#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Synthetic grid heatmap layers.
//!
//! Every zone that owns hotspots gets an 11×11 window of small cells around
//! each of its first three hotspots, once per [`GridFactor`]. The published
//! layers concatenate each factor's cells across all zones in fixture order.
//! Two factors draw from a random source; a [`GridLayerSet`] built from a
//! seed is reproducible.

pub mod factors;
pub mod generator;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vector_map_grid_models::{GridFactor, GridLayer};
use vector_map_zone_models::{Hotspot, LatLng, Zone, hotspots_in_zone};

pub use factors::factor_value;
pub use generator::generate_macro_grid;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// The seven published grid layers, one per factor.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayerSet {
    layers: Vec<GridLayer>,
}

impl GridLayerSet {
    /// Builds all layers from a seeded `ChaCha8Rng`.
    #[must_use]
    pub fn build(zones: &[Zone], hotspots: &[Hotspot], seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::build_with_rng(zones, hotspots, &mut rng)
    }

    /// Builds all layers drawing from the given random source.
    ///
    /// Zones are visited in order and, within a zone, factors in
    /// [`GridFactor::all`] order, so the sequence of draws is fixed for a
    /// given input.
    pub fn build_with_rng<R: Rng + ?Sized>(
        zones: &[Zone],
        hotspots: &[Hotspot],
        rng: &mut R,
    ) -> Self {
        let mut layers: Vec<GridLayer> = GridFactor::all()
            .iter()
            .map(|factor| GridLayer {
                id: factor.id().to_string(),
                name: format!("{} (200m² grid)", factor.title()),
                cells: Vec::new(),
                color_scale: factor.color_scale(),
            })
            .collect();

        for zone in zones {
            let centers: Vec<LatLng> = hotspots_in_zone(hotspots, &zone.id)
                .into_iter()
                .map(|h| h.center)
                .collect();

            if centers.is_empty() {
                log::debug!("Zone {} has no hotspots, skipping grid", zone.id);
                continue;
            }

            for (factor, layer) in GridFactor::all().iter().zip(layers.iter_mut()) {
                let cells = generate_macro_grid(
                    &centers,
                    |_, _, distance| factor_value(*factor, zone.risk_level, distance, rng),
                    factor.id(),
                    &zone.id,
                );
                layer.cells.extend(cells);
            }
        }

        log::info!(
            "Generated {} grid layers with {} cells each",
            layers.len(),
            layers.first().map_or(0, |l| l.cells.len())
        );

        Self { layers }
    }

    /// Returns the layer with the given id.
    #[must_use]
    pub fn get(&self, layer_id: &str) -> Option<&GridLayer> {
        self.layers.iter().find(|l| l.id == layer_id)
    }

    /// Returns the grid layers among `active`, in activation order.
    ///
    /// Ids that are not grid layers (zone views, unknown ids) are skipped.
    #[must_use]
    pub fn active<S: AsRef<str>>(&self, active: &[S]) -> Vec<&GridLayer> {
        active.iter().filter_map(|id| self.get(id.as_ref())).collect()
    }

    /// All layers in [`GridFactor::all`] order.
    #[must_use]
    pub fn layers(&self) -> &[GridLayer] {
        &self.layers
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use vector_map_fixtures::Fixtures;

    use super::*;

    #[test]
    fn same_seed_same_layers() {
        let fixtures = Fixtures::embedded();
        let a = GridLayerSet::build(&fixtures.zones, &fixtures.hotspots, 42);
        let b = GridLayerSet::build(&fixtures.zones, &fixtures.hotspots, 42);
        assert_eq!(a, b);

        let c = GridLayerSet::build(&fixtures.zones, &fixtures.hotspots, 43);
        let veg = |set: &GridLayerSet| set.get("vegetation-index").unwrap().cells.clone();
        assert_ne!(veg(&a), veg(&c));
        assert_eq!(a.get("water-index"), c.get("water-index"));
    }

    #[test]
    fn every_layer_is_capped_per_zone() {
        let fixtures = Fixtures::embedded();
        let set = GridLayerSet::build(&fixtures.zones, &fixtures.hotspots, DEFAULT_SEED);

        let expected: usize = fixtures
            .zones
            .iter()
            .map(|z| fixtures.zone_hotspots(&z.id).len().min(3) * 121)
            .sum();

        assert_eq!(set.layers().len(), 7);
        for layer in set.layers() {
            assert_eq!(layer.cells.len(), expected, "{}", layer.id);
            let ids: BTreeSet<_> = layer.cells.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(ids.len(), layer.cells.len());
            assert!(layer.cells.iter().all(|c| (0.0..=1.0).contains(&c.value)));
            assert!(layer.cells.iter().all(|c| c.id.starts_with(&layer.id)));
        }
    }

    #[test]
    fn layer_names_and_lookup() {
        let fixtures = Fixtures::embedded();
        let set = GridLayerSet::build(&fixtures.zones, &fixtures.hotspots, DEFAULT_SEED);

        assert_eq!(set.get("water-index").unwrap().name, "Water Index (200m² grid)");
        assert!(set.get("risk").is_none());

        let active = set.active(&["risk", "larvae-density", "bogus", "water-index"]);
        let ids: Vec<_> = active.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["larvae-density", "water-index"]);
    }

    #[test]
    fn zones_without_hotspots_produce_nothing() {
        let fixtures = Fixtures::embedded();
        let set = GridLayerSet::build(&fixtures.zones, &[], DEFAULT_SEED);
        assert!(set.layers().iter().all(|l| l.cells.is_empty()));
    }
}
