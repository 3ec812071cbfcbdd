//! Drawing grid overlays onto a map surface.
//!
//! A [`MapSurface`] is anything that can draw and erase grid cells: a
//! `GeoJSON` collection for the HTTP API, or a test recorder. The
//! [`GridOverlay`] tracks what it has drawn so a layer-set change erases
//! every old cell before drawing the new set.

use std::collections::BTreeMap;

use geojson::{Feature, FeatureCollection};
use vector_map_grid_models::{GridCell, GridLayer};

use crate::scene::cell_feature;

/// Something grid cells can be drawn onto.
pub trait MapSurface {
    /// Token returned for a drawn cell and used to erase it.
    type Handle;

    /// Draws one cell of `layer`. Later draws overlay earlier ones.
    fn draw_cell(&mut self, layer: &GridLayer, cell: &GridCell) -> Self::Handle;

    /// Erases a previously drawn cell.
    fn erase(&mut self, handle: Self::Handle);
}

/// Tracks the cells currently drawn for the active grid layers.
#[derive(Debug)]
pub struct GridOverlay<H> {
    drawn: Vec<(String, Vec<H>)>,
}

impl<H> Default for GridOverlay<H> {
    fn default() -> Self {
        Self { drawn: Vec::new() }
    }
}

impl<H> GridOverlay<H> {
    /// Creates an empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the drawn set with `layers`.
    ///
    /// Every previously drawn cell is erased before the first new cell is
    /// drawn.
    pub fn update<S>(&mut self, surface: &mut S, layers: &[&GridLayer])
    where
        S: MapSurface<Handle = H>,
    {
        let erased = self.clear(surface);

        for layer in layers {
            let handles = layer
                .cells
                .iter()
                .map(|cell| surface.draw_cell(layer, cell))
                .collect();
            self.drawn.push((layer.id.clone(), handles));
        }

        log::debug!(
            "Grid overlay erased {erased} cells and drew {} across {} layers",
            self.cell_count(),
            self.drawn.len()
        );
    }

    /// Erases everything drawn. Returns the number of cells erased.
    pub fn clear<S>(&mut self, surface: &mut S) -> usize
    where
        S: MapSurface<Handle = H>,
    {
        let mut erased = 0;
        for (_, handles) in self.drawn.drain(..) {
            for handle in handles {
                surface.erase(handle);
                erased += 1;
            }
        }
        erased
    }

    /// Ids of the drawn layers, in draw order.
    pub fn layer_ids(&self) -> impl Iterator<Item = &str> {
        self.drawn.iter().map(|(id, _)| id.as_str())
    }

    /// Number of cells currently drawn.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.drawn.iter().map(|(_, h)| h.len()).sum()
    }
}

/// A surface that collects cells as `GeoJSON` features.
#[derive(Debug, Default)]
pub struct FeatureSurface {
    drawn: BTreeMap<usize, Feature>,
    next_handle: usize,
}

impl FeatureSurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Features still drawn, in draw order.
    pub fn features(&self) -> impl Iterator<Item = &Feature> {
        self.drawn.values()
    }

    /// Snapshot of the drawn features.
    #[must_use]
    pub fn to_collection(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.features().cloned().collect(),
            foreign_members: None,
        }
    }
}

impl MapSurface for FeatureSurface {
    type Handle = usize;

    fn draw_cell(&mut self, layer: &GridLayer, cell: &GridCell) -> usize {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.drawn.insert(handle, cell_feature(layer, cell));
        handle
    }

    fn erase(&mut self, handle: usize) {
        self.drawn.remove(&handle);
    }
}
