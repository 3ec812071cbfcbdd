//! Grid layer export.

use std::path::Path;

use thiserror::Error;
use vector_map_grid::GridLayerSet;
use vector_map_view::grid_layer_collection;

/// Errors that can occur while exporting a layer.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No grid layer has the requested id.
    #[error("Unknown grid layer: {0}")]
    UnknownLayer(String),

    /// Writing the output file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serializing the feature collection failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Serializes one grid layer as a `GeoJSON` feature collection.
///
/// # Errors
///
/// * [`ExportError::UnknownLayer`] if `layer_id` is not a grid layer
/// * [`ExportError::Json`] if serialization fails
pub fn layer_geojson(grids: &GridLayerSet, layer_id: &str) -> Result<String, ExportError> {
    let layer = grids
        .get(layer_id)
        .ok_or_else(|| ExportError::UnknownLayer(layer_id.to_string()))?;
    Ok(serde_json::to_string_pretty(&grid_layer_collection(layer))?)
}

/// Writes one grid layer to `out`. Returns the number of cells written.
///
/// # Errors
///
/// Returns [`ExportError`] if the layer is unknown or the file cannot be
/// written.
pub fn export_layer(grids: &GridLayerSet, layer_id: &str, out: &Path) -> Result<usize, ExportError> {
    let json = layer_geojson(grids, layer_id)?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out, json)?;

    let cells = grids.get(layer_id).map_or(0, |l| l.cells.len());
    log::info!("Wrote {cells} cells of {layer_id} to {}", out.display());

    Ok(cells)
}
