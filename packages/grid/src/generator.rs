//! Per-hotspot grid window generation.
//!
//! Cell size is a flat-earth approximation: 0.00013° is roughly 14 m, which
//! gives a ~200 m² cell near 18.5° N. No projection correction is applied.

use vector_map_grid_models::GridCell;
use vector_map_zone_models::LatLng;

/// Cell edge length in degrees, used for both latitude and longitude.
pub const CELL_SIZE_DEG: f64 = 0.00013;

/// Window half-width in cells. The window spans `-RADIUS..=RADIUS`.
pub const WINDOW_RADIUS: i32 = 5;

/// Only this many hotspots per zone get a window.
pub const MAX_HOTSPOTS_PER_ZONE: usize = 3;

/// Cells per hotspot window (11 × 11).
pub const CELLS_PER_WINDOW: usize = 121;

/// Generates the grid cells for one zone and one layer.
///
/// For each of the first [`MAX_HOTSPOTS_PER_ZONE`] centers, walks an 11×11
/// window around the center. Row offset `i` moves latitude and column offset
/// `j` moves longitude. `value_fn` receives the cell center's latitude,
/// longitude and its grid distance `sqrt(i² + j²)` from the hotspot; the
/// result is clamped to `[0, 1]` (NaN becomes 0).
///
/// Cell ids are `{layer_id}-{zone_id}-{hotspot}-{i}-{j}` and are unique
/// within one call.
pub fn generate_macro_grid<F>(
    centers: &[LatLng],
    mut value_fn: F,
    layer_id: &str,
    zone_id: &str,
) -> Vec<GridCell>
where
    F: FnMut(f64, f64, f64) -> f64,
{
    let windows = centers.len().min(MAX_HOTSPOTS_PER_ZONE);
    let mut cells = Vec::with_capacity(windows * CELLS_PER_WINDOW);
    let half = CELL_SIZE_DEG / 2.0;

    for (idx, center) in centers.iter().take(MAX_HOTSPOTS_PER_ZONE).enumerate() {
        for i in -WINDOW_RADIUS..=WINDOW_RADIUS {
            for j in -WINDOW_RADIUS..=WINDOW_RADIUS {
                let lat = f64::from(i).mul_add(CELL_SIZE_DEG, center.lat);
                let lng = f64::from(j).mul_add(CELL_SIZE_DEG, center.lng);
                let distance = f64::from(i).hypot(f64::from(j));

                let value = clamp_unit(value_fn(lat, lng, distance));

                cells.push(GridCell {
                    id: format!("{layer_id}-{zone_id}-{idx}-{i}-{j}"),
                    bounds: [
                        LatLng::new(lat - half, lng - half),
                        LatLng::new(lat + half, lng + half),
                    ],
                    center: LatLng::new(lat, lng),
                    value,
                    label: format!("{:.1}%", value * 100.0),
                });
            }
        }
    }

    cells
}

fn clamp_unit(raw: f64) -> f64 {
    if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) }
}
