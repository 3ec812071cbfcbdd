//! `GeoJSON` scene building.
//!
//! Turns fixtures, grid layers and a [`ViewState`] into the feature
//! collections a map client draws, with every style decision already made
//! and carried in feature properties.

use geo::{Contains, LineString, Point, Polygon, Rect};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, feature::Id};
use serde::Serialize;
use serde_json::json;
use vector_map_fixtures::Fixtures;
use vector_map_grid::GridLayerSet;
use vector_map_grid_models::{GridCell, GridLayer};
use vector_map_zone_models::{Hotspot, LatLng, Zone};

use crate::basemap::{BasemapDescriptor, DEFAULT_ZOOM, RECENTER_ZOOM};
use crate::layers::ZoneView;
use crate::state::ViewState;
use crate::style::{
    CELL_STYLE, hotspot_label, hotspot_popup, hotspot_style, zone_rule, zone_style,
};
use crate::surface::{FeatureSurface, GridOverlay};

/// Everything a map client needs to draw the current view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapScene {
    /// Tile layer.
    pub basemap: BasemapDescriptor,
    /// Map center.
    pub center: LatLng,
    /// Zoom to apply.
    pub zoom: u8,
    /// Rule the zone outlines are colored by.
    pub zone_rule: ZoneView,
    /// Selected zone id, echoed back.
    pub selected_zone: Option<String>,
    /// Zone outlines.
    pub zones: FeatureCollection,
    /// Hotspot circles.
    pub hotspots: FeatureCollection,
    /// Cells of the active grid layers, in activation order.
    pub grid: FeatureCollection,
    /// Ids of the grid layers drawn into `grid`.
    pub grid_layers: Vec<String>,
}

/// Builds the scene for a view state.
#[must_use]
pub fn build_scene(fixtures: &Fixtures, grids: &GridLayerSet, state: &ViewState) -> MapScene {
    let rule = zone_rule(&state.active_layers);
    let selected = state.selected_zone.as_deref();

    let zones = collection(
        fixtures
            .zones
            .iter()
            .map(|z| zone_feature(z, rule, selected == Some(z.id.as_str())))
            .collect(),
    );
    let hotspots = collection(fixtures.hotspots.iter().map(hotspot_feature).collect());

    let active = grids.active(&state.active_layers);
    let mut surface = FeatureSurface::new();
    let mut overlay = GridOverlay::new();
    overlay.update(&mut surface, &active);

    let zoom = if state.recentered {
        RECENTER_ZOOM
    } else {
        DEFAULT_ZOOM
    };

    MapScene {
        basemap: state.basemap.descriptor(),
        center: state.center,
        zoom,
        zone_rule: rule,
        selected_zone: state.selected_zone.clone(),
        zones,
        hotspots,
        grid: surface.to_collection(),
        grid_layers: overlay.layer_ids().map(str::to_string).collect(),
    }
}

/// One grid layer as a standalone collection.
#[must_use]
pub fn grid_layer_collection(layer: &GridLayer) -> FeatureCollection {
    collection(layer.cells.iter().map(|c| cell_feature(layer, c)).collect())
}

/// Returns the first zone whose outline contains `point`.
#[must_use]
pub fn zone_at(zones: &[Zone], point: LatLng) -> Option<&Zone> {
    let point = Point::new(point.lng, point.lat);
    zones.iter().find(|z| zone_polygon(z).contains(&point))
}

fn zone_polygon(zone: &Zone) -> Polygon<f64> {
    let ring: Vec<(f64, f64)> = zone.coordinates.iter().map(|c| (c.lng, c.lat)).collect();
    Polygon::new(LineString::from(ring), vec![])
}

/// Zone outline feature.
#[must_use]
pub fn zone_feature(zone: &Zone, rule: ZoneView, selected: bool) -> Feature {
    let style = zone_style(zone, rule, selected);
    let geometry = Geometry::new(geojson::Value::from(&zone_polygon(zone)));

    feature(
        &zone.id,
        geometry,
        json!({
            "zoneId": zone.id,
            "zoneName": zone.name,
            "riskLevel": zone.risk_level,
            "selected": selected,
            "labelAnchor": zone.label_anchor(),
            "style": style,
        }),
    )
}

/// Hotspot circle feature.
#[must_use]
pub fn hotspot_feature(hotspot: &Hotspot) -> Feature {
    let point = Point::new(hotspot.center.lng, hotspot.center.lat);

    feature(
        &hotspot.id,
        Geometry::new(geojson::Value::from(&point)),
        json!({
            "hotspotId": hotspot.id,
            "name": hotspot.name,
            "zoneId": hotspot.zone_id,
            "riskLevel": hotspot.risk_level,
            "cases": hotspot.cases,
            "area": hotspot.area,
            "popup": hotspot_popup(hotspot),
            "label": hotspot_label(hotspot),
            "style": hotspot_style(hotspot),
        }),
    )
}

/// Grid cell rectangle feature.
#[must_use]
pub fn cell_feature(layer: &GridLayer, cell: &GridCell) -> Feature {
    let [sw, ne] = cell.bounds;
    let rect = Rect::new((sw.lng, sw.lat), (ne.lng, ne.lat));

    feature(
        &cell.id,
        Geometry::new(geojson::Value::from(&rect.to_polygon())),
        json!({
            "layerId": layer.id,
            "layerName": layer.name,
            "value": cell.value,
            "label": cell.label,
            "tooltip": format!("{}\nValue: {}", layer.name, cell.label),
            "fillColor": layer.cell_color(cell),
            "style": CELL_STYLE,
        }),
    )
}

fn feature(id: &str, geometry: Geometry, properties: serde_json::Value) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: Some(Id::String(id.to_string())),
        properties: as_object(properties),
        foreign_members: None,
    }
}

fn as_object(value: serde_json::Value) -> Option<JsonObject> {
    match value {
        serde_json::Value::Object(map) => Some(map),
        _ => None,
    }
}

const fn collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use vector_map_grid::DEFAULT_SEED;

    use super::*;

    fn setup() -> (Fixtures, GridLayerSet) {
        let fixtures = Fixtures::embedded();
        let grids = GridLayerSet::build(&fixtures.zones, &fixtures.hotspots, DEFAULT_SEED);
        (fixtures, grids)
    }

    #[test]
    fn default_scene() {
        let (fixtures, grids) = setup();
        let scene = build_scene(&fixtures, &grids, &ViewState::default());

        assert_eq!(scene.zones.features.len(), fixtures.zones.len());
        assert_eq!(scene.hotspots.features.len(), 67);
        assert!(scene.grid.features.is_empty());
        assert!(scene.grid_layers.is_empty());
        assert_eq!(scene.zone_rule, ZoneView::Risk);
        assert_eq!(scene.zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn grid_layers_follow_activation_order() {
        let (fixtures, grids) = setup();
        let state = ViewState::with_layers(["larvae-density", "cases", "water-index"]);
        let scene = build_scene(&fixtures, &grids, &state);

        assert_eq!(scene.grid_layers, ["larvae-density", "water-index"]);
        assert_eq!(scene.zone_rule, ZoneView::Risk);

        let per_layer = grids.get("water-index").unwrap().cells.len();
        assert_eq!(scene.grid.features.len(), per_layer * 2);
        let first = scene.grid.features[0].property("layerId").unwrap();
        assert_eq!(first, "larvae-density");
    }

    #[test]
    fn selected_zone_feature_is_marked() {
        let (fixtures, grids) = setup();
        let zone_id = fixtures.zones[0].id.clone();
        let mut state = ViewState::default();
        state.select_zone(Some(zone_id.clone()));

        let scene = build_scene(&fixtures, &grids, &state);
        let selected: Vec<_> = scene
            .zones
            .features
            .iter()
            .filter(|f| f.property("selected") == Some(&json!(true)))
            .collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].property("zoneId").unwrap(), zone_id.as_str());
    }

    #[test]
    fn recentering_zooms_in() {
        let (fixtures, grids) = setup();
        let mut state = ViewState::default();
        state.set_center(LatLng::new(18.5204, 73.8567));
        assert_eq!(build_scene(&fixtures, &grids, &state).zoom, RECENTER_ZOOM);
    }

    #[test]
    fn recentering_on_initial_center_still_zooms_in() {
        let (fixtures, grids) = setup();
        let mut state = ViewState::default();
        crate::center::apply_location(&mut state, &fixtures.locations, "Lotus pond - MMCOE")
            .unwrap();
        assert_eq!(state.center, crate::state::INITIAL_CENTER);
        assert_eq!(build_scene(&fixtures, &grids, &state).zoom, RECENTER_ZOOM);
    }

    #[test]
    fn zone_polygons_are_closed_lng_lat_rings() {
        let (fixtures, _) = setup();
        let zone = &fixtures.zones[0];
        let feature = zone_feature(zone, ZoneView::Risk, false);

        let Some(geojson::Value::Polygon(rings)) = feature.geometry.map(|g| g.value) else {
            panic!("zone is not a polygon");
        };
        let ring = &rings[0];
        assert_eq!(ring.first(), ring.last());
        assert_eq!(ring[0], vec![zone.coordinates[0].lng, zone.coordinates[0].lat]);
    }

    #[test]
    fn hit_test_finds_containing_zone() {
        let (fixtures, _) = setup();
        let mut square = fixtures.zones[0].clone();
        square.id = "square".to_string();
        square.coordinates = vec![
            LatLng::new(10.0, 10.0),
            LatLng::new(10.0, 11.0),
            LatLng::new(11.0, 11.0),
            LatLng::new(11.0, 10.0),
        ];
        let zones = [square];

        assert_eq!(zone_at(&zones, LatLng::new(10.5, 10.5)).unwrap().id, "square");
        assert!(zone_at(&zones, LatLng::new(12.0, 10.5)).is_none());
    }

    #[test]
    fn grid_collection_carries_cell_styles() {
        let (_, grids) = setup();
        let layer = grids.get("risk-score-grid").unwrap();
        let collection = grid_layer_collection(layer);

        assert_eq!(collection.features.len(), layer.cells.len());
        let props = collection.features[0].properties.as_ref().unwrap();
        assert_eq!(props["style"]["color"], "#ffffff");
        assert_eq!(props["fillColor"], layer.cell_color(&layer.cells[0]));
    }
}
