//! HTTP handler functions for the vector map API.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use vector_map_analytics::{build_dashboard, header_stats};
use vector_map_server_models::{
    ApiError, ApiHealth, ApiLayer, ApiLayerGroup, ApiLocation, ApiStats, LayerQueryParams,
    MapQueryParams, split_layers,
};
use vector_map_view::center::parse_center;
use vector_map_view::layers::in_category;
use vector_map_view::timestamp::last_updated_now;
use vector_map_view::{
    Basemap, LayerCategory, ViewState, build_scene, grid_layer_collection, zone_detail,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/stats`
///
/// Header counters plus the current IST timestamp.
pub async fn stats(state: web::Data<AppState>) -> HttpResponse {
    let fixtures = &state.fixtures;
    HttpResponse::Ok().json(ApiStats {
        stats: header_stats(&fixtures.zones, &fixtures.hotspots),
        last_updated: last_updated_now(),
    })
}

/// `GET /api/layers`
///
/// The layer catalog grouped by category, flagged against `?layers=`.
pub async fn layers(params: web::Query<LayerQueryParams>) -> HttpResponse {
    let view = view_with_layers(params.layers.as_deref());

    let groups: Vec<ApiLayerGroup> = LayerCategory::all()
        .iter()
        .map(|category| ApiLayerGroup {
            category: category.to_string(),
            layers: in_category(*category)
                .map(|l| ApiLayer {
                    id: l.id.to_string(),
                    label: l.label.to_string(),
                    description: l.description.to_string(),
                    active: view.is_active(l.id),
                })
                .collect(),
        })
        .collect();

    HttpResponse::Ok().json(groups)
}

/// `GET /api/basemaps`
pub async fn basemaps() -> HttpResponse {
    let descriptors: Vec<_> = Basemap::all().iter().map(|b| b.descriptor()).collect();
    HttpResponse::Ok().json(descriptors)
}

/// `GET /api/locations`
pub async fn locations(state: web::Data<AppState>) -> HttpResponse {
    let locations: Vec<ApiLocation> = state
        .fixtures
        .locations
        .iter()
        .map(|l| ApiLocation {
            name: l.name.clone(),
            lat: l.center.lat,
            lng: l.center.lng,
        })
        .collect();

    HttpResponse::Ok().json(locations)
}

/// `GET /api/map`
///
/// Styled map scene for the view described by the query string.
pub async fn map(state: web::Data<AppState>, params: web::Query<MapQueryParams>) -> HttpResponse {
    let mut view = view_with_layers(params.layers.as_deref());

    if let Some(raw) = params.basemap.as_deref() {
        match raw.parse::<Basemap>() {
            Ok(basemap) => view.set_basemap(basemap),
            Err(_) => {
                return HttpResponse::BadRequest().json(ApiError {
                    error: format!("Unknown basemap: {raw}"),
                });
            }
        }
    }

    if let (Some(lat), Some(lng)) = (params.lat.as_deref(), params.lng.as_deref()) {
        match parse_center(lat, lng) {
            Some(center) => view.set_center(center),
            None => log::warn!("Ignoring unparseable center {lat},{lng}"),
        }
    }

    view.select_zone(params.selected.clone().filter(|s| !s.is_empty()));

    HttpResponse::Ok().json(build_scene(&state.fixtures, &state.grids, &view))
}

/// `GET /api/grid/{layer_id}`
///
/// One grid layer as a `GeoJSON` `FeatureCollection`.
pub async fn grid(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let layer_id = path.into_inner();

    state.grids.get(&layer_id).map_or_else(
        || {
            HttpResponse::NotFound().json(ApiError {
                error: format!("Unknown grid layer: {layer_id}"),
            })
        },
        |layer| HttpResponse::Ok().json(grid_layer_collection(layer)),
    )
}

/// `GET /api/zones/{zone_id}`
///
/// Detail panel for a zone. Unknown ids yield `null`.
pub async fn zone(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let zone_id = path.into_inner();
    let detail = zone_detail(&state.fixtures, Some(&zone_id), Utc::now());
    HttpResponse::Ok().json(detail)
}

/// `GET /api/analytics`
pub async fn analytics(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(build_dashboard(&state.fixtures))
}

/// View state with the requested layers, or the initial layers when the
/// parameter is absent.
fn view_with_layers(layers: Option<&str>) -> ViewState {
    layers.map_or_else(ViewState::default, |l| ViewState::with_layers(split_layers(l)))
}
