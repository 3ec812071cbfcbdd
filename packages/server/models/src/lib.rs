#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the vector map server.
//!
//! These types are serialized to JSON for the REST API. Map scenes, zone
//! details and the dashboard are served as the library types directly;
//! this crate covers the envelope and listing shapes plus query
//! parameters.

use serde::{Deserialize, Serialize};
use vector_map_analytics_models::HeaderStats;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is up.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// Error body for non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// What went wrong.
    pub error: String,
}

/// Header statistics with the render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStats {
    /// Zone, case and hotspot counters.
    #[serde(flatten)]
    pub stats: HeaderStats,
    /// India Standard Time, e.g. `16 Oct 2026, 2:05 pm`.
    pub last_updated: String,
}

/// One layer in the layer control.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLayer {
    /// Layer id.
    pub id: String,
    /// Short label.
    pub label: String,
    /// One-line description.
    pub description: String,
    /// Whether the layer is in the requested active set.
    pub active: bool,
}

/// Layers under one category heading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLayerGroup {
    /// Heading, e.g. `"Zone View"`.
    pub category: String,
    /// Layers in display order.
    pub layers: Vec<ApiLayer>,
}

/// A popular location for the center control.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLocation {
    /// Display name.
    pub name: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// Query parameters carrying an active layer list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerQueryParams {
    /// Comma-separated active layer ids. Absent means the initial set.
    pub layers: Option<String>,
}

/// Query parameters for the map scene endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapQueryParams {
    /// Comma-separated active layer ids. Absent means the initial set.
    pub layers: Option<String>,
    /// Selected zone id.
    pub selected: Option<String>,
    /// `streets` or `satellite`.
    pub basemap: Option<String>,
    /// Center latitude.
    pub lat: Option<String>,
    /// Center longitude.
    pub lng: Option<String>,
}

/// Splits a comma-separated layer list, trimming and dropping empties.
#[must_use]
pub fn split_layers(layers: &str) -> Vec<String> {
    layers
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
