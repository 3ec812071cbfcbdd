#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map view coordination.
//!
//! Owns the per-session [`ViewState`] (selected zone, active layers, center,
//! basemap, tab), the layer catalog, the style rules for zones, hotspots and
//! grid cells, and the translation of all of it into `GeoJSON` scenes. Map
//! rendering itself happens in the client; grid overlays are drawn through
//! the [`MapSurface`] trait so redraws can be sequenced remove-then-add.

pub mod basemap;
pub mod center;
pub mod detail;
pub mod layers;
pub mod scene;
pub mod state;
pub mod style;
pub mod surface;
pub mod timestamp;

pub use basemap::{Basemap, BasemapDescriptor};
pub use detail::{ZoneDetail, zone_detail};
pub use layers::{LAYER_CATALOG, LayerCategory, LayerDescriptor, LayerKind, ZoneView};
pub use scene::{MapScene, build_scene, grid_layer_collection, zone_at};
pub use state::{Tab, ViewState};
pub use surface::{FeatureSurface, GridOverlay, MapSurface};
