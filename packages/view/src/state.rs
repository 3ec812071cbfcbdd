//! Per-session view state.
//!
//! Holds the selection values the map and its controls share. Every
//! mutation is synchronous and none is rejected.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use vector_map_zone_models::LatLng;

use crate::basemap::Basemap;

/// Where the map opens (Lotus pond, MMCOE).
pub const INITIAL_CENTER: LatLng = LatLng::new(18.491_292, 73.800_823);

/// Layer active when a session starts.
pub const INITIAL_LAYER: &str = "risk";

/// Top-level tab.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
pub enum Tab {
    /// Risk map.
    #[default]
    Map,
    /// Analytics dashboard.
    Analytics,
}

/// Selection values shared by the map and its controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Selected zone id. Need not match a zone.
    pub selected_zone: Option<String>,
    /// Active layer ids in activation order, without duplicates.
    pub active_layers: Vec<String>,
    /// Map center.
    pub center: LatLng,
    /// Whether the center has been set since the session started.
    #[serde(default)]
    pub recentered: bool,
    /// Tile provider.
    pub basemap: Basemap,
    /// Visible tab.
    pub tab: Tab,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_zone: None,
            active_layers: vec![INITIAL_LAYER.to_string()],
            center: INITIAL_CENTER,
            recentered: false,
            basemap: Basemap::default(),
            tab: Tab::default(),
        }
    }
}

impl ViewState {
    /// Builds a state from an explicit active layer list, dropping repeats.
    #[must_use]
    pub fn with_layers<I, S>(layers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self {
            active_layers: Vec::new(),
            ..Self::default()
        };
        for layer in layers {
            let layer = layer.into();
            if !state.is_active(&layer) {
                state.active_layers.push(layer);
            }
        }
        state
    }

    /// Adds the layer at the end if inactive, otherwise removes it.
    ///
    /// Returns whether the layer is active afterwards.
    pub fn toggle_layer(&mut self, layer_id: &str) -> bool {
        if let Some(pos) = self.active_layers.iter().position(|l| l == layer_id) {
            self.active_layers.remove(pos);
            false
        } else {
            self.active_layers.push(layer_id.to_string());
            true
        }
    }

    /// Whether a layer id is active.
    #[must_use]
    pub fn is_active(&self, layer_id: &str) -> bool {
        self.active_layers.iter().any(|l| l == layer_id)
    }

    /// Replaces or clears the selected zone.
    pub fn select_zone(&mut self, zone_id: Option<String>) {
        self.selected_zone = zone_id;
    }

    /// Replaces the map center and marks the view as recentered, even when
    /// the new center equals the old one.
    pub const fn set_center(&mut self, center: LatLng) {
        self.center = center;
        self.recentered = true;
    }

    /// Replaces the basemap.
    pub const fn set_basemap(&mut self, basemap: Basemap) {
        self.basemap = basemap;
    }

    /// Replaces the visible tab.
    pub const fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }
}
