//! Basemap tile providers.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Zoom level the map opens at.
pub const DEFAULT_ZOOM: u8 = 12;

/// Zoom level applied when the map is recentered.
pub const RECENTER_ZOOM: u8 = 16;

/// Maximum zoom supported by both tile providers.
pub const MAX_ZOOM: u8 = 19;

/// The two basemap choices.
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
pub enum Basemap {
    /// `OpenStreetMap` street tiles.
    #[default]
    Streets,
    /// Esri World Imagery.
    Satellite,
}

/// Tile layer settings for a basemap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasemapDescriptor {
    /// Which basemap this describes.
    pub id: Basemap,
    /// Display name.
    pub name: &'static str,
    /// Tile URL template.
    pub url_template: &'static str,
    /// Attribution HTML.
    pub attribution: &'static str,
    /// Maximum zoom.
    pub max_zoom: u8,
}

impl Basemap {
    /// Returns both basemaps.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Streets, Self::Satellite]
    }

    /// Tile layer settings.
    #[must_use]
    pub const fn descriptor(self) -> BasemapDescriptor {
        match self {
            Self::Streets => BasemapDescriptor {
                id: self,
                name: "Streets",
                url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
                attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
                max_zoom: MAX_ZOOM,
            },
            Self::Satellite => BasemapDescriptor {
                id: self,
                name: "Satellite",
                url_template: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
                attribution: "Tiles &copy; Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community",
                max_zoom: MAX_ZOOM,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satellite_uses_esri_row_column_order() {
        let d = Basemap::Satellite.descriptor();
        assert!(d.url_template.ends_with("/tile/{z}/{y}/{x}"));
        assert!(d.attribution.starts_with("Tiles &copy; Esri"));
        assert_eq!(d.max_zoom, 19);
    }

    #[test]
    fn parses_lowercase_names() {
        assert_eq!("satellite".parse::<Basemap>().unwrap(), Basemap::Satellite);
        assert_eq!(Basemap::default(), Basemap::Streets);
        assert!("terrain".parse::<Basemap>().is_err());
    }
}
