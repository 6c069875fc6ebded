//! Widget configuration
//!
//! One consolidated, fully defaulted option set. The host hands the entry
//! point a `WidgetConfig`-shaped object (in the browser usually as JSON or
//! `data-*` attributes, see [`crate::core::attrs`]); the widget reads it
//! once at mount and never mutates it afterwards.

use crate::core::geo::LonLat;
use crate::{Result, WidgetError};
use serde::{Deserialize, Serialize};

/// Highest zoom level the slippy tile scheme supports here.
pub const MAX_ZOOM_LEVEL: u8 = 20;

/// Default stylesheet shipped next to the widget bundle.
pub const DEFAULT_STYLESHEET_HREF: &str = "ol-sp.min.css";

/// Default public OSM tile server.
pub const DEFAULT_TILE_BASE_URL: &str = "https://tile.openstreetmap.org";

/// Full set of recognized widget options.
///
/// Serde names are camelCase so the struct deserializes directly from the
/// object shape host pages pass around (`mapElementId`, `tileBaseURL`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    /// Id of the host element the map renders into. Mandatory.
    pub map_element_id: String,
    /// Id of the recenter control container. Optional feature.
    pub center_control_element_id: Option<String>,
    /// Id of the recenter control button. Optional feature.
    pub center_control_button_id: Option<String>,
    /// Id of the marker icon element.
    pub icon_element_id: Option<String>,
    /// Id of the popup content element.
    pub popup_element_id: Option<String>,
    /// Stylesheet to inject exactly once per page.
    pub stylesheet_href: String,
    /// Subresource integrity hash for the stylesheet link.
    pub stylesheet_integrity_hash: Option<String>,
    #[serde(rename = "extraCopyrightURL")]
    pub extra_copyright_url: Option<String>,
    pub extra_copyright_name: Option<String>,
    #[serde(rename = "tileBaseURL")]
    pub tile_base_url: String,
    /// Rendered height of the map element, e.g. `"200px"` or `"100%"`.
    pub height: Option<String>,
    /// Rendered width of the map element.
    pub width: Option<String>,
    pub center_longitude: f64,
    pub center_latitude: f64,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub point_longitude: Option<f64>,
    pub point_latitude: Option<f64>,
    /// Rendered square size of the icon element, in pixels.
    pub icon_size_pixels: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            map_element_id: String::new(),
            center_control_element_id: None,
            center_control_button_id: None,
            icon_element_id: None,
            popup_element_id: None,
            stylesheet_href: DEFAULT_STYLESHEET_HREF.to_string(),
            stylesheet_integrity_hash: None,
            extra_copyright_url: None,
            extra_copyright_name: None,
            tile_base_url: DEFAULT_TILE_BASE_URL.to_string(),
            height: Some("100%".to_string()),
            width: Some("100%".to_string()),
            center_longitude: 0.0,
            center_latitude: 0.0,
            zoom: 0,
            min_zoom: 0,
            max_zoom: MAX_ZOOM_LEVEL,
            point_longitude: None,
            point_latitude: None,
            icon_size_pixels: 64,
        }
    }
}

impl WidgetConfig {
    /// Creates a config for the given map element with everything else
    /// defaulted.
    pub fn new(map_element_id: impl Into<String>) -> Self {
        Self {
            map_element_id: map_element_id.into(),
            ..Self::default()
        }
    }

    /// Parses the host-object JSON form of the configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| WidgetError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the zoom invariant: `min_zoom <= zoom <= max_zoom`, each
    /// within `[0, 20]`, and that a map element id is present at all.
    pub fn validate(&self) -> Result<()> {
        if self.map_element_id.is_empty() {
            return Err(WidgetError::InvalidConfig(
                "mapElementId must not be empty".to_string(),
            ));
        }
        if self.max_zoom > MAX_ZOOM_LEVEL {
            return Err(WidgetError::InvalidConfig(format!(
                "maxZoom {} exceeds {}",
                self.max_zoom, MAX_ZOOM_LEVEL
            )));
        }
        if self.min_zoom > self.zoom || self.zoom > self.max_zoom {
            return Err(WidgetError::InvalidConfig(format!(
                "zoom {} outside [{}, {}]",
                self.zoom, self.min_zoom, self.max_zoom
            )));
        }
        Ok(())
    }

    /// The configured view center.
    pub fn center(&self) -> LonLat {
        LonLat::new(self.center_longitude, self.center_latitude)
    }

    /// The point of interest, when both coordinates are configured.
    pub fn point(&self) -> Option<LonLat> {
        match (self.point_longitude, self.point_latitude) {
            (Some(lon), Some(lat)) => Some(LonLat::new(lon, lat)),
            _ => None,
        }
    }

    pub fn with_center(mut self, lon: f64, lat: f64) -> Self {
        self.center_longitude = lon;
        self.center_latitude = lat;
        self
    }

    pub fn with_point(mut self, lon: f64, lat: f64) -> Self {
        self.point_longitude = Some(lon);
        self.point_latitude = Some(lat);
        self
    }

    pub fn with_zoom(mut self, zoom: u8, min_zoom: u8, max_zoom: u8) -> Self {
        self.zoom = zoom;
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }
}
