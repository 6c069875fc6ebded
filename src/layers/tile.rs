//! Tile layer descriptor
//!
//! The widget does not fetch or composite tiles itself; it hands the
//! rendering engine a URL template in the standard slippy `{z}/{x}/{y}.png`
//! convention together with the attribution markup to display.

use crate::core::geo::TileCoord;

/// Base attribution for the public OpenStreetMap tile servers.
pub const OSM_ATTRIBUTION: &str = "© <a href=\"https://www.openstreetmap.org/copyright\" \
     target=\"_blank\">OpenStreetMap</a> contributors.";

/// Composes the attribution string for the tile layer.
///
/// When both an extra copyright URL and name are configured, the base
/// attribution is prefixed with a link to them; otherwise the base
/// attribution is used unmodified.
pub fn compose_attribution(extra_url: Option<&str>, extra_name: Option<&str>) -> String {
    match (extra_url, extra_name) {
        (Some(url), Some(name)) => {
            format!("© <a href=\"{url}\" target=\"_blank\">{name}</a> contributors. {OSM_ATTRIBUTION}")
        }
        _ => OSM_ATTRIBUTION.to_string(),
    }
}

/// A raster tile layer sourced from a slippy-convention tile server.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    url_template: String,
    attributions: String,
}

impl TileLayer {
    /// Builds a layer for `base_url`, e.g. `https://tile.openstreetmap.org`.
    pub fn new(base_url: &str, attributions: String) -> Self {
        Self {
            url_template: format!("{}/{{z}}/{{x}}/{{y}}.png", base_url.trim_end_matches('/')),
            attributions,
        }
    }

    /// The `{z}/{x}/{y}` URL template handed to the engine.
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    /// Attribution markup for the layer.
    pub fn attributions(&self) -> &str {
        &self.attributions
    }

    /// Resolves the template for one tile coordinate.
    pub fn tile_url(&self, coord: TileCoord) -> String {
        self.url_template
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
    }
}
