//! Declarative configuration adapter
//!
//! Host pages configure the widget through `data-*` attributes on the
//! script tag that loads it. This adapter turns any attribute lookup into a
//! [`WidgetConfig`]; the widget core consumes the resulting object without
//! caring how it was produced.

use crate::core::config::WidgetConfig;
use std::str::FromStr;

/// Builds a [`WidgetConfig`] from a `data-*` attribute lookup.
///
/// `lookup` receives the attribute name (e.g. `"data-map-id"`) and returns
/// its value when present. Missing or unparsable attributes fall back to
/// the config defaults.
pub fn config_from_attributes<F>(lookup: F) -> WidgetConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = WidgetConfig::default();

    if let Some(id) = lookup("data-map-id") {
        config.map_element_id = id;
    }
    config.center_control_element_id = lookup("data-center-control-id");
    config.center_control_button_id = lookup("data-center-control-button-id");
    config.icon_element_id = lookup("data-icon-id");
    config.popup_element_id = lookup("data-popup-id");

    if let Some(href) = lookup("data-stylesheet") {
        config.stylesheet_href = href;
    }
    config.stylesheet_integrity_hash = lookup("data-stylesheet-hash");

    config.extra_copyright_url = lookup("data-extra-copyright-url");
    config.extra_copyright_name = lookup("data-extra-copyright-name");

    if let Some(url) = lookup("data-tile-base-url") {
        config.tile_base_url = url;
    }

    // Explicit attributes win over the "100%"/"100%" defaults; an attribute
    // present but empty counts as unset so the mutual-fallback sizing rule
    // can apply.
    if let Some(height) = lookup("data-height") {
        config.height = non_empty(height);
    }
    if let Some(width) = lookup("data-width") {
        config.width = non_empty(width);
    }

    set_parsed(&mut config.center_longitude, lookup("data-center-lon"));
    set_parsed(&mut config.center_latitude, lookup("data-center-lat"));
    set_parsed(&mut config.zoom, lookup("data-zoom"));
    set_parsed(&mut config.min_zoom, lookup("data-min-zoom"));
    set_parsed(&mut config.max_zoom, lookup("data-max-zoom"));
    config.point_longitude = parse_opt(lookup("data-point-lon"));
    config.point_latitude = parse_opt(lookup("data-point-lat"));
    set_parsed(&mut config.icon_size_pixels, lookup("data-icon-size"));

    config
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn parse_opt<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

fn set_parsed<T: FromStr>(slot: &mut T, value: Option<String>) {
    if let Some(parsed) = parse_opt(value) {
        *slot = parsed;
    }
}
