//! Map composition
//!
//! Builds the [`MapHandle`] from a validated configuration: sizes the host
//! element, assembles the tile layer with its attribution and the view from
//! the projected center and zoom bounds.

use crate::core::config::WidgetConfig;
use crate::core::geo::from_lon_lat;
use crate::dom::{ElementHandle, HostPage};
use crate::layers::tile::{compose_attribution, TileLayer};
use crate::map::view::View;
use crate::map::MapHandle;
use crate::{Result, WidgetError};

/// Composes the map for `config`. Fails with [`WidgetError::ElementNotFound`]
/// when the map element id does not resolve; nothing can render without it.
pub fn compose<P: HostPage>(page: &P, config: &WidgetConfig) -> Result<MapHandle<P::Element>> {
    let target = page
        .element_by_id(&config.map_element_id)
        .ok_or_else(|| WidgetError::ElementNotFound(config.map_element_id.clone()))?;

    apply_size(&target, config.height.as_deref(), config.width.as_deref());

    let attributions = compose_attribution(
        config.extra_copyright_url.as_deref(),
        config.extra_copyright_name.as_deref(),
    );
    let tile_layer = TileLayer::new(&config.tile_base_url, attributions);

    let view = View::new(
        from_lon_lat(config.center()),
        config.zoom,
        config.min_zoom,
        config.max_zoom,
    );

    Ok(MapHandle::new(target, tile_layer, view))
}

/// Mutual-fallback sizing: an unset height takes the width and vice versa.
/// Both unset means the element renders zero-size; that is the host page's
/// input, not an error.
fn apply_size<E: ElementHandle>(target: &E, height: Option<&str>, width: Option<&str>) {
    let resolved_height = height.or(width);
    let resolved_width = width.or(height);
    if let Some(value) = resolved_height {
        target.set_style("height", value);
    }
    if let Some(value) = resolved_width {
        target.set_style("width", value);
    }
}
