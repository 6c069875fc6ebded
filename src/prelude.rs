//! Prelude module for common pinlet types and traits
//!
//! Re-exports the most commonly used items for easy importing with
//! `use pinlet::prelude::*;`

pub use crate::core::{
    attrs::config_from_attributes,
    config::{WidgetConfig, DEFAULT_STYLESHEET_HREF, DEFAULT_TILE_BASE_URL, MAX_ZOOM_LEVEL},
    geo::{from_lon_lat, to_lon_lat, LonLat, Point, TileCoord},
};

pub use crate::dom::{memory::MemoryPage, ElementHandle, HostPage, StylesheetLink};

pub use crate::layers::tile::{compose_attribution, TileLayer, OSM_ATTRIBUTION};

pub use crate::map::{
    composer::compose,
    events::{EventManager, MapEvent},
    view::View,
    MapHandle,
};

pub use crate::ui::{
    control::CenterControl,
    overlay::{popup_offset, Gesture, Overlay, OverlayController, PopupState, Positioning},
};

pub use crate::stylesheet::ensure_loaded;

pub use crate::widget::{init, Widget};

#[cfg(feature = "wasm")]
pub use crate::dom::web::WebPage;

pub use crate::{Error as WidgetError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
