//! # Pinlet
//!
//! An embeddable slippy map widget: one map, one icon marker, one
//! toggleable popup.
//!
//! Given a host page element, a tile-source URL, a center coordinate and an
//! optional point of interest, [`Widget::mount`] wires up a tile layer, a
//! bottom-center anchored icon overlay and a popup overlay whose visibility
//! follows user gestures (icon click shows, map click or pan hides).
//!
//! The host document is reached through the [`dom::HostPage`] seam, so the
//! widget can run against a real browser document (feature `wasm`) or the
//! in-memory [`dom::memory::MemoryPage`] used by tests and headless
//! embedders. The rendering engine proper (tile fetching, compositing) is
//! an external collaborator; this crate owns the composition rules and the
//! overlay interaction state machine.

pub mod core;
pub mod dom;
pub mod layers;
pub mod map;
pub mod prelude;
pub mod stylesheet;
pub mod ui;
pub mod widget;

// Re-export public API
pub use crate::core::{
    attrs::config_from_attributes,
    config::WidgetConfig,
    geo::{from_lon_lat, LonLat, Point, TileCoord},
};

pub use crate::dom::{ElementHandle, HostPage, StylesheetLink};

pub use crate::layers::tile::{compose_attribution, TileLayer, OSM_ATTRIBUTION};

pub use crate::map::{events::MapEvent, view::View, MapHandle};

pub use crate::ui::{
    control::CenterControl,
    overlay::{Gesture, Overlay, OverlayController, PopupState, Positioning},
};

pub use crate::widget::{init, Widget};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, WidgetError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// A mandatory host element id did not resolve. Fatal: nothing renders.
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// The configuration violates an invariant (zoom range, JSON shape).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A browser-side call failed.
    #[cfg(feature = "wasm")]
    #[error("host page error: {0}")]
    Host(String),
}

/// Error type alias for convenience
pub type Error = WidgetError;
