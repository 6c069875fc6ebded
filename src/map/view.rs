//! Map view: projected center and zoom bounds

use crate::core::geo::Point;

/// The view the map renders: a projected center plus zoom limits. The
/// engine animates within these; the widget only ever re-targets the
/// center (recenter control).
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    center: Point,
    zoom: u8,
    min_zoom: u8,
    max_zoom: u8,
}

impl View {
    pub fn new(center: Point, zoom: u8, min_zoom: u8, max_zoom: u8) -> Self {
        Self {
            center,
            zoom,
            min_zoom,
            max_zoom,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Re-targets the view center. Idempotent per call.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }
}
