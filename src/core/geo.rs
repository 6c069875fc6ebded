use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Web Mercator projection constants
const EARTH_RADIUS: f64 = 6378137.0;
const MAX_LATITUDE: f64 = 85.0511287798;

/// A geographical coordinate as the host hands it to us: longitude first,
/// matching the `(centerLongitude, centerLatitude)` configuration order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    /// Creates a new LonLat coordinate
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lon >= -180.0 && self.lon <= 180.0
    }

    /// Clamps latitude to the range the projection can represent
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }
}

impl Default for LonLat {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A point in the internal rendering coordinate system (EPSG:3857 meters)
/// or in screen pixels, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Projects an external (longitude, latitude) pair into Web Mercator
/// (EPSG:3857). Pure function boundary to the rendering engine.
pub fn from_lon_lat(coord: LonLat) -> Point {
    let lat = LonLat::clamp_lat(coord.lat);
    let x = coord.lon.to_radians() * EARTH_RADIUS;
    let y = ((PI / 4.0 + lat.to_radians() / 2.0).tan().ln()) * EARTH_RADIUS;
    Point::new(x, y)
}

/// Inverse of [`from_lon_lat`]
pub fn to_lon_lat(point: Point) -> LonLat {
    let lon = (point.x / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (point.y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
    LonLat::new(lon, lat)
}

/// A tile coordinate in the slippy map tile system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Creates a tile coordinate from a LonLat and zoom level
    pub fn from_lon_lat(coord: &LonLat, zoom: u8) -> Self {
        let lat_rad = LonLat::clamp_lat(coord.lat).to_radians();
        let n = 2_f64.powi(zoom as i32);

        let x = ((coord.lon + 180.0) / 360.0 * n).floor() as u32;
        let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n).floor() as u32;

        Self::new(x, y, zoom)
    }

    /// Checks if the tile is valid for its zoom level
    pub fn is_valid(&self) -> bool {
        let max_coord = 2_u32.pow(self.z as u32);
        self.x < max_coord && self.y < max_coord
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lon_lat_creation() {
        let coord = LonLat::new(-74.0060, 40.7128);
        assert_eq!(coord.lon, -74.0060);
        assert_eq!(coord.lat, 40.7128);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_projection_origin() {
        let origin = from_lon_lat(LonLat::new(0.0, 0.0));
        assert!(origin.x.abs() < 1e-9);
        assert!(origin.y.abs() < 1e-9);
    }

    #[test]
    fn test_projection_known_point() {
        // (10 E, 20 N) in EPSG:3857
        let p = from_lon_lat(LonLat::new(10.0, 20.0));
        assert!((p.x - 1_113_194.9079).abs() < 0.001);
        assert!((p.y - 2_273_030.9270).abs() < 0.001);
    }

    #[test]
    fn test_projection_round_trip() {
        let coord = LonLat::new(13.405, 52.52);
        let back = to_lon_lat(from_lon_lat(coord));
        assert!((back.lon - coord.lon).abs() < 1e-9);
        assert!((back.lat - coord.lat).abs() < 1e-9);
    }

    #[test]
    fn test_latitude_clamped() {
        let pole = from_lon_lat(LonLat::new(0.0, 90.0));
        assert!(pole.y.is_finite());
    }

    #[test]
    fn test_tile_coord_from_lon_lat() {
        let tile = TileCoord::from_lon_lat(&LonLat::new(13.405, 52.52), 10);
        assert!(tile.is_valid());
        assert_eq!(tile.z, 10);
        assert_eq!(tile.x, 550);
        assert_eq!(tile.y, 335);
    }
}
