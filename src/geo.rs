use serde::Serialize;
use std::f64::consts::PI;

pub const RAD: f64 = PI / 180.0; // Constant for converting degrees to radians

pub const MAX_LAT: f64 = 90.0;
pub const MAX_LON: f64 = 180.0;

/// Point on the surface of the Earth, in decimal degrees.
///
/// Coordinates are not range-checked on construction; the calculator accepts any
/// finite value and validation lives in [`crate::args`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    pub fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat_rad(&self) -> f64 {
        self.lat * RAD
    }

    pub fn lon_rad(&self) -> f64 {
        self.lon * RAD
    }
}
