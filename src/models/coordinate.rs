//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

/// A WGS-84 geographic coordinate in decimal degrees.
///
/// No range validation is applied; the engine only requires that both
/// components are finite numbers. An absent anchor is represented as
/// `Option<Coordinate>` at the call site, not by a sentinel value.
///
/// # Examples
///
/// ```
/// use dispatch_routing::models::Coordinate;
///
/// let c = Coordinate::new(37.5665, 126.9780);
/// assert!(c.is_finite());
/// assert!(!Coordinate::new(f64::NAN, 0.0).is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` if both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}
