//! Haversine great-circle distance.
//!
//! # Reference
//!
//! Sinnott, R.W. (1984). "Virtues of the Haversine", *Sky and Telescope*
//! 68(2), 159. Spherical Earth with mean radius 6371 km; error against the
//! WGS-84 ellipsoid is below 0.5%, which is well inside the tolerance of a
//! dispatch-time estimate.

use crate::models::Coordinate;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates, in kilometers.
///
/// Pure and total over finite inputs: deterministic, commutative, and zero
/// for identical points. There is no error path; non-finite coordinates are
/// rejected at the planning boundary before any distance is evaluated.
///
/// # Examples
///
/// ```
/// use dispatch_routing::distance::haversine_km;
/// use dispatch_routing::models::Coordinate;
///
/// let origin = Coordinate::new(0.0, 0.0);
/// let one_degree_east = Coordinate::new(0.0, 1.0);
///
/// // One degree of longitude at the equator is ~111.19 km.
/// let d = haversine_km(origin, one_degree_east);
/// assert!((d - 111.19).abs() < 0.01);
///
/// // Commutative.
/// assert_eq!(d, haversine_km(one_degree_east, origin));
/// ```
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    // Clamp: rounding can push h a hair past 1 near antipodal points,
    // which would take asin out of domain.
    let c = 2.0 * h.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}
