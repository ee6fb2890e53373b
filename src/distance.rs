//! Distance between two geographic points.
//!
//! Two estimates are produced for every pair of points:
//! - the ellipsoidal distance given by Hubeny's formula, a planar approximation
//!   using the meridional and prime-vertical radii of curvature at the mean
//!   latitude. It is accurate for short and medium separations and degrades for
//!   very long or near-antipodal ones; no correction is attempted.
//! - the great-circle distance on a sphere whose radius is the equatorial radius
//!   of the selected ellipsoid (spherical law of cosines).

use crate::args::DistanceRequest;
use crate::ellipsoid::Ellipsoid;
use crate::error::CalcError;
use crate::geo::GeoPoint;
use log::{debug, trace};
use serde::Serialize;

/// Both distance estimates, in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceResult {
    pub ellipsoidal_distance: f64,
    pub spherical_distance: f64,
}

/// Computes the ellipsoidal and spherical distances between `p1` and `p2`.
///
/// Coordinates are not range-checked. Out-of-range values still give a number;
/// only non-finite input can make the computation fail.
pub fn compute(
    ellipsoid: Ellipsoid,
    p1: &GeoPoint,
    p2: &GeoPoint,
) -> Result<DistanceResult, CalcError> {
    let ellipsoidal = hubeny_distance(ellipsoid, p1, p2);
    let spherical = great_circle_distance(ellipsoid, p1, p2);

    if !ellipsoidal.is_finite() || !spherical.is_finite() {
        return Err(CalcError::NonFinite {
            ellipsoidal,
            spherical,
        });
    }

    Ok(DistanceResult {
        ellipsoidal_distance: ellipsoidal,
        spherical_distance: spherical,
    })
}

pub fn compute_request(request: &DistanceRequest) -> Result<DistanceResult, CalcError> {
    compute(request.ellipsoid, &request.p1, &request.p2)
}

/// Hubeny's approximation of the distance on the ellipsoid.
pub fn hubeny_distance(ellipsoid: Ellipsoid, p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let d_lon = p1.lon_rad() - p2.lon_rad();
    let d_lat = p1.lat_rad() - p2.lat_rad();
    let mean_lat = (p1.lat_rad() + p2.lat_rad()) / 2.0;

    let m = ellipsoid.meridian_radius(mean_lat);
    let n = ellipsoid.prime_vertical_radius(mean_lat);

    debug!(
        "{}: e = {}, W = {}, M = {}, N = {}",
        ellipsoid,
        ellipsoid.eccentricity(),
        ellipsoid.curvature_denominator(mean_lat),
        m,
        n
    );

    let north = d_lat * m;
    let east = d_lon * n * mean_lat.cos();
    (north * north + east * east).sqrt()
}

/// Great-circle distance on a sphere of the ellipsoid's equatorial radius.
pub fn great_circle_distance(ellipsoid: Ellipsoid, p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let (lat1, lat2) = (p1.lat_rad(), p2.lat_rad());
    let cos_angle = lat1.sin() * lat2.sin()
        + lat1.cos() * lat2.cos() * (p2.lon_rad() - p1.lon_rad()).cos();

    debug!("central angle cosine = {}", cos_angle);

    // Rounding can push the cosine just past ±1 for identical or antipodal points.
    let clamped = cos_angle.clamp(-1.0, 1.0);
    if clamped != cos_angle {
        trace!("central angle cosine {} clamped to {}", cos_angle, clamped);
    }

    ellipsoid.equatorial_radius() * clamped.acos()
}
