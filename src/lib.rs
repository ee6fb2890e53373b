//! # calc-dist
//!
//! Distance between two points on the Earth's surface, given their latitude and
//! longitude and a reference ellipsoid (Bessel, GRS80 or WGS84).
//!
//! The main components are:
//! - [`Ellipsoid`]: the supported reference ellipsoids and their radii of curvature.
//! - [`compute`]: the calculator returning both the ellipsoidal (Hubeny) and the
//!   spherical (great-circle) distance.
//! - [`args::validate`]: turns the raw command-line strings into a [`DistanceRequest`].
//! - [`report`]: text and JSON output of a result.

pub mod args;
pub mod distance;
pub mod ellipsoid;
pub mod error;
pub mod geo;
pub mod report;
pub mod text;

pub use args::{DistanceRequest, RawArgs};
pub use distance::{compute, compute_request, DistanceResult};
pub use ellipsoid::Ellipsoid;
pub use error::{ArgError, CalcError};
pub use geo::GeoPoint;
