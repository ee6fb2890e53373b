//! Reference ellipsoids supported by the calculator.

use crate::error::CalcError;
use serde::Serialize;
use std::fmt;

/// Reference ellipsoid, selected on the command line by `0`, `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ellipsoid {
    /// Bessel 1841 (old Japanese datum).
    #[serde(rename = "BESSEL")]
    Bessel,
    /// GRS 1980 (Japanese geodetic datum 2000, ITRF).
    #[serde(rename = "GRS-80")]
    Grs80,
    /// WGS 1984 (GPS).
    #[serde(rename = "WGS-84")]
    Wgs84,
}

impl Ellipsoid {
    pub const ALL: [Ellipsoid; 3] = [Ellipsoid::Bessel, Ellipsoid::Grs80, Ellipsoid::Wgs84];

    /// Equatorial radius (semi-major axis) in metres.
    pub fn equatorial_radius(&self) -> f64 {
        match self {
            Ellipsoid::Bessel => 6_377_397.155,
            Ellipsoid::Grs80 => 6_378_137.0,
            Ellipsoid::Wgs84 => 6_378_137.0,
        }
    }

    /// Polar radius (semi-minor axis) in metres.
    pub fn polar_radius(&self) -> f64 {
        match self {
            Ellipsoid::Bessel => 6_356_079.0,
            Ellipsoid::Grs80 => 6_356_752.314_140,
            Ellipsoid::Wgs84 => 6_356_752.314_245,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Ellipsoid::Bessel => "BESSEL",
            Ellipsoid::Grs80 => "GRS-80",
            Ellipsoid::Wgs84 => "WGS-84",
        }
    }

    /// Command-line selector of the ellipsoid.
    pub fn selector(&self) -> u8 {
        match self {
            Ellipsoid::Bessel => 0,
            Ellipsoid::Grs80 => 1,
            Ellipsoid::Wgs84 => 2,
        }
    }

    /// First eccentricity squared: (a² - b²) / a²
    pub fn eccentricity_squared(&self) -> f64 {
        let a2 = self.equatorial_radius().powi(2);
        let b2 = self.polar_radius().powi(2);
        (a2 - b2) / a2
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    /// Common denominator W = sqrt(1 - e² sin²φ) of both radii of curvature.
    pub fn curvature_denominator(&self, lat_rad: f64) -> f64 {
        (1.0 - self.eccentricity_squared() * lat_rad.sin().powi(2)).sqrt()
    }

    /// Meridional radius of curvature M at the given latitude (radians).
    pub fn meridian_radius(&self, lat_rad: f64) -> f64 {
        let w = self.curvature_denominator(lat_rad);
        self.equatorial_radius() * (1.0 - self.eccentricity_squared()) / w.powi(3)
    }

    /// Prime-vertical radius of curvature N at the given latitude (radians).
    pub fn prime_vertical_radius(&self, lat_rad: f64) -> f64 {
        self.equatorial_radius() / self.curvature_denominator(lat_rad)
    }
}

impl TryFrom<u8> for Ellipsoid {
    type Error = CalcError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            0 => Ok(Ellipsoid::Bessel),
            1 => Ok(Ellipsoid::Grs80),
            2 => Ok(Ellipsoid::Wgs84),
            other => Err(CalcError::UnknownEllipsoid(other)),
        }
    }
}

impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_selector_round_trip() {
        for ellipsoid in Ellipsoid::ALL {
            assert_eq!(Ellipsoid::try_from(ellipsoid.selector()).unwrap(), ellipsoid);
        }
        assert!(matches!(
            Ellipsoid::try_from(3),
            Err(CalcError::UnknownEllipsoid(3))
        ));
    }

    #[test]
    fn test_grs80_eccentricity() {
        // Published first eccentricity of GRS80
        assert_relative_eq!(Ellipsoid::Grs80.eccentricity(), 0.081_819_191_042_8, epsilon = 1e-10);
    }

    #[test]
    fn test_radii_of_curvature_at_equator_and_pole() {
        let e = Ellipsoid::Wgs84;
        let a = e.equatorial_radius();
        let b = e.polar_radius();
        // At the equator N = a and M = b² / a
        assert_relative_eq!(e.prime_vertical_radius(0.0), a, epsilon = 1e-6);
        assert_relative_eq!(e.meridian_radius(0.0), b * b / a, epsilon = 1e-3);
        // At the pole both equal a² / b
        let pole = std::f64::consts::FRAC_PI_2;
        assert_relative_eq!(e.prime_vertical_radius(pole), a * a / b, epsilon = 1e-3);
        assert_relative_eq!(e.meridian_radius(pole), a * a / b, epsilon = 1e-3);
    }
}
