//! Validation of the five positional command-line arguments.
//!
//! The raw strings are matched against the accepted syntax first (sign, integer
//! part in range, at most 8 fractional digits) and then range-checked
//! numerically, so `90.5` or `180.1` are rejected even though their integer
//! part is allowed by the pattern.

use crate::ellipsoid::Ellipsoid;
use crate::error::ArgError;
use crate::geo::{GeoPoint, MAX_LAT, MAX_LON};
use regex::Regex;
use std::sync::LazyLock;

static ELLIPSOID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[012]$").expect("valid ellipsoid pattern"));

static LAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d|[1-8]\d|90)(\.\d{1,8})?$").expect("valid latitude pattern")
});

static LON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d{1,2}|1[0-7]\d|180)(\.\d{1,8})?$").expect("valid longitude pattern")
});

pub const USAGE: &str = "\
USAGE : calc-dist Type Lat1 Lon1 Lat2 Lon2
Type       : 0:BESSEL, 1:GRS80, 2:WGS84
Lat1, Lat2 :  -90.00000000 -  [+]90.00000000
Lon1, Lon2 : -180.00000000 - [+]180.00000000";

/// Unvalidated positional arguments, in command-line order.
#[derive(Debug, Clone)]
pub struct RawArgs {
    pub ellipsoid: String,
    pub lat1: String,
    pub lon1: String,
    pub lat2: String,
    pub lon2: String,
}

impl RawArgs {
    /// Builds the raw argument set from a list of exactly five values.
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Result<Self, ArgError> {
        match values {
            [ellipsoid, lat1, lon1, lat2, lon2] => Ok(Self {
                ellipsoid: ellipsoid.as_ref().to_string(),
                lat1: lat1.as_ref().to_string(),
                lon1: lon1.as_ref().to_string(),
                lat2: lat2.as_ref().to_string(),
                lon2: lon2.as_ref().to_string(),
            }),
            _ => Err(ArgError::WrongCount(values.len())),
        }
    }
}

/// Validated input of a single distance calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceRequest {
    pub ellipsoid: Ellipsoid,
    pub p1: GeoPoint,
    pub p2: GeoPoint,
}

pub fn validate(raw: &RawArgs) -> Result<DistanceRequest, ArgError> {
    let ellipsoid = parse_ellipsoid(&raw.ellipsoid)?;
    let lat1 = parse_lat("Lat1", &raw.lat1)?;
    let lon1 = parse_lon("Lon1", &raw.lon1)?;
    let lat2 = parse_lat("Lat2", &raw.lat2)?;
    let lon2 = parse_lon("Lon2", &raw.lon2)?;

    Ok(DistanceRequest {
        ellipsoid,
        p1: GeoPoint::latlon(lat1, lon1),
        p2: GeoPoint::latlon(lat2, lon2),
    })
}

fn parse_ellipsoid(value: &str) -> Result<Ellipsoid, ArgError> {
    let invalid = || ArgError::Ellipsoid(value.to_string());
    if !ELLIPSOID_RE.is_match(value) {
        return Err(invalid());
    }
    let selector = value.parse::<u8>().map_err(|_| invalid())?;
    Ellipsoid::try_from(selector).map_err(|_| invalid())
}

fn parse_lat(name: &'static str, value: &str) -> Result<f64, ArgError> {
    let invalid = || ArgError::Latitude {
        name,
        value: value.to_string(),
    };
    parse_degrees(value, &LAT_RE, MAX_LAT).ok_or_else(invalid)
}

fn parse_lon(name: &'static str, value: &str) -> Result<f64, ArgError> {
    let invalid = || ArgError::Longitude {
        name,
        value: value.to_string(),
    };
    parse_degrees(value, &LON_RE, MAX_LON).ok_or_else(invalid)
}

fn parse_degrees(value: &str, pattern: &Regex, max: f64) -> Option<f64> {
    if !pattern.is_match(value) {
        return None;
    }
    let degrees = value.parse::<f64>().ok()?;
    (degrees.abs() <= max).then_some(degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(values: [&str; 5]) -> RawArgs {
        RawArgs::from_values(&values).unwrap()
    }

    #[test]
    fn test_accepts_documented_example() {
        let request = validate(&raw(["1", "35.5382", "132.9998", "89.9999", "179.9999"])).unwrap();
        assert_eq!(request.ellipsoid, Ellipsoid::Grs80);
        assert_eq!(request.p1, GeoPoint::latlon(35.5382, 132.9998));
        assert_eq!(request.p2, GeoPoint::latlon(89.9999, 179.9999));
    }

    #[test]
    fn test_accepts_signs_and_bounds() {
        let request = validate(&raw(["0", "-90", "+180", "90.00000000", "-180.0"])).unwrap();
        assert_eq!(request.p1, GeoPoint::latlon(-90.0, 180.0));
        assert_eq!(request.p2, GeoPoint::latlon(90.0, -180.0));
    }

    #[test]
    fn test_rejects_bad_ellipsoid() {
        for value in ["3", "01", "-1", "a", ""] {
            assert_eq!(
                validate(&raw([value, "0", "0", "0", "0"])),
                Err(ArgError::Ellipsoid(value.to_string()))
            );
        }
    }

    #[test]
    fn test_rejects_out_of_range_latitude() {
        for value in ["91", "90.5", "100", "-90.00000001", "1.123456789", "1.", ".5", "1e1"] {
            assert!(
                matches!(
                    validate(&raw(["1", value, "0", "0", "0"])),
                    Err(ArgError::Latitude { name: "Lat1", .. })
                ),
                "latitude {value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_out_of_range_longitude() {
        for value in ["181", "180.1", "200", "|10", "0x10", "12,5"] {
            assert!(
                matches!(
                    validate(&raw(["1", "0", "0", "0", value])),
                    Err(ArgError::Longitude { name: "Lon2", .. })
                ),
                "longitude {value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_wrong_count() {
        assert_eq!(
            RawArgs::from_values(&["1", "0", "0"]).unwrap_err(),
            ArgError::WrongCount(3)
        );
    }
}
