//! Rendering of a computed distance for the terminal or as JSON.

use crate::args::DistanceRequest;
use crate::distance::DistanceResult;
use crate::ellipsoid::Ellipsoid;
use crate::error::CalcError;
use crate::geo::GeoPoint;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Report {
    pub ellipsoid: Ellipsoid,
    pub point1: GeoPoint,
    pub point2: GeoPoint,
    #[serde(flatten)]
    pub distance: DistanceResult,
}

impl Report {
    pub fn new(request: &DistanceRequest, distance: DistanceResult) -> Self {
        Self {
            ellipsoid: request.ellipsoid,
            point1: request.p1,
            point2: request.p2,
            distance,
        }
    }
}

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("Mode        : {}\n", report.ellipsoid));
    out.push_str(&format!("Latitude (1): {:13.8} degrees\n", report.point1.lat()));
    out.push_str(&format!("Longitude(1): {:13.8} degrees\n", report.point1.lon()));
    out.push_str(&format!("Latitude (2): {:13.8} degrees\n", report.point2.lat()));
    out.push_str(&format!("Longitude(2): {:13.8} degrees\n", report.point2.lon()));
    out.push_str(&format!(
        "Distance = {} m ( {} m )",
        format_meters(report.distance.ellipsoidal_distance),
        format_meters(report.distance.spherical_distance)
    ));
    out
}

/// Shortest round-trip form, keeping a trailing `.0` on whole numbers.
fn format_meters(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

pub fn render_json(report: &Report) -> Result<String, CalcError> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            ellipsoid: Ellipsoid::Grs80,
            point1: GeoPoint::latlon(35.5382, 132.9998),
            point2: GeoPoint::latlon(-8.5, -179.25),
            distance: DistanceResult {
                ellipsoidal_distance: 1234.5,
                spherical_distance: 1200.25,
            },
        }
    }

    #[test]
    fn test_text_layout() {
        let expected = "\
Mode        : GRS-80
Latitude (1):   35.53820000 degrees
Longitude(1):  132.99980000 degrees
Latitude (2):   -8.50000000 degrees
Longitude(2): -179.25000000 degrees
Distance = 1234.5 m ( 1200.25 m )";
        assert_eq!(render_text(&sample()), expected);
    }

    #[test]
    fn test_whole_distances_keep_decimal_point() {
        let mut report = sample();
        report.distance = DistanceResult {
            ellipsoidal_distance: 0.0,
            spherical_distance: 111_319.0,
        };
        let text = render_text(&report);
        assert!(text.ends_with("Distance = 0.0 m ( 111319.0 m )"), "{text}");
    }

    #[test]
    fn test_json_fields() {
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&sample()).unwrap()).unwrap();
        assert_eq!(json["ellipsoid"], "GRS-80");
        assert_eq!(json["point1"]["lat"], 35.5382);
        assert_eq!(json["point2"]["lon"], -179.25);
        assert_eq!(json["ellipsoidal_distance"], 1234.5);
        assert_eq!(json["spherical_distance"], 1200.25);
    }
}
