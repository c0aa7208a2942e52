//! Spherical (Web) Mercator conversion between WGS84 degrees and meters.

use super::Point;
use std::f64::consts::PI;

/// Half the width of the Web Mercator world in meters (equatorial radius × π).
pub const WEB_MERCATOR_HALF_WORLD_WIDTH: f64 = 6_378_137.0 * PI;

/// Converts WGS84 degrees to Web Mercator meters.
///
/// Latitudes outside (-90, 90) give mathematically valid but meaningless
/// results; callers clamp before converting.
pub fn to_meters(longitude: f64, latitude: f64) -> Point {
    let x = longitude * WEB_MERCATOR_HALF_WORLD_WIDTH / 180.0;
    let y = ((90.0 + latitude) * PI / 360.0).tan().ln() / (PI / 180.0);
    let y = y * WEB_MERCATOR_HALF_WORLD_WIDTH / 180.0;
    Point::meters(x, y)
}

/// Converts Web Mercator meters to WGS84 degrees.
pub fn to_degrees(x: f64, y: f64) -> Point {
    let longitude = x * 180.0 / WEB_MERCATOR_HALF_WORLD_WIDTH;
    let latitude = y * 180.0 / WEB_MERCATOR_HALF_WORLD_WIDTH;
    let latitude = (latitude * (PI / 180.0)).exp().atan() / PI * 360.0 - 90.0;
    Point::degrees(longitude, latitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_world_width() {
        assert!((WEB_MERCATOR_HALF_WORLD_WIDTH - 20037508.342789244).abs() < 1e-6);
    }

    #[test]
    fn test_origin_and_antimeridian() {
        let origin = to_meters(0.0, 0.0);
        assert!(origin.x.abs() < 1e-9);
        assert!(origin.y.abs() < 1e-6);

        let east = to_meters(180.0, 0.0);
        assert!((east.x - WEB_MERCATOR_HALF_WORLD_WIDTH).abs() < 1e-6);
    }

    #[test]
    fn test_known_values() {
        let meters = to_meters(-157.916861, 21.309444);
        assert!((meters.x - -17579224.55).abs() < 0.01);
        assert!((meters.y - 2428814.96).abs() < 0.01);
    }

    #[test]
    fn test_roundtrip() {
        for &(lon, lat) in &[(29.06757, 63.98863), (53.51, 12.4), (-120.5, -45.25), (0.0, 84.0)] {
            let back = to_meters(lon, lat).to_degrees();
            assert!((back.longitude() - lon).abs() < 1e-9);
            assert!((back.latitude() - lat).abs() < 1e-9);
        }
    }
}
