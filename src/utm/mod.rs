//! Universal Transverse Mercator coordinates.

pub mod projection;

use crate::coord::{Coordinate, Point};
use crate::error::MgrsError;
use crate::gzd::constants::NORTH_BAND_LETTER;
use crate::gzd::{central_meridian, normalize_longitude, validate_zone_number, zone_number_at};
use crate::mgrs::Mgrs;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

lazy_static! {
    // <zone> <N|S> <easting> <northing>
    static ref UTM_PATTERN: Regex =
        Regex::new(r"(?i)^(\d{1,2})\s*([NS])\s+(\d+(?:\.\d*)?)\s+(\d+(?:\.\d*)?)$")
            .expect("UTM pattern is valid");
}

/// Hemisphere of a UTM coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// North for latitudes at or above the equator.
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude >= 0.0 {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }

    /// North for band letters N and above.
    pub fn from_band(letter: char) -> Self {
        if letter >= NORTH_BAND_LETTER {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
        }
    }
}

impl std::fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A UTM coordinate: zone, hemisphere, easting and northing in meters.
///
/// Eastings include the 500 000 m false easting and southern northings the
/// 10 000 000 m false northing.
///
/// # Example
/// ```
/// use mgrs_rs::{Hemisphere, Utm};
///
/// # fn main() -> Result<(), mgrs_rs::MgrsError> {
/// let utm = Utm::parse("33 N 474596 8643594")?;
/// assert_eq!(utm.zone(), 33);
/// assert_eq!(utm.hemisphere(), Hemisphere::North);
/// assert_eq!(utm.to_mgrs().to_string(), "33XVG7459643594");
///
/// let point = utm.to_point();
/// assert!((point.longitude() - 13.9173539).abs() < 1e-6);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Utm {
    zone: u8,
    hemisphere: Hemisphere,
    easting: f64,
    northing: f64,
}

impl Utm {
    /// Creates a UTM coordinate, validating the zone and the grid values.
    pub fn new(
        zone: u8,
        hemisphere: Hemisphere,
        easting: f64,
        northing: f64,
    ) -> Result<Self, MgrsError> {
        let zone = validate_zone_number(zone as i64)?;
        for (name, value) in [("easting", easting), ("northing", northing)] {
            if !value.is_finite() || value < 0.0 {
                return Err(MgrsError::OutOfRange(format!("{} {}", name, value)));
            }
        }
        Ok(Self::from_parts(zone, hemisphere, easting, northing))
    }

    pub(crate) fn from_parts(zone: u8, hemisphere: Hemisphere, easting: f64, northing: f64) -> Self {
        Self {
            zone,
            hemisphere,
            easting,
            northing,
        }
    }

    /// Projects a point into the zone that contains it.
    pub fn from_point(point: &Point) -> Self {
        let point = point.to_degrees();
        let longitude = normalize_longitude(point.longitude());
        let zone = zone_number_at(longitude, point.latitude());
        Self::project(longitude, point.latitude(), zone)
    }

    /// Projects a point into the given zone, which need not contain it.
    pub fn from_point_in_zone(point: &Point, zone: u8) -> Result<Self, MgrsError> {
        let zone = validate_zone_number(zone as i64)?;
        let point = point.to_degrees();
        Ok(Self::project(
            normalize_longitude(point.longitude()),
            point.latitude(),
            zone,
        ))
    }

    /// Projects a WGS84 coordinate into the zone that contains it.
    pub fn from_wgs84(coord: &impl Coordinate) -> Self {
        Self::from_point(&Point::from_wgs84(coord))
    }

    fn project(longitude: f64, latitude: f64, zone: u8) -> Self {
        let hemisphere = Hemisphere::from_latitude(latitude);
        let (easting, northing) =
            projection::forward(longitude, latitude, central_meridian(zone), hemisphere);
        Self::from_parts(zone, hemisphere, easting, northing)
    }

    pub fn zone(&self) -> u8 {
        self.zone
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Unprojects to a WGS84 point in degrees.
    pub fn to_point(&self) -> Point {
        let (longitude, latitude) = projection::inverse(
            self.easting,
            self.northing,
            central_meridian(self.zone),
            self.hemisphere,
        );
        Point::degrees(longitude, latitude)
    }

    /// Converts to a 1 m MGRS reference.
    ///
    /// The point is re-encoded, so the grid zone comes from the zone table
    /// rather than from this coordinate's zone: a zone 31 coordinate inside
    /// 32V gives a 32V reference.
    pub fn to_mgrs(&self) -> Mgrs {
        Mgrs::from_point(&self.to_point())
    }

    /// Parses `"<zone> <N|S> <easting> <northing>"`, ignoring case and extra
    /// whitespace.
    pub fn parse(text: &str) -> Result<Self, MgrsError> {
        let invalid = || MgrsError::InvalidUtm(text.to_string());
        let Some(caps) = UTM_PATTERN.captures(text.trim()) else {
            debug!("Rejected UTM text {:?}", text);
            return Err(invalid());
        };

        let zone: i64 = caps[1].parse().map_err(|_| invalid())?;
        let Ok(zone) = validate_zone_number(zone) else {
            debug!("Rejected UTM zone {} in {:?}", zone, text);
            return Err(invalid());
        };
        let hemisphere = match &caps[2] {
            "N" | "n" => Hemisphere::North,
            _ => Hemisphere::South,
        };
        let easting: f64 = caps[3].parse().map_err(|_| invalid())?;
        let northing: f64 = caps[4].parse().map_err(|_| invalid())?;

        Self::new(zone, hemisphere, easting, northing).map_err(|_| invalid())
    }
}

/// Returns true if `text` parses as a UTM coordinate.
pub fn is_utm(text: &str) -> bool {
    Utm::parse(text).is_ok()
}

// At most two decimals, trailing zeros dropped
fn format_meters(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

impl std::fmt::Display for Utm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.zone,
            self.hemisphere,
            format_meters(self.easting),
            format_meters(self.northing)
        )
    }
}

impl FromStr for Utm {
    type Err = MgrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_type::GridType;

    #[test]
    fn test_hemisphere() {
        assert_eq!(Hemisphere::from_latitude(0.0), Hemisphere::North);
        assert_eq!(Hemisphere::from_latitude(-0.1), Hemisphere::South);
        assert_eq!(Hemisphere::from_band('N'), Hemisphere::North);
        assert_eq!(Hemisphere::from_band('M'), Hemisphere::South);
        assert_eq!(Hemisphere::South.to_string(), "S");
    }

    #[test]
    fn test_parse() -> Result<(), MgrsError> {
        let utm = Utm::parse("33 N 474596 8643594")?;
        assert_eq!(utm.zone(), 33);
        assert_eq!(utm.hemisphere(), Hemisphere::North);
        assert_eq!(utm.easting(), 474596.0);
        assert_eq!(utm.northing(), 8643594.0);

        let utm: Utm = "  4s   612340.66 2356781.2 ".parse()?;
        assert_eq!(utm.zone(), 4);
        assert_eq!(utm.hemisphere(), Hemisphere::South);
        assert_eq!(utm.easting(), 612340.66);

        assert!(is_utm("33N 474596. 8643594"));
        Ok(())
    }

    #[test]
    fn test_parse_rejects() {
        for text in [
            "",
            "33 N",
            "33 X 474596 8643594",
            "0 N 474596 8643594",
            "61 N 474596 8643594",
            "333 N 474596 8643594",
            "33 N -474596 8643594",
            "33 N 474596 8643594 1",
            "33XVG7459643594",
        ] {
            assert!(!is_utm(text), "{text:?} should be rejected");
            assert_eq!(Utm::parse(text), Err(MgrsError::InvalidUtm(text.to_string())));
        }
    }

    #[test]
    fn test_new_validates() {
        assert!(Utm::new(33, Hemisphere::North, 474596.0, 8643594.0).is_ok());
        assert_eq!(
            Utm::new(0, Hemisphere::North, 474596.0, 8643594.0),
            Err(MgrsError::InvalidZoneNumber(0))
        );
        assert!(Utm::new(33, Hemisphere::North, f64::NAN, 0.0).is_err());
        assert!(Utm::new(33, Hemisphere::North, 1.0, -1.0).is_err());
    }

    #[test]
    fn test_display() -> Result<(), MgrsError> {
        let utm = Utm::new(33, Hemisphere::North, 474596.26, 8643594.54)?;
        assert_eq!(utm.to_string(), "33 N 474596.26 8643594.54");

        let utm = Utm::new(33, Hemisphere::North, 474590.0, 8643590.0)?;
        assert_eq!(utm.to_string(), "33 N 474590 8643590");

        let utm = Utm::new(52, Hemisphere::South, 489386.4656, 1118364.2)?;
        assert_eq!(utm.to_string(), "52 S 489386.47 1118364.2");
        Ok(())
    }

    #[test]
    fn test_from_point() {
        let utm = Utm::from_point(&Point::degrees(-157.916861, 21.309444));
        assert_eq!(utm.zone(), 4);
        assert_eq!(utm.hemisphere(), Hemisphere::North);
        assert!((utm.easting() - 612340.6596).abs() < 1e-3);
        assert!((utm.northing() - 2356781.1963).abs() < 1e-3);

        let from_meters = Utm::from_point(&Point::degrees(-157.916861, 21.309444).to_meters());
        assert!((from_meters.easting() - utm.easting()).abs() < 1e-6);

        let wrapped = Utm::from_wgs84(&(-157.916861 + 360.0, 21.309444));
        assert_eq!(wrapped.zone(), 4);
        assert!((wrapped.easting() - utm.easting()).abs() < 1e-6);
    }

    #[test]
    fn test_from_point_in_zone() -> Result<(), MgrsError> {
        let point = Point::degrees(0.0, 0.0);
        assert_eq!(point.to_utm().zone(), 31);
        assert!((point.to_utm().easting() - 166021.4431).abs() < 1e-3);

        let utm = point.to_utm_in_zone(30)?;
        assert_eq!(utm.zone(), 30);
        assert!((utm.easting() - 833978.5569).abs() < 1e-3);
        assert!(point.to_utm_in_zone(61).is_err());
        Ok(())
    }

    #[test]
    fn test_to_point() -> Result<(), MgrsError> {
        let point = Utm::parse("33 N 474596 8643594")?.to_point();
        assert!((point.longitude() - 13.9173539).abs() < 1e-6);
        assert!((point.latitude() - 77.8654996).abs() < 1e-6);
        assert!(point.is_degrees());
        Ok(())
    }

    #[test]
    fn test_roundtrip_through_point() {
        for (longitude, latitude) in [(13.9173973, 77.8654908), (-120.5, -45.25), (53.51, 12.4)] {
            let point = Point::degrees(longitude, latitude);
            let back = point.to_utm().to_point();
            assert!((back.longitude() - longitude).abs() < 1e-9);
            assert!((back.latitude() - latitude).abs() < 1e-9);
        }
    }

    #[test]
    fn test_to_mgrs() -> Result<(), MgrsError> {
        let mgrs = Utm::parse("33 N 474596 8643594")?.to_mgrs();
        assert_eq!(mgrs.to_string(), "33XVG7459643594");

        let mgrs = Utm::parse("4 N 612340.66 2356781.2")?.to_mgrs();
        assert_eq!(mgrs.to_string(), "4QFJ1234056781");
        Ok(())
    }

    #[test]
    fn test_to_mgrs_uses_zone_table() -> Result<(), MgrsError> {
        // 32X does not exist; the point belongs to 31X
        let utm = Utm::new(32, Hemisphere::North, 400000.0, 8643594.0)?;
        let mgrs = utm.to_mgrs();
        assert_eq!(mgrs.to_string(), "31XEG4105440574");
        assert_eq!(mgrs, Mgrs::from_point(&utm.to_point()));

        // zone 31 projection of a point inside 32V
        let point = Point::degrees(4.5, 60.0);
        let utm = point.to_utm_in_zone(31)?;
        assert_eq!(utm.zone(), 31);
        let mgrs = utm.to_mgrs();
        assert_eq!(mgrs.zone(), 32);
        assert_eq!(mgrs.band(), 'V');
        assert!(mgrs.grid_zone().bounds.contains(&utm.to_point()));
        assert_eq!(mgrs, Mgrs::from_point(&utm.to_point()));
        assert_eq!(mgrs.coordinate_at(GridType::Kilometer), "32VKM4959");

        // eastings outside the lettered columns still encode
        let utm = Utm::new(33, Hemisphere::North, 99999.0, 8643594.0)?;
        assert_eq!(utm.to_mgrs(), Mgrs::from_point(&utm.to_point()));
        Ok(())
    }

    #[test]
    fn test_serde() -> Result<(), serde_json::Error> {
        let utm = Utm::from_parts(33, Hemisphere::North, 474596.0, 8643594.0);
        let json = serde_json::to_string(&utm)?;
        assert_eq!(
            json,
            r#"{"zone":33,"hemisphere":"North","easting":474596.0,"northing":8643594.0}"#
        );
        let back: Utm = serde_json::from_str(&json)?;
        assert_eq!(back, utm);
        Ok(())
    }
}
