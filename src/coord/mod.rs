mod bounds;
pub mod mercator;

pub use bounds::Bounds;
pub use mercator::{WEB_MERCATOR_HALF_WORLD_WIDTH, to_degrees, to_meters};

use crate::error::MgrsError;
use crate::mgrs::Mgrs;
use crate::utm::Utm;
use serde::{Deserialize, Serialize};

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples, `geo_types::Point<f64>` and [`Point`].
/// This allows functions to accept either type.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude or easting).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude or northing).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for geo_types::Point<f64> {
    fn x(&self) -> f64 {
        geo_types::Point::x(*self)
    }
    fn y(&self) -> f64 {
        geo_types::Point::y(*self)
    }
}

impl Coordinate for Point {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

/// Unit of a [`Point`] or [`Bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    /// WGS84 longitude/latitude in degrees
    #[default]
    Degrees,
    /// Web Mercator (EPSG:3857) meters
    Meters,
}

/// A coordinate pair tagged with its unit.
///
/// In degrees `x` is the longitude and `y` the latitude. Values are not
/// clamped; grid conversions normalize and clamp as they need to.
///
/// # Example
/// ```
/// use mgrs_rs::{Point, Unit};
///
/// let point = Point::degrees(13.9173973, 77.8654908);
/// let meters = point.to_meters();
/// assert_eq!(meters.unit, Unit::Meters);
///
/// let back = meters.to_degrees();
/// assert!((back.latitude() - point.latitude()).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Longitude in degrees or x in meters
    pub x: f64,
    /// Latitude in degrees or y in meters
    pub y: f64,
    /// Unit of `x` and `y`
    pub unit: Unit,
}

impl Point {
    pub fn new(x: f64, y: f64, unit: Unit) -> Self {
        Self { x, y, unit }
    }

    /// Creates a point from WGS84 longitude and latitude.
    pub fn degrees(longitude: f64, latitude: f64) -> Self {
        Self::new(longitude, latitude, Unit::Degrees)
    }

    /// Creates a point from Web Mercator meters.
    pub fn meters(x: f64, y: f64) -> Self {
        Self::new(x, y, Unit::Meters)
    }

    /// Creates a degree point from anything implementing [`Coordinate`].
    pub fn from_wgs84(coord: &impl Coordinate) -> Self {
        Self::degrees(coord.x(), coord.y())
    }

    pub fn longitude(&self) -> f64 {
        self.x
    }

    pub fn latitude(&self) -> f64 {
        self.y
    }

    pub fn is_degrees(&self) -> bool {
        self.unit == Unit::Degrees
    }

    pub fn is_meters(&self) -> bool {
        self.unit == Unit::Meters
    }

    /// Converts the point to `unit`, returning it unchanged if already there.
    pub fn to_unit(&self, unit: Unit) -> Self {
        match (self.unit, unit) {
            (Unit::Degrees, Unit::Meters) => to_meters(self.x, self.y),
            (Unit::Meters, Unit::Degrees) => to_degrees(self.x, self.y),
            _ => *self,
        }
    }

    pub fn to_degrees(&self) -> Self {
        self.to_unit(Unit::Degrees)
    }

    pub fn to_meters(&self) -> Self {
        self.to_unit(Unit::Meters)
    }

    /// Projects the point into its own UTM zone.
    pub fn to_utm(&self) -> Utm {
        Utm::from_point(self)
    }

    /// Projects the point into the given UTM zone.
    pub fn to_utm_in_zone(&self, zone: u8) -> Result<Utm, MgrsError> {
        Utm::from_point_in_zone(self, zone)
    }

    /// Converts the point to an MGRS reference at 1 m precision.
    pub fn to_mgrs(&self) -> Mgrs {
        Mgrs::from_point(self)
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(point: Point) -> Self {
        geo_types::Point::new(point.x, point.y)
    }
}
