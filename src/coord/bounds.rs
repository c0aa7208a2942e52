use super::{Point, Unit};
use geo_types::{Rect, coord};
use serde::{Deserialize, Serialize};

/// An axis-aligned box tagged with its unit.
///
/// Constructors order the corners so that `min_x <= max_x` and `min_y <= max_y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub unit: Unit,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64, unit: Unit) -> Self {
        Self {
            min_x: min_x.min(max_x),
            min_y: min_y.min(max_y),
            max_x: min_x.max(max_x),
            max_y: min_y.max(max_y),
            unit,
        }
    }

    /// Creates bounds from west/south/east/north degrees.
    pub fn degrees(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self::new(west, south, east, north, Unit::Degrees)
    }

    /// Creates bounds from Web Mercator meters.
    pub fn meters(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(min_x, min_y, max_x, max_y, Unit::Meters)
    }

    /// Creates bounds from a `geo_types::Rect` in the given unit.
    pub fn from_rect(rect: &Rect<f64>, unit: Unit) -> Self {
        Self::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y, unit)
    }

    pub fn west(&self) -> f64 {
        self.min_x
    }

    pub fn south(&self) -> f64 {
        self.min_y
    }

    pub fn east(&self) -> f64 {
        self.max_x
    }

    pub fn north(&self) -> f64 {
        self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn southwest(&self) -> Point {
        Point::new(self.min_x, self.min_y, self.unit)
    }

    pub fn northwest(&self) -> Point {
        Point::new(self.min_x, self.max_y, self.unit)
    }

    pub fn northeast(&self) -> Point {
        Point::new(self.max_x, self.max_y, self.unit)
    }

    pub fn southeast(&self) -> Point {
        Point::new(self.max_x, self.min_y, self.unit)
    }

    pub fn centroid(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
            self.unit,
        )
    }

    /// Converts both corners to `unit`.
    pub fn to_unit(&self, unit: Unit) -> Self {
        if self.unit == unit {
            return *self;
        }
        let southwest = self.southwest().to_unit(unit);
        let northeast = self.northeast().to_unit(unit);
        Self::new(southwest.x, southwest.y, northeast.x, northeast.y, unit)
    }

    pub fn to_degrees(&self) -> Self {
        self.to_unit(Unit::Degrees)
    }

    pub fn to_meters(&self) -> Self {
        self.to_unit(Unit::Meters)
    }

    /// Inclusive containment test; the point is converted to this unit first.
    pub fn contains(&self, point: &Point) -> bool {
        let point = point.to_unit(self.unit);
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_y && point.y <= self.max_y
    }

    /// True when the two boxes overlap with a non-empty interior.
    pub fn intersects(&self, other: &Bounds) -> bool {
        let other = other.to_unit(self.unit);
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_x, y: self.min_y },
            coord! { x: self.max_x, y: self.max_y },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_are_ordered() {
        let bounds = Bounds::degrees(21.0, 84.0, 9.0, 72.0);
        assert_eq!(bounds.west(), 9.0);
        assert_eq!(bounds.south(), 72.0);
        assert_eq!(bounds.east(), 21.0);
        assert_eq!(bounds.north(), 84.0);
        assert_eq!(bounds.width(), 12.0);
        assert_eq!(bounds.height(), 12.0);
        assert_eq!(bounds.southwest(), Point::degrees(9.0, 72.0));
        assert_eq!(bounds.centroid(), Point::degrees(15.0, 78.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = Bounds::degrees(3.0, 56.0, 12.0, 64.0);
        assert!(bounds.contains(&Point::degrees(3.0, 56.0)));
        assert!(bounds.contains(&Point::degrees(12.0, 64.0)));
        assert!(!bounds.contains(&Point::degrees(2.999, 60.0)));
        assert!(bounds.contains(&Point::degrees(7.0, 60.0).to_meters()));
    }

    #[test]
    fn test_intersects() {
        let zone = Bounds::degrees(6.0, 48.0, 12.0, 56.0);
        assert!(zone.intersects(&Bounds::degrees(10.0, 50.0, 14.0, 52.0)));
        assert!(!zone.intersects(&Bounds::degrees(12.0, 48.0, 18.0, 56.0)));
    }

    #[test]
    fn test_unit_roundtrip() {
        let bounds = Bounds::degrees(-10.0, -20.0, 30.0, 40.0);
        let back = bounds.to_meters().to_degrees();
        assert!((back.west() - -10.0).abs() < 1e-9);
        assert!((back.south() - -20.0).abs() < 1e-9);
        assert!((back.east() - 30.0).abs() < 1e-9);
        assert!((back.north() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_rect_interop() {
        let bounds = Bounds::meters(457000.0, 339500.0, 458000.0, 340500.0);
        let rect = bounds.to_rect();
        assert_eq!(rect.min().x, 457000.0);
        assert_eq!(Bounds::from_rect(&rect, Unit::Meters), bounds);
    }
}
