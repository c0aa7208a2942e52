use crate::coord::{Bounds, Coordinate, Point};
use crate::error::MgrsError;
use crate::gzd::band::{band_latitudes, band_letter, validate_band_letter};
use crate::gzd::constants::{MAX_ZONE_NUMBER, MIN_LON, MIN_ZONE_NUMBER, ZONE_WIDTH};
use crate::utm::Hemisphere;
use serde::{Deserialize, Serialize};

/// Irregular cell geometry for a `(zone, band)` pair.
///
/// `span` is `Some((west, east))` for a resized cell and `None` for a cell
/// absorbed by its neighbours.
#[derive(Debug, Clone, Copy)]
struct ZoneOverride {
    number: u8,
    letter: char,
    span: Option<(f64, f64)>,
}

/// Norway (band V) and Svalbard (band X) exceptions to the regular 6° grid.
const ZONE_OVERRIDES: [ZoneOverride; 9] = [
    ZoneOverride { number: 31, letter: 'V', span: Some((0.0, 3.0)) },
    ZoneOverride { number: 32, letter: 'V', span: Some((3.0, 12.0)) },
    ZoneOverride { number: 31, letter: 'X', span: Some((0.0, 9.0)) },
    ZoneOverride { number: 32, letter: 'X', span: None },
    ZoneOverride { number: 33, letter: 'X', span: Some((9.0, 21.0)) },
    ZoneOverride { number: 34, letter: 'X', span: None },
    ZoneOverride { number: 35, letter: 'X', span: Some((21.0, 33.0)) },
    ZoneOverride { number: 36, letter: 'X', span: None },
    ZoneOverride { number: 37, letter: 'X', span: Some((33.0, 42.0)) },
];

fn zone_override(number: u8, letter: char) -> Option<&'static ZoneOverride> {
    ZONE_OVERRIDES
        .iter()
        .find(|o| o.number == number && o.letter == letter)
}

/// Checks that `number` is a UTM zone number (1-60).
pub fn validate_zone_number(number: i64) -> Result<u8, MgrsError> {
    if number < MIN_ZONE_NUMBER as i64 || number > MAX_ZONE_NUMBER as i64 {
        return Err(MgrsError::InvalidZoneNumber(number));
    }
    Ok(number as u8)
}

/// Regular zone number for a longitude, clamped to 1-60.
pub fn zone_number(longitude: f64) -> u8 {
    let number = ((longitude - MIN_LON) / ZONE_WIDTH).floor() + 1.0;
    number.clamp(MIN_ZONE_NUMBER as f64, MAX_ZONE_NUMBER as f64) as u8
}

/// Zone number for a position, honouring the Norway and Svalbard exceptions.
///
/// # Example
/// ```
/// use mgrs_rs::zone_number_at;
///
/// assert_eq!(zone_number_at(9.5, 50.0), 32);
/// // Norway: 32V starts at 3°E
/// assert_eq!(zone_number_at(4.0, 60.0), 32);
/// // Svalbard: 33X spans 9°E - 21°E
/// assert_eq!(zone_number_at(20.0, 78.0), 33);
/// ```
pub fn zone_number_at(longitude: f64, latitude: f64) -> u8 {
    let letter = band_letter(latitude);
    ZONE_OVERRIDES
        .iter()
        .filter(|o| o.letter == letter)
        .find_map(|o| match o.span {
            Some((west, east)) if longitude >= west && longitude < east => Some(o.number),
            _ => None,
        })
        .unwrap_or_else(|| zone_number(longitude))
}

/// Central meridian of a zone in degrees.
pub fn central_meridian(number: u8) -> f64 {
    number as f64 * ZONE_WIDTH - 183.0
}

/// Geographic bounds of a zone/band cell, or `None` if the cell does not exist.
pub fn zone_bounds(number: u8, letter: char) -> Option<Bounds> {
    if !(MIN_ZONE_NUMBER..=MAX_ZONE_NUMBER).contains(&number) {
        return None;
    }
    let (south, north) = band_latitudes(letter).ok()?;
    let (west, east) = match zone_override(number, letter) {
        Some(o) => o.span?,
        None => {
            let west = MIN_LON + (number - 1) as f64 * ZONE_WIDTH;
            (west, west + ZONE_WIDTH)
        }
    };
    Some(Bounds::degrees(west, south, east, north))
}

/// Looks up a grid zone, returning `None` for invalid or omitted cells.
pub fn grid_zone(number: u8, letter: char) -> Option<GridZone> {
    zone_bounds(number, letter).map(|bounds| GridZone {
        number,
        letter,
        bounds,
    })
}

/// One UTM zone / latitude band cell, identified by its Grid Zone Designator.
///
/// # Example
/// ```
/// use mgrs_rs::GridZone;
///
/// # fn main() -> Result<(), mgrs_rs::MgrsError> {
/// let zone = GridZone::new(33, 'X')?;
/// assert_eq!(zone.label(), "33X");
/// assert_eq!(zone.bounds.west(), 9.0);
/// assert_eq!(zone.bounds.east(), 21.0);
///
/// assert!(GridZone::new(32, 'X').is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridZone {
    /// Zone number (1-60)
    pub number: u8,
    /// Band letter (C-X, no I or O)
    pub letter: char,
    /// Cell bounds in degrees
    pub bounds: Bounds,
}

impl GridZone {
    /// Creates the grid zone for a zone number and band letter.
    ///
    /// Fails for out-of-range numbers, invalid letters, and the Svalbard
    /// cells 32X, 34X and 36X.
    pub fn new(number: u8, letter: char) -> Result<Self, MgrsError> {
        let number = validate_zone_number(number as i64)?;
        validate_band_letter(letter)?;
        grid_zone(number, letter).ok_or(MgrsError::OmittedGridZone(number, letter))
    }

    /// The grid zone containing a point; latitude is clamped to the band limits.
    pub fn at(point: &Point) -> Self {
        let point = point.to_degrees();
        let longitude = normalize_longitude(point.longitude());
        let number = zone_number_at(longitude, point.latitude());
        let letter = band_letter(point.latitude());
        let bounds = zone_bounds(number, letter)
            .unwrap_or_else(|| regular_bounds(number, letter));
        Self {
            number,
            letter,
            bounds,
        }
    }

    /// The grid zone containing a WGS84 coordinate.
    pub fn from_wgs84(coord: &impl Coordinate) -> Self {
        Self::at(&Point::from_wgs84(coord))
    }

    /// Grid Zone Designator, e.g. `"33X"`.
    pub fn label(&self) -> String {
        format!("{}{}", self.number, self.letter)
    }

    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::from_band(self.letter)
    }

    pub fn southwest(&self) -> Point {
        self.bounds.southwest()
    }
}

impl std::fmt::Display for GridZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.number, self.letter)
    }
}

// zone_number_at never lands on an omitted cell; this only guards the type.
fn regular_bounds(number: u8, letter: char) -> Bounds {
    let west = MIN_LON + (number - 1) as f64 * ZONE_WIDTH;
    let (south, north) = band_latitudes(letter).unwrap_or((0.0, 0.0));
    Bounds::degrees(west, south, west + ZONE_WIDTH, north)
}

/// Wraps a longitude into [-180, 180).
pub fn normalize_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}
