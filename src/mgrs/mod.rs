//! Military Grid Reference System references.

pub(crate) mod letters;
mod parse;

pub use parse::{accuracy_of, is_mgrs, precision_of};

use crate::coord::{Coordinate, Point};
use crate::error::MgrsError;
use crate::grid_type::{GridType, MAX_ACCURACY};
use crate::gzd::constants::{MAX_LAT, MIN_LAT};
use crate::gzd::{
    GridZone, band_letter, central_meridian, grid_zone, normalize_longitude,
    validate_band_letter, validate_zone_number, zone_number_at,
};
use crate::utm::{Hemisphere, Utm, projection};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Largest offset inside a 100 km square in whole meters
pub const MAX_SQUARE_OFFSET: u32 = 99_999;

/// An MGRS reference: grid zone, 100 km square and meter offsets.
///
/// The offsets are whole meters from the square's southwest corner. The
/// precision is not stored; it follows from the trailing zeros shared by
/// the two offsets, so `33XVG7400043000` and `33XVG7443` are the same value.
///
/// Serializes as its 1 m string and deserializes by parsing.
///
/// # Example
/// ```
/// use mgrs_rs::{GridType, Mgrs, Point};
///
/// # fn main() -> Result<(), mgrs_rs::MgrsError> {
/// let mgrs = Mgrs::from_point(&Point::degrees(-157.916861, 21.309444));
/// assert_eq!(mgrs.to_string(), "4QFJ1234056781");
/// assert_eq!(mgrs.coordinate_at(GridType::Kilometer), "4QFJ1256");
///
/// let mgrs: Mgrs = "33X VG 7459 4359".parse()?;
/// assert_eq!(mgrs.precision(), GridType::TenMeter);
/// assert_eq!(mgrs.to_utm().to_string(), "33 N 474590 8643590");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mgrs {
    zone: u8,
    band: char,
    column: char,
    row: char,
    easting: u32,
    northing: u32,
}

impl Mgrs {
    /// Creates a reference from its parts, checking each against the grid.
    pub fn new(
        zone: u8,
        band: char,
        column: char,
        row: char,
        easting: u32,
        northing: u32,
    ) -> Result<Self, MgrsError> {
        let zone = validate_zone_number(zone as i64)?;
        validate_band_letter(band)?;
        GridZone::new(zone, band)?;
        letters::column_index(zone, column)?;
        letters::row_index(zone, row)?;
        if easting > MAX_SQUARE_OFFSET || northing > MAX_SQUARE_OFFSET {
            return Err(MgrsError::OutOfRange(format!(
                "offsets {} {} exceed {}",
                easting, northing, MAX_SQUARE_OFFSET
            )));
        }
        Ok(Self {
            zone,
            band,
            column,
            row,
            easting,
            northing,
        })
    }

    /// Encodes a point at 1 m precision.
    ///
    /// The longitude is wrapped into [-180, 180) and the latitude clamped to
    /// the band limits, so polar points land in bands C and X.
    pub fn from_point(point: &Point) -> Self {
        let point = point.to_degrees();
        let longitude = normalize_longitude(point.longitude());
        let latitude = point.latitude().clamp(MIN_LAT, MAX_LAT);

        let zone = zone_number_at(longitude, latitude);
        let band = band_letter(latitude);
        let hemisphere = Hemisphere::from_latitude(latitude);
        let (easting, northing) =
            projection::forward(longitude, latitude, central_meridian(zone), hemisphere);
        Self::from_grid(zone, band, easting, northing)
    }

    /// Encodes a WGS84 coordinate at 1 m precision.
    pub fn from_wgs84(coord: &impl Coordinate) -> Self {
        Self::from_point(&Point::from_wgs84(coord))
    }

    /// Builds a reference from UTM grid meters already known to lie in
    /// `zone` and `band`.
    pub(crate) fn from_grid(zone: u8, band: char, easting: f64, northing: f64) -> Self {
        let easting = letters::snap(easting);
        let northing = letters::snap(northing);
        Self {
            zone,
            band,
            column: letters::column_letter(zone, easting),
            row: letters::row_letter(zone, northing),
            easting: letters::square_offset(easting),
            northing: letters::square_offset(northing),
        }
    }

    /// Parses an MGRS string at any precision.
    ///
    /// Whitespace and case are ignored. A bare grid zone (`"33X"`) decodes
    /// to the zone's southwest corner. A bare 100 km square whose corner lies
    /// outside the zone is moved onto the zone boundary.
    pub fn parse(text: &str) -> Result<Self, MgrsError> {
        parse::parse(text)
    }

    pub fn zone(&self) -> u8 {
        self.zone
    }

    pub fn band(&self) -> char {
        self.band
    }

    pub fn column(&self) -> char {
        self.column
    }

    pub fn row(&self) -> char {
        self.row
    }

    /// Easting in meters inside the 100 km square.
    pub fn easting(&self) -> u32 {
        self.easting
    }

    /// Northing in meters inside the 100 km square.
    pub fn northing(&self) -> u32 {
        self.northing
    }

    /// The two 100 km square letters, e.g. `"VG"`.
    pub fn column_row_id(&self) -> String {
        format!("{}{}", self.column, self.row)
    }

    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::from_band(self.band)
    }

    pub fn grid_zone(&self) -> GridZone {
        grid_zone(self.zone, self.band).unwrap_or_else(|| GridZone::at(&self.to_point()))
    }

    /// Digits per axis needed to write the reference without losing data.
    pub fn accuracy(&self) -> u8 {
        let mut accuracy = MAX_ACCURACY;
        let mut divisor = 10;
        while accuracy > 0 && self.easting % divisor == 0 && self.northing % divisor == 0 {
            accuracy -= 1;
            divisor *= 10;
        }
        accuracy
    }

    pub fn precision(&self) -> GridType {
        GridType::with_accuracy(self.accuracy()).unwrap_or_default()
    }

    /// Converts to UTM in the same zone.
    pub fn to_utm(&self) -> Utm {
        // letters were checked against the zone in `new`
        let square_easting =
            letters::column_easting(self.zone, self.column).unwrap_or(letters::MIN_COLUMN_EASTING);
        let square_northing =
            letters::row_northing(self.zone, self.band, self.row).unwrap_or_default();
        Utm::from_parts(
            self.zone,
            self.hemisphere(),
            square_easting + self.easting as f64,
            square_northing + self.northing as f64,
        )
    }

    /// Southwest corner of the referenced cell in degrees.
    pub fn to_point(&self) -> Point {
        self.to_utm().to_point()
    }

    /// Full 1 m reference, e.g. `"33XVG7459643594"`.
    pub fn coordinate(&self) -> String {
        self.coordinate_at(GridType::Meter)
    }

    /// Reference truncated to `grid_type`.
    pub fn coordinate_at(&self, grid_type: GridType) -> String {
        let mut text = format!("{}{}", self.zone, self.band);
        if grid_type == GridType::Gzd {
            return text;
        }
        let digits = grid_type.accuracy() as usize;
        text.push(self.column);
        text.push(self.row);
        text.push_str(&format!("{:05}", self.easting)[..digits]);
        text.push_str(&format!("{:05}", self.northing)[..digits]);
        text
    }

    /// Reference with `accuracy` digits per axis (0-5).
    pub fn coordinate_with_accuracy(&self, accuracy: u8) -> Result<String, MgrsError> {
        Ok(self.coordinate_at(GridType::with_accuracy(accuracy)?))
    }
}

impl std::fmt::Display for Mgrs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.coordinate())
    }
}

impl FromStr for Mgrs {
    type Err = MgrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Mgrs {
    type Error = MgrsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Mgrs> for String {
    fn from(mgrs: Mgrs) -> Self {
        mgrs.coordinate()
    }
}
