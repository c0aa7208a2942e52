//! # mgrs-rs
//!
//! Military Grid Reference System (MGRS) and UTM conversions on the WGS84
//! ellipsoid. There are three main entry points.
//!
//! ### 1. `Mgrs` - Grid References
//!
//! ```
//! use mgrs_rs::{GridType, Mgrs, Point};
//!
//! # fn main() -> Result<(), mgrs_rs::MgrsError> {
//! let mgrs = Mgrs::from_point(&Point::degrees(13.9173973, 77.8654908));
//! assert_eq!(mgrs.to_string(), "33XVG7459743593");
//! assert_eq!(mgrs.coordinate_at(GridType::HundredMeter), "33XVG745435");
//!
//! let point = Mgrs::parse("33XVG74594359")?.to_point();
//! assert!((point.longitude() - 13.9171014).abs() < 0.0001);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Utm` - Projected Coordinates
//!
//! ```
//! use mgrs_rs::{Point, Utm};
//!
//! # fn main() -> Result<(), mgrs_rs::MgrsError> {
//! let utm = Point::degrees(-157.916861, 21.309444).to_utm();
//! assert_eq!(utm.zone(), 4);
//! assert_eq!(utm.to_mgrs().to_string(), "4QFJ1234056781");
//!
//! let utm: Utm = "33 N 474596 8643594".parse()?;
//! assert_eq!(utm.to_mgrs().to_string(), "33XVG7459643594");
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `GridZone` / `GridRange` - Grid Zone Designators
//!
//! ```
//! use mgrs_rs::{Bounds, GridRange, GridZone};
//!
//! let zone = GridZone::at(&mgrs_rs::Point::degrees(4.0, 60.0));
//! assert_eq!(zone.label(), "32V");
//!
//! let zones = GridRange::for_bounds(&Bounds::degrees(10.0, 75.0, 20.0, 80.0));
//! assert_eq!(zones.iter().count(), 1);
//! ```
//!
//! Points may be given in WGS84 degrees or in Web Mercator meters; see
//! [`Point`] and [`Unit`].

pub mod coord;
pub mod error;
pub mod grid_type;
pub mod gzd;
pub mod mgrs;
pub mod utm;

pub use coord::{Bounds, Coordinate, Point, Unit, WEB_MERCATOR_HALF_WORLD_WIDTH};
pub use error::MgrsError;
pub use grid_type::{GridType, MAX_ACCURACY};
pub use gzd::constants::{
    BAND_LETTERS, MAX_BAND_LETTER, MAX_LAT, MAX_LON, MAX_ZONE_NUMBER, MIN_BAND_LETTER, MIN_LAT,
    MIN_LON, MIN_ZONE_NUMBER,
};
pub use gzd::{
    GridRange, GridZone, band_letter, central_meridian, grid_zone, is_omitted_band_letter,
    next_band_letter, previous_band_letter, validate_band_letter, validate_zone_number,
    zone_number, zone_number_at,
};
pub use mgrs::{Mgrs, accuracy_of, is_mgrs, precision_of};
pub use utm::{Hemisphere, Utm, is_utm};

pub use geo_types;
