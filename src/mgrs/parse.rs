use super::Mgrs;
use super::letters::{self, SQUARE_SIZE};
use crate::coord::Point;
use crate::error::MgrsError;
use crate::grid_type::{GridType, MAX_ACCURACY};
use crate::gzd::{GridZone, grid_zone, validate_zone_number};
use crate::utm::Utm;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    // zone, band, then an optional 100km square with 0-5 digit pairs
    static ref MGRS_PATTERN: Regex = Regex::new(
        r"^(\d{1,2})([C-HJ-NP-X])(?:([A-HJ-NP-Z][A-HJ-NP-V])((?:\d{2}){0,5}))?$"
    )
    .expect("MGRS pattern is valid");
}

const BISECTION_STEPS: usize = 64;

/// The pieces of an MGRS string, checked against the grid but not decoded.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tokens {
    pub zone: u8,
    pub band: char,
    pub square: Option<(char, char)>,
    pub digits: String,
}

impl Tokens {
    pub fn precision(&self) -> Result<GridType, MgrsError> {
        match self.square {
            None => Ok(GridType::Gzd),
            Some(_) => GridType::with_accuracy((self.digits.len() / 2) as u8),
        }
    }
}

fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

pub(crate) fn tokenize(text: &str) -> Result<Tokens, MgrsError> {
    let invalid = || MgrsError::InvalidMgrs(text.to_string());
    let normalized = normalize(text);
    let Some(caps) = MGRS_PATTERN.captures(&normalized) else {
        debug!("Rejected MGRS text {:?}", text);
        return Err(invalid());
    };

    let zone: i64 = caps[1].parse().map_err(|_| invalid())?;
    let Ok(zone) = validate_zone_number(zone) else {
        debug!("Rejected MGRS zone {} in {:?}", zone, text);
        return Err(invalid());
    };
    let band = caps[2].chars().next().ok_or_else(invalid)?;
    if grid_zone(zone, band).is_none() {
        debug!("Rejected omitted grid zone {}{} in {:?}", zone, band, text);
        return Err(invalid());
    }

    let square = match caps.get(3) {
        Some(square) => {
            let mut chars = square.as_str().chars();
            let column = chars.next().ok_or_else(invalid)?;
            let row = chars.next().ok_or_else(invalid)?;
            if letters::column_index(zone, column).is_err() {
                debug!("Rejected column {} for zone {} in {:?}", column, zone, text);
                return Err(invalid());
            }
            Some((column, row))
        }
        None => None,
    };
    let digits = caps.get(4).map(|m| m.as_str().to_string()).unwrap_or_default();

    Ok(Tokens {
        zone,
        band,
        square,
        digits,
    })
}

/// Returns true if `text` is a valid MGRS reference at any precision.
///
/// # Example
/// ```
/// use mgrs_rs::is_mgrs;
///
/// assert!(is_mgrs("33XVG74594359"));
/// assert!(is_mgrs("33x vg 74596 43594"));
/// assert!(!is_mgrs("32XMH"));
/// assert!(!is_mgrs("33XVG745"));
/// ```
pub fn is_mgrs(text: &str) -> bool {
    tokenize(text).is_ok()
}

/// Precision of an MGRS string, read from its digit count.
pub fn precision_of(text: &str) -> Result<GridType, MgrsError> {
    tokenize(text)?.precision()
}

/// Digits per axis of an MGRS string (0 for GZD and 100 km references).
pub fn accuracy_of(text: &str) -> Result<u8, MgrsError> {
    Ok(precision_of(text)?.accuracy())
}

// Left-aligned digits scaled up to whole meters
fn scale_digits(digits: &str, text: &str) -> Result<u32, MgrsError> {
    if digits.is_empty() {
        return Ok(0);
    }
    let value: u32 = digits
        .parse()
        .map_err(|_| MgrsError::InvalidMgrs(text.to_string()))?;
    Ok(value * 10u32.pow(MAX_ACCURACY as u32 - digits.len() as u32))
}

pub(crate) fn parse(text: &str) -> Result<Mgrs, MgrsError> {
    let tokens = tokenize(text)?;
    let zone = GridZone::new(tokens.zone, tokens.band)
        .map_err(|_| MgrsError::InvalidMgrs(text.to_string()))?;

    let Some((column, row)) = tokens.square else {
        return Ok(Mgrs::from_point(&zone.southwest()));
    };

    let (easting, northing) = tokens.digits.split_at(tokens.digits.len() / 2);
    let mgrs = Mgrs::new(
        tokens.zone,
        tokens.band,
        column,
        row,
        scale_digits(easting, text)?,
        scale_digits(northing, text)?,
    )
    .map_err(|_| MgrsError::InvalidMgrs(text.to_string()))?;

    if tokens.digits.is_empty() {
        return Ok(snap_square_to_zone(mgrs, &zone));
    }
    Ok(mgrs)
}

/// Point offset in meters from a square's southwest corner.
fn square_point(origin: &Utm, east: f64, north: f64) -> Point {
    Utm::from_parts(
        origin.zone(),
        origin.hemisphere(),
        origin.easting() + east,
        origin.northing() + north,
    )
    .to_point()
}

/// Finds where an edge of the square crosses a zone boundary.
///
/// `outside(offset)` must be true at 0 and false at 100 000; returns the
/// first offset found on the inside.
fn bisect(outside: impl Fn(f64) -> bool) -> f64 {
    let mut low = 0.0;
    let mut high = SQUARE_SIZE;
    for _ in 0..BISECTION_STEPS {
        let middle = (low + high) / 2.0;
        if outside(middle) {
            low = middle;
        } else {
            high = middle;
        }
    }
    high
}

/// Moves a 100 km square whose southwest corner lies outside its grid zone
/// onto the zone boundary.
fn snap_square_to_zone(mgrs: Mgrs, zone: &GridZone) -> Mgrs {
    let bounds = zone.bounds;
    let origin = mgrs.to_utm();
    let at = |east: f64, north: f64| square_point(&origin, east, north);
    let southwest = at(0.0, 0.0);
    let west_of_zone = southwest.longitude() < bounds.west();
    let south_of_zone = southwest.latitude() < bounds.south();

    let snapped = match (west_of_zone, south_of_zone) {
        (true, true) => {
            if !bounds.contains(&at(SQUARE_SIZE, SQUARE_SIZE)) {
                return mgrs;
            }
            Point::degrees(bounds.west(), bounds.south())
        }
        (true, false) => {
            if !bounds.contains(&at(SQUARE_SIZE, 0.0)) {
                return mgrs;
            }
            let east = bisect(|east| at(east, 0.0).longitude() < bounds.west());
            Point::degrees(bounds.west(), at(east, 0.0).latitude())
        }
        (false, true) => {
            if !bounds.contains(&at(0.0, SQUARE_SIZE)) {
                return mgrs;
            }
            let north = bisect(|north| at(0.0, north).latitude() < bounds.south());
            Point::degrees(at(0.0, north).longitude(), bounds.south())
        }
        (false, false) => return mgrs,
    };

    debug!(
        "Moved 100km square {}{}{} onto zone boundary at ({}, {})",
        mgrs.zone(),
        mgrs.band(),
        mgrs.column_row_id(),
        snapped.longitude(),
        snapped.latitude()
    );
    Mgrs::from_point(&snapped)
}
