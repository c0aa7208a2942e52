//! 100 km square identification letters.
//!
//! Columns cycle through three 8-letter sets and rows through two 20-letter
//! sets, selected by zone number. Row letters repeat every 2 000 000 m, so
//! turning a row letter back into a northing needs the latitude band.

use crate::error::MgrsError;
use crate::gzd::{band_latitudes, central_meridian, zone_bounds};
use crate::utm::{Hemisphere, projection};
use log::trace;

/// Size of a 100 km square in meters
pub const SQUARE_SIZE: f64 = 100_000.0;

/// Distance after which row letters repeat
pub const ROW_CYCLE: f64 = 2_000_000.0;

/// First easting covered by a column letter
pub const MIN_COLUMN_EASTING: f64 = 100_000.0;

const COLUMN_SETS: [&[u8; 8]; 3] = [b"ABCDEFGH", b"JKLMNPQR", b"STUVWXYZ"];

const ROW_SETS: [&[u8; 20]; 2] = [b"ABCDEFGHJKLMNPQRSTUV", b"FGHJKLMNPQRSTUVABCDE"];

// Northing candidates are tried for k = 0..=MAX_ROW_CYCLES
const MAX_ROW_CYCLES: u32 = 5;

fn column_set(zone: u8) -> &'static [u8; 8] {
    COLUMN_SETS[(zone as usize + 2) % 3]
}

fn row_set(zone: u8) -> &'static [u8; 20] {
    ROW_SETS[(zone as usize + 1) % 2]
}

/// Rounds a projected value to the micrometre so that round-trip noise
/// never loses a whole meter when truncated.
pub fn snap(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Column letter for an easting; eastings outside the columns are clamped
/// to the first or last letter.
pub fn column_letter(zone: u8, easting: f64) -> char {
    let index = ((easting / SQUARE_SIZE).floor() as i64 - 1).clamp(0, 7);
    column_set(zone)[index as usize] as char
}

/// Row letter for a northing.
pub fn row_letter(zone: u8, northing: f64) -> char {
    let index = ((northing / SQUARE_SIZE).floor() as i64).rem_euclid(20);
    row_set(zone)[index as usize] as char
}

/// Whole meters inside the 100 km square.
pub fn square_offset(value: f64) -> u32 {
    value.rem_euclid(SQUARE_SIZE).floor() as u32
}

/// Position of `letter` in the zone's column set.
pub fn column_index(zone: u8, letter: char) -> Result<usize, MgrsError> {
    column_set(zone)
        .iter()
        .position(|&c| c as char == letter)
        .ok_or(MgrsError::InvalidSquareLetter(letter))
}

/// Position of `letter` in the zone's row set.
pub fn row_index(zone: u8, letter: char) -> Result<usize, MgrsError> {
    row_set(zone)
        .iter()
        .position(|&c| c as char == letter)
        .ok_or(MgrsError::InvalidSquareLetter(letter))
}

/// Easting of the west edge of a column.
pub fn column_easting(zone: u8, letter: char) -> Result<f64, MgrsError> {
    Ok((column_index(zone, letter)? + 1) as f64 * SQUARE_SIZE)
}

/// Northing of the south edge of the square with row `letter` in a zone band.
///
/// The row letter gives the northing modulo 2 000 000 m. Of the candidates
/// `base + k * 2 000 000` the one whose square lies nearest the band's
/// northing interval in the zone is chosen; ties go to the lower candidate.
pub fn row_northing(zone: u8, band: char, letter: char) -> Result<f64, MgrsError> {
    let base = row_index(zone, letter)? as f64 * SQUARE_SIZE;
    let (low, high) = band_northings(zone, band)?;

    let mut best = base;
    let mut best_gap = f64::INFINITY;
    for k in 0..=MAX_ROW_CYCLES {
        let candidate = base + k as f64 * ROW_CYCLE;
        let gap = row_gap(candidate, low, high);
        if gap < best_gap {
            best = candidate;
            best_gap = gap;
        }
    }
    trace!(
        "Row {} in {}{} resolved to northing {} (band {}..{})",
        letter, zone, band, best, low, high
    );
    Ok(best)
}

// Distance from the square starting at `candidate` to the interval low..high
fn row_gap(candidate: f64, low: f64, high: f64) -> f64 {
    (low - (candidate + SQUARE_SIZE)).max(candidate - high).max(0.0)
}

/// Northing interval covered by a band within a zone.
///
/// Parallels curve on the grid, so both band edges are projected at the
/// zone's west and east edges and at its central meridian.
pub fn band_northings(zone: u8, band: char) -> Result<(f64, f64), MgrsError> {
    let bounds = zone_bounds(zone, band).ok_or(MgrsError::OmittedGridZone(zone, band))?;
    let (south, north) = band_latitudes(band)?;
    let hemisphere = Hemisphere::from_band(band);
    let meridian = central_meridian(zone);
    let longitudes = [
        bounds.west(),
        bounds.east(),
        meridian.clamp(bounds.west(), bounds.east()),
    ];

    let mut low = f64::INFINITY;
    let mut high = f64::NEG_INFINITY;
    for latitude in [south, north] {
        for longitude in longitudes {
            let (_, northing) = projection::forward(longitude, latitude, meridian, hemisphere);
            low = low.min(northing);
            high = high.max(northing);
        }
    }
    Ok((low, high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gzd::GridRange;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letter(1, 100000.0), 'A');
        assert_eq!(column_letter(1, 899999.0), 'H');
        assert_eq!(column_letter(2, 474596.0), 'M');
        assert_eq!(column_letter(33, 474596.0), 'V');
        assert_eq!(column_letter(4, 612340.66), 'F');
        // clamped
        assert_eq!(column_letter(3, 99999.0), 'S');
        assert_eq!(column_letter(3, 900000.0), 'Z');
    }

    #[test]
    fn test_row_letters() {
        assert_eq!(row_letter(1, 0.0), 'A');
        assert_eq!(row_letter(2, 0.0), 'F');
        assert_eq!(row_letter(33, 8643594.0), 'G');
        assert_eq!(row_letter(4, 2356781.2), 'J');
        assert_eq!(row_letter(1, 1999999.0), 'V');
        assert_eq!(row_letter(1, 2000000.0), 'A');
    }

    #[test]
    fn test_offsets() {
        assert_eq!(square_offset(474596.26), 74596);
        assert_eq!(square_offset(8643594.99), 43594);
        assert_eq!(square_offset(500000.0), 0);
        assert_eq!(snap(474596.9999999999), 474597.0);
    }

    #[test]
    fn test_letter_indices() -> Result<(), MgrsError> {
        assert_eq!(column_index(33, 'V')?, 3);
        assert_eq!(column_easting(33, 'V')?, 400000.0);
        assert_eq!(column_index(32, 'J')?, 0);
        assert_eq!(column_index(32, 'S'), Err(MgrsError::InvalidSquareLetter('S')));
        assert_eq!(row_index(33, 'G')?, 6);
        assert_eq!(row_index(34, 'A')?, 15);
        assert_eq!(row_index(33, 'W'), Err(MgrsError::InvalidSquareLetter('W')));
        Ok(())
    }

    #[test]
    fn test_row_northing() -> Result<(), MgrsError> {
        assert_eq!(row_northing(33, 'X', 'G')?, 8600000.0);
        assert_eq!(row_northing(4, 'Q', 'J')?, 2300000.0);
        assert_eq!(row_northing(52, 'C', 'S')?, 1100000.0);
        assert_eq!(row_northing(31, 'N', 'A')?, 0.0);
        Ok(())
    }

    #[test]
    fn test_row_northing_in_irregular_zones() -> Result<(), MgrsError> {
        assert_eq!(row_northing(31, 'V', 'G')?, 6600000.0);
        assert_eq!(row_northing(32, 'V', 'M')?, 6600000.0);
        assert_eq!(row_northing(31, 'X', 'D')?, 8300000.0);
        assert_eq!(row_northing(37, 'X', 'D')?, 8300000.0);
        Ok(())
    }

    #[test]
    fn test_row_northing_has_single_nearest_candidate() -> Result<(), MgrsError> {
        // every zone and row letter resolves without a tie, including the
        // Norway and Svalbard cells, so the lower-candidate rule never applies
        for zone in GridRange::new() {
            let (low, high) = band_northings(zone.number, zone.letter)?;
            for &letter in ROW_SETS[0] {
                let base = row_index(zone.number, letter as char)? as f64 * SQUARE_SIZE;
                let mut gaps: Vec<f64> = (0..=MAX_ROW_CYCLES)
                    .map(|k| row_gap(base + k as f64 * ROW_CYCLE, low, high))
                    .collect();
                gaps.sort_by(f64::total_cmp);
                assert!(
                    gaps[0] < gaps[1],
                    "row {} in {} has equally near candidates",
                    letter as char,
                    zone
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_row_gap() {
        assert_eq!(row_gap(200000.0, 250000.0, 900000.0), 0.0);
        assert_eq!(row_gap(0.0, 250000.0, 900000.0), 150000.0);
        assert_eq!(row_gap(1000000.0, 250000.0, 900000.0), 100000.0);
    }

    #[test]
    fn test_band_northings() -> Result<(), MgrsError> {
        let (low, high) = band_northings(31, 'N')?;
        assert!(low.abs() < 1e-6);
        assert!(high > 880000.0 && high < 890000.0);

        assert_eq!(band_northings(32, 'X'), Err(MgrsError::OmittedGridZone(32, 'X')));
        Ok(())
    }
}
