use crate::coord::Bounds;
use crate::error::MgrsError;
use crate::gzd::band::{band_index, band_letter};
use crate::gzd::constants::{BAND_LETTERS, MAX_ZONE_NUMBER, MIN_ZONE_NUMBER, NUM_BANDS};
use crate::gzd::zone::{GridZone, grid_zone, validate_zone_number, zone_number};
use std::ops::RangeInclusive;

/// A rectangular selection of grid zones: zone numbers × band letters,
/// optionally restricted to zones intersecting some bounds.
///
/// Iteration is lazy and ordered by zone number, then band letter. Omitted
/// Svalbard cells are skipped.
///
/// # Example
/// ```
/// use mgrs_rs::{Bounds, GridRange};
///
/// assert_eq!(GridRange::new().iter().count(), 1197);
///
/// let labels: Vec<String> = GridRange::for_bounds(&Bounds::degrees(10.0, 50.0, 14.0, 52.0))
///     .iter()
///     .map(|zone| zone.label())
///     .collect();
/// assert_eq!(labels, ["32U", "33U"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRange {
    min_zone: u8,
    max_zone: u8,
    min_band: usize,
    max_band: usize,
    bounds: Option<Bounds>,
}

impl Default for GridRange {
    fn default() -> Self {
        Self::new()
    }
}

impl GridRange {
    /// Every grid zone, 1C through 60X.
    pub fn new() -> Self {
        Self {
            min_zone: MIN_ZONE_NUMBER,
            max_zone: MAX_ZONE_NUMBER,
            min_band: 0,
            max_band: NUM_BANDS - 1,
            bounds: None,
        }
    }

    /// Grid zones within inclusive zone-number and band-letter ranges.
    pub fn with_ranges(
        zones: RangeInclusive<u8>,
        bands: RangeInclusive<char>,
    ) -> Result<Self, MgrsError> {
        let min_zone = validate_zone_number(*zones.start() as i64)?;
        let max_zone = validate_zone_number(*zones.end() as i64)?;
        Ok(Self {
            min_zone,
            max_zone,
            min_band: band_index(*bands.start())?,
            max_band: band_index(*bands.end())?,
            bounds: None,
        })
    }

    /// Grid zones whose bounds intersect `bounds`.
    pub fn for_bounds(bounds: &Bounds) -> Self {
        let bounds = bounds.to_degrees();
        // Norway and Svalbard cells reach into neighbouring zone columns
        let min_zone = zone_number(bounds.west()).saturating_sub(1).max(MIN_ZONE_NUMBER);
        let max_zone = (zone_number(bounds.east()) + 1).min(MAX_ZONE_NUMBER);
        Self {
            min_zone,
            max_zone,
            min_band: band_position(band_letter(bounds.south())),
            max_band: band_position(band_letter(bounds.north())),
            bounds: Some(bounds),
        }
    }

    pub fn zones(&self) -> RangeInclusive<u8> {
        self.min_zone..=self.max_zone
    }

    pub fn bands(&self) -> RangeInclusive<char> {
        BAND_LETTERS[self.min_band]..=BAND_LETTERS[self.max_band]
    }

    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    /// Starts a fresh pass over the range.
    pub fn iter(&self) -> GridRangeIter {
        GridRangeIter {
            range: *self,
            zone: self.min_zone,
            band: self.min_band,
        }
    }

    pub fn contains(&self, zone: &GridZone) -> bool {
        self.iter().any(|candidate| candidate == *zone)
    }
}

// band_letter always yields a valid letter
fn band_position(letter: char) -> usize {
    band_index(letter).unwrap_or(0)
}

/// Iterator over the grid zones of a [`GridRange`].
#[derive(Debug, Clone)]
pub struct GridRangeIter {
    range: GridRange,
    zone: u8,
    band: usize,
}

impl Iterator for GridRangeIter {
    type Item = GridZone;

    fn next(&mut self) -> Option<GridZone> {
        while self.zone <= self.range.max_zone {
            if self.band > self.range.max_band {
                self.zone += 1;
                self.band = self.range.min_band;
                continue;
            }
            let letter = BAND_LETTERS[self.band];
            self.band += 1;

            let Some(zone) = grid_zone(self.zone, letter) else {
                continue;
            };
            match &self.range.bounds {
                Some(bounds) if !zone.bounds.intersects(bounds) => continue,
                _ => return Some(zone),
            }
        }
        None
    }
}

impl IntoIterator for GridRange {
    type Item = GridZone;
    type IntoIter = GridRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &GridRange {
    type Item = GridZone;
    type IntoIter = GridRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Point;

    fn labels(range: &GridRange) -> Vec<String> {
        range.iter().map(|zone| zone.label()).collect()
    }

    #[test]
    fn test_full_range() {
        let range = GridRange::new();
        assert_eq!(range.iter().count(), 1197);
        assert_eq!(range.zones(), 1..=60);
        assert_eq!(range.bands(), 'C'..='X');

        let zones: Vec<GridZone> = range.iter().collect();
        assert_eq!(zones[0].label(), "1C");
        assert_eq!(zones[1].label(), "1D");
        assert_eq!(zones[20].label(), "2C");
        assert_eq!(zones[zones.len() - 1].label(), "60X");
    }

    #[test]
    fn test_range_is_restartable() {
        let range = GridRange::new();
        let first: Vec<GridZone> = range.iter().take(5).collect();
        let second: Vec<GridZone> = (&range).into_iter().take(5).collect();
        assert_eq!(first, second);
        assert_eq!(range.into_iter().count(), 1197);
    }

    #[test]
    fn test_with_ranges_skips_omitted_cells() -> Result<(), MgrsError> {
        let range = GridRange::with_ranges(31..=37, 'X'..='X')?;
        assert_eq!(labels(&range), ["31X", "33X", "35X", "37X"]);

        let range = GridRange::with_ranges(31..=32, 'U'..='W')?;
        assert_eq!(labels(&range), ["31U", "31V", "31W", "32U", "32V", "32W"]);
        Ok(())
    }

    #[test]
    fn test_with_ranges_rejects_invalid_limits() {
        assert_eq!(
            GridRange::with_ranges(0..=5, 'C'..='X'),
            Err(MgrsError::InvalidZoneNumber(0))
        );
        assert_eq!(
            GridRange::with_ranges(1..=5, 'C'..='Y'),
            Err(MgrsError::InvalidBandLetter('Y'))
        );
    }

    #[test]
    fn test_empty_range() -> Result<(), MgrsError> {
        let range = GridRange::with_ranges(10..=5, 'C'..='X')?;
        assert_eq!(range.iter().count(), 0);
        let range = GridRange::with_ranges(5..=10, 'X'..='C')?;
        assert_eq!(range.iter().count(), 0);
        Ok(())
    }

    #[test]
    fn test_for_bounds() {
        let range = GridRange::for_bounds(&Bounds::degrees(10.0, 50.0, 14.0, 52.0));
        assert_eq!(labels(&range), ["32U", "33U"]);
        assert!(range.bounds().is_some());
    }

    #[test]
    fn test_for_bounds_svalbard() {
        let range = GridRange::for_bounds(&Bounds::degrees(10.0, 75.0, 20.0, 80.0));
        assert_eq!(labels(&range), ["33X"]);

        let range = GridRange::for_bounds(&Bounds::degrees(4.0, 57.0, 5.0, 58.0));
        assert_eq!(labels(&range), ["32V"]);
    }

    #[test]
    fn test_for_bounds_in_meters() {
        let southwest = Point::degrees(10.0, 50.0).to_meters();
        let northeast = Point::degrees(14.0, 52.0).to_meters();
        let bounds = Bounds::meters(southwest.x, southwest.y, northeast.x, northeast.y);
        assert_eq!(labels(&GridRange::for_bounds(&bounds)), ["32U", "33U"]);
    }

    #[test]
    fn test_contains() -> Result<(), MgrsError> {
        let range = GridRange::with_ranges(31..=33, 'V'..='X')?;
        assert!(range.contains(&GridZone::new(32, 'V')?));
        assert!(!range.contains(&GridZone::new(34, 'V')?));
        Ok(())
    }
}
