use crate::error::MgrsError;
use crate::gzd::constants::{
    BAND_HEIGHT, BAND_LETTERS, MAX_BAND_LETTER, MAX_LAT, MIN_BAND_LETTER, MIN_LAT, NUM_BANDS,
    OMITTED_BAND_LETTERS,
};

/// Returns true for the letters skipped by the band sequence (I and O).
pub fn is_omitted_band_letter(letter: char) -> bool {
    OMITTED_BAND_LETTERS.contains(&letter)
}

/// Checks that `letter` is an uppercase band letter C-X other than I and O.
pub fn validate_band_letter(letter: char) -> Result<(), MgrsError> {
    if !(MIN_BAND_LETTER..=MAX_BAND_LETTER).contains(&letter) || is_omitted_band_letter(letter) {
        return Err(MgrsError::InvalidBandLetter(letter));
    }
    Ok(())
}

/// Position of a band letter south to north (C = 0, X = 19).
pub fn band_index(letter: char) -> Result<usize, MgrsError> {
    BAND_LETTERS
        .iter()
        .position(|&c| c == letter)
        .ok_or(MgrsError::InvalidBandLetter(letter))
}

/// Band letter for a latitude, clamped to the MGRS latitude limits.
///
/// # Example
/// ```
/// use mgrs_rs::band_letter;
///
/// assert_eq!(band_letter(77.86), 'X');
/// assert_eq!(band_letter(100.0), 'X');
/// assert_eq!(band_letter(-80.0), 'C');
/// assert_eq!(band_letter(0.0), 'N');
/// ```
pub fn band_letter(latitude: f64) -> char {
    let latitude = latitude.clamp(MIN_LAT, MAX_LAT);
    let index = ((latitude - MIN_LAT) / BAND_HEIGHT).floor() as usize;
    BAND_LETTERS[index.min(NUM_BANDS - 1)]
}

/// South and north latitude of a band.
pub fn band_latitudes(letter: char) -> Result<(f64, f64), MgrsError> {
    let index = band_index(letter)?;
    let south = MIN_LAT + index as f64 * BAND_HEIGHT;
    let north = if index == NUM_BANDS - 1 {
        MAX_LAT
    } else {
        south + BAND_HEIGHT
    };
    Ok((south, north))
}

/// Next band letter north, skipping I and O.
///
/// Returns `'Y'` (one past `X`) when there is no next band.
pub fn next_band_letter(letter: char) -> Result<char, MgrsError> {
    validate_band_letter(letter)?;
    let mut next = (letter as u8 + 1) as char;
    if is_omitted_band_letter(next) {
        next = (next as u8 + 1) as char;
    }
    Ok(next)
}

/// Previous band letter south, skipping I and O.
///
/// Returns `'B'` (one before `C`) when there is no previous band.
pub fn previous_band_letter(letter: char) -> Result<char, MgrsError> {
    validate_band_letter(letter)?;
    let mut previous = (letter as u8 - 1) as char;
    if is_omitted_band_letter(previous) {
        previous = (previous as u8 - 1) as char;
    }
    Ok(previous)
}
