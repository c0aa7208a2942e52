/// Error type for mgrs-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MgrsError {
    /// The text is not a valid MGRS reference.
    InvalidMgrs(String),
    /// The text is not a valid UTM coordinate.
    InvalidUtm(String),
    /// The zone number is outside the valid range (1-60).
    InvalidZoneNumber(i64),
    /// The band letter is outside C-X or is one of the omitted letters I and O.
    InvalidBandLetter(char),
    /// The zone/band pair was absorbed by the Svalbard exception (32X, 34X, 36X).
    OmittedGridZone(u8, char),
    /// A 100 km square column or row letter is not used by the zone.
    InvalidSquareLetter(char),
    /// The accuracy is outside the valid range (0-5).
    InvalidAccuracy(u8),
    /// A coordinate value falls outside what the grid can express.
    OutOfRange(String),
}

impl MgrsError {
    /// Returns true for errors raised while parsing text.
    pub fn is_format_error(&self) -> bool {
        matches!(self, MgrsError::InvalidMgrs(_) | MgrsError::InvalidUtm(_))
    }

    /// Returns true for errors raised by constructors given out-of-domain values.
    pub fn is_range_error(&self) -> bool {
        !self.is_format_error()
    }
}

impl std::fmt::Display for MgrsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MgrsError::InvalidMgrs(value) => write!(f, "Invalid MGRS: {}", value),
            MgrsError::InvalidUtm(value) => write!(f, "Invalid UTM: {}", value),
            MgrsError::InvalidZoneNumber(n) => {
                write!(f, "Invalid zone number (expected 1 - 60): {}", n)
            }
            MgrsError::InvalidBandLetter(c) => {
                write!(f, "Invalid band letter (CDEFGHJKLMNPQRSTUVWX): {}", c)
            }
            MgrsError::OmittedGridZone(n, c) => write!(f, "Omitted grid zone: {}{}", n, c),
            MgrsError::InvalidSquareLetter(c) => write!(f, "Invalid 100km square letter: {}", c),
            MgrsError::InvalidAccuracy(a) => write!(f, "Invalid accuracy (expected 0 - 5): {}", a),
            MgrsError::OutOfRange(msg) => write!(f, "Out of range: {}", msg),
        }
    }
}

impl std::error::Error for MgrsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert!(MgrsError::InvalidMgrs("32X".into()).is_format_error());
        assert!(MgrsError::InvalidUtm("".into()).is_format_error());
        assert!(MgrsError::InvalidZoneNumber(61).is_range_error());
        assert!(MgrsError::OmittedGridZone(32, 'X').is_range_error());
        assert!(!MgrsError::InvalidBandLetter('I').is_format_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(MgrsError::InvalidMgrs("32XMH".into()).to_string(), "Invalid MGRS: 32XMH");
        assert_eq!(MgrsError::OmittedGridZone(34, 'X').to_string(), "Omitted grid zone: 34X");
    }
}
