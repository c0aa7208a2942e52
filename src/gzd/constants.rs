/// Minimum UTM zone number
pub const MIN_ZONE_NUMBER: u8 = 1;

/// Maximum UTM zone number
pub const MAX_ZONE_NUMBER: u8 = 60;

/// Zone width in degrees of longitude
pub const ZONE_WIDTH: f64 = 6.0;

/// Minimum longitude
pub const MIN_LON: f64 = -180.0;

/// Maximum longitude
pub const MAX_LON: f64 = 180.0;

/// Southern limit of the MGRS latitude bands
pub const MIN_LAT: f64 = -80.0;

/// Northern limit of the MGRS latitude bands
pub const MAX_LAT: f64 = 84.0;

/// Band height in degrees of latitude (band X is taller)
pub const BAND_HEIGHT: f64 = 8.0;

/// Number of latitude bands
pub const NUM_BANDS: usize = 20;

/// First band letter
pub const MIN_BAND_LETTER: char = 'C';

/// Last band letter
pub const MAX_BAND_LETTER: char = 'X';

/// Band letters south to north, I and O omitted
pub const BAND_LETTERS: [char; NUM_BANDS] = [
    'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V',
    'W', 'X',
];

/// Letters never used for bands
pub const OMITTED_BAND_LETTERS: [char; 2] = ['I', 'O'];

/// First band letter of the northern hemisphere
pub const NORTH_BAND_LETTER: char = 'N';
