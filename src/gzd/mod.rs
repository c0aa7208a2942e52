//! Grid Zone Designators: UTM zone numbers, latitude bands and the irregular
//! Norway/Svalbard cells.

mod band;
pub mod constants;
mod range;
mod zone;

pub use band::{
    band_index, band_latitudes, band_letter, is_omitted_band_letter, next_band_letter,
    previous_band_letter, validate_band_letter,
};
pub use range::{GridRange, GridRangeIter};
pub use zone::{
    GridZone, central_meridian, grid_zone, normalize_longitude, validate_zone_number,
    zone_bounds, zone_number, zone_number_at,
};
