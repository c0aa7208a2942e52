use crate::error::MgrsError;
use serde::{Deserialize, Serialize};

/// Maximum number of digits per axis in an MGRS reference
pub const MAX_ACCURACY: u8 = 5;

/// Precision levels of an MGRS reference, coarse to fine.
///
/// # Example
/// ```
/// use mgrs_rs::GridType;
///
/// assert_eq!(GridType::Kilometer.accuracy(), 2);
/// assert_eq!(GridType::Kilometer.precision(), 1000);
/// assert_eq!(GridType::with_accuracy(4).unwrap(), GridType::TenMeter);
/// assert!(GridType::HundredKilometer < GridType::Meter);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum GridType {
    /// Grid Zone Designator only, e.g. `33X`
    Gzd,
    /// 100 km square, e.g. `33XVG`
    HundredKilometer,
    TenKilometer,
    Kilometer,
    HundredMeter,
    TenMeter,
    /// Full 1 m reference, e.g. `33XVG7459643594`
    #[default]
    Meter,
}

impl GridType {
    /// Every level, coarse to fine.
    pub const ALL: [GridType; 7] = [
        GridType::Gzd,
        GridType::HundredKilometer,
        GridType::TenKilometer,
        GridType::Kilometer,
        GridType::HundredMeter,
        GridType::TenMeter,
        GridType::Meter,
    ];

    /// Digits per axis written at this level.
    pub fn accuracy(&self) -> u8 {
        match self {
            GridType::Gzd | GridType::HundredKilometer => 0,
            GridType::TenKilometer => 1,
            GridType::Kilometer => 2,
            GridType::HundredMeter => 3,
            GridType::TenMeter => 4,
            GridType::Meter => 5,
        }
    }

    /// Cell size in meters; 0 for [`GridType::Gzd`].
    pub fn precision(&self) -> u32 {
        match self {
            GridType::Gzd => 0,
            other => 10u32.pow((MAX_ACCURACY - other.accuracy()) as u32),
        }
    }

    /// The level that writes `accuracy` digits per axis (0 is the 100 km square).
    pub fn with_accuracy(accuracy: u8) -> Result<Self, MgrsError> {
        match accuracy {
            0 => Ok(GridType::HundredKilometer),
            1 => Ok(GridType::TenKilometer),
            2 => Ok(GridType::Kilometer),
            3 => Ok(GridType::HundredMeter),
            4 => Ok(GridType::TenMeter),
            5 => Ok(GridType::Meter),
            _ => Err(MgrsError::InvalidAccuracy(accuracy)),
        }
    }

    /// The level with the given cell size in meters.
    pub fn with_precision(meters: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|grid| grid.precision() == meters)
    }

    pub fn name(&self) -> &'static str {
        match self {
            GridType::Gzd => "GZD",
            GridType::HundredKilometer => "HUNDRED_KILOMETER",
            GridType::TenKilometer => "TEN_KILOMETER",
            GridType::Kilometer => "KILOMETER",
            GridType::HundredMeter => "HUNDRED_METER",
            GridType::TenMeter => "TEN_METER",
            GridType::Meter => "METER",
        }
    }
}

impl TryFrom<u8> for GridType {
    type Error = MgrsError;

    fn try_from(accuracy: u8) -> Result<Self, Self::Error> {
        Self::with_accuracy(accuracy)
    }
}

impl std::fmt::Display for GridType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
