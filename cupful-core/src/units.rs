//! Input unit kinds and the kitchen measures we convert into.

use crate::error::ConversionError;
use std::str::FromStr;

pub const CUP_ML: f64 = 180.0;
pub const TABLESPOON_ML: f64 = 15.0;
pub const TEASPOON_ML: f64 = 5.0;

/// Unit the requested amount is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Gram,
    Milliliter,
}

impl FromStr for UnitKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gram" => Ok(UnitKind::Gram),
            "ml" => Ok(UnitKind::Milliliter),
            other => Err(ConversionError::UnsupportedUnit(other.to_string())),
        }
    }
}

/// Kitchen measure a volume is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeUnit {
    Cup,
    Tablespoon,
    Teaspoon,
}

impl VolumeUnit {
    /// All measures in output order
    pub const ALL: [VolumeUnit; 3] = [
        VolumeUnit::Cup,
        VolumeUnit::Tablespoon,
        VolumeUnit::Teaspoon,
    ];

    /// Size of one unit in milliliters.
    pub fn ml(&self) -> f64 {
        match self {
            VolumeUnit::Cup => CUP_ML,
            VolumeUnit::Tablespoon => TABLESPOON_ML,
            VolumeUnit::Teaspoon => TEASPOON_ML,
        }
    }
}
