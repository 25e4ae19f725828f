//! User-facing strings, one table per locale.

use crate::error::ConversionError;
use crate::units::VolumeUnit;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language of the formatted results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    He,
}

impl Locale {
    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::He => &HE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::He => "he",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "he" => Ok(Locale::He),
            other => Err(format!("unknown locale: {other}")),
        }
    }
}

/// Kinds of user-facing error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    InvalidAmount,
    UnsupportedUnit,
}

impl From<&ConversionError> for MessageKind {
    fn from(err: &ConversionError) -> Self {
        match err {
            ConversionError::InvalidAmount(_) => MessageKind::InvalidAmount,
            ConversionError::UnsupportedUnit(_) => MessageKind::UnsupportedUnit,
        }
    }
}

/// Singular and plural display names of a measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitNames {
    pub singular: &'static str,
    pub plural: &'static str,
}

#[derive(Debug)]
pub struct Messages {
    pub invalid_amount: &'static str,
    pub unsupported_unit: &'static str,
    /// Prefix for amounts below the smallest fraction, e.g. "less than ".
    pub less_than: &'static str,
    /// Joins the whole count and the fraction glyph, e.g. " and ".
    pub and: &'static str,
    /// Suffix for whole counts with an unrecognized remainder.
    pub approx: &'static str,
    pub cup: UnitNames,
    pub tablespoon: UnitNames,
    pub teaspoon: UnitNames,
}

impl Messages {
    pub fn error(&self, kind: MessageKind) -> &'static str {
        match kind {
            MessageKind::InvalidAmount => self.invalid_amount,
            MessageKind::UnsupportedUnit => self.unsupported_unit,
        }
    }

    pub fn unit_names(&self, unit: VolumeUnit) -> UnitNames {
        match unit {
            VolumeUnit::Cup => self.cup,
            VolumeUnit::Tablespoon => self.tablespoon,
            VolumeUnit::Teaspoon => self.teaspoon,
        }
    }
}

static EN: Messages = Messages {
    invalid_amount: "Please enter a valid amount",
    unsupported_unit: "Unsupported unit",
    less_than: "less than ",
    and: " and ",
    approx: " (approx.)",
    cup: UnitNames {
        singular: "cup",
        plural: "cups",
    },
    tablespoon: UnitNames {
        singular: "tbs",
        plural: "tbs",
    },
    teaspoon: UnitNames {
        singular: "ts",
        plural: "ts",
    },
};

static HE: Messages = Messages {
    invalid_amount: "אנא הכניסו כמות תקינה",
    unsupported_unit: "יחידה לא נתמכת",
    less_than: "פחות מ-",
    and: " ו",
    approx: " (בערך)",
    cup: UnitNames {
        singular: "כוס",
        plural: "כוסות",
    },
    tablespoon: UnitNames {
        singular: "כף",
        plural: "כפות",
    },
    teaspoon: UnitNames {
        singular: "כפית",
        plural: "כפיות",
    },
};
