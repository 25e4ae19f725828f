//! Request validation and conversion into all kitchen measures.

use crate::error::ConversionError;
use crate::messages::{Locale, MessageKind};
use crate::units::{UnitKind, VolumeUnit};
use crate::volume_format::format_in;
use ingredient_density::gram_to_ml;
use serde::{Deserialize, Serialize};

pub const DEFAULT_UNIT: &str = "gram";
pub const DEFAULT_MATERIAL: &str = "water";

/// A quantity of some material to convert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub amount: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_material")]
    pub material: String,
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

fn default_material() -> String {
    DEFAULT_MATERIAL.to_string()
}

impl ConversionRequest {
    pub fn new(amount: f64, unit: impl Into<String>, material: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
            material: material.into(),
        }
    }
}

/// Formatted amounts in each kitchen measure.
///
/// Each field is a formatted quantity, an empty string when the amount is
/// negligible in that unit, or a user-facing error message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub cups: String,
    pub tablespoons: String,
    pub teaspoons: String,
}

impl ConversionResult {
    /// Result for an amount that is missing, unparseable or not positive.
    pub fn invalid_amount(locale: Locale) -> Self {
        let message = locale.messages().error(MessageKind::InvalidAmount);
        Self {
            cups: message.to_string(),
            tablespoons: message.to_string(),
            teaspoons: message.to_string(),
        }
    }

    /// Result for a unit that is neither grams nor milliliters.
    pub fn unsupported_unit(locale: Locale) -> Self {
        Self {
            cups: locale
                .messages()
                .error(MessageKind::UnsupportedUnit)
                .to_string(),
            ..Self::default()
        }
    }

    fn from_error(err: &ConversionError, locale: Locale) -> Self {
        match MessageKind::from(err) {
            MessageKind::InvalidAmount => Self::invalid_amount(locale),
            MessageKind::UnsupportedUnit => Self::unsupported_unit(locale),
        }
    }
}

/// Check a request and work out its volume in milliliters.
///
/// The amount is checked before the unit.
pub fn validate(request: &ConversionRequest) -> Result<f64, ConversionError> {
    if !request.amount.is_finite() || request.amount <= 0.0 {
        return Err(ConversionError::InvalidAmount(request.amount));
    }

    let ml = match request.unit.parse::<UnitKind>()? {
        UnitKind::Milliliter => request.amount,
        UnitKind::Gram => gram_to_ml(request.amount, &request.material),
    };

    Ok(ml)
}

/// Convert a request into cups, tablespoons and teaspoons.
///
/// Never fails: rejected requests produce the locale's error messages instead.
pub fn convert(request: &ConversionRequest, locale: Locale) -> ConversionResult {
    let ml = match validate(request) {
        Ok(ml) => ml,
        Err(e) => {
            tracing::debug!(error = %e, "rejected conversion request");
            return ConversionResult::from_error(&e, locale);
        }
    };

    let [cups, tablespoons, teaspoons] = VolumeUnit::ALL.map(|unit| format_in(ml, unit, locale));

    ConversionResult {
        cups,
        tablespoons,
        teaspoons,
    }
}
