//! Fraction-aware formatting of volumes in kitchen measures.
//!
//! Volumes are written as whole counts plus one of the glyphs ¼, ½ or ¾,
//! never as decimals. Remainders that are not close to one of those
//! fractions are rounded down and flagged as approximate.

use crate::messages::{Locale, Messages};
use crate::units::VolumeUnit;

/// Maximum distance (in units) between a remainder and a fraction anchor,
/// or between a remainder and zero, for the two to be treated as equal.
pub const TOLERANCE: f64 = 0.05;

/// Fractions of a unit the formatter can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fraction {
    Quarter,
    Half,
    ThreeQuarters,
}

impl Fraction {
    /// Anchors in matching order
    pub const ALL: &'static [Fraction] =
        &[Fraction::Quarter, Fraction::Half, Fraction::ThreeQuarters];

    pub fn value(&self) -> f64 {
        match self {
            Fraction::Quarter => 0.25,
            Fraction::Half => 0.5,
            Fraction::ThreeQuarters => 0.75,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Fraction::Quarter => "¼",
            Fraction::Half => "½",
            Fraction::ThreeQuarters => "¾",
        }
    }
}

/// What is left over after taking the whole units out of an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remainder {
    /// Close enough to zero to ignore.
    Zero,
    Fraction(Fraction),
    /// Not near zero and not near any known fraction.
    Other,
}

/// Classify the fractional part of an amount.
pub fn classify_remainder(remainder: f64) -> Remainder {
    if remainder < TOLERANCE {
        return Remainder::Zero;
    }

    Fraction::ALL
        .iter()
        .find(|fraction| (remainder - fraction.value()).abs() < TOLERANCE)
        .map_or(Remainder::Other, |&fraction| Remainder::Fraction(fraction))
}

/// Split an amount of units into its whole count and remainder.
///
/// The whole count stays a float so very large amounts are not truncated.
fn split_units(amount: f64) -> (f64, f64) {
    let whole = amount.floor();
    (whole, amount - whole)
}

/// Format a volume in milliliters as an amount of some unit.
///
/// Returns an empty string for non-positive volumes and for volumes no
/// larger than the tolerance, i.e. nothing worth measuring.
pub fn format_volume(
    ml_amount: f64,
    unit_ml: f64,
    singular: &str,
    plural: &str,
    messages: &Messages,
) -> String {
    if !ml_amount.is_finite() || ml_amount <= 0.0 {
        return String::new();
    }

    let amount = ml_amount / unit_ml;
    let (whole, remainder) = split_units(amount);

    let remainder = classify_remainder(remainder);

    if whole == 0.0 {
        return match remainder {
            Remainder::Fraction(fraction) => format!("{} {}", fraction.glyph(), singular),
            _ if amount > TOLERANCE => format!(
                "{}{} {}",
                messages.less_than,
                Fraction::Quarter.glyph(),
                singular
            ),
            _ => String::new(),
        };
    }

    match remainder {
        Remainder::Fraction(fraction) => {
            format!("{:.0}{}{} {}", whole, messages.and, fraction.glyph(), plural)
        }
        Remainder::Zero => format!("{:.0} {}", whole, plural),
        Remainder::Other => format!("{:.0} {}{}", whole, plural, messages.approx),
    }
}

/// Format a volume in one of the kitchen measures, using the locale's unit names.
pub fn format_in(ml_amount: f64, unit: VolumeUnit, locale: Locale) -> String {
    let messages = locale.messages();
    let names = messages.unit_names(unit);
    format_volume(ml_amount, unit.ml(), names.singular, names.plural, messages)
}
