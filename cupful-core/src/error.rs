use thiserror::Error;

/// Reasons a conversion request is rejected before any formatting happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),
}
