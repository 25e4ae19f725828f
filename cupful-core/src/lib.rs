pub mod convert;
pub mod error;
pub mod messages;
pub mod units;
pub mod volume_format;

pub use convert::{convert, validate, ConversionRequest, ConversionResult};
pub use error::ConversionError;
pub use messages::{Locale, MessageKind, Messages, UnitNames};
pub use units::{UnitKind, VolumeUnit};
pub use volume_format::{classify_remainder, format_in, format_volume, Fraction, Remainder};

/// Unique identifier for this build, generated at compile time.
/// Reported by the server's ping endpoint.
pub const BUILD_ID: &str = env!("BUILD_ID");
