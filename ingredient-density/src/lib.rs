//! Ingredient density lookup for weight-to-volume conversion.
//!
//! This crate provides density data (grams per milliliter) for the materials
//! the converter knows about, enabling conversion from a weight to a volume.
//!
//! # Example
//!
//! ```
//! use ingredient_density::{find_density, gram_to_ml};
//!
//! assert_eq!(find_density("water"), Some(1.0));
//!
//! // 106g of flour is 200ml
//! let ml = gram_to_ml(106.0, "flour");
//! assert!((ml - 200.0).abs() < 1e-9);
//!
//! // Unknown materials are treated as water
//! assert_eq!(gram_to_ml(50.0, "unicorn tears"), 50.0);
//! ```

mod density_lookup;

pub use density_lookup::{find_density, gram_to_ml, materials};
