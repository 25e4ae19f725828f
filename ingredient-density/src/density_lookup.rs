//! Ingredient density lookup for weight-to-volume conversion.
//!
//! Densities are stored as grams per milliliter.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

// =============================================================================
// Data loading
// =============================================================================

/// Data file format (material identifier -> grams per ml).
#[derive(Deserialize)]
struct DensityDataFile {
    materials: HashMap<String, f64>,
}

/// Embedded JSON data file.
static DENSITIES_JSON: &str = include_str!("data/densities.json");

/// Parsed density table. Every density is finite and positive.
static DATA: LazyLock<HashMap<String, f64>> = LazyLock::new(|| {
    let data: DensityDataFile =
        serde_json::from_str(DENSITIES_JSON).expect("densities.json should be valid JSON");

    for (name, density) in &data.materials {
        assert!(
            density.is_finite() && *density > 0.0,
            "density for {name} must be positive, got {density}"
        );
    }

    data.materials
});

// =============================================================================
// Public API
// =============================================================================

/// Find the density (grams per ml) for a material identifier.
///
/// Identifiers match exactly (`"baking_powder"`, not `"Baking Powder"`).
pub fn find_density(material: &str) -> Option<f64> {
    DATA.get(material).copied()
}

/// Convert a weight in grams to a volume in milliliters.
///
/// Unknown materials fall back to a density of 1, so the grams are returned
/// unchanged and treated as milliliters.
pub fn gram_to_ml(grams: f64, material: &str) -> f64 {
    match find_density(material) {
        Some(density) => grams / density,
        None => {
            tracing::debug!(material, "unknown material, treating grams as ml");
            grams
        }
    }
}

/// All known materials with their densities, sorted by identifier.
pub fn materials() -> Vec<(&'static str, f64)> {
    let data: &'static HashMap<String, f64> = &DATA;
    let mut entries: Vec<(&'static str, f64)> = data
        .iter()
        .map(|(name, &density)| (name.as_str(), density))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_density_direct() {
        assert_eq!(find_density("water"), Some(1.0));
        assert_eq!(find_density("flour"), Some(0.53));
        assert_eq!(find_density("honey"), Some(1.4));
        assert_eq!(find_density("baking_powder"), Some(0.9));
    }

    #[test]
    fn test_find_density_unknown() {
        assert_eq!(find_density("unicorn tears"), None);
        assert_eq!(find_density(""), None);
    }

    #[test]
    fn test_find_density_is_exact_match() {
        assert_eq!(find_density("Flour"), None);
        assert_eq!(find_density("baking powder"), None);
        assert_eq!(find_density(" water"), None);
    }

    #[test]
    fn test_all_densities_positive() {
        for (name, density) in materials() {
            assert!(density > 0.0, "{name} has non-positive density");
        }
    }

    #[test]
    fn test_materials_sorted_and_complete() {
        let names: Vec<&str> = materials().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "baking_powder",
                "butter",
                "flour",
                "honey",
                "oil",
                "rice",
                "salt",
                "sugar",
                "water"
            ]
        );
    }

    #[test]
    fn test_gram_to_ml_known_materials() {
        for (name, density) in materials() {
            assert_eq!(gram_to_ml(100.0, name), 100.0 / density);
        }
        assert_eq!(gram_to_ml(200.0, "water"), 200.0);
        assert!((gram_to_ml(53.0, "flour") - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_gram_to_ml_unknown_material_is_identity() {
        assert_eq!(gram_to_ml(123.5, "saffron"), 123.5);
        assert_eq!(gram_to_ml(42.0, "SUGAR"), 42.0);
    }
}
