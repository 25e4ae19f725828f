//! Golden file tests for the conversion pipeline.
//!
//! Test cases are individual JSON files in `fixtures/conversions/`.
//!
//! Test format:
//! ```json
//! {
//!   "request": { "amount": 90, "unit": "ml", "material": "water" },
//!   "locale": "en",
//!   "expected": { "cups": "½ cup", "tablespoons": "6 tbs", "teaspoons": "18 ts" }
//! }
//! ```

use cupful_core::{convert, ConversionRequest, ConversionResult, Locale};
use glob::glob;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// A test case loaded from a JSON fixture file
#[derive(Debug, Deserialize)]
struct TestCase {
    request: ConversionRequest,
    /// Defaults to English when omitted
    #[serde(default)]
    locale: Locale,
    expected: ConversionResult,
}

fn load_test_cases() -> Vec<(String, TestCase)> {
    let fixtures_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/conversions");
    let pattern = fixtures_dir.join("*.json");
    let pattern_str = pattern.to_string_lossy();

    let mut cases = Vec::new();
    for entry in glob(&pattern_str).expect("Failed to read glob pattern") {
        let path = entry.expect("Failed to read directory entry");
        let name = path.file_stem().unwrap().to_string_lossy().to_string();
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        let case: TestCase = serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
        cases.push((name, case));
    }

    // Sort by name for deterministic ordering
    cases.sort_by(|a, b| a.0.cmp(&b.0));

    assert!(
        !cases.is_empty(),
        "No test fixtures found in {:?}",
        fixtures_dir
    );
    cases
}

#[test]
fn test_conversion_golden_files() {
    let cases = load_test_cases();

    let mut failures = Vec::new();
    for (name, case) in &cases {
        let actual = convert(&case.request, case.locale);
        if actual != case.expected {
            failures.push((name.clone(), case, actual));
        }
    }

    if !failures.is_empty() {
        let mut msg = format!(
            "\n{} failures across {} tests:\n",
            failures.len(),
            cases.len()
        );

        for (name, case, actual) in &failures {
            msg.push_str(&format!("\n=== {} ===\n", name));
            msg.push_str(&format!("Input: {:?}\n", case.request));
            msg.push_str(&format!("Expected: {:#?}\n", case.expected));
            msg.push_str(&format!("Actual:   {:#?}\n", actual));
        }

        panic!("{}", msg);
    }

    println!("All {} conversion tests passed!", cases.len());
}
