//! Tolerance Rules
//!
//! One pure predicate per matching dimension. A record matches a query only
//! when all four hold.
//!
//! Categorical values are compared case-insensitively. Two cross-category
//! tolerances exist, both symmetric:
//! - soil: `loamy` is compatible with `sandy` and `clay`
//! - moisture: `medium` is compatible with `low` and `high`

/// Soil category that bridges the two extremes
const BRIDGE_SOIL: &str = "loamy";
const EXTREME_SOILS: &[&str] = &["sandy", "clay"];

/// Moisture level that bridges the two extremes
const BRIDGE_MOISTURE: &str = "medium";
const EXTREME_MOISTURES: &[&str] = &["low", "high"];

/// Inclusive pH range check
pub fn ph_matches(ph: f64, ph_min: f64, ph_max: f64) -> bool {
    ph_min <= ph && ph <= ph_max
}

/// Soil type: exact match or loamy ~ sandy/clay
pub fn soil_matches(requested: &str, record: &str) -> bool {
    bridged_match(requested, record, BRIDGE_SOIL, EXTREME_SOILS)
}

/// Moisture level: exact match or medium ~ low/high
pub fn moisture_matches(requested: &str, record: &str) -> bool {
    bridged_match(requested, record, BRIDGE_MOISTURE, EXTREME_MOISTURES)
}

/// Crop type: empty request is a wildcard, otherwise case-insensitive equality
pub fn crop_type_matches(requested: &str, record: Option<&str>) -> bool {
    let requested = requested.trim();
    if requested.is_empty() {
        return true;
    }
    record.is_some_and(|r| r.trim().eq_ignore_ascii_case(requested))
}

/// Exact match, or one side is the bridge category and the other an extreme
fn bridged_match(a: &str, b: &str, bridge: &str, extremes: &[&str]) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a == b {
        return true;
    }

    let is_extreme = |v: &str| extremes.contains(&v);
    (a == bridge && is_extreme(&b)) || (b == bridge && is_extreme(&a))
}
