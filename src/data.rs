//! Crop Catalog Loading and Indexing
//!
//! Loads the static crop catalog (JSON array of crop records) once per process
//! and precomputes the summary statistics the front end uses to guide input:
//! global pH bounds plus the distinct crop types and climate zones.
//!
//! The catalog is read-only after load. Per-query derived data lives on
//! `MatchResult` / `ScheduleEntry`, never on the records themselves.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{AdvisorError, Result};

/// Plant and row spacing metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub between_plants: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub between_rows: Option<String>,
}

/// N-P-K requirement levels ("low", "moderate", "high")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FertilizerNeeds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nitrogen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phosphorus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassium: Option<String>,
}

/// One crop in the reference catalog
///
/// Required fields (`crop`, `pH_min`, `pH_max`, `soil_type`, `moisture_level`,
/// `duration_days`) fail deserialization when absent. Everything else is
/// descriptive metadata used only for enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecord {
    /// Display name, also the rotation lookup key
    pub crop: String,

    /// Inclusive viable pH range
    #[serde(rename = "pH_min")]
    pub ph_min: f64,
    #[serde(rename = "pH_max")]
    pub ph_max: f64,

    pub soil_type: String,
    pub moisture_level: String,

    /// Days from planting to harvest
    pub duration_days: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climate_zone: Option<String>,

    // Descriptive metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_per_hectare: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planting_season: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pest_resistance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fertilizer_needs: Option<FertilizerNeeds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunlight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_requirement: Option<String>,
}

impl CropRecord {
    /// Minimal record with only the required fields set
    pub fn new(
        crop: &str,
        ph_min: f64,
        ph_max: f64,
        soil_type: &str,
        moisture_level: &str,
        duration_days: u32,
    ) -> Self {
        CropRecord {
            crop: crop.to_string(),
            ph_min,
            ph_max,
            soil_type: soil_type.to_string(),
            moisture_level: moisture_level.to_string(),
            duration_days,
            crop_type: None,
            climate_zone: None,
            yield_per_hectare: None,
            planting_season: None,
            pest_resistance: None,
            spacing: None,
            fertilizer_needs: None,
            sunlight: None,
            water_requirement: None,
        }
    }

    /// Check load-time invariants
    fn validate(&self) -> std::result::Result<(), String> {
        if self.crop.trim().is_empty() {
            return Err("crop name is blank".to_string());
        }
        if !self.ph_min.is_finite() || !self.ph_max.is_finite() {
            return Err("pH bounds must be finite numbers".to_string());
        }
        if self.ph_min > self.ph_max {
            return Err(format!(
                "pH_min {} exceeds pH_max {}",
                self.ph_min, self.ph_max
            ));
        }
        if self.soil_type.trim().is_empty() {
            return Err("soil_type is blank".to_string());
        }
        if self.moisture_level.trim().is_empty() {
            return Err("moisture_level is blank".to_string());
        }
        if self.duration_days == 0 {
            return Err("duration_days must be positive".to_string());
        }
        Ok(())
    }
}

/// Loaded catalog plus precomputed summaries
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    /// Records in source order (match output order follows this)
    records: Vec<CropRecord>,

    /// Crop name → index into `records` (first occurrence wins)
    by_name: FxHashMap<String, usize>,

    /// (min pH_min, max pH_max); None for an empty catalog
    ph_bounds: Option<(f64, f64)>,

    /// Sorted distinct non-empty crop types
    crop_types: Vec<String>,

    /// Sorted distinct non-empty climate zones
    climate_zones: Vec<String>,
}

impl CatalogIndex {
    /// Load the catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source_name = path.display().to_string();

        let contents = std::fs::read_to_string(path)
            .map_err(|e| AdvisorError::data_unavailable(&source_name, e.to_string()))?;

        Self::from_json_str(&contents, &source_name)
    }

    /// Parse a JSON array of crop records
    pub fn from_json_str(json: &str, source_name: &str) -> Result<Self> {
        let records: Vec<CropRecord> = serde_json::from_str(json)
            .map_err(|e| AdvisorError::data_unavailable(source_name, format!("malformed JSON: {}", e)))?;

        Self::from_records(records, source_name)
    }

    /// Validate records and build the index
    pub fn from_records(records: Vec<CropRecord>, source_name: &str) -> Result<Self> {
        for (idx, record) in records.iter().enumerate() {
            record.validate().map_err(|reason| {
                AdvisorError::data_unavailable(
                    source_name,
                    format!("record {} ('{}'): {}", idx, record.crop, reason),
                )
            })?;
        }

        let mut by_name = FxHashMap::default();
        for (idx, record) in records.iter().enumerate() {
            by_name.entry(record.crop.clone()).or_insert(idx);
        }

        let ph_bounds = if records.is_empty() {
            None
        } else {
            let min_ph = records.iter().map(|r| r.ph_min).fold(f64::INFINITY, f64::min);
            let max_ph = records.iter().map(|r| r.ph_max).fold(f64::NEG_INFINITY, f64::max);
            Some((min_ph, max_ph))
        };

        let crop_types = distinct_sorted(records.iter().map(|r| r.crop_type.as_deref()));
        let climate_zones = distinct_sorted(records.iter().map(|r| r.climate_zone.as_deref()));

        match ph_bounds {
            Some((min_ph, max_ph)) => tracing::info!(
                "Loaded {} crops from {} (pH {}-{}, {} crop types, {} climate zones)",
                records.len(),
                source_name,
                min_ph,
                max_ph,
                crop_types.len(),
                climate_zones.len()
            ),
            None => tracing::warn!("Crop catalog {} contains no records", source_name),
        }

        Ok(CatalogIndex {
            records,
            by_name,
            ph_bounds,
            crop_types,
            climate_zones,
        })
    }

    pub fn records(&self) -> &[CropRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact-name lookup
    pub fn get(&self, name: &str) -> Option<&CropRecord> {
        self.by_name.get(name).map(|&idx| &self.records[idx])
    }

    /// Exact-name lookup that fails with `NotFound`
    pub fn require(&self, name: &str) -> Result<&CropRecord> {
        self.get(name)
            .ok_or_else(|| AdvisorError::NotFound(name.to_string()))
    }

    /// Smallest `pH_min` across the catalog
    pub fn min_ph(&self) -> Option<f64> {
        self.ph_bounds.map(|(min, _)| min)
    }

    /// Largest `pH_max` across the catalog
    pub fn max_ph(&self) -> Option<f64> {
        self.ph_bounds.map(|(_, max)| max)
    }

    pub fn crop_types(&self) -> &[String] {
        &self.crop_types
    }

    pub fn climate_zones(&self) -> &[String] {
        &self.climate_zones
    }

    /// Reject a pH outside the catalog's global range
    ///
    /// Input guidance only; `find_matches` does not call this.
    pub fn check_ph(&self, ph: f64) -> Result<()> {
        let (min_ph, max_ph) = self.ph_bounds.ok_or_else(|| {
            AdvisorError::data_unavailable("catalog", "no records to derive a pH range from")
        })?;

        if ph < min_ph || ph > max_ph {
            return Err(AdvisorError::invalid_input(format!(
                "Please enter a pH value between {} and {}",
                min_ph, max_ph
            )));
        }
        Ok(())
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_records() -> Vec<CropRecord> {
        let mut rice = CropRecord::new("Rice", 5.0, 6.5, "clay", "high", 120);
        rice.crop_type = Some("grain".to_string());
        rice.climate_zone = Some("tropical".to_string());

        let mut okra = CropRecord::new("Okra", 6.0, 7.5, "loamy", "medium", 60);
        okra.crop_type = Some("vegetable".to_string());
        okra.climate_zone = Some("subtropical".to_string());

        let mut pineapple = CropRecord::new("Pineapple", 4.5, 6.0, "sandy", "low", 540);
        pineapple.crop_type = Some("fruit".to_string());
        pineapple.climate_zone = Some("tropical".to_string());

        vec![rice, okra, pineapple]
    }

    #[test]
    fn test_summary_statistics() {
        let catalog = CatalogIndex::from_records(sample_records(), "test").unwrap();

        assert_eq!(catalog.len(), 3);
        assert_relative_eq!(catalog.min_ph().unwrap(), 4.5);
        assert_relative_eq!(catalog.max_ph().unwrap(), 7.5);
        assert_eq!(catalog.crop_types(), &["fruit", "grain", "vegetable"]);
        assert_eq!(catalog.climate_zones(), &["subtropical", "tropical"]);
    }

    #[test]
    fn test_inverted_ph_range_fails_load() {
        let mut records = sample_records();
        records[1].ph_min = 8.0;

        let err = CatalogIndex::from_records(records, "test").unwrap_err();
        assert!(matches!(err, AdvisorError::DataUnavailable { .. }));
        assert!(err.to_string().contains("Okra"));
    }

    #[test]
    fn test_zero_duration_fails_load() {
        let records = vec![CropRecord::new("Ghost", 5.0, 6.0, "clay", "low", 0)];
        assert!(CatalogIndex::from_records(records, "test").is_err());
    }

    #[test]
    fn test_missing_required_field_fails_load() {
        let json = r#"[{"crop": "Corn", "pH_min": 5.5, "soil_type": "loamy",
                        "moisture_level": "medium", "duration_days": 100}]"#;
        let err = CatalogIndex::from_json_str(json, "inline").unwrap_err();
        assert!(err.to_string().contains("pH_max"));
    }

    #[test]
    fn test_malformed_json_fails_load() {
        let err = CatalogIndex::from_json_str("[{", "inline").unwrap_err();
        assert!(matches!(err, AdvisorError::DataUnavailable { .. }));
    }

    #[test]
    fn test_missing_file_fails_load() {
        let err = CatalogIndex::load("/nonexistent/crops.json").unwrap_err();
        assert!(matches!(err, AdvisorError::DataUnavailable { .. }));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = CatalogIndex::from_json_str("[]", "inline").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.min_ph().is_none());
        assert!(catalog.max_ph().is_none());
        assert!(catalog.crop_types().is_empty());
        assert!(catalog.check_ph(6.0).is_err());
    }

    #[test]
    fn test_optional_metadata_parses() {
        let json = r#"[{
            "crop": "Mungbean", "pH_min": 6.2, "pH_max": 7.2,
            "soil_type": "loamy", "moisture_level": "low", "duration_days": 60,
            "crop_type": "legume",
            "planting_season": ["May", "October"],
            "spacing": {"between_plants": "10 cm", "between_rows": "50 cm"},
            "fertilizer_needs": {"nitrogen": "low", "phosphorus": "moderate", "potassium": "moderate"}
        }]"#;
        let catalog = CatalogIndex::from_json_str(json, "inline").unwrap();
        let record = catalog.get("Mungbean").unwrap();

        assert_eq!(record.planting_season.as_deref(), Some(&["May".to_string(), "October".to_string()][..]));
        assert_eq!(record.spacing.as_ref().unwrap().between_rows.as_deref(), Some("50 cm"));
        assert!(record.sunlight.is_none());
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = CatalogIndex::from_records(sample_records(), "test").unwrap();

        assert_eq!(catalog.get("Okra").unwrap().duration_days, 60);
        assert!(catalog.get("okra").is_none()); // exact match only
        assert!(matches!(catalog.require("Taro"), Err(AdvisorError::NotFound(_))));
    }

    #[test]
    fn test_check_ph_range() {
        let catalog = CatalogIndex::from_records(sample_records(), "test").unwrap();

        assert!(catalog.check_ph(4.5).is_ok());
        assert!(catalog.check_ph(7.5).is_ok());

        let err = catalog.check_ph(9.0).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a pH value between 4.5 and 7.5");
    }
}
