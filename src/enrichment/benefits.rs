//! Benefit lists
//!
//! Fixed per-type list, then one line for good pest resistance and one for
//! tropical climate suitability.

use super::crop_type::{benefits_for, CropType};
use crate::data::CropRecord;

const PEST_RESISTANCE_NOTE: &str = "Good natural resistance to common pests reduces spraying costs";
const TROPICAL_NOTE: &str = "Well adapted to tropical heat and humidity";

pub fn list_benefits(record: &CropRecord) -> Vec<String> {
    let crop_type = record.crop_type.as_deref().and_then(CropType::parse);

    let mut benefits: Vec<String> = benefits_for(crop_type)
        .iter()
        .map(|s| s.to_string())
        .collect();

    let resistant = record
        .pest_resistance
        .as_deref()
        .map(|r| r.trim().to_lowercase())
        .is_some_and(|r| r == "high" || r == "moderate");
    if resistant {
        benefits.push(PEST_RESISTANCE_NOTE.to_string());
    }

    let tropical = record
        .climate_zone
        .as_deref()
        .is_some_and(|z| z.trim().eq_ignore_ascii_case("tropical"));
    if tropical {
        benefits.push(TROPICAL_NOTE.to_string());
    }

    benefits
}
