//! Crop descriptions, one template per crop type plus a default.

use super::crop_type::CropType;
use crate::data::CropRecord;

const DEFAULT_SEASON: &str = "Year-round";
const DEFAULT_YIELD: &str = "N/A";

/// Render the description for a record
pub fn describe(record: &CropRecord) -> String {
    let crop_type = record.crop_type.as_deref().and_then(CropType::parse);
    let days = record.duration_days;
    let season = planting_season_text(record);
    let yield_text = record.yield_per_hectare.as_deref().unwrap_or(DEFAULT_YIELD);

    match crop_type {
        Some(CropType::Fruit) => format!(
            "A fruit crop that reaches harvest in about {} days. Best planted during {}. \
             Typical yield: {} per hectare.",
            days, season, yield_text
        ),
        Some(CropType::Vegetable) => format!(
            "A vegetable crop ready for harvest in around {} days. Plant during {}. \
             Expected yield: {} per hectare.",
            days, season, yield_text
        ),
        Some(CropType::Root) => format!(
            "A root crop whose tubers mature in about {} days. Plant during {}. \
             Expected yield: {} per hectare.",
            days, season, yield_text
        ),
        Some(CropType::Leafy) => format!(
            "A leafy vegetable ready to cut in about {} days. Sow during {}. \
             Expected yield: {} per hectare.",
            days, season, yield_text
        ),
        Some(CropType::Grain) => format!(
            "A grain crop that matures in about {} days. Plant during {}. \
             Average grain yield: {} per hectare.",
            days, season, yield_text
        ),
        Some(CropType::Industrial) => format!(
            "An industrial crop grown for processing, taking about {} days to harvest. \
             Plant during {}. Expected yield: {} per hectare.",
            days, season, yield_text
        ),
        Some(CropType::Legume) => format!(
            "A nitrogen-fixing legume that matures in about {} days. Plant during {}. \
             Expected yield: {} per hectare.",
            days, season, yield_text
        ),
        None => format!(
            "A crop that takes about {} days from planting to harvest. Plant during {}. \
             Expected yield: {} per hectare.",
            days, season, yield_text
        ),
    }
}

fn planting_season_text(record: &CropRecord) -> String {
    match record.planting_season.as_deref() {
        Some(months) if !months.is_empty() => months.join(", "),
        _ => DEFAULT_SEASON.to_string(),
    }
}
