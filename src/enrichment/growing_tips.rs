//! Growing Tips
//!
//! Practical tips assembled from descriptive metadata. Each tip appears only
//! when its source field is present, always in this order:
//! spacing, fertilizer, sunlight, water, planting season, yield.

use crate::data::{CropRecord, FertilizerNeeds, Spacing};

pub fn growing_tips(record: &CropRecord) -> Vec<String> {
    let mut tips = Vec::new();

    if let Some(spacing) = &record.spacing {
        spacing_tips(spacing, &mut tips);
    }

    if let Some(needs) = &record.fertilizer_needs {
        fertilizer_tips(needs, &mut tips);
    }

    if let Some(sunlight) = &record.sunlight {
        tips.push(format!("Sunlight: {}", sunlight));
        let level = sunlight.to_lowercase();
        if level.contains("full") {
            tips.push("Choose an open site that gets at least 6-8 hours of direct sun".to_string());
        } else if level.contains("partial") {
            tips.push("Tolerates some shade; intercropping under taller crops is possible".to_string());
        }
    }

    if let Some(water) = &record.water_requirement {
        tips.push(format!("Water requirement: {}", water));
        if water.contains("mm/season") {
            tips.push("Spread irrigation evenly over the growing season, especially at flowering".to_string());
        } else if water.contains("mm/year") {
            tips.push("Plan irrigation for the dry months to cover the annual requirement".to_string());
        }
    }

    if let Some(season) = &record.planting_season {
        let year_round = season.len() == 1 && season[0] == "Year-round";
        if !season.is_empty() && !year_round {
            tips.push(format!("Best planting months: {}", season.join(", ")));
        }
    }

    if let Some(yield_text) = &record.yield_per_hectare {
        tips.push(format!("Expected yield: {} per hectare", yield_text));
    }

    tips
}

/// Only when both distances are known
fn spacing_tips(spacing: &Spacing, tips: &mut Vec<String>) {
    if let (Some(plants), Some(rows)) = (&spacing.between_plants, &spacing.between_rows) {
        tips.push(format!(
            "Spacing: {} between plants and {} between rows",
            plants, rows
        ));
    }
}

/// Only when all three nutrient levels are known; advisory line per "high" level
fn fertilizer_tips(needs: &FertilizerNeeds, tips: &mut Vec<String>) {
    let (Some(n), Some(p), Some(k)) = (&needs.nitrogen, &needs.phosphorus, &needs.potassium) else {
        return;
    };

    tips.push(format!(
        "Fertilizer needs: nitrogen {}, phosphorus {}, potassium {}",
        n, p, k
    ));

    if is_high(n) {
        tips.push("High nitrogen demand: apply in split doses to limit losses".to_string());
    }
    if is_high(p) {
        tips.push("High phosphorus demand: work phosphate into the soil before planting".to_string());
    }
    if is_high(k) {
        tips.push("High potassium demand: top-dress with potash during bulking".to_string());
    }
}

fn is_high(level: &str) -> bool {
    level.trim().eq_ignore_ascii_case("high")
}
