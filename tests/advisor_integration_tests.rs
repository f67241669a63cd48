//! Crop Advisor Integration Tests
//!
//! Runs the full pipeline (catalog load → matching → enrichment → rotation)
//! against the sample catalog shipped in data/negros_crops.json.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use crop_advisor::{
    AdvisorError, CatalogIndex, CropMatcher, MatchCriteria, MatchResult, RotationPlanner,
};

fn sample_catalog() -> CatalogIndex {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/negros_crops.json");
    CatalogIndex::load(path).expect("sample catalog should load")
}

fn planting_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn query(catalog: &CatalogIndex, ph: f64, soil: &str, moisture: &str, crop_type: &str) -> Vec<MatchResult> {
    let criteria = MatchCriteria::new(ph, soil, moisture, crop_type);
    CropMatcher::new(catalog).find_matches_on(&criteria, planting_date())
}

fn names(results: &[MatchResult]) -> Vec<&str> {
    results.iter().map(|m| m.crop()).collect()
}

#[test]
fn test_catalog_summaries() {
    let catalog = sample_catalog();

    assert_eq!(catalog.len(), 14);
    assert_relative_eq!(catalog.min_ph().unwrap(), 4.5);
    assert_relative_eq!(catalog.max_ph().unwrap(), 8.0);
    assert_eq!(
        catalog.crop_types(),
        &["fruit", "grain", "industrial", "leafy", "legume", "root", "vegetable"]
    );
    assert_eq!(catalog.climate_zones(), &["subtropical", "tropical"]);
}

#[test]
fn test_loamy_medium_query_uses_tolerances() {
    let catalog = sample_catalog();
    let results = query(&catalog, 6.0, "Loamy", "Medium", "");

    // Everything except Mungbean (pH 6.2 minimum)
    assert_eq!(results.len(), 13);
    assert!(!names(&results).contains(&"Mungbean"));
    // clay/high crop reached through both tolerance rules
    assert!(names(&results).contains(&"Kangkong"));
    // pH 6.0 sits on Pineapple's upper and Tomato's lower bound
    assert!(names(&results).contains(&"Pineapple"));
    assert!(names(&results).contains(&"Tomato"));
}

#[test]
fn test_extreme_soils_do_not_bridge() {
    let catalog = sample_catalog();
    let results = query(&catalog, 5.2, "clay", "high", "");
    assert_eq!(names(&results), vec!["Rice", "Sugarcane"]);
}

#[test]
fn test_crop_type_filter() {
    let catalog = sample_catalog();

    assert_eq!(names(&query(&catalog, 6.0, "sandy", "low", "legume")), vec!["Peanut"]);
    assert_eq!(
        names(&query(&catalog, 6.5, "sandy", "low", "Legume")),
        vec!["Mungbean", "Peanut"]
    );
    assert!(query(&catalog, 6.5, "sandy", "low", "fruit").is_empty());
}

#[test]
fn test_enriched_match() {
    let catalog = sample_catalog();
    let results = query(&catalog, 5.0, "sandy", "low", "root");
    assert_eq!(names(&results), vec!["Cassava"]);

    let cassava = &results[0];
    assert_eq!(cassava.harvest_date, "August 14, 2027");
    assert!(cassava.description.contains("root crop"));
    assert!(cassava.description.contains("300 days"));
    assert!(cassava.description.contains("Year-round"));

    // 5 root benefits + pest resistance + tropical
    assert_eq!(cassava.benefits.len(), 7);

    // spacing, fertilizer + potassium advisory, sunlight + advisory,
    // water + annual advisory, yield (Year-round season omitted)
    assert_eq!(cassava.growing_tips.len(), 8);
    assert!(cassava.growing_tips[0].starts_with("Spacing"));
    assert!(cassava.growing_tips[7].contains("20-30 tons"));
    assert!(!cassava.growing_tips.iter().any(|t| t.contains("Best planting months")));
}

#[test]
fn test_untyped_crop_uses_default_description() {
    let catalog = sample_catalog();
    let results = query(&catalog, 6.0, "loamy", "medium", "");
    let ginger = results.iter().find(|m| m.crop() == "Ginger").unwrap();
    assert!(ginger.description.starts_with("A crop that takes about 240 days"));
    assert_eq!(ginger.benefits.len(), 5); // general list + tropical
}

#[test]
fn test_match_result_serializes_flat() {
    let catalog = sample_catalog();
    let results = query(&catalog, 6.5, "loamy", "low", "legume");
    let value = serde_json::to_value(&results[0]).unwrap();

    assert_eq!(value["crop"], "Mungbean");
    assert_eq!(value["pH_min"], 6.2);
    assert!(value["harvest_date"].is_string());
    assert!(value["benefits"].is_array());
}

#[test]
fn test_rotation_for_top_matches() {
    let catalog = sample_catalog();
    let results = query(&catalog, 6.0, "loamy", "medium", "");
    let top = CropMatcher::top_crop_names(&results, 3);
    assert_eq!(top, vec!["Rice", "Corn", "Sugarcane"]);

    let schedule = RotationPlanner::new(&catalog)
        .build_schedule_on(top.as_slice(), 12, planting_date())
        .unwrap();

    // Sugarcane (365 days) overshoots and ends each pass; the second pass
    // fits one more Rice cycle before Corn overshoots
    assert_eq!(
        schedule.iter().map(|e| e.crop.as_str()).collect::<Vec<_>>(),
        vec!["Rice", "Corn", "Rice"]
    );
    assert_eq!(schedule[0].crop, "Rice");
    assert_eq!(schedule[0].planting_date, "October 18, 2026");
    assert_eq!(schedule[0].harvest_date, "February 15, 2027");
    assert_eq!(schedule[1].crop, "Corn");
    assert_eq!(schedule[1].planting_date, "February 22, 2027");
    assert_eq!(schedule[1].harvest_date, "June 02, 2027");
    assert_eq!(schedule[1].moisture_level, "medium");
    assert_eq!(schedule[2].planting_date, "June 09, 2027");
    assert_eq!(schedule[2].harvest_date, "October 07, 2027");
}

#[test]
fn test_rotation_short_horizon_is_empty() {
    let catalog = sample_catalog();
    let schedule = RotationPlanner::new(&catalog)
        .build_schedule_on(&["Rice"], 1, planting_date())
        .unwrap();
    assert!(schedule.is_empty());
}

#[test]
fn test_raw_input_flow() {
    let catalog = sample_catalog();

    let err = MatchCriteria::parse("seven", "loamy", "medium", "").unwrap_err();
    assert!(matches!(err, AdvisorError::InvalidInput(_)));

    let criteria = MatchCriteria::parse("9.5", "loamy", "medium", "").unwrap();
    let err = catalog.check_ph(criteria.ph).unwrap_err();
    assert_eq!(err.to_string(), "Please enter a pH value between 4.5 and 8");

    // Out-of-range pH is still a valid query, just with no results
    assert!(CropMatcher::new(&catalog).find_matches(&criteria).is_empty());
}
