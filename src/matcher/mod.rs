//! Crop Matcher
//!
//! Filters the catalog against user soil conditions using the flexible
//! tolerance rules in `tolerance.rs`, then enriches each match with a harvest
//! date, description, benefits and growing tips.
//!
//! Results are request-scoped: each `MatchResult` owns a copy of its record
//! plus the derived fields, so concurrent queries never share derived state.

pub mod criteria;
pub mod tolerance;

pub use criteria::MatchCriteria;

use chrono::NaiveDate;
use serde::Serialize;

use crate::data::{CatalogIndex, CropRecord};
use crate::dates;
use crate::enrichment;

/// A matched crop with its derived fields
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub record: CropRecord,

    /// Planting date + duration, "Month DD, YYYY"
    pub harvest_date: String,

    pub description: String,
    pub benefits: Vec<String>,
    pub growing_tips: Vec<String>,
}

impl MatchResult {
    fn from_record(record: &CropRecord, planting_date: NaiveDate) -> Self {
        let harvest = dates::add_days(planting_date, u64::from(record.duration_days));

        MatchResult {
            record: record.clone(),
            harvest_date: dates::format_long(harvest),
            description: enrichment::describe(record),
            benefits: enrichment::list_benefits(record),
            growing_tips: enrichment::growing_tips(record),
        }
    }

    pub fn crop(&self) -> &str {
        &self.record.crop
    }
}

/// Does a record satisfy every criterion?
pub fn is_match(record: &CropRecord, criteria: &MatchCriteria) -> bool {
    tolerance::ph_matches(criteria.ph, record.ph_min, record.ph_max)
        && tolerance::soil_matches(&criteria.soil_type, &record.soil_type)
        && tolerance::moisture_matches(&criteria.moisture, &record.moisture_level)
        && tolerance::crop_type_matches(&criteria.crop_type, record.crop_type.as_deref())
}

/// Query front end over a loaded catalog
pub struct CropMatcher<'a> {
    catalog: &'a CatalogIndex,
}

impl<'a> CropMatcher<'a> {
    pub fn new(catalog: &'a CatalogIndex) -> Self {
        CropMatcher { catalog }
    }

    /// Matches for crops planted today
    pub fn find_matches(&self, criteria: &MatchCriteria) -> Vec<MatchResult> {
        self.find_matches_on(criteria, dates::today())
    }

    /// Matches for crops planted on `planting_date`, in catalog order
    ///
    /// No matches is not an error; the result is simply empty.
    pub fn find_matches_on(&self, criteria: &MatchCriteria, planting_date: NaiveDate) -> Vec<MatchResult> {
        let matches: Vec<MatchResult> = self
            .catalog
            .records()
            .iter()
            .filter(|record| is_match(record, criteria))
            .map(|record| MatchResult::from_record(record, planting_date))
            .collect();

        tracing::debug!(
            "pH {} / soil '{}' / moisture '{}' / type '{}': {} of {} crops matched",
            criteria.ph,
            criteria.soil_type,
            criteria.moisture,
            criteria.crop_type,
            matches.len(),
            self.catalog.len()
        );

        matches
    }

    /// Names of the first `n` matches, the usual input to rotation planning
    pub fn top_crop_names(matches: &[MatchResult], n: usize) -> Vec<String> {
        matches
            .iter()
            .take(n)
            .map(|m| m.record.crop.clone())
            .collect()
    }
}

/// Convenience wrapper: match against `catalog` as of today
pub fn find_matches(
    catalog: &CatalogIndex,
    ph: f64,
    soil_type: &str,
    moisture: &str,
    crop_type: &str,
) -> Vec<MatchResult> {
    CropMatcher::new(catalog).find_matches(&MatchCriteria::new(ph, soil_type, moisture, crop_type))
}
