//! Rotation Planner
//!
//! Simulates sequential planting cycles for an ordered list of crops across a
//! planning horizon of `30 * months` days. Each scheduled crop is followed by
//! a one-week fallow gap before the next planting.
//!
//! ## Simulation
//! Passes over the crop list repeat while the cursor is before the horizon.
//! Within a pass, unknown crop names are skipped. The first crop whose harvest
//! would fall after the horizon ends the pass; a later, shorter crop in that
//! pass is not tried. The next pass starts again from the first crop at the
//! cursor the previous one left behind. The simulation ends once a pass
//! schedules nothing.

use chrono::NaiveDate;
use serde::Serialize;

use crate::data::CatalogIndex;
use crate::dates;
use crate::error::{AdvisorError, Result};

/// Rest period between a harvest and the next planting
pub const FALLOW_GAP_DAYS: u64 = 7;

/// Calendar approximation used for the horizon
pub const DAYS_PER_MONTH: u64 = 30;

pub const DEFAULT_ROTATION_MONTHS: u32 = 12;

/// One planting cycle in the schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    pub crop: String,
    pub planting_date: String,
    pub harvest_date: String,
    pub duration_days: u32,
    pub soil_type: String,
    pub moisture_level: String,
}

pub struct RotationPlanner<'a> {
    catalog: &'a CatalogIndex,
}

impl<'a> RotationPlanner<'a> {
    pub fn new(catalog: &'a CatalogIndex) -> Self {
        RotationPlanner { catalog }
    }

    /// Schedule starting today
    pub fn build_schedule<S: AsRef<str>>(&self, crop_names: &[S], months: u32) -> Result<Vec<ScheduleEntry>> {
        self.build_schedule_on(crop_names, months, dates::today())
    }

    /// Schedule starting on `start`
    ///
    /// Fails with `InvalidInput` for an empty crop list.
    pub fn build_schedule_on<S: AsRef<str>>(
        &self,
        crop_names: &[S],
        months: u32,
        start: NaiveDate,
    ) -> Result<Vec<ScheduleEntry>> {
        if crop_names.is_empty() {
            return Err(AdvisorError::invalid_input(
                "Select at least one crop to plan a rotation",
            ));
        }

        for name in crop_names {
            let name: &str = name.as_ref();
            if self.catalog.get(name).is_none() {
                tracing::warn!("Rotation crop '{}' not in catalog, skipping", name);
            }
        }

        let horizon_end = dates::add_days(start, DAYS_PER_MONTH * u64::from(months));
        let mut cursor = start;
        let mut schedule = Vec::new();

        while cursor < horizon_end {
            let pass_start = cursor;

            for name in crop_names {
                let Some(record) = self.catalog.get(name.as_ref()) else {
                    continue;
                };

                let harvest = dates::add_days(cursor, u64::from(record.duration_days));
                if harvest > horizon_end {
                    tracing::debug!(
                        "{} planted {} would be harvested after the horizon ({}), ending pass",
                        record.crop,
                        cursor,
                        horizon_end
                    );
                    break;
                }

                schedule.push(ScheduleEntry {
                    crop: record.crop.clone(),
                    planting_date: dates::format_long(cursor),
                    harvest_date: dates::format_long(harvest),
                    duration_days: record.duration_days,
                    soil_type: record.soil_type.clone(),
                    moisture_level: record.moisture_level.clone(),
                });

                cursor = dates::add_days(harvest, FALLOW_GAP_DAYS);
            }

            // Nothing scheduled this pass
            if cursor == pass_start {
                break;
            }
        }

        tracing::debug!(
            "Rotation over {} months: {} planting cycles",
            months,
            schedule.len()
        );

        Ok(schedule)
    }
}

/// Convenience wrapper: schedule from today
pub fn build_schedule<S: AsRef<str>>(
    catalog: &CatalogIndex,
    crop_names: &[S],
    months: u32,
) -> Result<Vec<ScheduleEntry>> {
    RotationPlanner::new(catalog).build_schedule(crop_names, months)
}
