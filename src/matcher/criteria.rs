//! Match Criteria
//!
//! Typed form of a user query. `parse` accepts the raw strings a form or
//! command line supplies and rejects unusable input with `InvalidInput`.

use serde::Serialize;

use crate::error::{AdvisorError, Result};

/// User-supplied soil conditions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCriteria {
    pub ph: f64,

    /// Lower-cased soil category
    pub soil_type: String,

    /// Lower-cased moisture level
    pub moisture: String,

    /// Lower-cased crop type; empty matches every type
    pub crop_type: String,
}

impl MatchCriteria {
    pub fn new(ph: f64, soil_type: &str, moisture: &str, crop_type: &str) -> Self {
        MatchCriteria {
            ph,
            soil_type: normalize(soil_type),
            moisture: normalize(moisture),
            crop_type: normalize(crop_type),
        }
    }

    /// Build criteria from raw text input
    pub fn parse(raw_ph: &str, soil_type: &str, moisture: &str, crop_type: &str) -> Result<Self> {
        let ph: f64 = raw_ph
            .trim()
            .parse()
            .map_err(|_| AdvisorError::invalid_input("Please enter a valid pH value"))?;

        if !ph.is_finite() {
            return Err(AdvisorError::invalid_input("Please enter a valid pH value"));
        }
        if soil_type.trim().is_empty() {
            return Err(AdvisorError::invalid_input("Please select a soil type"));
        }
        if moisture.trim().is_empty() {
            return Err(AdvisorError::invalid_input("Please select a moisture level"));
        }

        Ok(Self::new(ph, soil_type, moisture, crop_type))
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
