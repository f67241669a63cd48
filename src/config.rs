//! Runtime configuration from environment variables
//!
//! | Variable | Default |
//! |---|---|
//! | `CROP_CATALOG` | `data/negros_crops.json` |
//! | `ROTATION_MONTHS` | `12` (at most 120) |
//! | `ROTATION_CROPS` | `3` |

use std::path::PathBuf;

use crate::rotation::DEFAULT_ROTATION_MONTHS;

pub const DEFAULT_CATALOG_PATH: &str = "data/negros_crops.json";
pub const DEFAULT_ROTATION_CROPS: usize = 3;
pub const MAX_ROTATION_MONTHS: u32 = 120;

#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorConfig {
    /// Crop catalog JSON file
    pub catalog_path: PathBuf,

    /// Planning horizon for the rotation schedule
    pub rotation_months: u32,

    /// How many top matches feed the rotation planner
    pub rotation_crops: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        AdvisorConfig {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            rotation_months: DEFAULT_ROTATION_MONTHS,
            rotation_crops: DEFAULT_ROTATION_CROPS,
        }
    }
}

impl AdvisorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let catalog_path = lookup("CROP_CATALOG")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.catalog_path);

        let mut rotation_months = parse_or(&lookup, "ROTATION_MONTHS", defaults.rotation_months);
        if rotation_months > MAX_ROTATION_MONTHS {
            tracing::warn!(
                "ROTATION_MONTHS={} exceeds {}, capping",
                rotation_months,
                MAX_ROTATION_MONTHS
            );
            rotation_months = MAX_ROTATION_MONTHS;
        }
        let rotation_crops = parse_or(&lookup, "ROTATION_CROPS", defaults.rotation_crops);

        AdvisorConfig {
            catalog_path,
            rotation_months,
            rotation_crops,
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}='{}', using {}", key, raw, default);
            default
        }),
        None => default,
    }
}
