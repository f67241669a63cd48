//! Crop Advisor
//!
//! Recommends crops for user-supplied soil conditions from a static catalog
//! and projects a sequential planting/harvest rotation for the top matches.
//!
//! - `data/`: catalog loading, validation and summary statistics
//! - `matcher/`: multi-criteria matching with soil/moisture tolerance rules
//! - `enrichment/`: descriptions, benefits and growing tips for matches
//! - `rotation/`: rotation schedule simulation
//! - `config/`: environment-driven settings for the command-line front end

pub mod error;
pub mod dates;
pub mod data;
pub mod enrichment;
pub mod matcher;
pub mod rotation;
pub mod config;

// Re-export commonly used types
pub use error::{AdvisorError, Result};
pub use data::{CatalogIndex, CropRecord, FertilizerNeeds, Spacing};
pub use enrichment::CropType;
pub use matcher::{find_matches, CropMatcher, MatchCriteria, MatchResult};
pub use rotation::{build_schedule, RotationPlanner, ScheduleEntry};
pub use config::AdvisorConfig;
