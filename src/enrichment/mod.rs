//! Match Enrichment
//!
//! Derives human-readable text for a matched crop from its descriptive
//! metadata. Pure functions over `&CropRecord`; nothing is written back to
//! the catalog.
//!
//! ## Architecture
//! - `crop_type.rs` - CropType enum + per-type benefit tables
//! - `description.rs` - per-type description templates
//! - `benefits.rs` - benefit list assembly
//! - `growing_tips.rs` - conditional growing tips

pub mod crop_type;
pub mod description;
pub mod benefits;
pub mod growing_tips;

pub use crop_type::CropType;
pub use description::describe;
pub use benefits::list_benefits;
pub use growing_tips::growing_tips;
