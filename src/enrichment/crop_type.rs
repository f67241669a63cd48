//! Crop Type Lookup Tables
//!
//! Maps the catalog's free-text `crop_type` to an enumerated variant and
//! holds the fixed per-type benefit lists used by enrichment.

/// Recognised crop categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropType {
    Fruit,
    Vegetable,
    Root,
    Leafy,
    Grain,
    Industrial,
    Legume,
}

// ============================================================================
// BENEFIT TABLES
// ============================================================================

static FRUIT_BENEFITS: &[&str] = &[
    "Rich in vitamins, minerals and antioxidants",
    "High market value for fresh and processed produce",
    "Perennial plantings provide income over many seasons",
    "Suitable for agroforestry and intercropping systems",
];

static VEGETABLE_BENEFITS: &[&str] = &[
    "Short cycle allows several harvests per year",
    "Good source of vitamins and dietary fibre",
    "Steady demand in local fresh markets",
    "Fits well into crop rotation between staple crops",
];

static ROOT_BENEFITS: &[&str] = &[
    "High energy yield per hectare",
    "Tolerates marginal soils better than most staples",
    "Can be stored in the ground until needed",
    "Loosens compacted soil during root development",
    "Leaves and peelings can be used as animal feed",
];

static LEAFY_BENEFITS: &[&str] = &[
    "Very fast growth with harvests within weeks",
    "High in iron, calcium and folate",
    "Well suited to small plots and home gardens",
    "Can be harvested repeatedly by cutting outer leaves",
];

static GRAIN_BENEFITS: &[&str] = &[
    "Staple food crop with reliable demand",
    "Dry grain stores well for long periods",
    "Crop residues can be used as mulch or fodder",
    "Mechanisation and post-harvest support widely available",
];

static INDUSTRIAL_BENEFITS: &[&str] = &[
    "Supplies raw material for processing industries",
    "Often backed by contract farming and mill support",
    "Generates rural employment through processing",
    "By-products can be used for bioenergy or feed",
];

static LEGUME_BENEFITS: &[&str] = &[
    "Fixes atmospheric nitrogen and improves soil fertility",
    "Good source of plant protein",
    "Ideal rotation crop to follow cereals",
    "Reduces fertilizer costs for the next crop",
    "Short duration fits between main cropping seasons",
];

static GENERAL_BENEFITS: &[&str] = &[
    "Adds diversity to the farm's cropping system",
    "Suited to the soil conditions entered",
    "Can contribute to household food security",
    "Provides an additional source of farm income",
];

impl CropType {
    /// Parse a catalog or user value (case-insensitive); unknown values yield None
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "fruit" => Some(CropType::Fruit),
            "vegetable" => Some(CropType::Vegetable),
            "root" => Some(CropType::Root),
            "leafy" => Some(CropType::Leafy),
            "grain" => Some(CropType::Grain),
            "industrial" => Some(CropType::Industrial),
            "legume" => Some(CropType::Legume),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CropType::Fruit => "fruit",
            CropType::Vegetable => "vegetable",
            CropType::Root => "root",
            CropType::Leafy => "leafy",
            CropType::Grain => "grain",
            CropType::Industrial => "industrial",
            CropType::Legume => "legume",
        }
    }

    pub fn all() -> &'static [CropType] {
        &[
            CropType::Fruit,
            CropType::Vegetable,
            CropType::Root,
            CropType::Leafy,
            CropType::Grain,
            CropType::Industrial,
            CropType::Legume,
        ]
    }
}

/// Fixed benefit list for a crop type; `None` selects the general list
pub fn benefits_for(crop_type: Option<CropType>) -> &'static [&'static str] {
    match crop_type {
        Some(CropType::Fruit) => FRUIT_BENEFITS,
        Some(CropType::Vegetable) => VEGETABLE_BENEFITS,
        Some(CropType::Root) => ROOT_BENEFITS,
        Some(CropType::Leafy) => LEAFY_BENEFITS,
        Some(CropType::Grain) => GRAIN_BENEFITS,
        Some(CropType::Industrial) => INDUSTRIAL_BENEFITS,
        Some(CropType::Legume) => LEGUME_BENEFITS,
        None => GENERAL_BENEFITS,
    }
}
