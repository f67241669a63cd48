// Command-line front end
//
// Usage: crop_advisor [--json] <ph> <soil_type> <moisture> [crop_type]
// Config: CROP_CATALOG, ROTATION_MONTHS, ROTATION_CROPS (see config.rs)

use anyhow::{bail, Context};
use crop_advisor::{
    AdvisorConfig, CatalogIndex, CropMatcher, CropType, MatchCriteria, RotationPlanner,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crop_advisor=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json_output = args.iter().any(|a| a == "--json");
    args.retain(|a| a != "--json");

    if args.len() < 3 {
        bail!("usage: crop_advisor [--json] <ph> <soil_type> <moisture> [crop_type]");
    }

    let config = AdvisorConfig::from_env();
    tracing::info!("Catalog: {}", config.catalog_path.display());

    let catalog = CatalogIndex::load(&config.catalog_path)
        .with_context(|| format!("Failed to load crop catalog {}", config.catalog_path.display()))?;

    let crop_type = args.get(3).map(String::as_str).unwrap_or("");
    let criteria = MatchCriteria::parse(&args[0], &args[1], &args[2], crop_type)?;
    catalog.check_ph(criteria.ph)?;
    if !crop_type.trim().is_empty() && CropType::parse(crop_type).is_none() {
        tracing::warn!(
            "Unrecognised crop type '{}', expected one of: {}",
            crop_type,
            supported_crop_types()
        );
    }

    let matches = CropMatcher::new(&catalog).find_matches(&criteria);

    let top_names = CropMatcher::top_crop_names(&matches, config.rotation_crops);
    let schedule = if top_names.is_empty() {
        Vec::new()
    } else {
        RotationPlanner::new(&catalog).build_schedule(top_names.as_slice(), config.rotation_months)?
    };

    if json_output {
        let output = serde_json::json!({
            "criteria": criteria,
            "matches": matches,
            "rotation": schedule,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let (Some(min_ph), Some(max_ph)) = (catalog.min_ph(), catalog.max_ph()) {
        println!("Valid pH range: {} - {}", min_ph, max_ph);
    }
    println!("Crop types: {}", catalog.crop_types().join(", "));
    println!("Supported crop types: {}", supported_crop_types());
    println!("Climate zones: {}", catalog.climate_zones().join(", "));
    println!();

    if matches.is_empty() {
        println!("No matching crops found for your input. Try adjusting your parameters.");
        return Ok(());
    }

    println!("Recommended crops ({}):", matches.len());
    for m in &matches {
        println!();
        println!("## {} (harvest by {})", m.crop(), m.harvest_date);
        println!("{}", m.description);
        println!("Benefits:");
        for benefit in &m.benefits {
            println!("  - {}", benefit);
        }
        if !m.growing_tips.is_empty() {
            println!("Growing tips:");
            for tip in &m.growing_tips {
                println!("  - {}", tip);
            }
        }
    }

    println!();
    println!("Rotation plan ({} months): {}", config.rotation_months, top_names.join(" -> "));
    if schedule.is_empty() {
        println!("  No full crop cycle fits within the planning horizon.");
    }
    for entry in &schedule {
        println!(
            "  {:<16} {} -> {} ({} days, {} soil, {} moisture)",
            entry.crop,
            entry.planting_date,
            entry.harvest_date,
            entry.duration_days,
            entry.soil_type,
            entry.moisture_level
        );
    }

    Ok(())
}

fn supported_crop_types() -> String {
    CropType::all()
        .iter()
        .map(CropType::display_name)
        .collect::<Vec<_>>()
        .join(", ")
}
