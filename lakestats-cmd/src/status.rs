//! Terminal dashboard: current conditions and access-point status for
//! one lake, rendered the way the public site presents them.

use anyhow::Context;
use lakestats_data::access::classify;
use lakestats_data::conditions::{compute_comparisons, reading_set_from_conditions};
use lakestats_data::format::render_trend;
use lakestats_data::ordering::canonical_order;
use lakestats_db::Database;
use lakestats_model::FeatureFlag;

pub fn run_status(db_path: &str, lake_id: &str) -> anyhow::Result<()> {
    let db = Database::open(db_path)?;
    let settings = db
        .lake(lake_id)?
        .with_context(|| format!("unknown lake '{}'", lake_id))?;
    let details = db
        .lake_details(lake_id)?
        .with_context(|| format!("no details document published for '{}'", lake_id))?;
    let conditions = db
        .current_conditions(lake_id)?
        .with_context(|| format!("no conditions published for '{}'; run collect first", lake_id))?;

    println!("{} - current conditions", settings.branded_name);
    println!(
        "  {:.2} ft  (reading from {})",
        conditions.level_today, conditions.reading_date
    );

    let readings = reading_set_from_conditions(&conditions, &details);
    let comparisons = compute_comparisons(&readings)?;

    let stats = [
        ("vs Yesterday", comparisons.vs_yesterday),
        ("vs 2 Weeks Ago", comparisons.vs_two_weeks),
        ("vs 1 Year Ago", comparisons.vs_one_year),
        ("vs 10 Year Avg", comparisons.vs_ten_year_average),
        ("vs Full Pool", comparisons.vs_full_pool),
        ("vs Power Pool", comparisons.vs_min_power_pool),
        ("vs Dead Pool", comparisons.vs_dead_pool),
    ];
    for (label, delta) in stats {
        // Unavailable comparisons are suppressed, never shown as zero.
        if let Some(delta) = delta {
            println!("  {:<16} {}", label, render_trend(delta));
        }
    }

    if !settings.has_feature(FeatureFlag::AccessPoints) {
        return Ok(());
    }

    let mut regions = details.regions;
    canonical_order(&mut regions);
    for mut region in regions {
        println!("\n{}", region.name);
        canonical_order(&mut region.access_points);
        for point in &region.access_points {
            match classify(point, Some(conditions.level_today)) {
                Ok(report) => println!(
                    "  {:<24} {:<17} {:>7}  {:+.2} ft to usable",
                    point.name,
                    point.access_type.label(),
                    report.status.to_string(),
                    report.usable_delta
                ),
                Err(e) => println!("  {:<24} unavailable ({})", point.name, e),
            }
        }
    }
    Ok(())
}
