//! Lake management commands: listing, registration, status moves, and
//! display reordering.

use anyhow::Context;
use lakestats_data::ordering::{move_down, move_up};
use lakestats_db::Database;
use lakestats_model::{LakeStatus, LakeSystemSettings};
use log::info;

/// Print every lake grouped by status, in canonical display order.
pub fn run_list(db_path: &str) -> anyhow::Result<()> {
    let db = Database::open(db_path)?;

    for status in [LakeStatus::Enabled, LakeStatus::Testing, LakeStatus::Disabled] {
        let lakes = db.lakes_by_status(status)?;
        if lakes.is_empty() {
            continue;
        }
        println!("{} ({})", status, lakes.len());
        for lake in &lakes {
            println!("  {:>3}  {:<16} {}", lake.sort_order, lake.lake_id, lake.lake_name);
        }
    }
    Ok(())
}

/// Register a new lake. New lakes start disabled and land at the end of
/// the disabled group.
pub fn run_add(
    db_path: &str,
    lake_id: &str,
    name: &str,
    branded_name: Option<&str>,
    accent_color: Option<&str>,
) -> anyhow::Result<()> {
    let db = Database::open(db_path)?;
    let branded = branded_name.map_or_else(|| format!("{} Stats", name), str::to_string);
    let settings = db.add_lake(lake_id, name, &branded, accent_color)?;
    println!(
        "registered '{}' as {} (sort order {})",
        settings.lake_id, settings.status, settings.sort_order
    );
    Ok(())
}

/// Move a lake to another status group. The lake is appended to the end
/// of the destination group; its old group keeps its remaining order.
pub fn run_set_status(db_path: &str, lake_id: &str, status: &str) -> anyhow::Result<()> {
    let new_status = LakeStatus::parse(status)
        .with_context(|| format!("unknown status '{}'; expected ENABLED, DISABLED, or TESTING", status))?;
    let db = Database::open(db_path)?;
    db.set_lake_status(lake_id, new_status)?;
    println!("moved '{}' to {}", lake_id, new_status);
    Ok(())
}

/// Move a lake one place up or down within its status group by swapping
/// sort keys with its neighbor. The two-row write is applied atomically.
pub fn run_move(db_path: &str, lake_id: &str, up: bool, down: bool) -> anyhow::Result<()> {
    anyhow::ensure!(up != down, "pass exactly one of --up or --down");

    let db = Database::open(db_path)?;
    let settings = db
        .lake(lake_id)?
        .with_context(|| format!("unknown lake '{}'", lake_id))?;

    let mut siblings: Vec<LakeSystemSettings> = db.lakes_by_status(settings.status)?;
    let assignments = if up {
        move_up(&mut siblings, lake_id)
    } else {
        move_down(&mut siblings, lake_id)
    };

    if assignments.is_empty() {
        println!(
            "'{}' is already at the {} of its group",
            lake_id,
            if up { "top" } else { "bottom" }
        );
        return Ok(());
    }

    db.apply_sort_assignments(&assignments)?;
    info!("lakes: reordered '{}' within {}", lake_id, settings.status);
    println!("moved '{}' {}", lake_id, if up { "up" } else { "down" });
    Ok(())
}
