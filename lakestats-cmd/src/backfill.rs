//! Historical readings backfill from a CSV export.

use anyhow::Context;
use lakestats_db::Database;
use log::info;

/// Load a readings CSV file into the store. Gives the ten-year average
/// and rolling-year history something to work with before the first
/// collection runs have accumulated their own data.
pub fn run_backfill(db_path: &str, csv_path: &str) -> anyhow::Result<()> {
    let csv_data = std::fs::read_to_string(csv_path)
        .with_context(|| format!("could not read '{}'", csv_path))?;

    let db = Database::open(db_path)?;
    db.load_readings(&csv_data)?;

    info!("backfill: loaded '{}' into '{}'", csv_path, db_path);
    println!("backfill complete");
    Ok(())
}
