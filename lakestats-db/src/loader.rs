//! CSV backfill loading for the readings table.
//!
//! Historical elevation data arrives as a CSV export (one row per daily
//! reading); the loader parses it from a string slice and upserts rows
//! into `readings`. Used by the CLI `backfill` command to seed ten-year
//! history before the first collection run.
//!
//! # CSV Format
//!
//! No headers: `lake_id,data_type,date(YYYY-MM-DD),value`
//!
//! ```text
//! powell,ELEVATION,2025-03-01,3563.21
//! powell,ELEVATION,2025-02-28,3563.40
//! ```

use crate::Database;
use chrono::NaiveDate;
use lakestats_model::DataType;
use rusqlite::params;

impl Database {
    /// Load readings from a CSV string. Malformed rows (bad date, bad
    /// value, unknown data type, missing fields) are skipped and counted
    /// rather than failing the whole load.
    pub fn load_readings(&self, csv_data: &str) -> anyhow::Result<()> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let conn = self.conn.borrow();
        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let lake_id = r.get(0).unwrap_or("").trim();
            let data_type = DataType::parse(r.get(1).unwrap_or("").trim());
            let date = NaiveDate::parse_from_str(r.get(2).unwrap_or("").trim(), "%Y-%m-%d");
            let value = r.get(3).unwrap_or("").trim().parse::<f64>();

            let (Some(data_type), Ok(date), Ok(value)) = (data_type, date, value) else {
                skipped += 1;
                continue;
            };
            if lake_id.is_empty() {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT OR REPLACE INTO readings (lake_id, data_type, date, value)
                 VALUES (?1, ?2, ?3, ?4)",
                params![lake_id, data_type.as_str(), date.format("%Y-%m-%d").to_string(), value],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} readings, skipped {} malformed rows", count, skipped);
        Ok(())
    }
}
