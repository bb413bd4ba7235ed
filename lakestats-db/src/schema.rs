//! SQL schema definitions for the lake store.
//!
//! Contains CREATE TABLE statements for the per-lake records and the
//! readings table. The schema is applied as a single batch when the
//! database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// **Per-lake records** (the three-document layout the frontend reads):
/// - `lake_system` - Top-level settings, one row per lake (name, branding,
///   status, feature flags, sort order)
/// - `lake_info` - The details document (pool elevations, data sources,
///   regions and access points) as JSON
/// - `current_conditions` - The published conditions document as JSON
/// - `lake_history` - The published rolling-year history document as JSON
///
/// **Time series:**
/// - `readings` - Daily values per lake and measurement type, used to
///   build the conditions and history documents
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS lake_system (
        lake_id TEXT PRIMARY KEY,
        lake_name TEXT NOT NULL,
        branded_name TEXT NOT NULL,
        status TEXT NOT NULL,
        accent_color TEXT,
        features TEXT NOT NULL,
        sort_order INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_lake_system_status ON lake_system(status);

    CREATE TABLE IF NOT EXISTS lake_info (
        lake_id TEXT PRIMARY KEY,
        doc TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS current_conditions (
        lake_id TEXT PRIMARY KEY,
        doc TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS lake_history (
        lake_id TEXT PRIMARY KEY,
        doc TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS readings (
        lake_id TEXT NOT NULL,
        data_type TEXT NOT NULL,
        date TEXT NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (lake_id, data_type, date)
    );
    CREATE INDEX IF NOT EXISTS idx_readings_lake ON readings(lake_id, data_type);
    CREATE INDEX IF NOT EXISTS idx_readings_date ON readings(date);

    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        let expected_tables = [
            "lake_system",
            "lake_info",
            "current_conditions",
            "lake_history",
            "readings",
        ];

        for table in &expected_tables {
            let count: i64 = conn
                .query_row(
                    &format!(
                        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='{}'",
                        table
                    ),
                    [],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        // Applying schema a second time should not fail due to IF NOT EXISTS.
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
