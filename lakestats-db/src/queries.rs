//! Typed query methods for the lake store.
//!
//! Listing queries bake the canonical `(sort_order, lake_name)` ordering
//! into the SQL so every caller sees the same deterministic sequence.
//! Mutating methods that touch more than one row run in a transaction.

use crate::Database;
use chrono::NaiveDate;
use lakestats_model::{
    CurrentConditions, DataType, HistoricalPeriodData, LakeDetails, LakeStatus,
    LakeSystemSettings, SortAssignment, TimeSeriesData, TimeSeriesEntry,
};
use rusqlite::{params, OptionalExtension, Row};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw `lake_system` columns before the status/features text is decoded.
type RawSettingsRow = (String, String, String, String, Option<String>, String, i64);

fn settings_from_row(row: &Row) -> rusqlite::Result<RawSettingsRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
    ))
}

fn finish_settings(raw: RawSettingsRow) -> anyhow::Result<LakeSystemSettings> {
    let (lake_id, lake_name, branded_name, status, accent_color, features, sort_order) = raw;
    let status = LakeStatus::parse(&status)
        .ok_or_else(|| anyhow::anyhow!("unknown lake status '{}' for {}", status, lake_id))?;
    let features = serde_json::from_str(&features)?;
    Ok(LakeSystemSettings {
        lake_id,
        lake_name,
        branded_name,
        status,
        features,
        accent_color,
        sort_order,
    })
}

const SETTINGS_COLUMNS: &str =
    "lake_id, lake_name, branded_name, status, accent_color, features, sort_order";

impl Database {
    // ───────────────────── Lake settings ─────────────────────

    /// All lakes, in canonical display order.
    pub fn all_lakes(&self) -> anyhow::Result<Vec<LakeSystemSettings>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM lake_system ORDER BY sort_order, lake_name",
            SETTINGS_COLUMNS
        ))?;
        let rows = stmt
            .query_map([], settings_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(finish_settings).collect()
    }

    /// Lakes in one status group, in canonical display order.
    pub fn lakes_by_status(&self, status: LakeStatus) -> anyhow::Result<Vec<LakeSystemSettings>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM lake_system WHERE status = ?1 ORDER BY sort_order, lake_name",
            SETTINGS_COLUMNS
        ))?;
        let rows = stmt
            .query_map(params![status.as_str()], settings_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(finish_settings).collect()
    }

    /// A single lake's settings row, if it exists.
    pub fn lake(&self, lake_id: &str) -> anyhow::Result<Option<LakeSystemSettings>> {
        let conn = self.conn.borrow();
        let row = conn
            .query_row(
                &format!("SELECT {} FROM lake_system WHERE lake_id = ?1", SETTINGS_COLUMNS),
                params![lake_id],
                settings_from_row,
            )
            .optional()?;
        row.map(finish_settings).transpose()
    }

    /// Register a new lake. New lakes start Disabled with no features and
    /// are appended to the end of the Disabled group (`max + 1`, or 1 for
    /// an empty group); existing siblings are never renumbered.
    pub fn add_lake(
        &self,
        lake_id: &str,
        lake_name: &str,
        branded_name: &str,
        accent_color: Option<&str>,
    ) -> anyhow::Result<LakeSystemSettings> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        let max: Option<i64> = tx.query_row(
            "SELECT MAX(sort_order) FROM lake_system WHERE status = ?1",
            params![LakeStatus::Disabled.as_str()],
            |row| row.get(0),
        )?;
        let settings = LakeSystemSettings {
            lake_id: lake_id.to_string(),
            lake_name: lake_name.to_string(),
            branded_name: branded_name.to_string(),
            status: LakeStatus::Disabled,
            features: Vec::new(),
            accent_color: accent_color.map(str::to_string),
            sort_order: max.unwrap_or(0) + 1,
        };
        tx.execute(
            "INSERT INTO lake_system (lake_id, lake_name, branded_name, status, accent_color, features, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                settings.lake_id,
                settings.lake_name,
                settings.branded_name,
                settings.status.as_str(),
                settings.accent_color,
                serde_json::to_string(&settings.features)?,
                settings.sort_order,
            ],
        )?;
        tx.commit()?;
        log::info!("db: registered lake '{}' at sort_order {}", lake_id, settings.sort_order);
        Ok(settings)
    }

    /// Replace a lake's settings row (admin edit). The row must exist.
    pub fn update_lake(&self, settings: &LakeSystemSettings) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let changed = conn.execute(
            "UPDATE lake_system
             SET lake_name = ?2, branded_name = ?3, status = ?4, accent_color = ?5,
                 features = ?6, sort_order = ?7
             WHERE lake_id = ?1",
            params![
                settings.lake_id,
                settings.lake_name,
                settings.branded_name,
                settings.status.as_str(),
                settings.accent_color,
                serde_json::to_string(&settings.features)?,
                settings.sort_order,
            ],
        )?;
        anyhow::ensure!(changed == 1, "unknown lake id '{}'", settings.lake_id);
        Ok(())
    }

    /// Move a lake to another status group, appending it at the end of
    /// the destination group. Reading the destination's max key and
    /// writing the row happen in one transaction.
    pub fn set_lake_status(&self, lake_id: &str, new_status: LakeStatus) -> anyhow::Result<()> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        let max: Option<i64> = tx.query_row(
            "SELECT MAX(sort_order) FROM lake_system WHERE status = ?1",
            params![new_status.as_str()],
            |row| row.get(0),
        )?;
        let changed = tx.execute(
            "UPDATE lake_system SET status = ?2, sort_order = ?3 WHERE lake_id = ?1",
            params![lake_id, new_status.as_str(), max.unwrap_or(0) + 1],
        )?;
        anyhow::ensure!(changed == 1, "unknown lake id '{}'", lake_id);
        tx.commit()?;
        log::info!("db: moved lake '{}' to {}", lake_id, new_status);
        Ok(())
    }

    /// Apply a batch of sort-key assignments as a single atomic unit.
    ///
    /// All-or-nothing: an unknown id fails the whole batch and leaves
    /// every row untouched. Partial application would break the
    /// determinism the `(sort_order, name)` tie-break relies on.
    pub fn apply_sort_assignments(&self, assignments: &[SortAssignment]) -> anyhow::Result<()> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        for assignment in assignments {
            let changed = tx.execute(
                "UPDATE lake_system SET sort_order = ?2 WHERE lake_id = ?1",
                params![assignment.id, assignment.sort_order],
            )?;
            anyhow::ensure!(
                changed == 1,
                "unknown lake id '{}' in reorder batch",
                assignment.id
            );
        }
        tx.commit()?;
        log::info!("db: applied {} sort assignments", assignments.len());
        Ok(())
    }

    // ───────────────────── Lake documents ─────────────────────

    /// Store the details document. The document is validated first;
    /// malformed thresholds or duplicate ids never reach the store.
    pub fn put_lake_details(&self, details: &LakeDetails) -> anyhow::Result<()> {
        details.validate().map_err(anyhow::Error::new)?;
        let conn = self.conn.borrow();
        conn.execute(
            "INSERT OR REPLACE INTO lake_info (lake_id, doc) VALUES (?1, ?2)",
            params![details.id, serde_json::to_string(details)?],
        )?;
        Ok(())
    }

    /// Load the details document, if published.
    pub fn lake_details(&self, lake_id: &str) -> anyhow::Result<Option<LakeDetails>> {
        self.load_doc("lake_info", lake_id)
    }

    /// Store the published conditions document.
    pub fn put_current_conditions(&self, conditions: &CurrentConditions) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        conn.execute(
            "INSERT OR REPLACE INTO current_conditions (lake_id, doc) VALUES (?1, ?2)",
            params![conditions.lake_id, serde_json::to_string(conditions)?],
        )?;
        Ok(())
    }

    /// Load the published conditions document, if any.
    pub fn current_conditions(&self, lake_id: &str) -> anyhow::Result<Option<CurrentConditions>> {
        self.load_doc("current_conditions", lake_id)
    }

    /// Store the published rolling-year history document.
    pub fn put_history(&self, history: &HistoricalPeriodData) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        conn.execute(
            "INSERT OR REPLACE INTO lake_history (lake_id, doc) VALUES (?1, ?2)",
            params![history.lake_id, serde_json::to_string(history)?],
        )?;
        Ok(())
    }

    /// Load the published history document, if any.
    pub fn history(&self, lake_id: &str) -> anyhow::Result<Option<HistoricalPeriodData>> {
        self.load_doc("lake_history", lake_id)
    }

    fn load_doc<T: serde::de::DeserializeOwned>(
        &self,
        table: &str,
        lake_id: &str,
    ) -> anyhow::Result<Option<T>> {
        let conn = self.conn.borrow();
        let doc: Option<String> = conn
            .query_row(
                &format!("SELECT doc FROM {} WHERE lake_id = ?1", table),
                params![lake_id],
                |row| row.get(0),
            )
            .optional()?;
        match doc {
            Some(doc) => Ok(Some(serde_json::from_str(&doc)?)),
            None => Ok(None),
        }
    }

    // ───────────────────── Readings ─────────────────────

    /// Upsert a batch of daily readings for one lake and measurement
    /// type, in a single transaction. Returns the number stored.
    pub fn insert_readings(
        &self,
        lake_id: &str,
        data_type: DataType,
        entries: &[TimeSeriesEntry],
    ) -> anyhow::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        for entry in entries {
            tx.execute(
                "INSERT OR REPLACE INTO readings (lake_id, data_type, date, value)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    lake_id,
                    data_type.as_str(),
                    entry.date.format(DATE_FORMAT).to_string(),
                    entry.value,
                ],
            )?;
        }
        tx.commit()?;
        log::info!(
            "db: stored {} {} readings for '{}'",
            entries.len(),
            data_type,
            lake_id
        );
        Ok(entries.len())
    }

    /// All readings of one measurement type for a lake, as a processing
    /// series (newest first, date-indexed).
    pub fn series(&self, lake_id: &str, data_type: DataType) -> anyhow::Result<TimeSeriesData> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT date, value FROM readings
             WHERE lake_id = ?1 AND data_type = ?2
             ORDER BY date",
        )?;
        let raw = stmt
            .query_map(params![lake_id, data_type.as_str()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut entries = Vec::with_capacity(raw.len());
        for (date, value) in raw {
            let date = NaiveDate::parse_from_str(&date, DATE_FORMAT)?;
            entries.push(TimeSeriesEntry { date, value });
        }
        Ok(TimeSeriesData::new(lake_id, data_type, entries))
    }

    /// Convenience wrapper for the one series the conditions pipeline
    /// consumes.
    pub fn elevation_series(&self, lake_id: &str) -> anyhow::Result<TimeSeriesData> {
        self.series(lake_id, DataType::Elevation)
    }
}
