//! Daily elevation time series with O(1) date lookup.

use crate::measurements::DataType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One daily sample: the reading labeled with a calendar date.
///
/// Labels roll at midnight: the value for a date is the reading taken at
/// 12:00AM on that date. The ingestion layer is responsible for collapsing
/// instantaneous readings to this convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesEntry {
    pub date: NaiveDate,
    pub value: f64,
}

/// A lake's samples for one measurement type, held both as a
/// chronological list (newest first) and as a date-keyed index.
///
/// The duplication buys O(1) access to specific offsets (yesterday, two
/// weeks ago, same date N years ago) which the conditions aggregation
/// leans on heavily.
#[derive(Debug, Clone)]
pub struct TimeSeriesData {
    lake_id: String,
    data_type: DataType,
    chronological: Vec<TimeSeriesEntry>,
    date_index: HashMap<NaiveDate, f64>,
}

impl TimeSeriesData {
    /// Build a series from unordered entries. Entries are sorted newest
    /// first; when a date appears more than once the later-listed entry
    /// wins in the index.
    pub fn new(lake_id: &str, data_type: DataType, mut entries: Vec<TimeSeriesEntry>) -> Self {
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        let date_index = entries.iter().map(|e| (e.date, e.value)).collect();
        TimeSeriesData {
            lake_id: lake_id.to_string(),
            data_type,
            chronological: entries,
            date_index,
        }
    }

    pub fn lake_id(&self) -> &str {
        &self.lake_id
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// All entries, newest first.
    pub fn chronological(&self) -> &[TimeSeriesEntry] {
        &self.chronological
    }

    /// The most recent entry, if any.
    pub fn newest(&self) -> Option<&TimeSeriesEntry> {
        self.chronological.first()
    }

    /// The value recorded for an exact calendar date.
    pub fn value_on(&self, date: NaiveDate) -> Option<f64> {
        self.date_index.get(&date).copied()
    }

    pub fn len(&self) -> usize {
        self.chronological.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chronological.is_empty()
    }
}
