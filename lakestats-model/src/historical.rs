//! The stored historical-period document.

use crate::measurements::DataType;
use crate::series::TimeSeriesEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What span a historical document covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodType {
    CalendarYear,
    RollingYear,
    Custom,
}

/// Historical data for one period, stored for frontend consumption.
///
/// This is a different shape from [`crate::TimeSeriesData`]: that type is
/// built for processing (newest first, date-indexed), this one for
/// storage and charting (ascending, explicitly bounded). Construct via
/// [`HistoricalPeriodData::create`], which sorts and bounds the entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPeriodData {
    pub lake_id: String,
    pub start_date: NaiveDate,
    /// Last date of the data, inclusive.
    pub end_date: NaiveDate,
    pub period_type: PeriodType,
    pub data_type: DataType,
    /// Entries in ascending date order, oldest first.
    pub entries: Vec<TimeSeriesEntry>,
}

impl HistoricalPeriodData {
    /// Build a period document, sorting entries ascending. `None` for
    /// empty input; a period with no data is meaningless to store.
    pub fn create(
        lake_id: &str,
        period_type: PeriodType,
        data_type: DataType,
        mut entries: Vec<TimeSeriesEntry>,
    ) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        entries.sort_by(|a, b| a.date.cmp(&b.date));
        Some(HistoricalPeriodData {
            lake_id: lake_id.to_string(),
            start_date: entries.first()?.date,
            end_date: entries.last()?.date,
            period_type,
            data_type,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_empty_data() {
        assert!(HistoricalPeriodData::create(
            "powell",
            PeriodType::Custom,
            DataType::Elevation,
            Vec::new()
        )
        .is_none());
    }

    #[test]
    fn create_sorts_unordered_input() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
        let period = HistoricalPeriodData::create(
            "powell",
            PeriodType::Custom,
            DataType::Elevation,
            vec![
                TimeSeriesEntry { date: d(3), value: 3.0 },
                TimeSeriesEntry { date: d(1), value: 1.0 },
                TimeSeriesEntry { date: d(2), value: 2.0 },
            ],
        )
        .unwrap();
        assert_eq!(period.start_date, d(1));
        assert_eq!(period.end_date, d(3));
        assert_eq!(period.entries[0].value, 1.0);
    }
}
