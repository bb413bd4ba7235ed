//! The stored current-conditions document.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a lake's elevation readings at the fixed comparison
/// offsets, as published after each collection run.
///
/// The document stores raw levels, not deltas: the display layer derives
/// comparison deltas on demand so that pool-threshold comparisons can use
/// the lake details current at render time. `level_today` is the one
/// required reading; the others are `None` when the source had a hole at
/// that offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub lake_id: String,
    /// Name of the measurement site the readings came from, when the
    /// source reports one.
    #[serde(default)]
    pub measurement_site_name: Option<String>,
    /// When the collection run computed this document.
    pub time_conditions_calculated: DateTime<Utc>,
    /// Calendar-day label of the newest reading (midnight convention).
    pub reading_date: NaiveDate,
    pub level_today: f64,
    #[serde(default)]
    pub level_yesterday: Option<f64>,
    #[serde(default)]
    pub level_two_weeks_ago: Option<f64>,
    #[serde(default)]
    pub level_one_year_ago: Option<f64>,
    #[serde(default)]
    pub level_ten_year_average: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn document_round_trips_with_holes() {
        let doc = CurrentConditions {
            lake_id: "powell".to_string(),
            measurement_site_name: Some("USGS Site [09379900] - LAKE POWELL AT GLEN CANYON DAM".to_string()),
            time_conditions_calculated: Utc.with_ymd_and_hms(2025, 3, 3, 6, 15, 0).unwrap(),
            reading_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            level_today: 3563.21,
            level_yesterday: Some(3563.4),
            level_two_weeks_ago: None,
            level_one_year_ago: Some(3559.87),
            level_ten_year_average: Some(3573.002),
        };
        let json = serde_json::to_string(&doc).unwrap();
        let back: CurrentConditions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
        assert_eq!(back.level_two_weeks_ago, None, "holes must survive the round trip");
    }
}
