//! Historical period extraction.

use lakestats_model::{HistoricalPeriodData, PeriodType, TimeSeriesData, TimeSeriesEntry};

/// The rolling-year document: the newest 365 entries, bounded at one year
/// before the newest reading. `None` (with a warning) when the series has
/// less than a year of data, since publishing a partial year would make the
/// chart's x-axis lie.
pub fn past_365_days(series: &TimeSeriesData) -> Option<HistoricalPeriodData> {
    let chronological = series.chronological();
    if chronological.len() < 365 {
        log::warn!(
            "less than 365 days of {} data for {} while aggregating the past year",
            series.data_type(),
            series.lake_id()
        );
        return None;
    }

    let newest = chronological.first()?;
    let one_year_ago = newest.date.checked_sub_months(chrono::Months::new(12))?;

    let entries: Vec<TimeSeriesEntry> = chronological
        .iter()
        .take(365)
        .take_while(|entry| entry.date >= one_year_ago)
        .copied()
        .collect();

    HistoricalPeriodData::create(
        series.lake_id(),
        PeriodType::RollingYear,
        series.data_type(),
        entries,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lakestats_model::DataType;

    fn daily_series(days: i64, newest_value: f64) -> TimeSeriesData {
        let newest = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let entries = (0..days)
            .map(|i| TimeSeriesEntry {
                date: newest - chrono::Duration::days(i),
                value: newest_value - i as f64,
            })
            .collect();
        TimeSeriesData::new("powell", DataType::Elevation, entries)
    }

    #[test]
    fn rolling_year_is_ascending_and_bounded() {
        let series = daily_series(400, 3563.0);
        let period = past_365_days(&series).expect("400 days is enough history");
        assert_eq!(period.period_type, PeriodType::RollingYear);
        assert_eq!(period.entries.len(), 365);
        assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert!(
            period.entries.windows(2).all(|w| w[0].date < w[1].date),
            "entries must be ascending for the chart"
        );
        assert_eq!(period.entries.last().unwrap().value, 3563.0);
    }

    #[test]
    fn short_series_yields_nothing() {
        let series = daily_series(100, 3563.0);
        assert!(past_365_days(&series).is_none());
    }

    #[test]
    fn gaps_reaching_past_a_year_are_clipped() {
        // 365 data points that span more than a calendar year because of
        // holes: the bound wins over the count.
        let newest = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let mut entries: Vec<TimeSeriesEntry> = (0..300)
            .map(|i| TimeSeriesEntry {
                date: newest - chrono::Duration::days(i),
                value: 3563.0,
            })
            .collect();
        // 65 stale entries far older than one year.
        for i in 0..65 {
            entries.push(TimeSeriesEntry {
                date: newest - chrono::Duration::days(500 + i),
                value: 3500.0,
            });
        }
        let series = TimeSeriesData::new("powell", DataType::Elevation, entries);
        let period = past_365_days(&series).expect("365 points exist");
        assert_eq!(period.entries.len(), 300, "entries past the year bound are dropped");
        assert!(period.entries.iter().all(|e| e.value == 3563.0));
    }
}
