//! Current-conditions comparisons.
//!
//! A [`ReadingSet`] bundles the elevation samples at the fixed comparison
//! offsets plus the lake's optional pool reference levels;
//! [`compute_comparisons`] turns it into signed deltas. Deltas are exact
//! floating-point feet; rounding and unit conversion happen in
//! [`crate::format`], not here.

use chrono::{DateTime, Months, NaiveDate, Utc};
use lakestats_model::{CurrentConditions, LakeDetails, TimeSeriesData};
use serde::Serialize;
use std::fmt;

/// Elevation samples keyed by the fixed temporal offsets, plus the pool
/// reference levels. All fields are optional at the type level; `today`
/// is the one field [`compute_comparisons`] requires.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReadingSet {
    pub today: Option<f64>,
    pub yesterday: Option<f64>,
    pub two_weeks_ago: Option<f64>,
    pub one_year_ago: Option<f64>,
    pub ten_year_average: Option<f64>,
    pub full_pool: Option<f64>,
    pub min_power_pool: Option<f64>,
    pub dead_pool: Option<f64>,
}

/// Signed deltas (feet) for every comparison the dashboard shows.
///
/// A `None` means the comparison is not available: either the reading at
/// that offset was missing or the pool level is not configured. Callers
/// suppress the stat rather than showing a zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub vs_yesterday: Option<f64>,
    pub vs_two_weeks: Option<f64>,
    pub vs_one_year: Option<f64>,
    pub vs_ten_year_average: Option<f64>,
    pub vs_full_pool: Option<f64>,
    pub vs_min_power_pool: Option<f64>,
    pub vs_dead_pool: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionsError {
    /// No `today` reading. The dashboard must not show partial stats.
    MissingPrimaryReading,
}

impl fmt::Display for ConditionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionsError::MissingPrimaryReading => {
                write!(f, "no current reading available for comparison")
            }
        }
    }
}

impl std::error::Error for ConditionsError {}

/// Compute every available comparison delta, `today - other`.
///
/// Missing readings omit their delta. Pool levels are treated the same,
/// and an exact `0.0` pool level also omits, since a dam never has a
/// meaningful zero threshold, so zero reads as "not configured".
pub fn compute_comparisons(readings: &ReadingSet) -> Result<ComparisonResult, ConditionsError> {
    let today = readings
        .today
        .ok_or(ConditionsError::MissingPrimaryReading)?;

    let delta = |other: Option<f64>| other.map(|v| today - v);
    let pool_delta = |level: Option<f64>| level.filter(|v| *v != 0.0).map(|v| today - v);

    Ok(ComparisonResult {
        vs_yesterday: delta(readings.yesterday),
        vs_two_weeks: delta(readings.two_weeks_ago),
        vs_one_year: delta(readings.one_year_ago),
        vs_ten_year_average: delta(readings.ten_year_average),
        vs_full_pool: pool_delta(readings.full_pool),
        vs_min_power_pool: pool_delta(readings.min_power_pool),
        vs_dead_pool: pool_delta(readings.dead_pool),
    })
}

/// Mean of the value on the same calendar date over the `years` prior
/// years. Stops at the first year with no reading (and logs), but still
/// divides by the requested year count so published averages stay
/// comparable run over run. `None` when not even one year is present.
pub fn multi_year_average_on_date(
    date: NaiveDate,
    years: u32,
    series: &TimeSeriesData,
) -> Option<f64> {
    let mut running_sum = 0.0;
    let mut found = 0;
    for i in 0..years {
        let earlier = date.checked_sub_months(Months::new(12 * (i + 1)))?;
        match series.value_on(earlier) {
            Some(value) => {
                running_sum += value;
                found += 1;
            }
            None => {
                log::warn!(
                    "less than {} years of data for {} while averaging on {}",
                    years,
                    series.lake_id(),
                    date
                );
                break;
            }
        }
    }
    if found == 0 {
        return None;
    }
    Some(running_sum / f64::from(years))
}

/// The newest reading plus the levels at each fixed offset, anchored on
/// the newest entry's calendar date.
struct OffsetLevels {
    date: NaiveDate,
    today: f64,
    yesterday: Option<f64>,
    two_weeks_ago: Option<f64>,
    one_year_ago: Option<f64>,
    ten_year_average: Option<f64>,
}

fn offset_levels(series: &TimeSeriesData) -> Option<OffsetLevels> {
    let newest = series.newest()?;
    let date = newest.date;
    Some(OffsetLevels {
        date,
        today: newest.value,
        yesterday: date.pred_opt().and_then(|d| series.value_on(d)),
        two_weeks_ago: series.value_on(date - chrono::Duration::days(14)),
        one_year_ago: date
            .checked_sub_months(Months::new(12))
            .and_then(|d| series.value_on(d)),
        ten_year_average: multi_year_average_on_date(date, 10, series),
    })
}

/// Build the comparison bundle for a lake from its elevation series and
/// details document. The newest entry anchors every offset; offsets are
/// calendar-day lookups against the series' date index.
pub fn reading_set_for(series: &TimeSeriesData, details: &LakeDetails) -> ReadingSet {
    let Some(levels) = offset_levels(series) else {
        return ReadingSet::default();
    };
    ReadingSet {
        today: Some(levels.today),
        yesterday: levels.yesterday,
        two_weeks_ago: levels.two_weeks_ago,
        one_year_ago: levels.one_year_ago,
        ten_year_average: levels.ten_year_average,
        full_pool: details.full_pool_elevation,
        min_power_pool: details.min_power_pool_elevation,
        dead_pool: details.dead_pool_elevation,
    }
}

/// Build the comparison bundle from a stored conditions document plus the
/// lake details current at render time. This is the display-layer path:
/// levels come from the published document, pool thresholds from details.
pub fn reading_set_from_conditions(
    conditions: &CurrentConditions,
    details: &LakeDetails,
) -> ReadingSet {
    ReadingSet {
        today: Some(conditions.level_today),
        yesterday: conditions.level_yesterday,
        two_weeks_ago: conditions.level_two_weeks_ago,
        one_year_ago: conditions.level_one_year_ago,
        ten_year_average: conditions.level_ten_year_average,
        full_pool: details.full_pool_elevation,
        min_power_pool: details.min_power_pool_elevation,
        dead_pool: details.dead_pool_elevation,
    }
}

/// Derive the publishable conditions document from an elevation series.
///
/// Fails with [`ConditionsError::MissingPrimaryReading`] when the series
/// is empty; any other missing offset becomes a hole in the document.
pub fn aggregate_current_conditions(
    series: &TimeSeriesData,
    measurement_site_name: Option<&str>,
    collected_at: DateTime<Utc>,
) -> Result<CurrentConditions, ConditionsError> {
    let levels = offset_levels(series).ok_or(ConditionsError::MissingPrimaryReading)?;
    Ok(CurrentConditions {
        lake_id: series.lake_id().to_string(),
        measurement_site_name: measurement_site_name.map(str::to_string),
        time_conditions_calculated: collected_at,
        reading_date: levels.date,
        level_today: levels.today,
        level_yesterday: levels.yesterday,
        level_two_weeks_ago: levels.two_weeks_ago,
        level_one_year_ago: levels.one_year_ago,
        level_ten_year_average: levels.ten_year_average,
    })
}
