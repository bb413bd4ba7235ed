//! The data collection run.
//!
//! For each enabled lake (or one lake via `--lake`): fetch the configured
//! elevation series, merge it into the readings table, derive the
//! current-conditions document from the merged history, and publish it,
//! plus the rolling-year history document for lakes with that feature
//! enabled. Each lake reports a [`ResultStatus`]; the run's overall
//! status is the most severe of them.
//!
//! # Source configuration
//!
//! A lake's details document carries one source value per measurement
//! type. Two forms are understood:
//! - `usgs:<site-id>`: fetch from the USGS instantaneous-values API and
//!   collapse to daily readings (midnight convention)
//! - any other value: treated as a full BoR time-series endpoint URL

use anyhow::Context;
use chrono::Utc;
use lakestats_data::conditions::aggregate_current_conditions;
use lakestats_data::historical::past_365_days;
use lakestats_db::Database;
use lakestats_model::{
    DataType, FeatureFlag, LakeStatus, LakeSystemSettings, ResultStatus, TimeSeriesData,
};
use lakestats_sources::{bor, usgs, SourceError};
use log::{error, info, warn};

/// How far back each run re-fetches from a USGS source. Overlap with
/// already-stored readings is harmless; readings upsert by date.
const USGS_FETCH_DAYS: i64 = 30;

/// How a lake's elevation source value is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfiguredSource {
    /// USGS site id, from a `usgs:<site-id>` value.
    Usgs(String),
    /// Full BoR endpoint URL.
    Bor(String),
}

/// Parse a configured source value.
pub fn parse_source(value: &str) -> ConfiguredSource {
    match value.strip_prefix("usgs:") {
        Some(site_id) => ConfiguredSource::Usgs(site_id.trim().to_string()),
        None => ConfiguredSource::Bor(value.to_string()),
    }
}

pub async fn run_collect(db_path: &str, lake: Option<&str>) -> anyhow::Result<()> {
    let db = Database::open(db_path)?;

    let targets: Vec<LakeSystemSettings> = match lake {
        Some(lake_id) => {
            let settings = db
                .lake(lake_id)?
                .with_context(|| format!("unknown lake '{}'", lake_id))?;
            vec![settings]
        }
        None => db.lakes_by_status(LakeStatus::Enabled)?,
    };

    if targets.is_empty() {
        warn!("collect: no enabled lakes to collect");
        return Ok(());
    }

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    let mut overall = ResultStatus::Success;
    for settings in &targets {
        let status = collect_lake(&db, &client, settings).await;
        info!("collect: {} -> {}", settings.lake_id, status);
        overall = ResultStatus::more_severe(overall, status);
    }

    info!("collect: run finished with overall status {}", overall);
    anyhow::ensure!(overall.is_success(), "collection run finished with {}", overall);
    Ok(())
}

async fn collect_lake(
    db: &Database,
    client: &reqwest::Client,
    settings: &LakeSystemSettings,
) -> ResultStatus {
    let lake_id = settings.lake_id.as_str();

    let details = match db.lake_details(lake_id) {
        Ok(Some(details)) => details,
        Ok(None) => {
            error!("collect: no details document for '{}'", lake_id);
            return ResultStatus::ConfigurationError;
        }
        Err(e) => {
            error!("collect: failed loading details for '{}': {}", lake_id, e);
            return ResultStatus::SystemException;
        }
    };

    let Some(source_value) = details.data_source_url(DataType::Elevation) else {
        error!("collect: no elevation source configured for '{}'", lake_id);
        return ResultStatus::ConfigurationError;
    };

    let (fetched, site_label) = match fetch_elevation(client, lake_id, source_value).await {
        Ok(result) => result,
        Err(SourceError::NoData) => {
            warn!("collect: source returned no data for '{}'", lake_id);
            return ResultStatus::SourceDataNotUpdated;
        }
        Err(e) => {
            error!("collect: fetch failed for '{}': {}", lake_id, e);
            return ResultStatus::SystemException;
        }
    };

    if let Err(e) = db.insert_readings(lake_id, DataType::Elevation, fetched.chronological()) {
        error!("collect: storing readings failed for '{}': {}", lake_id, e);
        return ResultStatus::PublicationError;
    }

    // Re-read the merged history so the offsets and ten-year average see
    // backfilled readings, not just this fetch.
    let merged = match db.elevation_series(lake_id) {
        Ok(series) => series,
        Err(e) => {
            error!("collect: reloading series failed for '{}': {}", lake_id, e);
            return ResultStatus::SystemException;
        }
    };

    let conditions =
        match aggregate_current_conditions(&merged, site_label.as_deref(), Utc::now()) {
            Ok(conditions) => conditions,
            Err(e) => {
                warn!("collect: cannot aggregate conditions for '{}': {}", lake_id, e);
                return ResultStatus::SourceDataNotUpdated;
            }
        };

    let previous_date = match db.current_conditions(lake_id) {
        Ok(previous) => previous.map(|p| p.reading_date),
        Err(e) => {
            error!("collect: reading previous conditions for '{}': {}", lake_id, e);
            return ResultStatus::SystemException;
        }
    };

    if let Err(e) = db.put_current_conditions(&conditions) {
        error!("collect: publishing conditions failed for '{}': {}", lake_id, e);
        return ResultStatus::PublicationError;
    }

    if settings.has_feature(FeatureFlag::HistoricalData) {
        if let Some(history) = past_365_days(&merged) {
            if let Err(e) = db.put_history(&history) {
                error!("collect: publishing history failed for '{}': {}", lake_id, e);
                return ResultStatus::PublicationError;
            }
        }
    }

    if previous_date == Some(conditions.reading_date) {
        info!(
            "collect: '{}' still at reading date {}, source not updated",
            lake_id, conditions.reading_date
        );
        return ResultStatus::SourceDataNotUpdated;
    }
    ResultStatus::Success
}

/// Fetch the elevation series for one lake from its configured source.
/// Returns the series plus the source's site label when it reports one.
async fn fetch_elevation(
    client: &reqwest::Client,
    lake_id: &str,
    source_value: &str,
) -> Result<(TimeSeriesData, Option<String>), SourceError> {
    match parse_source(source_value) {
        ConfiguredSource::Usgs(site_id) => {
            let end = Utc::now().date_naive();
            let start = end - chrono::Duration::days(USGS_FETCH_DAYS);
            let site = usgs::fetch_elevation(client, &site_id, start, end).await?;
            let series = usgs::daily_series(lake_id, &site);
            Ok((series, Some(site.site_label)))
        }
        ConfiguredSource::Bor(url) => {
            let series = bor::fetch_series(client, &url, lake_id, DataType::Elevation).await?;
            Ok((series, None))
        }
    }
}
