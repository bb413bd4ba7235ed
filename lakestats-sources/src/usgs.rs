//! USGS Water Services client.
//!
//! Retrieves lake-surface elevations from the USGS instantaneous-values
//! API and collapses them into the daily series the conditions pipeline
//! consumes.
//!
//! API documentation: https://waterservices.usgs.gov/docs/instantaneous-values/

use crate::SourceError;
use chrono::{DateTime, NaiveDate};
use lakestats_model::{DataType, TimeSeriesData, TimeSeriesEntry};
use serde::Deserialize;
use std::collections::BTreeMap;

const USGS_BASE_URL: &str = "https://waterservices.usgs.gov/nwis/";

/// USGS parameter code for lake/reservoir water-surface elevation, in
/// feet above NGVD 1929.
pub const PARAM_LAKE_ELEVATION: &str = "62614";

/// Sentinel the API uses for missing values.
const SENTINEL: &str = "-999999";

const API_DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// USGS API response structures
// ============================================================================

#[derive(Debug, Deserialize)]
struct IvResponse {
    value: IvValue,
}

#[derive(Debug, Deserialize)]
struct IvValue {
    #[serde(rename = "timeSeries")]
    time_series: Vec<IvTimeSeries>,
}

#[derive(Debug, Deserialize)]
struct IvTimeSeries {
    #[serde(rename = "sourceInfo")]
    source_info: IvSourceInfo,
    values: Vec<IvValues>,
}

#[derive(Debug, Deserialize)]
struct IvSourceInfo {
    #[serde(rename = "siteName")]
    site_name: String,
    #[serde(rename = "siteCode")]
    site_code: Vec<IvSiteCode>,
}

#[derive(Debug, Deserialize)]
struct IvSiteCode {
    value: String,
}

#[derive(Debug, Deserialize)]
struct IvValues {
    value: Vec<IvPoint>,
}

#[derive(Debug, Deserialize)]
struct IvPoint {
    value: String,
    #[serde(rename = "dateTime")]
    date_time: String,
}

/// One instantaneous reading with its site-local timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct InstantReading {
    pub timestamp: DateTime<chrono::FixedOffset>,
    pub value: f64,
}

/// A parsed instantaneous-values response for one site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSeries {
    /// "USGS Site [09379900] - LAKE POWELL AT GLEN CANYON DAM, AZ"
    pub site_label: String,
    pub readings: Vec<InstantReading>,
}

// ============================================================================
// URL construction
// ============================================================================

/// Build an instantaneous-values URL for one site, parameter, and
/// inclusive date range.
pub fn instant_values_url(
    site_id: &str,
    parameter_code: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> String {
    format!(
        "{}iv/?format=json&site={}&parameterCd={}&startDT={}&endDT={}",
        USGS_BASE_URL,
        site_id,
        parameter_code,
        start.format(API_DATE_FORMAT),
        end.format(API_DATE_FORMAT),
    )
}

// ============================================================================
// Response parsing
// ============================================================================

/// Parse an instantaneous-values JSON body into a site series.
///
/// Sentinel values and unparseable points are dropped; a response whose
/// first time series holds no usable points is `NoData`.
pub fn parse_iv_response(body: &str) -> Result<SiteSeries, SourceError> {
    let response: IvResponse =
        serde_json::from_str(body).map_err(|e| SourceError::Parse(e.to_string()))?;

    let series = response
        .value
        .time_series
        .into_iter()
        .next()
        .ok_or(SourceError::NoData)?;

    let site_code = series
        .source_info
        .site_code
        .first()
        .map(|c| c.value.clone())
        .unwrap_or_default();
    let site_label = format!("USGS Site [{}] - {}", site_code, series.source_info.site_name);

    let mut readings = Vec::new();
    for block in series.values {
        for point in block.value {
            if point.value == SENTINEL {
                continue;
            }
            let Ok(value) = point.value.parse::<f64>() else {
                log::warn!("usgs: dropping unparseable value '{}'", point.value);
                continue;
            };
            let Ok(timestamp) = DateTime::parse_from_rfc3339(&point.date_time) else {
                log::warn!("usgs: dropping unparseable timestamp '{}'", point.date_time);
                continue;
            };
            readings.push(InstantReading { timestamp, value });
        }
    }

    if readings.is_empty() {
        return Err(SourceError::NoData);
    }
    Ok(SiteSeries { site_label, readings })
}

/// Collapse instantaneous readings to one sample per calendar day.
///
/// The day label comes from the reading's site-local date, and the
/// earliest reading of the day wins, so a date's value is the midnight
/// reading, matching how the dashboard describes "today's" level.
pub fn daily_series(lake_id: &str, site: &SiteSeries) -> TimeSeriesData {
    let mut by_day: BTreeMap<NaiveDate, InstantReading> = BTreeMap::new();
    for reading in &site.readings {
        let day = reading.timestamp.date_naive();
        by_day
            .entry(day)
            .and_modify(|kept| {
                if reading.timestamp < kept.timestamp {
                    *kept = reading.clone();
                }
            })
            .or_insert_with(|| reading.clone());
    }

    let entries = by_day
        .into_iter()
        .map(|(date, reading)| TimeSeriesEntry { date, value: reading.value })
        .collect();
    TimeSeriesData::new(lake_id, DataType::Elevation, entries)
}

// ============================================================================
// Fetching (native CLI only)
// ============================================================================

/// Fetch and parse one site's elevation readings for a date range.
#[cfg(feature = "api")]
pub async fn fetch_elevation(
    client: &reqwest::Client,
    site_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<SiteSeries, SourceError> {
    let url = instant_values_url(site_id, PARAM_LAKE_ELEVATION, start, end);
    log::info!("usgs: fetching {}", url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| SourceError::Network(e.to_string()))?;
    if !response.status().is_success() {
        return Err(SourceError::Http(response.status().as_u16()));
    }
    let body = response
        .text()
        .await
        .map_err(|e| SourceError::Network(e.to_string()))?;
    parse_iv_response(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "value": {
            "timeSeries": [{
                "sourceInfo": {
                    "siteName": "LAKE POWELL AT GLEN CANYON DAM, AZ",
                    "siteCode": [{"value": "09379900"}]
                },
                "values": [{
                    "value": [
                        {"value": "3563.21", "dateTime": "2025-03-01T00:00:00.000-07:00"},
                        {"value": "3563.25", "dateTime": "2025-03-01T12:00:00.000-07:00"},
                        {"value": "3563.40", "dateTime": "2025-02-28T00:00:00.000-07:00"},
                        {"value": "-999999", "dateTime": "2025-02-27T00:00:00.000-07:00"}
                    ]
                }]
            }]
        }
    }"#;

    #[test]
    fn parses_site_label_and_readings() {
        let series = parse_iv_response(SAMPLE_RESPONSE).unwrap();
        assert_eq!(
            series.site_label,
            "USGS Site [09379900] - LAKE POWELL AT GLEN CANYON DAM, AZ"
        );
        assert_eq!(series.readings.len(), 3, "sentinel value should be dropped");
        assert_eq!(series.readings[0].value, 3563.21);
    }

    #[test]
    fn empty_time_series_is_no_data() {
        let body = r#"{"value": {"timeSeries": []}}"#;
        assert_eq!(parse_iv_response(body), Err(SourceError::NoData));
    }

    #[test]
    fn garbage_body_is_a_parse_error() {
        match parse_iv_response("not json") {
            Err(SourceError::Parse(_)) => {}
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn daily_collapse_takes_the_midnight_reading() {
        let series = parse_iv_response(SAMPLE_RESPONSE).unwrap();
        let daily = daily_series("powell", &series);
        assert_eq!(daily.len(), 2);
        // March 1 has a midnight and a noon reading; midnight wins.
        assert_eq!(
            daily.value_on(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()),
            Some(3563.21)
        );
        assert_eq!(
            daily.value_on(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()),
            Some(3563.40)
        );
    }

    #[test]
    fn url_includes_site_parameter_and_range() {
        let url = instant_values_url(
            "09379900",
            PARAM_LAKE_ELEVATION,
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        );
        assert!(url.starts_with("https://waterservices.usgs.gov/nwis/iv/?format=json"));
        assert!(url.contains("site=09379900"));
        assert!(url.contains("parameterCd=62614"));
        assert!(url.contains("startDT=2025-02-01"));
        assert!(url.contains("endDT=2025-03-01"));
    }
}
