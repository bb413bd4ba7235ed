//! Bureau of Reclamation time-series client.
//!
//! BoR publishes per-lake daily data as a JSON object whose `data` field
//! is an array of `[date, value]` pairs. Each lake's details document
//! carries the full endpoint URL per measurement type, so this client
//! takes URLs rather than building them.

use crate::SourceError;
use chrono::NaiveDate;
use lakestats_model::TimeSeriesEntry;
#[cfg(feature = "api")]
use lakestats_model::{DataType, TimeSeriesData};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct BorResponse {
    data: Vec<(String, Option<f64>)>,
}

/// Parse a BoR response body into daily entries.
///
/// Rows with a null value or an unparseable date are dropped; an empty
/// result is `NoData`.
pub fn parse_response(body: &str) -> Result<Vec<TimeSeriesEntry>, SourceError> {
    let response: BorResponse =
        serde_json::from_str(body).map_err(|e| SourceError::Parse(e.to_string()))?;

    let mut entries = Vec::with_capacity(response.data.len());
    for (date, value) in response.data {
        let Some(value) = value else { continue };
        let Ok(date) = NaiveDate::parse_from_str(&date, "%Y-%m-%d") else {
            log::warn!("bor: dropping unparseable date '{}'", date);
            continue;
        };
        entries.push(TimeSeriesEntry { date, value });
    }

    if entries.is_empty() {
        return Err(SourceError::NoData);
    }
    Ok(entries)
}

/// Fetch a lake's series from its configured endpoint URL.
#[cfg(feature = "api")]
pub async fn fetch_series(
    client: &reqwest::Client,
    url: &str,
    lake_id: &str,
    data_type: DataType,
) -> Result<TimeSeriesData, SourceError> {
    log::info!("bor: fetching {} for '{}'", data_type, lake_id);

    let response = client
        .get(url)
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

    let entries = parse_response(&body)?;
    Ok(TimeSeriesData::new(lake_id, data_type, entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_value_pairs() {
        let body = r#"{"data": [
            ["2025-03-01", 3563.21],
            ["2025-02-28", 3563.40],
            ["2025-02-27", null]
        ]}"#;
        let entries = parse_response(body).unwrap();
        assert_eq!(entries.len(), 2, "null values should be dropped");
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(entries[0].value, 3563.21);
    }

    #[test]
    fn all_null_data_is_no_data() {
        let body = r#"{"data": [["2025-03-01", null]]}"#;
        assert_eq!(parse_response(body), Err(SourceError::NoData));
    }

    #[test]
    fn missing_data_field_is_a_parse_error() {
        match parse_response(r#"{"results": []}"#) {
            Err(SourceError::Parse(_)) => {}
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn bad_dates_are_dropped_not_fatal() {
        let body = r#"{"data": [
            ["03/01/2025", 3563.21],
            ["2025-02-28", 3563.40]
        ]}"#;
        let entries = parse_response(body).unwrap();
        assert_eq!(entries.len(), 1);
    }
}
