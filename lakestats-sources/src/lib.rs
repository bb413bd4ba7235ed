//! Data-source clients for lake elevation readings.
//!
//! Two upstream sources feed the system: the USGS instantaneous-values
//! service (per-site lake elevations, parameter 62614) and the Bureau of
//! Reclamation's published time-series endpoints (per-lake daily data).
//! Response parsing is plain functions over response bodies so it can be
//! unit-tested offline; the actual HTTP fetches live behind the `api`
//! feature, which pulls in `reqwest`/`tokio` for the native CLI only.
//!
//! This layer owns the midnight-label policy: instantaneous readings are
//! collapsed to calendar days by taking each day's earliest reading and
//! labeling it with that date. Everything downstream works in
//! calendar-day offsets and never re-interprets timestamps.

pub mod bor;
pub mod usgs;

use std::fmt;

/// Errors from fetching or parsing upstream data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Non-2xx HTTP response from the upstream API.
    Http(u16),
    /// The request could not be completed (DNS, timeout, transport).
    Network(String),
    /// The response body could not be interpreted.
    Parse(String),
    /// The response was well-formed but contained no usable values
    /// (empty series or all-sentinel).
    NoData,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Http(code) => write!(f, "HTTP error: {}", code),
            SourceError::Network(msg) => write!(f, "Network error: {}", msg),
            SourceError::Parse(msg) => write!(f, "Parse error: {}", msg),
            SourceError::NoData => write!(f, "No usable data in response"),
        }
    }
}

impl std::error::Error for SourceError {}
