//! Measurement kinds reported by dam operators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of measurement a time series or data-source URL refers to.
///
/// Elevation is the only type the conditions pipeline consumes today; the
/// remaining variants mirror the measurement catalog published by the
/// Bureau of Reclamation so additional series can be configured per lake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    Elevation,
    Inflow,
    TotalRelease,
    SpillwayRelease,
    BypassRelease,
    PowerRelease,
    Evaporation,
    ActiveStorage,
    BankStorage,
    DeltaStorage,
}

impl DataType {
    /// Stable wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Elevation => "ELEVATION",
            DataType::Inflow => "INFLOW",
            DataType::TotalRelease => "TOTAL_RELEASE",
            DataType::SpillwayRelease => "SPILLWAY_RELEASE",
            DataType::BypassRelease => "BYPASS_RELEASE",
            DataType::PowerRelease => "POWER_RELEASE",
            DataType::Evaporation => "EVAPORATION",
            DataType::ActiveStorage => "ACTIVE_STORAGE",
            DataType::BankStorage => "BANK_STORAGE",
            DataType::DeltaStorage => "DELTA_STORAGE",
        }
    }

    /// Parse a wire name back into a `DataType`. Returns `None` for
    /// unrecognized names.
    pub fn parse(s: &str) -> Option<DataType> {
        match s {
            "ELEVATION" => Some(DataType::Elevation),
            "INFLOW" => Some(DataType::Inflow),
            "TOTAL_RELEASE" => Some(DataType::TotalRelease),
            "SPILLWAY_RELEASE" => Some(DataType::SpillwayRelease),
            "BYPASS_RELEASE" => Some(DataType::BypassRelease),
            "POWER_RELEASE" => Some(DataType::PowerRelease),
            "EVAPORATION" => Some(DataType::Evaporation),
            "ACTIVE_STORAGE" => Some(DataType::ActiveStorage),
            "BANK_STORAGE" => Some(DataType::BankStorage),
            "DELTA_STORAGE" => Some(DataType::DeltaStorage),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        let all = [
            DataType::Elevation,
            DataType::Inflow,
            DataType::TotalRelease,
            DataType::SpillwayRelease,
            DataType::BypassRelease,
            DataType::PowerRelease,
            DataType::Evaporation,
            DataType::ActiveStorage,
            DataType::BankStorage,
            DataType::DeltaStorage,
        ];
        for dt in all {
            assert_eq!(
                DataType::parse(dt.as_str()),
                Some(dt),
                "wire name '{}' should parse back to its variant",
                dt
            );
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(DataType::parse("SNOWPACK"), None);
        assert_eq!(DataType::parse(""), None);
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&DataType::TotalRelease).unwrap();
        assert_eq!(json, "\"TOTAL_RELEASE\"");
    }
}
