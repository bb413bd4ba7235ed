//! Collection-run result statuses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one step of a collection run, ordered by severity so a
/// run's overall status is the worst thing that happened during it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultStatus {
    /// Operation was successful. No errors occurred.
    Success,
    /// Operation was successful, but the source hasn't published new data
    /// yet; retry later once the source updates.
    SourceDataNotUpdated,
    /// Data was collected, but publishing it to the store failed.
    PublicationError,
    /// The system is misconfigured (e.g. a lake with no elevation source).
    ConfigurationError,
    /// An exception or error occurred during the operation.
    SystemException,
}

impl ResultStatus {
    fn severity(self) -> u8 {
        match self {
            ResultStatus::Success => 0,
            ResultStatus::SourceDataNotUpdated => 1,
            ResultStatus::PublicationError => 2,
            ResultStatus::ConfigurationError => 3,
            ResultStatus::SystemException => 4,
        }
    }

    /// The more severe of two statuses.
    pub fn more_severe(a: ResultStatus, b: ResultStatus) -> ResultStatus {
        if a.severity() >= b.severity() {
            a
        } else {
            b
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, ResultStatus::Success | ResultStatus::SourceDataNotUpdated)
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResultStatus::Success => "SUCCESS",
            ResultStatus::SourceDataNotUpdated => "SOURCE_DATA_NOT_UPDATED",
            ResultStatus::PublicationError => "PUBLICATION_ERROR",
            ResultStatus::ConfigurationError => "CONFIGURATION_ERROR",
            ResultStatus::SystemException => "SYSTEM_EXCEPTION",
        };
        f.write_str(s)
    }
}
