//! Top-level lake system settings: the record the public site uses to
//! decide which lakes exist, what to call them, and in what order to show
//! them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enablement status of a lake. Lakes are grouped and ordered within
/// their status group on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LakeStatus {
    /// Visible on the public site.
    Enabled,
    /// Hidden everywhere except the admin panel.
    Disabled,
    /// Visible only to admins for pre-launch review.
    Testing,
}

impl LakeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LakeStatus::Enabled => "ENABLED",
            LakeStatus::Disabled => "DISABLED",
            LakeStatus::Testing => "TESTING",
        }
    }

    pub fn parse(s: &str) -> Option<LakeStatus> {
        match s {
            "ENABLED" => Some(LakeStatus::Enabled),
            "DISABLED" => Some(LakeStatus::Disabled),
            "TESTING" => Some(LakeStatus::Testing),
            _ => None,
        }
    }
}

impl fmt::Display for LakeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional per-lake features toggled by admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureFlag {
    /// Show region/access-point status on the lake page.
    AccessPoints,
    /// Publish the rolling-year history document on each collection run.
    HistoricalData,
}

/// The top-level settings record for one lake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LakeSystemSettings {
    pub lake_id: String,
    pub lake_name: String,
    /// Name used in page titles and branding, e.g. "Powell Stats".
    pub branded_name: String,
    pub status: LakeStatus,
    #[serde(default)]
    pub features: Vec<FeatureFlag>,
    #[serde(default)]
    pub accent_color: Option<String>,
    /// Admin-assigned display ordering key within the status group.
    /// Ties are broken by lake name.
    #[serde(default)]
    pub sort_order: i64,
}

impl LakeSystemSettings {
    pub fn has_feature(&self, flag: FeatureFlag) -> bool {
        self.features.contains(&flag)
    }
}
