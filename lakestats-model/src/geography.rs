//! Lake geography: the per-lake details document with its regions and
//! access points.
//!
//! Threshold sanity (`min_usable_elevation <= min_safe_elevation`) and id
//! uniqueness are enforced here at entry time, before a document is
//! persisted. Classification of an access point against a live elevation
//! never validates (see `lakestats-data`), so a malformed record that
//! slipped past entry still degrades gracefully downstream.

use crate::measurements::DataType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Category of a physical lake-access location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessType {
    BoatRamp,
    PrimitiveLaunch,
    Channel,
    Marina,
}

impl AccessType {
    /// Human-readable label, e.g. "Boat Ramp".
    pub fn label(&self) -> &'static str {
        match self {
            AccessType::BoatRamp => "Boat Ramp",
            AccessType::PrimitiveLaunch => "Primitive Launch",
            AccessType::Channel => "Channel",
            AccessType::Marina => "Marina",
        }
    }
}

/// A physical lake-access location (ramp, launch, channel, marina) with
/// the elevation thresholds that determine its usability.
///
/// `min_usable_elevation` is the lowest water level at which the access
/// point can be used at all; `min_safe_elevation` is the lowest level at
/// which it is fully usable without caution. Both are feet above sea level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessPoint {
    /// Identifier, unique within the owning region.
    pub id: String,
    pub name: String,
    pub access_type: AccessType,
    pub min_safe_elevation: f64,
    pub min_usable_elevation: f64,
    #[serde(default)]
    pub google_maps_link: Option<String>,
    /// Admin-assigned display ordering key. Ties are broken by name.
    #[serde(default)]
    pub sort_order: i64,
}

impl AccessPoint {
    /// Entry-time threshold check: usable must not exceed safe.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_usable_elevation > self.min_safe_elevation {
            return Err(ValidationError::new(
                &self.id,
                format!(
                    "min_usable_elevation ({}) exceeds min_safe_elevation ({})",
                    self.min_usable_elevation, self.min_safe_elevation
                ),
            ));
        }
        Ok(())
    }
}

/// A named area of a lake owning an ordered collection of access points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LakeRegion {
    /// Identifier, unique within the owning lake.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Admin-assigned display ordering key within the lake.
    #[serde(default)]
    pub sort_order: i64,
    pub access_points: Vec<AccessPoint>,
}

impl LakeRegion {
    /// Validates every access point and rejects duplicate ids.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for point in &self.access_points {
            point.validate()?;
            if !seen.insert(point.id.as_str()) {
                return Err(ValidationError::new(
                    &self.id,
                    format!("duplicate access point id '{}'", point.id),
                ));
            }
        }
        Ok(())
    }
}

/// The per-lake details document: pool reference elevations, configured
/// data-source URLs, and the region/access-point tree.
///
/// Pool elevations are `None` when the dam has no configured value for
/// them; the conditions layer additionally treats an exact `0.0` as
/// unconfigured, since no real dam has a meaningful zero threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LakeDetails {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Date the reservoir first reached full pool, if known.
    #[serde(default)]
    pub fill_date: Option<NaiveDate>,
    #[serde(default)]
    pub google_maps_link_to_dam: Option<String>,
    #[serde(default)]
    pub full_pool_elevation: Option<f64>,
    #[serde(default)]
    pub min_power_pool_elevation: Option<f64>,
    #[serde(default)]
    pub dead_pool_elevation: Option<f64>,
    /// Source URL per measurement type, e.g. the BoR elevation endpoint.
    #[serde(default)]
    pub data_sources: BTreeMap<DataType, String>,
    pub regions: Vec<LakeRegion>,
}

impl LakeDetails {
    /// Looks up the configured source URL for a measurement type.
    pub fn data_source_url(&self, data_type: DataType) -> Option<&str> {
        self.data_sources.get(&data_type).map(String::as_str)
    }

    /// Validates the whole document: region id uniqueness plus every
    /// region's own checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for region in &self.regions {
            region.validate()?;
            if !seen.insert(region.id.as_str()) {
                return Err(ValidationError::new(
                    &self.id,
                    format!("duplicate region id '{}'", region.id),
                ));
            }
        }
        Ok(())
    }
}

/// A malformed entity was rejected at creation/edit time.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Id of the entity (or its parent scope) that failed validation.
    pub entity_id: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(entity_id: &str, message: String) -> Self {
        ValidationError {
            entity_id: entity_id.to_string(),
            message,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed for '{}': {}", self.entity_id, self.message)
    }
}

impl std::error::Error for ValidationError {}
