//! Core domain types for lake-level monitoring.
//!
//! This crate defines the shared model imported by every other lakestats
//! crate: lake geography (regions and access points), system settings,
//! measurement kinds, elevation time series, and the stored
//! current-conditions document. It contains no I/O and no derived-value
//! logic. Only types, their serde wire formats, and entry-time validation.

pub mod conditions;
pub mod geography;
pub mod historical;
pub mod measurements;
pub mod run;
pub mod series;
pub mod settings;
pub mod sorting;

pub use conditions::CurrentConditions;
pub use geography::{AccessPoint, AccessType, LakeDetails, LakeRegion, ValidationError};
pub use historical::{HistoricalPeriodData, PeriodType};
pub use measurements::DataType;
pub use run::ResultStatus;
pub use series::{TimeSeriesData, TimeSeriesEntry};
pub use settings::{FeatureFlag, LakeStatus, LakeSystemSettings};
pub use sorting::SortAssignment;
