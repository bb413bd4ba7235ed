//! Access-point status classification.

use lakestats_model::AccessPoint;
use serde::Serialize;
use std::fmt;

/// Usability of an access point at the current water level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessStatus {
    /// At or above the minimum safe elevation.
    Open,
    /// Usable but below the safe elevation.
    Caution,
    /// Below the minimum usable elevation.
    Closed,
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AccessStatus::Open => "OPEN",
            AccessStatus::Caution => "CAUTION",
            AccessStatus::Closed => "CLOSED",
        };
        f.write_str(s)
    }
}

/// Classification result: the status plus how far the water sits above
/// (positive) or below (negative) the point's usable threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccessReport {
    pub status: AccessStatus,
    pub usable_delta: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    /// No current elevation; callers must not guess a status.
    InsufficientData,
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::InsufficientData => {
                write!(f, "no current elevation available to classify against")
            }
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Classify one access point against the current elevation.
///
/// The OPEN check runs first, then CLOSED, so a malformed record with
/// `min_usable_elevation > min_safe_elevation` still gets an internally
/// consistent answer instead of a panic; entry-time validation is the
/// place that rejects such records.
pub fn classify(
    point: &AccessPoint,
    current_elevation: Option<f64>,
) -> Result<AccessReport, ClassifyError> {
    let elevation = current_elevation.ok_or(ClassifyError::InsufficientData)?;

    let status = if elevation >= point.min_safe_elevation {
        AccessStatus::Open
    } else if elevation < point.min_usable_elevation {
        AccessStatus::Closed
    } else {
        AccessStatus::Caution
    };

    Ok(AccessReport {
        status,
        usable_delta: elevation - point.min_usable_elevation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lakestats_model::AccessType;

    fn point(safe: f64, usable: f64) -> AccessPoint {
        AccessPoint {
            id: "wahweap".to_string(),
            name: "Wahweap Main Ramp".to_string(),
            access_type: AccessType::BoatRamp,
            min_safe_elevation: safe,
            min_usable_elevation: usable,
            google_maps_link: None,
            sort_order: 1,
        }
    }

    #[test]
    fn between_thresholds_is_caution() {
        let report = classify(&point(3550.0, 3540.0), Some(3545.0)).unwrap();
        assert_eq!(report.status, AccessStatus::Caution);
        assert!((report.usable_delta - 5.0).abs() < 1e-9);
    }

    #[test]
    fn safe_boundary_is_inclusive() {
        let report = classify(&point(3550.0, 3540.0), Some(3550.0)).unwrap();
        assert_eq!(report.status, AccessStatus::Open);
    }

    #[test]
    fn below_usable_is_closed_with_negative_delta() {
        let report = classify(&point(3550.0, 3540.0), Some(3535.5)).unwrap();
        assert_eq!(report.status, AccessStatus::Closed);
        assert!((report.usable_delta + 4.5).abs() < 1e-9);
    }

    #[test]
    fn usable_boundary_is_caution_not_closed() {
        let report = classify(&point(3550.0, 3540.0), Some(3540.0)).unwrap();
        assert_eq!(report.status, AccessStatus::Caution);
        assert_eq!(report.usable_delta, 0.0);
    }

    #[test]
    fn missing_elevation_is_an_error() {
        assert_eq!(
            classify(&point(3550.0, 3540.0), None),
            Err(ClassifyError::InsufficientData)
        );
    }

    #[test]
    fn classification_is_total_over_valid_points() {
        // One of the three statuses, exactly, for a sweep of elevations
        // around the thresholds.
        let p = point(3550.0, 3540.0);
        for tenth in 35300..=35600 {
            let elevation = f64::from(tenth) / 10.0;
            let report = classify(&p, Some(elevation)).unwrap();
            let expected = if elevation >= 3550.0 {
                AccessStatus::Open
            } else if elevation < 3540.0 {
                AccessStatus::Closed
            } else {
                AccessStatus::Caution
            };
            assert_eq!(report.status, expected, "elevation {}", elevation);
        }
    }

    #[test]
    fn inverted_thresholds_degrade_without_panic() {
        // usable > safe is invalid at entry time; the classifier still
        // answers, OPEN check first.
        let malformed = point(3540.0, 3550.0);
        assert_eq!(
            classify(&malformed, Some(3545.0)).unwrap().status,
            AccessStatus::Closed
        );
        assert_eq!(
            classify(&malformed, Some(3541.0)).unwrap().status,
            AccessStatus::Open
        );
    }
}
