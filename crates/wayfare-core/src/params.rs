//! Parameter structures for planning operations.
//!
//! These structures are the wire contract between the engine and its
//! collaborators (the preference-extraction and place-discovery layers).
//! They stay free of framework-specific derives; the optional `schema`
//! feature adds JSON schema generation for tool-calling layers that need
//! to describe them.
//!
//! Validation is deliberately split in two:
//!
//! - serde handles shape and enum membership at deserialization time;
//! - [`TripParams::validate`] fail-fasts on value-level contract
//!   violations (zero duration, unparseable "HH:MM", inverted windows)
//!   with a typed error naming the offending field, per the engine's
//!   error-handling contract. Domain-normal planning defects never appear
//!   here.

use jiff::civil::Time;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::{clock, Pace, Place};

fn default_day_start() -> String {
    "09:00".to_string()
}

fn default_day_end() -> String {
    "21:00".to_string()
}

/// Trip parameters supplied by the preferences collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct TripParams {
    /// Trip length in days, at least 1
    pub duration_days: u32,

    /// Trip density; defaults to moderate
    #[serde(default)]
    pub pace: Pace,

    /// Daily window start as "HH:MM"; defaults to "09:00"
    #[serde(default = "default_day_start")]
    pub day_start: String,

    /// Daily window end as "HH:MM"; defaults to "21:00"
    #[serde(default = "default_day_end")]
    pub day_end: String,
}

impl TripParams {
    /// Convenience constructor using the default window and pace.
    pub fn for_days(duration_days: u32) -> Self {
        Self {
            duration_days,
            pace: Pace::default(),
            day_start: default_day_start(),
            day_end: default_day_end(),
        }
    }

    /// Validates the parameters, resolving the clock strings.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidInput`] naming the offending field
    /// when `duration_days` is zero, a window bound is not "HH:MM", or the
    /// window is empty or inverted.
    pub fn validate(&self) -> Result<ValidParams> {
        if self.duration_days < 1 {
            return Err(ScheduleError::invalid_input("duration_days")
                .with_reason("trip duration must be at least 1 day"));
        }
        let day_start = clock::parse_clock("day_start", &self.day_start)?;
        let day_end = clock::parse_clock("day_end", &self.day_end)?;
        if day_start >= day_end {
            return Err(ScheduleError::invalid_input("day_end")
                .with_reason(format!(
                    "day window must end after it starts ({} >= {})",
                    self.day_start, self.day_end
                )));
        }
        Ok(ValidParams {
            duration_days: self.duration_days,
            max_activities: self.pace.max_activities_per_day(),
            day_start,
            day_end,
        })
    }
}

/// Resolved, validated trip parameters consumed by the day packer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidParams {
    /// Trip length in days
    pub duration_days: u32,

    /// Per-day activity cap derived from the pace
    pub max_activities: usize,

    /// Daily window start
    pub day_start: Time,

    /// Daily window end
    pub day_end: Time,
}

/// Replacement candidate pools for a session.
///
/// Each non-empty pool replaces the stored one wholesale; an empty pool
/// means "no update" and leaves the stored list untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CandidateUpdate {
    /// Candidate hotels
    #[serde(default)]
    pub hotels: Vec<Place>,

    /// Candidate restaurants (meal-insertion pool)
    #[serde(default)]
    pub restaurants: Vec<Place>,

    /// Candidate attractions (main packing pool)
    #[serde(default)]
    pub attractions: Vec<Place>,
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;

    #[test]
    fn test_validate_defaults() {
        let params = TripParams::for_days(3);
        let valid = params.validate().expect("default params should validate");
        assert_eq!(valid.duration_days, 3);
        assert_eq!(valid.max_activities, 5);
        assert_eq!(valid.day_start, time(9, 0, 0, 0));
        assert_eq!(valid.day_end, time(21, 0, 0, 0));
    }

    #[test]
    fn test_validate_zero_duration() {
        let params = TripParams::for_days(0);
        match params.validate().unwrap_err() {
            ScheduleError::InvalidInput { field, .. } => assert_eq!(field, "duration_days"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_bad_clock_names_field() {
        let params = TripParams {
            day_end: "25:00".to_string(),
            ..TripParams::for_days(2)
        };
        match params.validate().unwrap_err() {
            ScheduleError::InvalidInput { field, .. } => assert_eq!(field, "day_end"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_inverted_window() {
        let params = TripParams {
            day_start: "21:00".to_string(),
            day_end: "09:00".to_string(),
            ..TripParams::for_days(2)
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let params: TripParams =
            serde_json::from_str(r#"{"duration_days": 2}"#).expect("minimal params");
        assert_eq!(params.pace, Pace::Moderate);
        assert_eq!(params.day_start, "09:00");
        assert_eq!(params.day_end, "21:00");
    }

    #[test]
    fn test_deserialize_rejects_unknown_pace() {
        let result: std::result::Result<TripParams, _> =
            serde_json::from_str(r#"{"duration_days": 2, "pace": "frantic"}"#);
        assert!(result.is_err());
    }
}
