//! Scheduled activity model.

use jiff::civil::Time;
use serde::{Deserialize, Serialize};

use super::Place;

/// Meal slot marker for activities inserted by the meal inserter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Lunch,
    Dinner,
}

impl Meal {
    /// Returns the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
        }
    }
}

/// A [`Place`] bound to a concrete time slot within a day.
///
/// Created only by the day packer and the meal inserter; once part of a
/// [`Schedule`](super::Schedule) it is never mutated. A new planning request
/// produces fresh activities rather than patching existing ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ScheduledActivity {
    /// Start of the slot, "HH:MM"
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    #[serde(with = "super::clock::hhmm")]
    pub start_time: Time,

    /// End of the slot, "HH:MM"
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    #[serde(with = "super::clock::hhmm")]
    pub end_time: Time,

    /// Visit duration in minutes
    pub duration_minutes: u32,

    /// Estimated travel time from the previous activity; 0 for the first
    /// activity of a day
    pub travel_from_previous_minutes: u32,

    /// The originating place
    pub place: Place,

    /// Set when this slot was inserted as a meal break
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal: Option<Meal>,
}
