//! Day and schedule models.

use serde::{Deserialize, Serialize};

use super::ScheduledActivity;

/// A single itinerary day.
///
/// Insertion order of `activities` is chronological order; this is an
/// invariant the packer maintains and the validator checks, not just a
/// convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Day {
    /// 1-based day number
    pub day_number: u32,

    /// Activities in chronological order
    pub activities: Vec<ScheduledActivity>,
}

/// The full engine output: a best-effort day-by-day itinerary.
///
/// A schedule is produced wholesale per planning request. Refinement builds
/// a new schedule rather than patching this one in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Schedule {
    /// One entry per requested trip day, possibly empty
    pub days: Vec<Day>,

    /// Number of pool places actually placed into time slots
    pub scheduled_count: usize,

    /// Size of the input place pool
    pub total_places: usize,

    /// Human-readable scheduling defects, in the order they were detected
    pub warnings: Vec<String>,
}
