//! The deterministic itinerary scheduling engine.
//!
//! Every entry point in this module is a pure, synchronous function over
//! its inputs: no I/O, no shared state, no suspension points. Concurrent
//! planning requests are embarrassingly parallel. The pipeline composes the
//! pieces in dependency order:
//!
//! ```text
//! candidate places ──▶ route::order_by_proximity
//!                            │
//!                            ▼
//!                      packer::build_schedule ──▶ draft Schedule
//!                            │
//!                            ▼
//!                      meals::insert_meals
//!                            │
//!                            ▼
//!                      validate::validate_schedule ──▶ warnings
//! ```
//!
//! Callers that need a different composition (pre-ordered input, no meals,
//! a custom duration table) use the submodule functions directly.

pub mod meals;
pub mod packer;
pub mod route;
pub mod travel;
pub mod validate;


pub use meals::insert_meals;
pub use packer::{build_schedule, build_schedule_with_durations, DurationTable};
pub use route::order_by_proximity;
pub use travel::{distance_km, estimate_travel_minutes};
pub use validate::{validate_schedule, IssueKind, ValidationIssue, ValidationReport};

use crate::error::Result;
use crate::models::{Place, Schedule};
use crate::params::TripParams;

/// Build a complete itinerary from candidate pools.
///
/// Orders the attraction pool by proximity, packs it across the trip days,
/// inserts meal slots from the restaurant pool, and appends any validator
/// findings to the schedule's warnings. Always returns a best-effort
/// schedule for valid parameters; misfit places degrade to warnings rather
/// than errors.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidInput`](crate::error::ScheduleError) for
/// caller contract violations: zero trip duration, unknown pace, or an
/// unparseable "HH:MM" field.
pub fn build_itinerary(
    attractions: &[Place],
    restaurants: &[Place],
    params: &TripParams,
) -> Result<Schedule> {
    let ordered = order_by_proximity(attractions);
    let packed = build_schedule(&ordered, params)?;
    let mut schedule = insert_meals(packed, restaurants);

    let report = validate_schedule(&schedule);
    for issue in &report.issues {
        schedule.warnings.push(format!(
            "Day {}: {} overlaps the previous activity",
            issue.day_number, issue.activity
        ));
    }

    Ok(schedule)
}
