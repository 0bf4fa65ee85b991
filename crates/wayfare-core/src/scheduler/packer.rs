//! Greedy day packing: the core of the scheduling engine.
//!
//! The packer walks the place pool with one shared cursor across all trip
//! days, so every place is attempted exactly once, in order, over the whole
//! run. Language models upstream decide *what* to visit and in what order;
//! this module alone decides *when*, because timing requires arithmetic the
//! models cannot be trusted with.

use std::collections::HashMap;

use jiff::civil::Time;
use log::debug;

use crate::error::Result;
use crate::models::{clock, Day, Place, PlaceCategory, Schedule, ScheduledActivity};
use crate::params::TripParams;
use crate::scheduler::travel::estimate_travel_minutes;

/// Fixed buffer between consecutive activities, in minutes.
pub const ACTIVITY_BUFFER_MINUTES: u32 = 15;

/// Per-category visit duration overrides.
///
/// Falls back to [`PlaceCategory::default_duration_minutes`] for categories
/// without an override, so a caller-supplied table only needs to name the
/// categories it disagrees with.
#[derive(Debug, Clone, Default)]
pub struct DurationTable {
    overrides: HashMap<PlaceCategory, u32>,
}

impl DurationTable {
    /// Creates an empty table using only the category defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default duration for one category.
    pub fn with_minutes(mut self, category: PlaceCategory, minutes: u32) -> Self {
        self.overrides.insert(category, minutes);
        self
    }

    /// Resolved default duration for a category, in minutes.
    pub fn minutes_for(&self, category: PlaceCategory) -> u32 {
        self.overrides
            .get(&category)
            .copied()
            .unwrap_or_else(|| category.default_duration_minutes())
    }
}

/// A place with its timing fields resolved for packing.
struct PreparedPlace {
    place: Place,
    duration: u32,
    opening: Option<Time>,
    closing: Option<Time>,
}

fn prepare_places(places: &[Place], durations: &DurationTable) -> Result<Vec<PreparedPlace>> {
    places
        .iter()
        .enumerate()
        .map(|(i, place)| {
            let opening = place
                .opening_time
                .as_deref()
                .map(|raw| clock::parse_clock(&format!("places[{i}].opening_time"), raw))
                .transpose()?;
            let closing = place
                .closing_time
                .as_deref()
                .map(|raw| clock::parse_clock(&format!("places[{i}].closing_time"), raw))
                .transpose()?;
            Ok(PreparedPlace {
                place: place.clone(),
                duration: place
                    .duration_minutes
                    .unwrap_or_else(|| durations.minutes_for(place.category)),
                opening,
                closing,
            })
        })
        .collect()
}

/// Allocate places into time slots across the trip days.
///
/// Best-effort and deterministic: identical inputs produce identical
/// schedules. Domain-normal misfits (a place that cannot finish before its
/// closing time, leftovers that fit no day) become entries in
/// [`Schedule::warnings`]; only caller contract violations (unparseable
/// "HH:MM", zero duration, unknown pace) return an error.
pub fn build_schedule(places: &[Place], params: &TripParams) -> Result<Schedule> {
    build_schedule_with_durations(places, params, &DurationTable::new())
}

/// [`build_schedule`] with a caller-supplied category duration table.
pub fn build_schedule_with_durations(
    places: &[Place],
    params: &TripParams,
    durations: &DurationTable,
) -> Result<Schedule> {
    let valid = params.validate()?;
    let prepared = prepare_places(places, durations)?;

    let mut days = Vec::with_capacity(valid.duration_days as usize);
    let mut warnings = Vec::new();
    let mut cursor = 0usize;
    let mut scheduled_count = 0usize;

    for day_number in 1..=valid.duration_days {
        let mut activities: Vec<ScheduledActivity> = Vec::new();
        let mut current = valid.day_start;

        while activities.len() < valid.max_activities
            && cursor < prepared.len()
            && current < valid.day_end
        {
            let entry = &prepared[cursor];

            // Wait for opening. The advance sticks even when the place is
            // subsequently skipped for closing too early.
            if let Some(opening) = entry.opening {
                if current < opening {
                    current = opening;
                }
            }

            let Some(end) = clock::add_minutes(current, entry.duration) else {
                // Past midnight: cannot fit today, retry tomorrow.
                break;
            };

            if let Some(closing) = entry.closing {
                if end > closing {
                    // Cannot finish before closing at any time reachable
                    // today or later; consume the cursor and move on.
                    warnings.push(format!(
                        "Moved {} - closes at {}",
                        entry.place.name,
                        clock::format_clock(closing)
                    ));
                    cursor += 1;
                    continue;
                }
            }

            if end > valid.day_end {
                // Done for today; the cursor is untouched so this place is
                // retried at the start of the next day.
                break;
            }

            let mut start = current;
            let mut travel_minutes = 0u32;
            if let Some(previous) = activities.last() {
                travel_minutes = estimate_travel_minutes(&previous.place, &entry.place);
                match clock::add_minutes(current, travel_minutes) {
                    Some(t) => start = t,
                    None => break,
                }
            }
            let Some(end) = clock::add_minutes(start, entry.duration) else {
                break;
            };

            activities.push(ScheduledActivity {
                start_time: start,
                end_time: end,
                duration_minutes: entry.duration,
                travel_from_previous_minutes: travel_minutes,
                place: entry.place.clone(),
                meal: None,
            });
            scheduled_count += 1;
            cursor += 1;

            match clock::add_minutes(end, ACTIVITY_BUFFER_MINUTES) {
                Some(t) => current = t,
                None => break,
            }
        }

        debug!(
            "day {day_number}: packed {} activities, cursor at {cursor}/{}",
            activities.len(),
            prepared.len()
        );
        days.push(Day {
            day_number,
            activities,
        });
    }

    if cursor < prepared.len() {
        let unfit: Vec<&str> = prepared[cursor..]
            .iter()
            .take(3)
            .map(|entry| entry.place.name.as_str())
            .collect();
        warnings.push(format!("Could not fit: {}", unfit.join(", ")));
    }

    Ok(Schedule {
        days,
        scheduled_count,
        total_places: places.len(),
        warnings,
    })
}
