//! Meal insertion for packed schedules.
//!
//! A post-processing pass that guarantees lunch and dinner slots where the
//! day's shape allows them. Meals occupy the boundary gap before an
//! existing activity; they never shift that activity's own start time, so a
//! tightly packed day can still end up flagged by the validator. That is
//! deliberate: the validator reports, the caller decides.

use jiff::civil::{time, Time};

use crate::models::{Meal, Place, Schedule, ScheduledActivity};

const LUNCH_START: Time = time(12, 30, 0, 0);
const LUNCH_END: Time = time(13, 30, 0, 0);
const LUNCH_MINUTES: u32 = 60;
const LUNCH_TRAVEL_MINUTES: u32 = 15;

const DINNER_START: Time = time(19, 30, 0, 0);
const DINNER_END: Time = time(21, 0, 0, 0);
const DINNER_MINUTES: u32 = 90;
const DINNER_TRAVEL_MINUTES: u32 = 20;

/// Insert lunch and dinner slots into each day of a packed schedule.
///
/// For every day, lunch (12:30-13:30) goes immediately before the first
/// activity starting at or after 12:30, and dinner (19:30-21:00) before the
/// first activity starting at or after 19:30. Restaurants cycle round-robin
/// by the located activity's position, with dinner offset by one so
/// consecutive meals differ. A day without an activity at or after a
/// threshold gets no forced meal; an empty restaurant pool leaves the
/// schedule untouched.
pub fn insert_meals(mut schedule: Schedule, restaurants: &[Place]) -> Schedule {
    if restaurants.is_empty() {
        return schedule;
    }

    for day in &mut schedule.days {
        insert_meal(
            &mut day.activities,
            MealSlot {
                meal: Meal::Lunch,
                start: LUNCH_START,
                end: LUNCH_END,
                duration_minutes: LUNCH_MINUTES,
                travel_minutes: LUNCH_TRAVEL_MINUTES,
                rotation_offset: 0,
            },
            restaurants,
        );
        insert_meal(
            &mut day.activities,
            MealSlot {
                meal: Meal::Dinner,
                start: DINNER_START,
                end: DINNER_END,
                duration_minutes: DINNER_MINUTES,
                travel_minutes: DINNER_TRAVEL_MINUTES,
                rotation_offset: 1,
            },
            restaurants,
        );
    }

    schedule
}

struct MealSlot {
    meal: Meal,
    start: Time,
    end: Time,
    duration_minutes: u32,
    travel_minutes: u32,
    rotation_offset: usize,
}

fn insert_meal(activities: &mut Vec<ScheduledActivity>, slot: MealSlot, restaurants: &[Place]) {
    let Some(position) = activities.iter().position(|a| a.start_time >= slot.start) else {
        return;
    };

    let restaurant = restaurants[(position + slot.rotation_offset) % restaurants.len()].clone();
    activities.insert(
        position,
        ScheduledActivity {
            start_time: slot.start,
            end_time: slot.end,
            duration_minutes: slot.duration_minutes,
            travel_from_previous_minutes: slot.travel_minutes,
            place: restaurant,
            meal: Some(slot.meal),
        },
    );
}
