//! Data models for places, schedules, and session state.
//!
//! This module contains the core domain models of the itinerary engine.
//! Display implementations live in [`crate::display`] to keep data
//! structures separate from presentation.
//!
//! The model lifecycle mirrors the planning pipeline:
//!
//! - [`Place`] values are read-only inputs from the catalog collaborator.
//! - [`ScheduledActivity`] and [`Day`] are created during a single
//!   pack/meal-insertion pass and exist only inside one [`Schedule`].
//! - [`TripState`] is the explicit per-session value the planner threads
//!   through the injected state repository.

pub mod activity;
pub mod clock;
pub mod pace;
pub mod place;
pub mod schedule;
pub mod state;


// Re-export all public types at the models level
pub use activity::{Meal, ScheduledActivity};
pub use pace::Pace;
pub use place::{Place, PlaceCategory};
pub use schedule::{Day, Schedule};
pub use state::{Phase, TripState};
