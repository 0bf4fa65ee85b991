//! Core library for the Wayfare itinerary planning engine.
//!
//! This crate turns a pile of researched places into a concrete day-by-day
//! trip schedule. It provides the scheduling algorithms (route ordering, day
//! packing, meal insertion, overlap validation), the session state layer, and
//! the data models shared by all of them.
//!
//! # Pipeline Architecture
//!
//! Scheduling is a deterministic pipeline over immutable inputs:
//!
//! - **Route ordering** ([`scheduler::route`]): nearest-neighbor pass over
//!   place coordinates
//! - **Day packing** ([`scheduler::packer`]): greedy placement against a
//!   daily time window, opening hours, and pace limits
//! - **Meal insertion** ([`scheduler::meals`]): lunch and dinner slots woven
//!   into each packed day
//! - **Validation** ([`scheduler::validate`]): overlap detection over the
//!   finished schedule
//!
//! The same inputs always produce the same [`models::Schedule`]. Session
//! state lives behind the [`store::StateRepository`] trait, and the
//! [`Planner`] facade ties storage and scheduling together behind an async
//! API.
//!
//! # Quick Start
//!
//! ```rust
//! use wayfare_core::{params::TripParams, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a planner instance
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Record trip parameters and build the itinerary
//! planner
//!     .set_trip_params("session-1", &TripParams::for_days(3))
//!     .await?;
//! let schedule = planner.plan_itinerary("session-1").await?;
//! println!("{schedule}");
//! # Ok(())
//! # }
//! ```
//!
//! The scheduling pipeline is also usable directly, without any storage:
//!
//! ```rust
//! use wayfare_core::{params::TripParams, scheduler};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let schedule = scheduler::build_itinerary(&[], &[], &TripParams::for_days(2))?;
//! assert_eq!(schedule.days.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod scheduler;
pub mod store;

// Re-export commonly used types
pub use display::HoursMinutes;
pub use error::{Result, ScheduleError};
pub use models::{Day, Meal, Pace, Phase, Place, PlaceCategory, Schedule, ScheduledActivity, TripState};
pub use params::{CandidateUpdate, TripParams};
pub use planner::{Planner, PlannerBuilder};
pub use scheduler::{build_itinerary, validate_schedule, ValidationReport};
pub use store::{MemoryStore, SqliteStore, StateRepository};
