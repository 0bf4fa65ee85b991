//! High-level planner API for managing trip sessions.
//!
//! This module provides the main [`Planner`] interface for driving the
//! itinerary engine. The planner acts as the coordinator between callers
//! and the session store, owning the business logic for collecting trip
//! input, building schedules, and persisting the results.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Planner     │    │    Scheduler    │    │   State store   │
//! │ (session_ops)   │───▶│ (via scheduler/)│    │  (via store/)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Session API         Pure computation       Data persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`session_ops`]: Session operations (candidates, parameters, itinerary)
//!
//! ## Design Principles
//!
//! 1. **Async First**: All operations are async-compatible; blocking store
//!    access runs on the blocking thread pool
//! 2. **Error Propagation**: Comprehensive error handling with context
//! 3. **Pluggable Storage**: Any [`StateRepository`] works behind the facade
//! 4. **Deterministic Core**: Schedule computation itself is pure and
//!    side-effect free
//!
//! # Usage Examples
//!
//! ```rust
//! use wayfare_core::{params::TripParams, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create with default database path
//! let planner = PlannerBuilder::new().build().await?;
//!
//! // Record trip parameters for a session
//! let params = TripParams::for_days(3);
//! planner.set_trip_params("session-1", &params).await?;
//!
//! // Build the itinerary from stored candidates
//! let schedule = planner.plan_itinerary("session-1").await?;
//! println!("scheduled {} activities", schedule.scheduled_count);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::store::StateRepository;

// Module declarations
pub mod builder;
pub mod session_ops;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::PlannerBuilder;

/// Main planner interface for managing trip sessions.
pub struct Planner {
    pub(crate) store: Arc<dyn StateRepository>,
}

impl Planner {
    /// Creates a new planner backed by the given session store.
    pub(crate) fn new(store: Arc<dyn StateRepository>) -> Self {
        Self { store }
    }
}
