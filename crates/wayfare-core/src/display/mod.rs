//! Display formatting for schedules and related types.
//!
//! Domain models render to Markdown through standard [`std::fmt::Display`]
//! implementations, so a [`Schedule`](crate::models::Schedule) can be printed
//! directly or embedded in a larger document.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │   Formatted     │
//! │ (Schedule, Day) │───▶│ format wrappers │───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`duration`]: Human-readable duration wrapper ([`HoursMinutes`])
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use wayfare_core::display::HoursMinutes;
//!
//! assert_eq!(HoursMinutes(135).to_string(), "2h 15m");
//! assert_eq!(HoursMinutes(45).to_string(), "45m");
//! ```

pub mod duration;
pub mod models;

pub use duration::HoursMinutes;
