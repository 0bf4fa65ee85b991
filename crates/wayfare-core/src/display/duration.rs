//! Duration display utilities.
//!
//! This module provides a wrapper type for formatting minute counts in a
//! consistent, human-readable format.

use std::fmt;

/// A wrapper around a minute count that provides `Xh Ym` formatting via the
/// `Display` trait.
///
/// # Format
///
/// - Durations under an hour render as `45m`
/// - Whole hours render as `2h`
/// - Mixed durations render as `2h 15m`
/// - Zero renders as `0m`
pub struct HoursMinutes(pub u32);

impl fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 60;
        let minutes = self.0 % 60;
        match (hours, minutes) {
            (0, m) => write!(f, "{m}m"),
            (h, 0) => write!(f, "{h}h"),
            (h, m) => write!(f, "{h}h {m}m"),
        }
    }
}
