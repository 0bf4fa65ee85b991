//! Clock-time parsing, formatting, and arithmetic.
//!
//! Itineraries work in wall-clock times within a single day ("HH:MM"), so
//! the engine uses [`jiff::civil::Time`] rather than full timestamps. All
//! arithmetic is checked: an addition that would cross midnight yields
//! `None`, which the packer treats as "does not fit today".

use jiff::civil::Time;
use jiff::Span;

use crate::error::{Result, ScheduleError};

/// Parse an "HH:MM" string, reporting failures against the given field name.
///
/// Accepts a one- or two-digit hour ("9:00" and "09:00" are both valid).
/// Seconds are not accepted; the engine has no use for sub-minute precision.
pub fn parse_clock(field: &str, raw: &str) -> Result<Time> {
    parse_hhmm(raw).map_err(|reason| ScheduleError::invalid_input(field).with_reason(reason))
}

/// Format a time as "HH:MM", zero-padded.
pub fn format_clock(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Add whole minutes to a clock time.
///
/// Returns `None` when the result would cross midnight; day windows end at
/// 21:00 by default and never span days, so a wrap always means "too late".
pub fn add_minutes(time: Time, minutes: u32) -> Option<Time> {
    time.checked_add(Span::new().minutes(i64::from(minutes))).ok()
}

fn parse_hhmm(raw: &str) -> std::result::Result<Time, String> {
    let invalid = || format!("expected \"HH:MM\", got \"{raw}\"");
    let (hour_raw, minute_raw) = raw.split_once(':').ok_or_else(invalid)?;
    let hour: i8 = hour_raw.trim().parse().map_err(|_| invalid())?;
    let minute: i8 = minute_raw.trim().parse().map_err(|_| invalid())?;
    Time::new(hour, minute, 0, 0).map_err(|_| invalid())
}

/// Serde adapter serializing a [`Time`] as an "HH:MM" string.
pub mod hhmm {
    use jiff::civil::Time;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &Time, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_clock(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_hhmm(&raw).map_err(serde::de::Error::custom)
    }
}
