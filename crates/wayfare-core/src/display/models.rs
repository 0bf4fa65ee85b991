//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation
//! of concerns.
//!
//! The Display implementations produce Markdown suitable for terminal
//! rendering or embedding in a conversation transcript.

use std::fmt;

use super::duration::HoursMinutes;
use crate::models::clock::format_clock;
use crate::models::{Day, Meal, Pace, Phase, PlaceCategory, Schedule, ScheduledActivity};

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ScheduledActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} - {} **{}**",
            format_clock(self.start_time),
            format_clock(self.end_time),
            self.place.name
        )?;
        match self.meal {
            Some(meal) => write!(f, " ({meal}, {})", HoursMinutes(self.duration_minutes))?,
            None => write!(
                f,
                " ({}, {})",
                self.place.category,
                HoursMinutes(self.duration_minutes)
            )?,
        }
        writeln!(f)?;

        if self.travel_from_previous_minutes > 0 {
            writeln!(
                f,
                "  - {} travel from previous stop",
                HoursMinutes(self.travel_from_previous_minutes)
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Day {}", self.day_number)?;
        writeln!(f)?;

        if self.activities.is_empty() {
            writeln!(f, "Nothing scheduled.")?;
        } else {
            for activity in &self.activities {
                write!(f, "{activity}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Itinerary")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Scheduled: {} of {} places",
            self.scheduled_count, self.total_places
        )?;

        for day in &self.days {
            writeln!(f)?;
            write!(f, "{day}")?;
        }

        if !self.warnings.is_empty() {
            writeln!(f, "\n## Warnings")?;
            writeln!(f)?;
            for warning in &self.warnings {
                writeln!(f, "- {warning}")?;
            }
        }

        Ok(())
    }
}
