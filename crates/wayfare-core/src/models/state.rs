//! Per-session trip state.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Place, Schedule};
use crate::params::TripParams;

/// Workflow phase of a planning session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Gathering destination, dates, and preferences
    #[default]
    Clarifying,

    /// Candidate places are being collected
    Researching,

    /// An itinerary is being assembled
    Building,

    /// An itinerary has been delivered
    Complete,
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clarifying" => Ok(Phase::Clarifying),
            "researching" => Ok(Phase::Researching),
            "building" => Ok(Phase::Building),
            "complete" => Ok(Phase::Complete),
            _ => Err(format!("Invalid phase: {s}")),
        }
    }
}

impl Phase {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Clarifying => "clarifying",
            Phase::Researching => "researching",
            Phase::Building => "building",
            Phase::Complete => "complete",
        }
    }
}

/// Complete state of one planning session.
///
/// An explicit value threaded through planner calls and persisted via a
/// [`StateRepository`](crate::store::StateRepository); the engine itself
/// never touches global state. Collaborators write into the candidate pools
/// and parameters, the planner writes the itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TripState {
    /// Trip parameters from the preferences collaborator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<TripParams>,

    /// Candidate hotels from the discovery collaborator
    #[serde(default)]
    pub hotels: Vec<Place>,

    /// Candidate restaurants, used for meal insertion
    #[serde(default)]
    pub restaurants: Vec<Place>,

    /// Candidate attractions, the main packing pool
    #[serde(default)]
    pub attractions: Vec<Place>,

    /// The most recently built itinerary, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Schedule>,

    /// Current workflow phase
    #[serde(default)]
    pub phase: Phase,

    /// Session-level notes and defects
    #[serde(default)]
    pub warnings: Vec<String>,

    /// Last modification time (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}
