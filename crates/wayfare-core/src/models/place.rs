//! Candidate place model.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of place categories the engine understands.
///
/// The category drives the default visit duration and the fallback travel
/// estimate when coordinates are missing (same category reads as "same
/// neighborhood").
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PlaceCategory {
    /// Museums, landmarks, and other sights
    Attraction,

    /// Restaurants, cafes, and bars
    Food,

    /// Markets and shopping districts
    Shopping,

    /// Parks, beaches, and outdoor spaces
    Nature,

    /// Stations, airports, and transfers
    Transport,

    /// Accommodation
    Hotel,
}

impl FromStr for PlaceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "attraction" => Ok(PlaceCategory::Attraction),
            "food" => Ok(PlaceCategory::Food),
            "shopping" => Ok(PlaceCategory::Shopping),
            "nature" => Ok(PlaceCategory::Nature),
            "transport" => Ok(PlaceCategory::Transport),
            "hotel" => Ok(PlaceCategory::Hotel),
            _ => Err(format!("Invalid place category: {s}")),
        }
    }
}

impl PlaceCategory {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceCategory::Attraction => "attraction",
            PlaceCategory::Food => "food",
            PlaceCategory::Shopping => "shopping",
            PlaceCategory::Nature => "nature",
            PlaceCategory::Transport => "transport",
            PlaceCategory::Hotel => "hotel",
        }
    }

    /// Default visit duration in minutes for places that do not carry an
    /// explicit one.
    pub fn default_duration_minutes(&self) -> u32 {
        match self {
            PlaceCategory::Attraction => 90,
            PlaceCategory::Food => 75,
            PlaceCategory::Shopping => 90,
            PlaceCategory::Nature => 60,
            PlaceCategory::Transport => 30,
            PlaceCategory::Hotel => 0,
        }
    }
}

/// A candidate stop supplied by the place-discovery collaborator.
///
/// Places are read-only inputs to the engine; scheduling never mutates them.
/// Opening and closing times stay as raw "HH:MM" strings at this layer
/// because they arrive from an external catalog; the packer parses them
/// fail-fast before any timing decision is made.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Place {
    /// Unique identifier from the catalog
    pub id: String,

    /// Human-readable place name
    pub name: String,

    /// Place category
    pub category: PlaceCategory,

    /// Estimated visit duration in minutes; defaulted from the category
    /// when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,

    /// Opening time as "HH:MM", if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_time: Option<String>,

    /// Closing time as "HH:MM", if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_time: Option<String>,

    /// Latitude in degrees, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// Longitude in degrees, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl Place {
    /// Coordinates as a `(lat, lng)` pair, present only when both sides are.
    pub fn coords(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}
