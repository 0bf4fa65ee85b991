//! Trip pace enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Qualitative trip density controlling how many activities fit in a day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    /// At most 4 activities per day
    Relaxed,

    /// At most 5 activities per day
    #[default]
    Moderate,

    /// At most 6 activities per day
    Packed,
}

impl FromStr for Pace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relaxed" => Ok(Pace::Relaxed),
            "moderate" => Ok(Pace::Moderate),
            "packed" => Ok(Pace::Packed),
            _ => Err(format!("Invalid pace: {s}")),
        }
    }
}

impl Pace {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Relaxed => "relaxed",
            Pace::Moderate => "moderate",
            Pace::Packed => "packed",
        }
    }

    /// Maximum number of activities scheduled into a single day.
    pub fn max_activities_per_day(&self) -> usize {
        match self {
            Pace::Relaxed => 4,
            Pace::Moderate => 5,
            Pace::Packed => 6,
        }
    }
}
