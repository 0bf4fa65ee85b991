//! Read-only schedule validation.

use jiff::civil::Time;
use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Kind of defect found in a schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// An activity starts before the previous one ends
    Overlap,
}

/// A single defect, located by day and activity name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Defect kind
    #[serde(rename = "type")]
    pub kind: IssueKind,

    /// 1-based day the defect occurs on
    pub day_number: u32,

    /// Name of the offending activity's place
    pub activity: String,
}

/// Outcome of validating a schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    /// True when no issues were found
    pub valid: bool,

    /// All defects, in walk order
    pub issues: Vec<ValidationIssue>,
}

/// Walk each day chronologically and flag overlapping activities.
///
/// Pure and read-only: the schedule is never mutated or auto-corrected.
/// Findings come back as structured data so the caller decides whether an
/// overlap is fatal. This function itself never fails.
pub fn validate_schedule(schedule: &Schedule) -> ValidationReport {
    let mut issues = Vec::new();

    for day in &schedule.days {
        let mut previous_end: Option<Time> = None;
        for activity in &day.activities {
            if let Some(end) = previous_end {
                if activity.start_time < end {
                    issues.push(ValidationIssue {
                        kind: IssueKind::Overlap,
                        day_number: day.day_number,
                        activity: activity.place.name.clone(),
                    });
                }
            }
            previous_end = Some(activity.end_time);
        }
    }

    ValidationReport {
        valid: issues.is_empty(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;
    use crate::models::{Day, Place, PlaceCategory, ScheduledActivity};

    fn activity(name: &str, start: Time, end: Time) -> ScheduledActivity {
        ScheduledActivity {
            start_time: start,
            end_time: end,
            duration_minutes: 60,
            travel_from_previous_minutes: 0,
            place: Place {
                id: name.to_string(),
                name: name.to_string(),
                category: PlaceCategory::Attraction,
                duration_minutes: None,
                opening_time: None,
                closing_time: None,
                lat: None,
                lng: None,
            },
            meal: None,
        }
    }

    fn schedule_of(days: Vec<Day>) -> Schedule {
        Schedule {
            days,
            scheduled_count: 0,
            total_places: 0,
            warnings: vec![],
        }
    }

    #[test]
    fn test_clean_schedule_is_valid() {
        let schedule = schedule_of(vec![Day {
            day_number: 1,
            activities: vec![
                activity("a", time(9, 0, 0, 0), time(10, 0, 0, 0)),
                activity("b", time(10, 0, 0, 0), time(11, 0, 0, 0)),
            ],
        }]);
        let report = validate_schedule(&schedule);
        assert!(report.valid);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_overlap_is_flagged_with_location() {
        let schedule = schedule_of(vec![
            Day {
                day_number: 1,
                activities: vec![activity("a", time(9, 0, 0, 0), time(10, 0, 0, 0))],
            },
            Day {
                day_number: 2,
                activities: vec![
                    activity("b", time(9, 0, 0, 0), time(11, 0, 0, 0)),
                    activity("c", time(10, 30, 0, 0), time(12, 0, 0, 0)),
                ],
            },
        ]);
        let report = validate_schedule(&schedule);
        assert!(!report.valid);
        assert_eq!(
            report.issues,
            vec![ValidationIssue {
                kind: IssueKind::Overlap,
                day_number: 2,
                activity: "c".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_schedule_is_valid() {
        let report = validate_schedule(&schedule_of(vec![]));
        assert!(report.valid);
    }

    #[test]
    fn test_issue_serialization_shape() {
        let issue = ValidationIssue {
            kind: IssueKind::Overlap,
            day_number: 3,
            activity: "harbor cruise".to_string(),
        };
        let json = serde_json::to_value(&issue).expect("serialize issue");
        assert_eq!(json["type"], "overlap");
        assert_eq!(json["day_number"], 3);
    }
}
