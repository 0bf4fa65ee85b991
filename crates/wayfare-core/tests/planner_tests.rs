//! End-to-end tests exercising the planner through its public API.

use wayfare_core::models::{Phase, PlaceCategory};
use wayfare_core::params::{CandidateUpdate, TripParams};
use wayfare_core::{Pace, PlannerBuilder};

mod common;
use common::{create_test_planner, place};

fn tokyo_candidates() -> CandidateUpdate {
    CandidateUpdate {
        attractions: vec![
            place("a1", "Senso-ji", PlaceCategory::Attraction, 35.7148, 139.7967),
            place("a2", "Tokyo Tower", PlaceCategory::Attraction, 35.6586, 139.7454),
            place("a3", "Skytree", PlaceCategory::Attraction, 35.7101, 139.8107),
            place("a4", "Meiji Shrine", PlaceCategory::Attraction, 35.6764, 139.6993),
        ],
        restaurants: vec![
            place("r1", "Ramen-ya", PlaceCategory::Food, 35.7000, 139.7700),
            place("r2", "Izakaya", PlaceCategory::Food, 35.6650, 139.7500),
        ],
        ..CandidateUpdate::default()
    }
}

#[tokio::test]
async fn test_complete_trip_workflow() {
    let (_temp_dir, planner) = create_test_planner().await;

    planner
        .set_candidates("tokyo", &tokyo_candidates())
        .await
        .expect("Failed to set candidates");
    planner
        .set_trip_params(
            "tokyo",
            &TripParams {
                pace: Pace::Relaxed,
                ..TripParams::for_days(2)
            },
        )
        .await
        .expect("Failed to set params");

    let schedule = planner
        .plan_itinerary("tokyo")
        .await
        .expect("Failed to plan itinerary");

    assert_eq!(schedule.days.len(), 2);
    assert_eq!(schedule.total_places, 4);
    assert_eq!(schedule.scheduled_count, 4);

    // Each non-meal activity corresponds to one input attraction.
    let scheduled: usize = schedule
        .days
        .iter()
        .flat_map(|d| &d.activities)
        .filter(|a| a.meal.is_none())
        .count();
    assert_eq!(scheduled, 4);

    let state = planner
        .get_session("tokyo")
        .await
        .expect("Failed to load session")
        .expect("Session should exist");
    assert_eq!(state.phase, Phase::Complete);
    assert_eq!(state.itinerary, Some(schedule.clone()));
    assert_eq!(
        planner.get_itinerary("tokyo").await.expect("get"),
        Some(schedule)
    );
}

#[tokio::test]
async fn test_state_survives_planner_restart() {
    let (temp_dir, planner) = create_test_planner().await;

    planner
        .set_candidates("persisted", &tokyo_candidates())
        .await
        .expect("Failed to set candidates");
    drop(planner);

    let reopened = PlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .await
        .expect("Failed to reopen planner");
    let state = reopened
        .get_session("persisted")
        .await
        .expect("Failed to load session")
        .expect("Session should survive restart");
    assert_eq!(state.attractions.len(), 4);
    assert_eq!(state.phase, Phase::Researching);
}

#[tokio::test]
async fn test_replan_overwrites_itinerary() {
    let (_temp_dir, planner) = create_test_planner().await;

    planner
        .set_candidates("trip", &tokyo_candidates())
        .await
        .unwrap();
    planner
        .set_trip_params("trip", &TripParams::for_days(1))
        .await
        .unwrap();
    let first = planner.plan_itinerary("trip").await.expect("first plan");
    assert_eq!(first.days.len(), 1);

    planner
        .set_trip_params("trip", &TripParams::for_days(3))
        .await
        .unwrap();
    let second = planner.plan_itinerary("trip").await.expect("second plan");
    assert_eq!(second.days.len(), 3);
    assert_eq!(
        planner.get_itinerary("trip").await.unwrap(),
        Some(second)
    );
}

#[tokio::test]
async fn test_sessions_do_not_interfere() {
    let (_temp_dir, planner) = create_test_planner().await;

    planner
        .set_candidates("a", &tokyo_candidates())
        .await
        .unwrap();
    planner
        .set_trip_params("b", &TripParams::for_days(1))
        .await
        .unwrap();

    let a = planner.get_session("a").await.unwrap().unwrap();
    let b = planner.get_session("b").await.unwrap().unwrap();
    assert_eq!(a.phase, Phase::Researching);
    assert!(a.params.is_none());
    assert_eq!(b.phase, Phase::Building);
    assert!(b.attractions.is_empty());
}

#[tokio::test]
async fn test_schedule_renders_as_markdown() {
    let (_temp_dir, planner) = create_test_planner().await;

    planner
        .set_candidates("render", &tokyo_candidates())
        .await
        .unwrap();
    planner
        .set_trip_params("render", &TripParams::for_days(2))
        .await
        .unwrap();
    let schedule = planner.plan_itinerary("render").await.expect("plan");

    let rendered = schedule.to_string();
    assert!(rendered.starts_with("# Itinerary\n"));
    assert!(rendered.contains("- Scheduled: 4 of 4 places\n"));
    assert!(rendered.contains("## Day 1\n"));
    assert!(rendered.contains("**Senso-ji**"));
}
