//! Tests for the planner module.

use super::*;
use crate::models::{Phase, Place, PlaceCategory};
use crate::params::{CandidateUpdate, TripParams};
use crate::store::MemoryStore;
use std::sync::Arc;
use tempfile::TempDir;

/// Helper function to create a test planner backed by SQLite
async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

fn place(id: &str, name: &str, category: PlaceCategory, lat: f64, lng: f64) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        category,
        duration_minutes: None,
        opening_time: None,
        closing_time: None,
        lat: Some(lat),
        lng: Some(lng),
    }
}

#[tokio::test]
async fn test_set_candidates_advances_phase() {
    let (_temp_dir, planner) = create_test_planner().await;

    planner
        .set_candidates(
            "s1",
            &CandidateUpdate {
                attractions: vec![place(
                    "a1",
                    "Museum",
                    PlaceCategory::Attraction,
                    48.86,
                    2.34,
                )],
                ..CandidateUpdate::default()
            },
        )
        .await
        .expect("Failed to set candidates");

    let state = planner
        .get_session("s1")
        .await
        .expect("Failed to load session")
        .expect("Session should exist");
    assert_eq!(state.phase, Phase::Researching);
    assert_eq!(state.attractions.len(), 1);
    assert!(state.updated_at.is_some());
}

#[tokio::test]
async fn test_empty_update_keeps_stored_candidates() {
    let (_temp_dir, planner) = create_test_planner().await;

    planner
        .set_candidates(
            "s1",
            &CandidateUpdate {
                restaurants: vec![place("r1", "Bistro", PlaceCategory::Food, 48.85, 2.35)],
                ..CandidateUpdate::default()
            },
        )
        .await
        .unwrap();
    planner
        .set_candidates("s1", &CandidateUpdate::default())
        .await
        .unwrap();

    let state = planner.get_session("s1").await.unwrap().unwrap();
    assert_eq!(state.restaurants.len(), 1);
}

#[tokio::test]
async fn test_set_trip_params_rejects_invalid() {
    let (_temp_dir, planner) = create_test_planner().await;

    let result = planner
        .set_trip_params("s1", &TripParams::for_days(0))
        .await;
    assert!(result.is_err());
    assert!(planner.get_session("s1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_plan_itinerary_requires_params() {
    let (_temp_dir, planner) = create_test_planner().await;

    let result = planner.plan_itinerary("s1").await;
    assert!(matches!(
        result,
        Err(crate::error::ScheduleError::InvalidInput { .. })
    ));
}

#[tokio::test]
async fn test_plan_itinerary_end_to_end() {
    let (_temp_dir, planner) = create_test_planner().await;

    planner
        .set_candidates(
            "trip",
            &CandidateUpdate {
                attractions: vec![
                    place("a1", "Louvre", PlaceCategory::Attraction, 48.8606, 2.3376),
                    place("a2", "Orsay", PlaceCategory::Attraction, 48.8600, 2.3266),
                ],
                restaurants: vec![place(
                    "r1",
                    "Cafe de Flore",
                    PlaceCategory::Food,
                    48.8540,
                    2.3326,
                )],
                ..CandidateUpdate::default()
            },
        )
        .await
        .unwrap();
    planner
        .set_trip_params("trip", &TripParams::for_days(1))
        .await
        .unwrap();

    let schedule = planner
        .plan_itinerary("trip")
        .await
        .expect("Failed to plan itinerary");
    assert_eq!(schedule.total_places, 2);
    assert_eq!(schedule.scheduled_count, 2);
    assert_eq!(schedule.days.len(), 1);

    let state = planner.get_session("trip").await.unwrap().unwrap();
    assert_eq!(state.phase, Phase::Complete);
    assert_eq!(state.itinerary, Some(schedule.clone()));
    assert_eq!(planner.get_itinerary("trip").await.unwrap(), Some(schedule));
}

#[tokio::test]
async fn test_clear_session() {
    let (_temp_dir, planner) = create_test_planner().await;

    planner
        .set_trip_params("s1", &TripParams::for_days(2))
        .await
        .unwrap();
    planner.clear_session("s1").await.unwrap();
    assert!(planner.get_session("s1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_builder_accepts_injected_store() {
    let planner = PlannerBuilder::new()
        .with_store(Arc::new(MemoryStore::new()))
        .build()
        .await
        .expect("Failed to create planner");

    planner
        .set_trip_params("s1", &TripParams::for_days(1))
        .await
        .unwrap();
    let state = planner.get_session("s1").await.unwrap().unwrap();
    assert_eq!(state.phase, Phase::Building);
}
