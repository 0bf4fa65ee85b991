use tempfile::TempDir;
use wayfare_core::models::{Place, PlaceCategory};
use wayfare_core::PlannerBuilder;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, wayfare_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Helper function to build a place with coordinates
pub fn place(id: &str, name: &str, category: PlaceCategory, lat: f64, lng: f64) -> Place {
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
