//! Distance and travel-time estimation primitives.

use crate::models::Place;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Assumed average urban speed: 0.5 km per minute (30 km/h).
const URBAN_KM_PER_MINUTE: f64 = 0.5;

/// Travel estimate bounds in minutes when derived from distance.
const MIN_TRAVEL_MINUTES: u32 = 10;
const MAX_TRAVEL_MINUTES: u32 = 60;

/// Fallback estimates when coordinates are missing on either side.
const SAME_CATEGORY_MINUTES: u32 = 15;
const DIFFERENT_CATEGORY_MINUTES: u32 = 25;

/// Haversine great-circle distance in kilometers between two `(lat, lng)`
/// pairs in degrees.
pub fn distance_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lng1) = a;
    let (lat2, lng2) = b;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Estimate travel time in minutes between two places.
///
/// With coordinates on both sides the estimate is distance at average urban
/// speed, truncated to whole minutes and clamped to [10, 60]. Without
/// coordinates it falls back to a category heuristic: places of the same
/// category are assumed to sit in the same area (15 minutes), otherwise a
/// moderate 25 minutes. Infallible; always returns a usable value.
pub fn estimate_travel_minutes(from: &Place, to: &Place) -> u32 {
    if let (Some(a), Some(b)) = (from.coords(), to.coords()) {
        let minutes = (distance_km(a, b) / URBAN_KM_PER_MINUTE) as u32;
        return minutes.clamp(MIN_TRAVEL_MINUTES, MAX_TRAVEL_MINUTES);
    }

    if from.category == to.category {
        SAME_CATEGORY_MINUTES
    } else {
        DIFFERENT_CATEGORY_MINUTES
    }
}
