//! Session operations for the Planner.

use jiff::Timestamp;
use log::{debug, info};
use tokio::task;

use super::Planner;
use crate::{
    error::{Result, ScheduleError},
    models::{Phase, Schedule, TripState},
    params::{CandidateUpdate, TripParams},
    scheduler,
    store::StateRepository,
};

use std::sync::Arc;

fn join_error(e: task::JoinError) -> ScheduleError {
    ScheduleError::Configuration {
        message: format!("Task join error: {e}"),
    }
}

fn load_or_default(store: &dyn StateRepository, session_id: &str) -> Result<TripState> {
    Ok(store.get(session_id)?.unwrap_or_default())
}

impl Planner {
    /// Records researched place candidates for a session.
    ///
    /// Non-empty lists in `update` replace the corresponding stored lists;
    /// empty lists leave the stored ones untouched. A session still in the
    /// clarifying phase advances to researching.
    pub async fn set_candidates(&self, session_id: &str, update: &CandidateUpdate) -> Result<()> {
        let store = Arc::clone(&self.store);
        let session_id = session_id.to_string();
        let update = update.clone();

        task::spawn_blocking(move || {
            let mut state = load_or_default(store.as_ref(), &session_id)?;
            if !update.hotels.is_empty() {
                state.hotels = update.hotels;
            }
            if !update.restaurants.is_empty() {
                state.restaurants = update.restaurants;
            }
            if !update.attractions.is_empty() {
                state.attractions = update.attractions;
            }
            if state.phase == Phase::Clarifying {
                state.phase = Phase::Researching;
            }
            state.updated_at = Some(Timestamp::now());
            debug!(
                "session {session_id}: {} hotels, {} restaurants, {} attractions",
                state.hotels.len(),
                state.restaurants.len(),
                state.attractions.len()
            );
            store.put(&session_id, &state)
        })
        .await
        .map_err(join_error)?
    }

    /// Validates and stores trip parameters for a session.
    ///
    /// The session advances to the building phase. Invalid parameters are
    /// rejected without touching stored state.
    pub async fn set_trip_params(&self, session_id: &str, params: &TripParams) -> Result<()> {
        params.validate()?;

        let store = Arc::clone(&self.store);
        let session_id = session_id.to_string();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut state = load_or_default(store.as_ref(), &session_id)?;
            state.params = Some(params);
            state.phase = Phase::Building;
            state.updated_at = Some(Timestamp::now());
            store.put(&session_id, &state)
        })
        .await
        .map_err(join_error)?
    }

    /// Builds an itinerary from the session's stored candidates and
    /// parameters, persists it, and returns it.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidInput` if no trip parameters have been
    /// stored for the session.
    pub async fn plan_itinerary(&self, session_id: &str) -> Result<Schedule> {
        let store = Arc::clone(&self.store);
        let session_id = session_id.to_string();

        task::spawn_blocking(move || {
            let mut state = load_or_default(store.as_ref(), &session_id)?;
            let params = state.params.clone().ok_or_else(|| {
                ScheduleError::invalid_input("params")
                    .with_reason("no trip parameters stored for this session")
            })?;

            let schedule =
                scheduler::build_itinerary(&state.attractions, &state.restaurants, &params)?;
            info!(
                "session {session_id}: scheduled {}/{} places over {} days",
                schedule.scheduled_count,
                schedule.total_places,
                schedule.days.len()
            );

            state.warnings.extend(schedule.warnings.iter().cloned());
            state.itinerary = Some(schedule.clone());
            state.phase = Phase::Complete;
            state.updated_at = Some(Timestamp::now());
            store.put(&session_id, &state)?;
            Ok(schedule)
        })
        .await
        .map_err(join_error)?
    }

    /// Returns the stored itinerary for a session, if one has been built.
    pub async fn get_itinerary(&self, session_id: &str) -> Result<Option<Schedule>> {
        let store = Arc::clone(&self.store);
        let session_id = session_id.to_string();

        task::spawn_blocking(move || {
            Ok(store
                .get(&session_id)?
                .and_then(|state| state.itinerary))
        })
        .await
        .map_err(join_error)?
    }

    /// Returns the full stored state for a session, if any.
    pub async fn get_session(&self, session_id: &str) -> Result<Option<TripState>> {
        let store = Arc::clone(&self.store);
        let session_id = session_id.to_string();

        task::spawn_blocking(move || store.get(&session_id))
            .await
            .map_err(join_error)?
    }

    /// Deletes all stored state for a session.
    pub async fn clear_session(&self, session_id: &str) -> Result<()> {
        let store = Arc::clone(&self.store);
        let session_id = session_id.to_string();

        task::spawn_blocking(move || store.delete(&session_id))
            .await
            .map_err(join_error)?
    }
}
