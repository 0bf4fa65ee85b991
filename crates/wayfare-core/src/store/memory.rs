//! In-memory state repository.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Result, ScheduleError};
use crate::models::TripState;

use super::StateRepository;

/// Process-local session store backed by a mutex-guarded map.
///
/// Useful for tests and single-process deployments that do not need
/// sessions to survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: Mutex<HashMap<String, TripState>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, TripState>>> {
        self.sessions
            .lock()
            .map_err(|_| ScheduleError::Configuration {
                message: "Session store mutex poisoned".to_string(),
            })
    }
}

impl StateRepository for MemoryStore {
    fn get(&self, session_id: &str) -> Result<Option<TripState>> {
        Ok(self.lock()?.get(session_id).cloned())
    }

    fn put(&self, session_id: &str, state: &TripState) -> Result<()> {
        self.lock()?.insert(session_id.to_string(), state.clone());
        Ok(())
    }

    fn delete(&self, session_id: &str) -> Result<()> {
        self.lock()?.remove(session_id);
        Ok(())
    }
}
