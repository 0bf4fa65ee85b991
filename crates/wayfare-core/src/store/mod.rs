//! Session state persistence.
//!
//! The engine itself is stateless; per-session [`TripState`] lives behind
//! the [`StateRepository`] trait so the storage backend is an injected
//! collaborator. Two implementations ship with the crate: an in-memory
//! store for tests and ephemeral deployments, and a SQLite store for
//! durable sessions.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::models::TripState;

/// Keyed storage for per-session trip state.
///
/// Implementations must be safe to share across threads; the planner calls
/// them from blocking tasks. `get` of an unknown session is `Ok(None)`,
/// never an error, and `delete` of an unknown session is a no-op.
pub trait StateRepository: Send + Sync {
    /// Load the state for a session, if any.
    fn get(&self, session_id: &str) -> Result<Option<TripState>>;

    /// Store the state for a session, replacing any previous value.
    fn put(&self, session_id: &str, state: &TripState) -> Result<()>;

    /// Remove a session entirely.
    fn delete(&self, session_id: &str) -> Result<()>;
}
