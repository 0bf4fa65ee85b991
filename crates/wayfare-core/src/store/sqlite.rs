//! SQLite-backed state repository.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{DatabaseResultExt, Result, ScheduleError};
use crate::models::TripState;

use super::StateRepository;

const CREATE_SESSIONS_SQL: &str = "CREATE TABLE IF NOT EXISTS sessions (
    session_id TEXT PRIMARY KEY,
    state TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";
const SELECT_STATE_SQL: &str = "SELECT state FROM sessions WHERE session_id = ?1";
const UPSERT_STATE_SQL: &str = "INSERT INTO sessions (session_id, state, updated_at)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(session_id) DO UPDATE SET state = ?2, updated_at = ?3";
const DELETE_STATE_SQL: &str = "DELETE FROM sessions WHERE session_id = ?1";
const SELECT_AGES_SQL: &str = "SELECT session_id, updated_at FROM sessions";

/// Durable session store keeping one JSON-encoded [`TripState`] per row.
///
/// Opens a fresh connection per operation; session traffic is light and
/// this keeps the store trivially shareable across blocking tasks.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Creates the store and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let store = Self {
            db_path: path.as_ref().to_path_buf(),
        };
        store.open()?;
        Ok(store)
    }

    fn open(&self) -> Result<Connection> {
        let connection =
            Connection::open(&self.db_path).db_context("Failed to open session database")?;
        connection
            .execute(CREATE_SESSIONS_SQL, [])
            .db_context("Failed to initialize sessions schema")?;
        Ok(connection)
    }

    /// Deletes sessions not touched for more than `days` days.
    ///
    /// Returns the number of sessions removed. Stored timestamps that fail
    /// to parse count as stale; they are unreadable either way.
    pub fn prune_older_than(&self, days: i64) -> Result<usize> {
        let cutoff = Timestamp::now() - jiff::Span::new().hours(days * 24);
        let connection = self.open()?;

        let mut stmt = connection
            .prepare(SELECT_AGES_SQL)
            .db_context("Failed to prepare prune query")?;
        let sessions: Vec<(String, String)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .db_context("Failed to scan sessions")?
            .collect::<std::result::Result<_, _>>()
            .db_context("Failed to read session rows")?;
        drop(stmt);

        let mut pruned = 0usize;
        for (session_id, updated_at) in sessions {
            let stale = updated_at
                .parse::<Timestamp>()
                .map_or(true, |ts| ts < cutoff);
            if stale {
                connection
                    .execute(DELETE_STATE_SQL, params![session_id])
                    .db_context("Failed to prune session")?;
                pruned += 1;
            }
        }

        if pruned > 0 {
            debug!("pruned {pruned} stale sessions");
        }
        Ok(pruned)
    }
}

impl StateRepository for SqliteStore {
    fn get(&self, session_id: &str) -> Result<Option<TripState>> {
        let connection = self.open()?;
        let raw: Option<String> = connection
            .query_row(SELECT_STATE_SQL, params![session_id], |row| row.get(0))
            .optional()
            .db_context("Failed to load session state")?;

        match raw {
            Some(json) => {
                let state = serde_json::from_str(&json).map_err(ScheduleError::from)?;
                Ok(Some(state))
            }
            None => Ok(None),
        }
    }

    fn put(&self, session_id: &str, state: &TripState) -> Result<()> {
        let json = serde_json::to_string(state).map_err(ScheduleError::from)?;
        let now = Timestamp::now().to_string();
        let connection = self.open()?;
        connection
            .execute(UPSERT_STATE_SQL, params![session_id, json, now])
            .db_context("Failed to store session state")?;
        Ok(())
    }

    fn delete(&self, session_id: &str) -> Result<()> {
        let connection = self.open()?;
        connection
            .execute(DELETE_STATE_SQL, params![session_id])
            .db_context("Failed to delete session state")?;
        Ok(())
    }
}
