//! Schema bootstrap for the single `movies` table.
//!
//! # Invariants
//! - `initialize` is idempotent; it never drops or rewrites existing rows.
//! - `id` uses `AUTOINCREMENT`, so ids are never reused after deletion.

use super::DbResult;
use log::debug;
use rusqlite::Connection;

pub const MOVIES_TABLE: &str = "movies";

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    year INTEGER NOT NULL,
    genre TEXT NOT NULL
);";

/// Enables WAL journaling and creates the `movies` table if absent.
///
/// Returns the journal mode reported by SQLite. In-memory databases
/// report `memory` because they cannot use a write-ahead log.
pub fn initialize(conn: &Connection) -> DbResult<String> {
    let journal_mode: String =
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    conn.execute_batch(SCHEMA_SQL)?;
    debug!(
        "event=schema_init module=db status=ok table={} journal_mode={}",
        MOVIES_TABLE, journal_mode
    );
    Ok(journal_mode)
}
