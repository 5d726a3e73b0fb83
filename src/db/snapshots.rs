//! Keyed snapshot access.
//!
//! Three independent snapshots live in the `kv` table:
//! - `surf_sessions`: the session collection, a JSON array of SurfSession
//! - `surf_boards`: the board catalog, a JSON array of Board
//! - `surf_reminder`: a single raw `HH:MM` string (not JSON-wrapped)
//!
//! A reader must tolerate an absent or blank key (the first-run state) by
//! falling back to its default; that is why every loader returns an Option.
//! There is no schema version field inside the snapshots.

use crate::errors::AppResult;
use crate::models::board::Board;
use crate::models::session::SurfSession;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub const KEY_SESSIONS: &str = "surf_sessions";
pub const KEY_BOARDS: &str = "surf_boards";
pub const KEY_REMINDER: &str = "surf_reminder";

/// Read the raw snapshot under `key`. None when the key has never been
/// written or holds only blank text.
pub fn read_raw(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
    let value: Option<String> = stmt.query_row([key], |row| row.get(0)).optional()?;

    match value {
        Some(v) if !v.trim().is_empty() => Ok(Some(v)),
        _ => Ok(None),
    }
}

/// Overwrite the snapshot under `key` with the full new value.
/// Whole-value replace-on-write; there is no delta persistence.
pub fn write_raw(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
    )?;
    stmt.execute(params![key, value, Local::now().to_rfc3339()])?;
    Ok(())
}

pub fn load_sessions(conn: &Connection) -> AppResult<Option<Vec<SurfSession>>> {
    match read_raw(conn, KEY_SESSIONS)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

pub fn save_sessions(conn: &Connection, sessions: &[SurfSession]) -> AppResult<()> {
    let json = serde_json::to_string(sessions)?;
    write_raw(conn, KEY_SESSIONS, &json)
}

pub fn load_boards(conn: &Connection) -> AppResult<Option<Vec<Board>>> {
    match read_raw(conn, KEY_BOARDS)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

pub fn save_boards(conn: &Connection, boards: &[Board]) -> AppResult<()> {
    let json = serde_json::to_string(boards)?;
    write_raw(conn, KEY_BOARDS, &json)
}

/// The reminder is stored as the raw `HH:MM` text, exactly as entered.
pub fn load_reminder(conn: &Connection) -> AppResult<Option<String>> {
    read_raw(conn, KEY_REMINDER)
}

pub fn save_reminder(conn: &Connection, hhmm: &str) -> AppResult<()> {
    write_raw(conn, KEY_REMINDER, hhmm)
}
