use crate::db::pool::DbPool;
use crate::db::snapshots;
use crate::errors::AppResult;
use crate::models::board::{Board, default_boards};
use crate::models::conditions::{Swell, Tide, Wind};
use crate::models::mood::Mood;
use crate::models::session::SurfSession;
use chrono::{NaiveDate, Utc};
use rusqlite::Connection;

/// Fallback reminder time when none has ever been stored.
pub const DEFAULT_REMINDER: &str = "18:00";

/// Owns the authoritative session collection for the lifetime of one
/// invocation. Every mutation rewrites the full snapshot before returning,
/// so the persisted collection and the in-memory one never diverge.
pub struct SessionStore {
    pool: DbPool,
    sessions: Vec<SurfSession>,
}

impl SessionStore {
    /// Load the collection from the snapshot. A missing or blank key is the
    /// first-run state: the given seed is adopted and persisted. A stored
    /// empty array is NOT first-run and stays empty.
    pub fn load(pool: DbPool, seed_if_empty: &[SurfSession]) -> AppResult<Self> {
        let (sessions, first_run) = match snapshots::load_sessions(&pool.conn)? {
            Some(sessions) => (sessions, false),
            None => (seed_if_empty.to_vec(), true),
        };
        let mut store = Self { pool, sessions };
        if first_run {
            // Persisting even an empty seed marks first-run as done.
            store.persist()?;
        }
        Ok(store)
    }

    pub fn all(&self) -> &[SurfSession] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&SurfSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Append a validated record under a fresh id and persist.
    /// Returns the assigned id.
    pub fn add(&mut self, mut record: SurfSession) -> AppResult<i64> {
        let id = self.next_id();
        record.id = id;
        self.sessions.push(record);
        self.persist()?;
        Ok(id)
    }

    /// Replace the record with the given id wholesale and persist.
    /// Returns false (and leaves the collection untouched) when the id is
    /// unknown.
    pub fn update(&mut self, id: i64, mut record: SurfSession) -> AppResult<bool> {
        let Some(slot) = self.sessions.iter_mut().find(|s| s.id == id) else {
            return Ok(false);
        };
        record.id = id;
        *slot = record;
        self.persist()?;
        Ok(true)
    }

    /// Delete the record with the given id and persist. Returns false when
    /// the id is unknown; the collection is only rewritten on a real delete.
    pub fn remove(&mut self, id: i64) -> AppResult<bool> {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != id);
        if self.sessions.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Connection of the underlying pool, for audit writes alongside a
    /// store mutation.
    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    // Millisecond timestamps keep ids roughly chronological; the max+1 floor
    // makes uniqueness hold even when the clock stands still or runs behind.
    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let max_existing = self.sessions.iter().map(|s| s.id).max().unwrap_or(0);
        now.max(max_existing + 1)
    }

    fn persist(&mut self) -> AppResult<()> {
        snapshots::save_sessions(&self.pool.conn, &self.sessions)
    }
}

/// Board catalog as stored, or the preset boards before the user has ever
/// touched the catalog.
pub fn board_catalog(conn: &Connection) -> AppResult<Vec<Board>> {
    Ok(snapshots::load_boards(conn)?.unwrap_or_else(default_boards))
}

/// Stored reminder time, or the preset.
pub fn reminder(conn: &Connection) -> AppResult<String> {
    Ok(snapshots::load_reminder(conn)?.unwrap_or_else(|| DEFAULT_REMINDER.to_string()))
}

/// Five illustrative sessions used to seed a fresh database so that list and
/// stats have something to show right away.
pub fn demo_sessions() -> Vec<SurfSession> {
    let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
    vec![
        SurfSession {
            id: 1,
            date: d(2024, 5, 18),
            spot: "Pipeline".to_string(),
            board: "Shortboard".to_string(),
            wave_count: 14,
            mood: Mood::Stoked,
            swell: Swell::TwoToThree,
            wind: Wind::Offshore,
            tide: Tide::Mid,
            notes: "Glassy barrels all morning.".to_string(),
        },
        SurfSession {
            id: 2,
            date: d(2024, 5, 21),
            spot: "Trestles".to_string(),
            board: "Longboard".to_string(),
            wave_count: 22,
            mood: Mood::Good,
            swell: Swell::OneToTwo,
            wind: Wind::CrossOff,
            tide: Tide::Rising,
            notes: "Long walls, easy paddle-outs.".to_string(),
        },
        SurfSession {
            id: 3,
            date: d(2024, 5, 29),
            spot: "Ocean Beach".to_string(),
            board: "Fish".to_string(),
            wave_count: 8,
            mood: Mood::Meh,
            swell: Swell::Under1m,
            wind: Wind::Onshore,
            tide: Tide::Low,
            notes: String::new(),
        },
        SurfSession {
            id: 4,
            date: d(2024, 6, 2),
            spot: "Pipeline".to_string(),
            board: "Shortboard".to_string(),
            wave_count: 17,
            mood: Mood::Stoked,
            swell: Swell::ThreePlus,
            wind: Wind::Offshore,
            tide: Tide::Dropping,
            notes: "Biggest day of the season so far.".to_string(),
        },
        SurfSession {
            id: 5,
            date: d(2024, 6, 9),
            spot: "Snapper Rocks".to_string(),
            board: "Funboard".to_string(),
            wave_count: 11,
            mood: Mood::Good,
            swell: Swell::OneToTwo,
            wind: Wind::None,
            tide: Tide::High,
            notes: String::new(),
        },
    ]
}
