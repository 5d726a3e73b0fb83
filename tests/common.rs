#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

use surfsync::models::conditions::{Swell, Tide, Wind};
use surfsync::models::mood::Mood;
use surfsync::models::session::SurfSession;

pub fn surf() -> Command {
    cargo_bin_cmd!("surfsync")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_surfsync.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize an empty logbook (no demo sessions), the baseline for tests
/// that build their own dataset.
pub fn init_bare_db(db_path: &str) {
    surf()
        .args(["--db", db_path, "--test", "init", "--bare"])
        .assert()
        .success();
}

/// Initialize a logbook seeded with the demo sessions.
pub fn init_demo_db(db_path: &str) {
    surf()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Read the raw sessions snapshot straight from the kv table.
pub fn read_sessions_json(db_path: &str) -> serde_json::Value {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let raw: String = conn
        .query_row(
            "SELECT value FROM kv WHERE key = 'surf_sessions'",
            [],
            |row| row.get(0),
        )
        .expect("sessions snapshot");
    serde_json::from_str(&raw).expect("snapshot is valid JSON")
}

/// Session ids currently persisted, in stored order.
pub fn session_ids(db_path: &str) -> Vec<i64> {
    read_sessions_json(db_path)
        .as_array()
        .expect("snapshot is an array")
        .iter()
        .map(|s| s["id"].as_i64().expect("numeric id"))
        .collect()
}

/// In-memory fixture for library-level tests.
pub fn make_session(id: i64, date: &str, spot: &str, board: &str, waves: u32, mood: u8) -> SurfSession {
    SurfSession {
        id,
        date: chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("fixture date"),
        spot: spot.to_string(),
        board: board.to_string(),
        wave_count: waves,
        mood: Mood::from_value(mood).expect("fixture mood"),
        swell: Swell::OneToTwo,
        wind: Wind::Offshore,
        tide: Tide::Mid,
        notes: String::new(),
    }
}
