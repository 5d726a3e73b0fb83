use super::conditions::{Swell, Tide, Wind};
use super::mood::Mood;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upper bound on waves caught in one session. Values above are rejected,
/// never clamped.
pub const WAVE_COUNT_MAX: u32 = 200;

/// Upper bound on the notes field, in characters.
pub const NOTES_MAX_LEN: usize = 160;

/// Spot suggestions offered before any session has been logged.
/// Never a validation constraint.
pub const DEFAULT_SPOTS: [&str; 5] = [
    "Pipeline",
    "Trestles",
    "Mavericks",
    "Ocean Beach",
    "Snapper Rocks",
];

/// One logged surf outing with its conditions and metadata.
/// The sole persisted entity; JSON field names follow the snapshot layout
/// (`waveCount` and friends).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfSession {
    pub id: i64,
    pub date: NaiveDate,
    pub spot: String,
    pub board: String,
    pub wave_count: u32,
    pub mood: Mood,
    pub swell: Swell,
    pub wind: Wind,
    pub tide: Tide,
    #[serde(default)]
    pub notes: String,
}

impl SurfSession {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
