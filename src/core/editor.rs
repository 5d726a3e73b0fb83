use crate::errors::ValidationErrors;
use crate::models::board::{Board, find_board};
use crate::models::conditions::{Swell, Tide, Wind};
use crate::models::mood::Mood;
use crate::models::session::{NOTES_MAX_LEN, SurfSession, WAVE_COUNT_MAX};
use crate::utils::date;

/// Raw candidate input for one session, exactly as it arrives from the
/// command line. Nothing here is trusted until `validate` has run.
#[derive(Debug, Clone, Default)]
pub struct SessionDraft {
    pub id: Option<i64>,
    pub date: Option<String>,
    pub spot: Option<String>,
    pub board: Option<String>,
    pub wave_count: Option<i64>,
    pub mood: Option<i64>,
    pub swell: Option<String>,
    pub wind: Option<String>,
    pub tide: Option<String>,
    pub notes: Option<String>,
}

fn allowed(values: &[&str]) -> String {
    values.join(", ")
}

impl SessionDraft {
    /// Prefill from an existing record, so an edit replaces the record
    /// wholesale while the caller overrides individual fields.
    pub fn from_session(session: &SurfSession) -> Self {
        Self {
            id: Some(session.id),
            date: Some(session.date_str()),
            spot: Some(session.spot.clone()),
            board: Some(session.board.clone()),
            wave_count: Some(session.wave_count as i64),
            mood: Some(session.mood.value() as i64),
            swell: Some(session.swell.as_str().to_string()),
            wind: Some(session.wind.as_str().to_string()),
            tide: Some(session.tide.as_str().to_string()),
            notes: Some(session.notes.clone()),
        }
    }

    /// Check every rule and collect every failing field, never stopping at
    /// the first. On success the returned record is normalized: spot and
    /// notes trimmed, enums resolved, wave count narrowed.
    ///
    /// The board field alone has a default (the catalog's first entry);
    /// an out-of-range value is always rejected, never clamped.
    pub fn validate(&self, catalog: &[Board]) -> Result<SurfSession, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let parsed_date = match self.date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => match date::parse_date(raw) {
                Some(d) => Some(d),
                None => {
                    errors.push("date", format!("not a valid date (expected YYYY-MM-DD): '{raw}'"));
                    None
                }
            },
            _ => {
                errors.push("date", "a session date is required");
                None
            }
        };

        let spot = match self.spot.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(raw.to_string()),
            _ => {
                errors.push("spot", "a spot name is required");
                None
            }
        };

        let board = match self.board.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => {
                if find_board(catalog, name).is_some() {
                    Some(name.to_string())
                } else {
                    errors.push("board", format!("'{name}' is not in the board catalog"));
                    None
                }
            }
            _ => match catalog.first() {
                Some(first) => Some(first.name.clone()),
                None => {
                    errors.push("board", "the board catalog is empty");
                    None
                }
            },
        };

        let wave_count = match self.wave_count {
            Some(n) if (0..=WAVE_COUNT_MAX as i64).contains(&n) => Some(n as u32),
            Some(n) => {
                errors.push(
                    "waveCount",
                    format!("must be between 0 and {WAVE_COUNT_MAX}, got {n}"),
                );
                None
            }
            None => {
                errors.push("waveCount", "a wave count is required");
                None
            }
        };

        let mood = match self.mood {
            Some(n) => match u8::try_from(n).ok().and_then(Mood::from_value) {
                Some(m) => Some(m),
                None => {
                    errors.push("mood", format!("must be on the 1-5 scale, got {n}"));
                    None
                }
            },
            None => {
                errors.push("mood", "a mood rating is required");
                None
            }
        };

        let swell = match self.swell.as_deref() {
            Some(raw) => match Swell::from_input(raw) {
                Some(v) => Some(v),
                None => {
                    let valid = allowed(&Swell::ALL.map(|v| v.as_str()));
                    errors.push("swell", format!("'{raw}' is not one of: {valid}"));
                    None
                }
            },
            None => {
                errors.push("swell", "a swell size is required");
                None
            }
        };

        let wind = match self.wind.as_deref() {
            Some(raw) => match Wind::from_input(raw) {
                Some(v) => Some(v),
                None => {
                    let valid = allowed(&Wind::ALL.map(|v| v.as_str()));
                    errors.push("wind", format!("'{raw}' is not one of: {valid}"));
                    None
                }
            },
            None => {
                errors.push("wind", "a wind direction is required");
                None
            }
        };

        let tide = match self.tide.as_deref() {
            Some(raw) => match Tide::from_input(raw) {
                Some(v) => Some(v),
                None => {
                    let valid = allowed(&Tide::ALL.map(|v| v.as_str()));
                    errors.push("tide", format!("'{raw}' is not one of: {valid}"));
                    None
                }
            },
            None => {
                errors.push("tide", "a tide state is required");
                None
            }
        };

        // Notes are genuinely optional; only the length is constrained.
        let notes = self.notes.as_deref().map(str::trim).unwrap_or_default();
        let notes = if notes.chars().count() > NOTES_MAX_LEN {
            errors.push(
                "notes",
                format!(
                    "must be at most {NOTES_MAX_LEN} characters, got {}",
                    notes.chars().count()
                ),
            );
            None
        } else {
            Some(notes.to_string())
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        // Every None above pushed an error, so this arm is unreachable.
        let (
            Some(date),
            Some(spot),
            Some(board),
            Some(wave_count),
            Some(mood),
            Some(swell),
            Some(wind),
            Some(tide),
            Some(notes),
        ) = (
            parsed_date,
            spot,
            board,
            wave_count,
            mood,
            swell,
            wind,
            tide,
            notes,
        )
        else {
            return Err(errors);
        };

        Ok(SurfSession {
            id: self.id.unwrap_or(0),
            date,
            spot,
            board,
            wave_count,
            mood,
            swell,
            wind,
            tide,
            notes,
        })
    }
}
