//! Time utilities: parsing and formatting HH:MM reminder times.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Validate a reminder string, normalizing it to zero-padded HH:MM.
pub fn normalize_hhmm(input: &str) -> AppResult<String> {
    let t = parse_time(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))?;
    Ok(format_time(t))
}
