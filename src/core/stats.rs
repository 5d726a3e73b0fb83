//! Pure summaries over the full session collection. Everything recomputes
//! from scratch on each call; nothing here caches or mutates.

use crate::models::board::Board;
use crate::models::mood::Mood;
use crate::models::session::SurfSession;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Session count per known board, in catalog order. Boards never surfed get
/// an explicit 0. Sessions whose board is no longer in the catalog are
/// skipped rather than grouped under a phantom entry.
pub fn board_usage(sessions: &[SurfSession], catalog: &[Board]) -> Vec<(String, usize)> {
    catalog
        .iter()
        .map(|b| {
            let count = sessions.iter().filter(|s| s.board == b.name).count();
            (b.name.clone(), count)
        })
        .collect()
}

/// The spot with the most sessions, with its count. Ties break to the
/// lexicographically first spot name, so the answer never depends on
/// insertion order. None when there are no sessions at all.
pub fn most_surfed_spot(sessions: &[SurfSession]) -> Option<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for s in sessions {
        *counts.entry(s.spot.as_str()).or_insert(0) += 1;
    }

    // Name-ascending walk plus strictly-greater updates keeps the first
    // name among equal counts.
    let mut best: Option<(&str, usize)> = None;
    for (spot, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((spot, count)),
        }
    }
    best.map(|(spot, count)| (spot.to_string(), count))
}

/// Peak mood per distinct surfed date, in ascending date order. Multiple
/// sessions on one date collapse to the best mood of that day.
pub fn mood_trend(sessions: &[SurfSession]) -> Vec<(NaiveDate, Mood)> {
    let mut peaks: BTreeMap<NaiveDate, Mood> = BTreeMap::new();
    for s in sessions {
        peaks
            .entry(s.date)
            .and_modify(|m| {
                if s.mood > *m {
                    *m = s.mood;
                }
            })
            .or_insert(s.mood);
    }
    peaks.into_iter().collect()
}
