use crate::models::mood::Mood;
use crate::models::session::SurfSession;

/// A transient view constraint over the session collection. Absent
/// dimensions impose nothing; present ones match by exact equality and
/// combine with AND. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFilter {
    pub spot: Option<String>,
    pub board: Option<String>,
    pub mood: Option<Mood>,
}

impl SessionFilter {
    pub fn is_empty(&self) -> bool {
        self.spot.is_none() && self.board.is_none() && self.mood.is_none()
    }

    pub fn matches(&self, session: &SurfSession) -> bool {
        self.spot.as_deref().is_none_or(|v| session.spot == v)
            && self.board.as_deref().is_none_or(|v| session.board == v)
            && self.mood.is_none_or(|m| session.mood == m)
    }

    /// Ordered subsequence of `sessions` matching every present dimension.
    /// Relative order is preserved, never re-sorted.
    pub fn apply(&self, sessions: &[SurfSession]) -> Vec<SurfSession> {
        sessions
            .iter()
            .filter(|s| self.matches(s))
            .cloned()
            .collect()
    }
}
