use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed 1-5 rating of session quality. The scale is ordered, carries a
/// label, a glyph and an accent color, and is not user-editable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Mood {
    Tired,  // 1
    Subpar, // 2
    Meh,    // 3
    Good,   // 4
    Stoked, // 5
}

impl Mood {
    /// Every level, in ascending order.
    pub const SCALE: [Mood; 5] = [
        Mood::Tired,
        Mood::Subpar,
        Mood::Meh,
        Mood::Good,
        Mood::Stoked,
    ];

    /// Numeric value as it is persisted (1-5).
    pub fn value(&self) -> u8 {
        match self {
            Mood::Tired => 1,
            Mood::Subpar => 2,
            Mood::Meh => 3,
            Mood::Good => 4,
            Mood::Stoked => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Tired => "Tired",
            Mood::Subpar => "Subpar",
            Mood::Meh => "Meh",
            Mood::Good => "Good",
            Mood::Stoked => "Stoked",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Mood::Tired => "😩",
            Mood::Subpar => "😕",
            Mood::Meh => "😐",
            Mood::Good => "🙂",
            Mood::Stoked => "😄",
        }
    }

    /// Accent color of the original palette, kept as scale metadata.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Mood::Tired => "#90caf9",
            Mood::Subpar => "#b3e5fc",
            Mood::Meh => "#ffecb3",
            Mood::Good => "#4dd0e1",
            Mood::Stoked => "#fff59d",
        }
    }

    /// Convert a persisted value (1-5) back to a level.
    pub fn from_value(v: u8) -> Option<Self> {
        Mood::SCALE.into_iter().find(|m| m.value() == v)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<Mood> for u8 {
    fn from(mood: Mood) -> u8 {
        mood.value()
    }
}

impl TryFrom<u8> for Mood {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Mood::from_value(v).ok_or_else(|| format!("mood must be between 1 and 5, got {}", v))
    }
}
