//! Fixed enumerated condition sets: swell size, wind direction, tide state.
//! Persisted as their display strings, exactly as the snapshot layout
//! defines them.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Swell {
    Under1m,
    OneToTwo,
    TwoToThree,
    ThreePlus,
}

impl Swell {
    pub const ALL: [Swell; 4] = [
        Swell::Under1m,
        Swell::OneToTwo,
        Swell::TwoToThree,
        Swell::ThreePlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Swell::Under1m => "<1m",
            Swell::OneToTwo => "1-2m",
            Swell::TwoToThree => "2-3m",
            Swell::ThreePlus => "3m+",
        }
    }

    /// Exact match against the persisted string.
    pub fn from_db_str(s: &str) -> Option<Self> {
        Swell::ALL.into_iter().find(|v| v.as_str() == s)
    }

    /// Tolerant match for CLI input (case-insensitive, trimmed).
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Swell::ALL
            .into_iter()
            .find(|v| v.as_str().to_lowercase() == s)
    }
}

impl fmt::Display for Swell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Swell> for String {
    fn from(v: Swell) -> String {
        v.as_str().to_string()
    }
}

impl TryFrom<String> for Swell {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Swell::from_db_str(&s).ok_or_else(|| format!("unknown swell value: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Wind {
    Offshore,
    CrossOff,
    Onshore,
    None,
}

impl Wind {
    pub const ALL: [Wind; 4] = [Wind::Offshore, Wind::CrossOff, Wind::Onshore, Wind::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            Wind::Offshore => "Offshore",
            Wind::CrossOff => "Cross-Off",
            Wind::Onshore => "Onshore",
            Wind::None => "None",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        Wind::ALL.into_iter().find(|v| v.as_str() == s)
    }

    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Wind::ALL
            .into_iter()
            .find(|v| v.as_str().to_lowercase() == s)
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Wind> for String {
    fn from(v: Wind) -> String {
        v.as_str().to_string()
    }
}

impl TryFrom<String> for Wind {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Wind::from_db_str(&s).ok_or_else(|| format!("unknown wind value: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Tide {
    High,
    Mid,
    Low,
    Rising,
    Dropping,
}

impl Tide {
    pub const ALL: [Tide; 5] = [
        Tide::High,
        Tide::Mid,
        Tide::Low,
        Tide::Rising,
        Tide::Dropping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tide::High => "High",
            Tide::Mid => "Mid",
            Tide::Low => "Low",
            Tide::Rising => "Rising",
            Tide::Dropping => "Dropping",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        Tide::ALL.into_iter().find(|v| v.as_str() == s)
    }

    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Tide::ALL
            .into_iter()
            .find(|v| v.as_str().to_lowercase() == s)
    }
}

impl fmt::Display for Tide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Tide> for String {
    fn from(v: Tide) -> String {
        v.as_str().to_string()
    }
}

impl TryFrom<String> for Tide {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Tide::from_db_str(&s).ok_or_else(|| format!("unknown tide value: {}", s))
    }
}
