/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

use crate::models::mood::Mood;

/// Terminal approximation of the mood accent palette.
/// The hex values live on the scale itself; this is only how they render
/// in a 16-color terminal.
pub fn ansi_for_mood(mood: Mood) -> &'static str {
    match mood {
        Mood::Tired => BLUE,
        Mood::Subpar => CYAN,
        Mood::Meh => YELLOW,
        Mood::Good => GREEN,
        Mood::Stoked => MAGENTA,
    }
}
