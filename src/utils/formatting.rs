//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Shorten a string to at most `max_width` terminal columns, appending an
/// ellipsis when something was cut. Width-aware because glyphs like 🏄‍♂️
/// occupy two columns.
pub fn ellipsize(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthStr::width(ch.to_string().as_str());
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Join a glyph and a label, or the label alone when glyphs are disabled.
pub fn glyph_label(icon: &str, label: &str, show_glyphs: bool) -> String {
    if show_glyphs && !icon.is_empty() {
        format!("{} {}", icon, label)
    } else {
        label.to_string()
    }
}
