//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::Timelike;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a wall-clock time as `HH:MM:SS` for the HUD bar
///
/// # Examples
/// ```
/// use chrono::NaiveTime;
/// use foliotui::logic::formatting::format_clock;
///
/// let t = NaiveTime::from_hms_opt(9, 5, 3).unwrap();
/// assert_eq!(format_clock(&t), "09:05:03");
/// ```
pub fn format_clock<T: Timelike>(time: &T) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Truncate `text` to at most `max_width` terminal columns, marking the cut with `…`
pub fn fit_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Hint shown under a required field that is still empty
pub fn required_hint(label: &str) -> String {
    format!("{} is required", label)
}
