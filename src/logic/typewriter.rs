//! Typewriter text logic
//!
//! Pure helpers used by the hero typewriter. Counting is done in Unicode
//! scalar values so a reveal step never splits a character.

use std::time::Duration;

/// Interval between revealed characters
pub const TYPE_TICK: Duration = Duration::from_millis(100);

/// Pause with the full phrase visible before advancing
pub const PHRASE_PAUSE: Duration = Duration::from_millis(2000);

/// Number of reveal steps for a phrase
pub fn phrase_len(phrase: &str) -> usize {
    phrase.chars().count()
}

/// First `count` characters of `phrase` (whole phrase if `count` exceeds it)
///
/// # Examples
/// ```
/// use foliotui::logic::typewriter::reveal_prefix;
///
/// assert_eq!(reveal_prefix("Innovator", 0), "");
/// assert_eq!(reveal_prefix("Innovator", 3), "Inn");
/// assert_eq!(reveal_prefix("héllo", 2), "hé");
/// assert_eq!(reveal_prefix("abc", 10), "abc");
/// ```
pub fn reveal_prefix(phrase: &str, count: usize) -> &str {
    match phrase.char_indices().nth(count) {
        Some((byte_idx, _)) => &phrase[..byte_idx],
        None => phrase,
    }
}

/// Index of the phrase after `index`, wrapping to the first
pub fn next_index(index: usize, phrase_count: usize) -> usize {
    if phrase_count == 0 {
        0
    } else {
        (index + 1) % phrase_count
    }
}

/// Time from entering a phrase until the next phrase is entered.
///
/// One tick per character, one more tick to notice the phrase is complete,
/// then the pause.
pub fn cycle_duration(phrase: &str) -> Duration {
    TYPE_TICK * (phrase_len(phrase) as u32 + 1) + PHRASE_PAUSE
}
