//! Navigation selection calculations
//!
//! Pure functions for moving between page sections.

use crate::Section;

/// Section after `current`, staying on the last one
pub fn next_section(current: Section) -> Section {
    let idx = (current.index() + 1).min(Section::ALL.len() - 1);
    Section::ALL[idx]
}

/// Section before `current`, staying on the first one
pub fn prev_section(current: Section) -> Section {
    Section::ALL[current.index().saturating_sub(1)]
}

/// Resolve a same-page anchor (`home`, `#about`, ...) to its section
///
/// # Examples
/// ```
/// use foliotui::Section;
/// use foliotui::logic::navigation::section_for_anchor;
///
/// assert_eq!(section_for_anchor("#contact"), Some(Section::Contact));
/// assert_eq!(section_for_anchor("skills"), Some(Section::Skills));
/// assert_eq!(section_for_anchor("reactor"), None);
/// ```
pub fn section_for_anchor(anchor: &str) -> Option<Section> {
    let id = anchor.trim_start_matches('#');
    Section::ALL
        .iter()
        .copied()
        .find(|section| section.anchor() == Some(id))
}

/// Sections listed in the navigation bar, in order
pub fn nav_sections() -> Vec<Section> {
    Section::ALL
        .iter()
        .copied()
        .filter(|section| section.anchor().is_some())
        .collect()
}

/// Section bound to a digit hotkey (1-based position in the navigation bar)
pub fn section_for_hotkey(digit: char) -> Option<Section> {
    let position = digit.to_digit(10)? as usize;
    if position == 0 {
        return None;
    }
    nav_sections().get(position - 1).copied()
}
