//! Keyboard focus ring
//!
//! Pure functions deciding which control receives Tab / Shift-Tab.

use crate::model::types::{ContactField, Focus};
use crate::Section;

/// Focusable controls while `section` is on screen (header toggle first)
pub fn focus_order(section: Section) -> Vec<Focus> {
    let mut order = vec![Focus::ThemeToggle];
    match section {
        Section::Home => order.push(Focus::CallToAction),
        Section::Reactor => order.push(Focus::Reactor),
        Section::Contact => order.extend([
            Focus::Field(ContactField::Name),
            Focus::Field(ContactField::Email),
            Focus::Field(ContactField::Message),
            Focus::Submit,
        ]),
        Section::About | Section::Skills | Section::Projects => {}
    }
    order
}

/// Next (or previous, with `reverse`) control in the ring.
///
/// A focus that is not part of the current section's ring restarts at the
/// first (or last) control.
pub fn cycle_focus(current: Option<Focus>, section: Section, reverse: bool) -> Focus {
    let order = focus_order(section);
    let len = order.len();
    let position = current.and_then(|focus| order.iter().position(|f| *f == focus));

    let idx = match (position, reverse) {
        (Some(pos), false) => (pos + 1) % len,
        (Some(pos), true) => (pos + len - 1) % len,
        (None, false) => 0,
        (None, true) => len - 1,
    };
    order[idx]
}

/// Whether `focus` is still valid after navigating to `section`
pub fn is_focusable(focus: Focus, section: Section) -> bool {
    focus_order(section).contains(&focus)
}
