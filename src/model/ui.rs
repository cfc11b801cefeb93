//! UI Model
//!
//! Focus, the transient toast and the quit flag.

use std::time::{Duration, Instant};

use super::timer::Timer;
use super::types::{ContactField, Focus};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_millis(1500);

#[derive(Clone, Debug, Default)]
pub struct UiModel {
    /// Control receiving Enter (and typed text for form fields)
    pub focus: Option<Focus>,

    /// Toast message
    pub toast_message: Option<String>,
    toast_timer: Timer,

    /// Whether the key legend is expanded
    pub show_help: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form field currently being edited, if any
    pub fn editing_field(&self) -> Option<ContactField> {
        match self.focus {
            Some(Focus::Field(field)) => Some(field),
            _ => None,
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String, now: Instant) {
        self.toast_message = Some(message);
        self.toast_timer.arm(now, TOAST_DURATION);
    }

    /// Dismiss the toast once its timer passes. Returns whether it changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.toast_timer.fire(now).is_some() {
            self.toast_message = None;
            return true;
        }
        false
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.toast_timer.deadline()
    }

    pub fn teardown(&mut self) {
        self.toast_timer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new();
        assert!(model.focus.is_none());
        assert!(!model.should_quit);
        assert!(model.toast_message.is_none());
    }

    #[test]
    fn test_editing_field() {
        let mut model = UiModel::new();
        model.focus = Some(Focus::Reactor);
        assert_eq!(model.editing_field(), None);
        model.focus = Some(Focus::Field(ContactField::Email));
        assert_eq!(model.editing_field(), Some(ContactField::Email));
    }

    #[test]
    fn test_toast_auto_dismisses() {
        let start = Instant::now();
        let mut model = UiModel::new();
        model.show_toast("Test".to_string(), start);
        assert!(!model.tick(start + Duration::from_millis(1000)));
        assert!(model.toast_message.is_some());
        assert!(model.tick(start + TOAST_DURATION));
        assert!(model.toast_message.is_none());
    }
}
