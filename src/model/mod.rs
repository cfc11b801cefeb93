//! Pure Application Model - Elm Architecture
//!
//! This module defines the state for the application, organized into
//! focused sub-models:
//!
//! - **InteractionModel**: theme flag, pointer position, viewport
//! - **NavigationModel**: current section, first-reveal times
//! - **Typewriter**: hero phrase rotation
//! - **ReactorModel**: arc reactor activation flag
//! - **ContactModel**: form fields and submission status
//! - **UiModel**: focus, toast, quit flag
//!
//! Key principles:
//! - No services: all I/O (terminal, relay) lives in the runtime
//! - Time is passed in: every timer-driven method takes `now`
//! - Children never reach into each other; the root wires them together

pub mod contact;
pub mod hero;
pub mod interaction;
pub mod navigation;
pub mod reactor;
pub mod timer;
pub mod types;
pub mod ui;

pub use contact::{ContactForm, ContactModel};
pub use hero::{Typewriter, TypewriterPhase};
pub use interaction::{InteractionModel, PointerPosition, Viewport};
pub use navigation::NavigationModel;
pub use reactor::ReactorModel;
pub use timer::Timer;
pub use types::*;
pub use ui::UiModel;

use anyhow::Result;
use std::time::{Duration, Instant};

use crate::logic::focus;
use crate::relay::ContactPayload;
use crate::Section;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Theme, pointer and viewport (shared read-only with sections)
    pub interaction: InteractionModel,

    /// Current section and reveal bookkeeping
    pub navigation: NavigationModel,

    /// Hero typewriter
    pub hero: Typewriter,

    /// Arc reactor activation
    pub reactor: ReactorModel,

    /// Contact form
    pub contact: ContactModel,

    /// Focus, toast, quit flag
    pub ui: UiModel,

    /// Animation clock origin
    pub started_at: Instant,
}

impl Model {
    /// Create the model; nothing animates until [`Model::mount`]
    pub fn new(phrases: Vec<String>, viewport: Viewport, now: Instant) -> Result<Self> {
        Ok(Self {
            interaction: InteractionModel::new(viewport),
            navigation: NavigationModel::new(now),
            hero: Typewriter::new(phrases)?,
            reactor: ReactorModel::new(),
            contact: ContactModel::new(),
            ui: UiModel::new(),
            started_at: now,
        })
    }

    /// Start the typewriter and pointer tracking
    pub fn mount(&mut self, now: Instant) {
        self.hero.mount(now);
        self.interaction.start_tracking();
    }

    /// Cancel every pending timer and stop pointer tracking
    pub fn teardown(&mut self) {
        self.hero.unmount();
        self.reactor.teardown();
        self.contact.teardown();
        self.ui.teardown();
        self.interaction.stop_tracking();
    }

    /// Advance every independent timer. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let hero = self.hero.tick(now);
        let reactor = self.reactor.tick(now);
        let contact = self.contact.tick(now);
        let ui = self.ui.tick(now);
        hero || reactor || contact || ui
    }

    /// Earliest pending deadline across all timers
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.hero.next_deadline(),
            self.reactor.next_deadline(),
            self.contact.next_deadline(),
            self.ui.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Time since start, for continuous animations
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    pub fn current_section(&self) -> Section {
        self.navigation.current()
    }

    pub fn toggle_theme(&mut self) {
        self.interaction.toggle_theme();
    }

    /// Scroll to a section, dropping focus that no longer exists there
    pub fn scroll_to(&mut self, section: Section, now: Instant) -> bool {
        let changed = self.navigation.scroll_to(section, now);
        self.drop_stale_focus();
        changed
    }

    pub fn scroll_next(&mut self, now: Instant) -> bool {
        let changed = self.navigation.scroll_next(now);
        self.drop_stale_focus();
        changed
    }

    pub fn scroll_prev(&mut self, now: Instant) -> bool {
        let changed = self.navigation.scroll_prev(now);
        self.drop_stale_focus();
        changed
    }

    /// Follow a same-page anchor (`home`, `#contact`, ...).
    /// Returns whether the visible section changed; unknown anchors are an error.
    pub fn jump_to_anchor(&mut self, anchor: &str, now: Instant) -> Result<bool> {
        let Some(changed) = self.navigation.jump_to_anchor(anchor, now) else {
            anyhow::bail!("Unknown section: {}", anchor);
        };
        self.drop_stale_focus();
        Ok(changed)
    }

    fn drop_stale_focus(&mut self) {
        if let Some(current) = self.ui.focus {
            if !focus::is_focusable(current, self.current_section()) {
                self.ui.focus = None;
            }
        }
    }

    pub fn cycle_focus(&mut self, reverse: bool) {
        let section = self.current_section();
        self.ui.focus = Some(focus::cycle_focus(self.ui.focus, section, reverse));
    }

    /// Validate the form; on success returns the submission to dispatch.
    /// Missing fields are reported through a toast.
    pub fn submit_contact(&mut self, now: Instant) -> Option<(u64, ContactPayload)> {
        match self.contact.submit() {
            Ok(submission) => Some(submission),
            Err(missing) => {
                let first = missing.0.first().map(|field| field.placeholder()).unwrap_or("Field");
                self.ui.show_toast(
                    format!("Error: {}", crate::logic::formatting::required_hint(first)),
                    now,
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(now: Instant) -> Model {
        Model::new(
            vec!["abc".to_string()],
            Viewport { width: 80, height: 24 },
            now,
        )
        .unwrap()
    }

    #[test]
    fn test_model_creation() {
        let now = Instant::now();
        let model = model(now);
        assert_eq!(model.current_section(), Section::Home);
        assert!(!model.hero.is_mounted());
        assert!(!model.interaction.is_tracking());
        assert!(model.next_deadline().is_none());
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = model(Instant::now());
        let _cloned = model.clone();
    }

    #[test]
    fn test_mount_arms_typewriter() {
        let now = Instant::now();
        let mut model = model(now);
        model.mount(now);
        assert!(model.interaction.is_tracking());
        assert_eq!(model.next_deadline(), Some(now + Duration::from_millis(100)));
    }

    #[test]
    fn test_teardown_clears_all_deadlines() {
        let now = Instant::now();
        let mut model = model(now);
        model.mount(now);
        model.reactor.activate(now);
        model.ui.show_toast("x".to_string(), now);
        model.teardown();
        assert!(model.next_deadline().is_none());
        assert!(!model.tick(now + Duration::from_secs(60)));
    }

    #[test]
    fn test_scroll_drops_stale_focus() {
        let now = Instant::now();
        let mut model = model(now);
        model.scroll_to(Section::Reactor, now);
        model.cycle_focus(true);
        assert_eq!(model.ui.focus, Some(Focus::Reactor));

        model.scroll_to(Section::About, now);
        assert_eq!(model.ui.focus, None);
    }

    #[test]
    fn test_scroll_next_drops_stale_focus() {
        let now = Instant::now();
        let mut model = model(now);
        model.scroll_to(Section::Reactor, now);
        model.cycle_focus(true);
        assert_eq!(model.ui.focus, Some(Focus::Reactor));

        assert!(model.scroll_next(now));
        assert_eq!(model.current_section(), Section::About);
        assert_eq!(model.ui.focus, None);
    }

    #[test]
    fn test_scroll_stops_at_edges() {
        let now = Instant::now();
        let mut model = model(now);
        assert!(!model.scroll_prev(now));
        assert_eq!(model.current_section(), Section::Home);
        for _ in 0..10 {
            model.scroll_next(now);
        }
        assert!(!model.scroll_next(now));
        assert_eq!(model.current_section(), Section::Contact);
    }

    #[test]
    fn test_anchor_for_current_section_is_accepted() {
        let now = Instant::now();
        let mut model = model(now);
        assert!(!model.jump_to_anchor("home", now).unwrap());
        assert!(!model.jump_to_anchor("#home", now).unwrap());
        assert_eq!(model.current_section(), Section::Home);
    }

    #[test]
    fn test_unknown_anchor_is_an_error() {
        let now = Instant::now();
        let mut model = model(now);
        assert!(model.jump_to_anchor("#contact", now).unwrap());
        let err = model.jump_to_anchor("#nowhere", now).unwrap_err();
        assert!(err.to_string().contains("#nowhere"));
        assert_eq!(model.current_section(), Section::Contact);
    }

    #[test]
    fn test_theme_toggle_survives_scroll() {
        let now = Instant::now();
        let mut model = model(now);
        model.cycle_focus(false);
        assert_eq!(model.ui.focus, Some(Focus::ThemeToggle));
        model.scroll_to(Section::Skills, now);
        assert_eq!(model.ui.focus, Some(Focus::ThemeToggle));
    }

    #[test]
    fn test_submit_with_empty_form_shows_toast() {
        let now = Instant::now();
        let mut model = model(now);
        assert!(model.submit_contact(now).is_none());
        assert_eq!(
            model.ui.toast_message.as_deref(),
            Some("Error: Name is required")
        );
    }
}
