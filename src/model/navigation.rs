//! Navigation Model
//!
//! Which section is on screen, and when each section was first revealed.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::logic::{navigation, reveal};
use crate::Section;

#[derive(Clone, Debug)]
pub struct NavigationModel {
    current: Section,
    /// First time each section became visible (reveal happens once)
    revealed_at: HashMap<Section, Instant>,
}

impl NavigationModel {
    /// Start on the hero, which is revealed immediately
    pub fn new(now: Instant) -> Self {
        let mut revealed_at = HashMap::new();
        revealed_at.insert(Section::Home, now);
        Self {
            current: Section::Home,
            revealed_at,
        }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    /// Scroll to `section`. Returns whether the visible section changed.
    pub fn scroll_to(&mut self, section: Section, now: Instant) -> bool {
        self.revealed_at.entry(section).or_insert(now);
        if self.current == section {
            return false;
        }
        self.current = section;
        true
    }

    pub fn scroll_next(&mut self, now: Instant) -> bool {
        self.scroll_to(navigation::next_section(self.current), now)
    }

    pub fn scroll_prev(&mut self, now: Instant) -> bool {
        self.scroll_to(navigation::prev_section(self.current), now)
    }

    /// Follow a same-page anchor. `None` for an unknown anchor, otherwise
    /// whether the visible section changed.
    pub fn jump_to_anchor(&mut self, anchor: &str, now: Instant) -> Option<bool> {
        let section = navigation::section_for_anchor(anchor)?;
        Some(self.scroll_to(section, now))
    }

    pub fn revealed_at(&self, section: Section) -> Option<Instant> {
        self.revealed_at.get(&section).copied()
    }

    /// Time since `section` was first revealed (zero if never)
    pub fn time_since_reveal(&self, section: Section, now: Instant) -> Duration {
        self.revealed_at(section)
            .map(|at| now.saturating_duration_since(at))
            .unwrap_or(Duration::ZERO)
    }

    /// Section fade/slide-in progress
    pub fn reveal_progress(&self, section: Section, now: Instant) -> f64 {
        if self.revealed_at(section).is_none() {
            return 0.0;
        }
        reveal::progress(self.time_since_reveal(section, now), reveal::SECTION_REVEAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let now = Instant::now();
        let nav = NavigationModel::new(now);
        assert_eq!(nav.current(), Section::Home);
        assert_eq!(nav.revealed_at(Section::Home), Some(now));
        assert_eq!(nav.revealed_at(Section::About), None);
    }

    #[test]
    fn test_reveal_is_recorded_once() {
        let start = Instant::now();
        let mut nav = NavigationModel::new(start);
        let first = start + Duration::from_secs(1);
        nav.scroll_to(Section::Skills, first);
        nav.scroll_to(Section::Home, first + Duration::from_secs(1));
        nav.scroll_to(Section::Skills, first + Duration::from_secs(2));
        assert_eq!(nav.revealed_at(Section::Skills), Some(first));
    }

    #[test]
    fn test_anchor_jump() {
        let now = Instant::now();
        let mut nav = NavigationModel::new(now);
        assert_eq!(nav.jump_to_anchor("#contact", now), Some(true));
        assert_eq!(nav.current(), Section::Contact);
        assert_eq!(nav.jump_to_anchor("#nowhere", now), None);
        assert_eq!(nav.current(), Section::Contact);
    }

    #[test]
    fn test_anchor_for_current_section_resolves() {
        let now = Instant::now();
        let mut nav = NavigationModel::new(now);
        assert_eq!(nav.jump_to_anchor("home", now), Some(false));
        assert_eq!(nav.jump_to_anchor("#home", now), Some(false));
        assert_eq!(nav.current(), Section::Home);
    }

    #[test]
    fn test_scroll_stops_at_edges() {
        let now = Instant::now();
        let mut nav = NavigationModel::new(now);
        assert!(!nav.scroll_prev(now));
        for _ in 0..10 {
            nav.scroll_next(now);
        }
        assert_eq!(nav.current(), Section::Contact);
        assert!(!nav.scroll_next(now));
    }

    #[test]
    fn test_unrevealed_progress_is_zero() {
        let now = Instant::now();
        let nav = NavigationModel::new(now);
        assert_eq!(nav.reveal_progress(Section::Projects, now), 0.0);
        assert_eq!(
            nav.reveal_progress(Section::Home, now + Duration::from_secs(2)),
            1.0
        );
    }
}
