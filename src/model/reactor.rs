//! Reactor Model
//!
//! Transient "activated" flag for the arc reactor widget. One pending
//! timeout at most: activating again restarts it.

use std::time::Instant;

use super::timer::Timer;
use crate::logic::reactor::ACTIVATION_DURATION;

#[derive(Clone, Debug, Default)]
pub struct ReactorModel {
    activated: bool,
    timer: Timer,
}

impl ReactorModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag and (re)start the single clear-timeout
    pub fn activate(&mut self, now: Instant) {
        self.activated = true;
        self.timer.arm(now, ACTIVATION_DURATION);
    }

    /// Clear the flag once the timeout passes. Returns whether it changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.fire(now).is_some() {
            self.activated = false;
            return true;
        }
        false
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    pub fn teardown(&mut self) {
        self.timer.cancel();
        self.activated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_activation_sets_flag_immediately() {
        let start = Instant::now();
        let mut reactor = ReactorModel::new();
        assert!(!reactor.is_activated());
        reactor.activate(start);
        assert!(reactor.is_activated());
    }

    #[test]
    fn test_clears_after_exactly_500ms() {
        let start = Instant::now();
        let mut reactor = ReactorModel::new();
        reactor.activate(start);

        assert!(!reactor.tick(start + Duration::from_millis(499)));
        assert!(reactor.is_activated());
        assert!(reactor.tick(start + Duration::from_millis(500)));
        assert!(!reactor.is_activated());
    }

    #[test]
    fn test_teardown_clears_pending() {
        let start = Instant::now();
        let mut reactor = ReactorModel::new();
        reactor.activate(start);
        reactor.teardown();
        assert!(!reactor.is_activated());
        assert!(reactor.next_deadline().is_none());
    }
}
