//! Cancellable one-shot timer handle
//!
//! Timers are deadlines owned by the sub-model they drive. The event loop
//! polls them through the owner's `tick(now)`; nothing fires on its own, so
//! cancelling (or dropping the owner) is all it takes to guarantee that no
//! further update happens.

use std::time::{Duration, Instant};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm (or re-arm) to fire `delay` after `now`. Replaces any pending deadline.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Arm at an absolute deadline
    pub fn arm_at(&mut self, deadline: Instant) {
        self.deadline = Some(deadline);
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Disarm and return the deadline if it has passed at `now`
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                Some(deadline)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_at_deadline() {
        let start = Instant::now();
        let mut timer = Timer::new();
        timer.arm(start, Duration::from_millis(500));

        assert_eq!(timer.fire(start + Duration::from_millis(499)), None);
        assert_eq!(
            timer.fire(start + Duration::from_millis(500)),
            Some(start + Duration::from_millis(500))
        );
        assert!(!timer.is_armed());
        assert_eq!(timer.fire(start + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let start = Instant::now();
        let mut timer = Timer::new();
        timer.arm(start, Duration::from_millis(500));
        timer.arm(start + Duration::from_millis(300), Duration::from_millis(500));

        assert_eq!(timer.fire(start + Duration::from_millis(500)), None);
        assert!(timer.fire(start + Duration::from_millis(800)).is_some());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let start = Instant::now();
        let mut timer = Timer::new();
        timer.arm(start, Duration::from_millis(100));
        timer.cancel();
        assert_eq!(timer.fire(start + Duration::from_secs(1)), None);
        assert_eq!(timer.deadline(), None);
    }
}
