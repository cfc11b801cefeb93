//! Scroll-triggered reveal animation
//!
//! A section fades/slides in the first time it becomes visible. Items in a
//! grid follow with a per-index delay.

use std::time::Duration;

/// Section fade/slide-in duration
pub const SECTION_REVEAL: Duration = Duration::from_millis(800);

/// Duration of one grid item's scale-in
pub const ITEM_REVEAL: Duration = Duration::from_millis(500);

/// Stagger between consecutive skills
pub const SKILL_STAGGER: Duration = Duration::from_millis(100);

/// Stagger between consecutive project cards
pub const PROJECT_STAGGER: Duration = Duration::from_millis(200);

/// Eased progress `0.0..=1.0` of an animation of `duration` after `elapsed`
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use foliotui::logic::reveal::progress;
///
/// assert_eq!(progress(Duration::ZERO, Duration::from_millis(800)), 0.0);
/// assert_eq!(progress(Duration::from_secs(5), Duration::from_millis(800)), 1.0);
/// ```
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let t = (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0);
    // ease-out cubic
    1.0 - (1.0 - t).powi(3)
}

/// Progress of grid item `index` given the time since its section revealed
pub fn item_progress(elapsed: Duration, index: usize, stagger: Duration) -> f64 {
    let delay = stagger * index as u32;
    progress(elapsed.saturating_sub(delay), ITEM_REVEAL)
}

/// Rows to shift content down while sliding in (`max_rows` at start, 0 at end)
pub fn slide_rows(progress: f64, max_rows: u16) -> u16 {
    ((1.0 - progress.clamp(0.0, 1.0)) * max_rows as f64).round() as u16
}

/// Whether an animation with this progress is still running
pub fn is_animating(progress: f64) -> bool {
    progress < 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_monotonic() {
        let mut last = 0.0;
        for ms in (0..=800).step_by(50) {
            let p = progress(Duration::from_millis(ms), SECTION_REVEAL);
            assert!(p >= last);
            last = p;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_item_progress_waits_for_stagger() {
        let elapsed = Duration::from_millis(150);
        assert!(item_progress(elapsed, 0, SKILL_STAGGER) > 0.0);
        assert_eq!(item_progress(elapsed, 2, SKILL_STAGGER), 0.0);
    }

    #[test]
    fn test_slide_rows() {
        assert_eq!(slide_rows(0.0, 3), 3);
        assert_eq!(slide_rows(1.0, 3), 0);
        assert_eq!(slide_rows(2.0, 3), 0);
    }

    #[test]
    fn test_zero_duration_is_complete() {
        assert_eq!(progress(Duration::ZERO, Duration::ZERO), 1.0);
        assert!(!is_animating(1.0));
    }
}
