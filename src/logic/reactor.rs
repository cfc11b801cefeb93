//! Arc reactor animation math
//!
//! Continuous, purely time-based values. Nothing here holds state; the
//! renderer feeds in the time since start.

use std::f64::consts::TAU;
use std::time::Duration;

/// How long the activated (clicked) visual state lasts
pub const ACTIVATION_DURATION: Duration = Duration::from_millis(500);

/// Scale applied to the widget while activated
pub const ACTIVATED_SCALE: f64 = 1.1;

/// Rotating ring: period and direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    /// Radius as a fraction of the outer radius
    pub radius: f64,
    pub period: Duration,
    pub reverse: bool,
}

/// Outer, middle and inner rings
pub const RINGS: [Ring; 3] = [
    Ring { radius: 1.0, period: Duration::from_secs(12), reverse: false },
    Ring { radius: 0.8, period: Duration::from_secs(8), reverse: true },
    Ring { radius: 0.6, period: Duration::from_secs(5), reverse: false },
];

/// Core radius as a fraction of the outer radius
pub const CORE_RADIUS: f64 = 0.4;

/// Spark orbit period
pub const SPARK_PERIOD: Duration = Duration::from_secs(15);

/// Core glow pulse periods (outer glow, inner core)
pub const CORE_PULSE: Duration = Duration::from_millis(2000);
pub const INNER_PULSE: Duration = Duration::from_millis(1500);

/// Angle in radians of a rotating element after `elapsed`
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use foliotui::logic::reactor::rotation;
///
/// assert_eq!(rotation(Duration::ZERO, Duration::from_secs(4), false), 0.0);
/// let quarter = rotation(Duration::from_secs(1), Duration::from_secs(4), false);
/// assert!((quarter - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
/// ```
pub fn rotation(elapsed: Duration, period: Duration, reverse: bool) -> f64 {
    if period.is_zero() {
        return 0.0;
    }
    let turns = (elapsed.as_secs_f64() / period.as_secs_f64()).fract();
    let angle = turns * TAU;
    if reverse {
        -angle
    } else {
        angle
    }
}

/// Pulse intensity in `0.0..=1.0`, starting at 0 and peaking mid-period
pub fn pulse(elapsed: Duration, period: Duration) -> f64 {
    if period.is_zero() {
        return 1.0;
    }
    let phase = (elapsed.as_secs_f64() / period.as_secs_f64()).fract();
    0.5 - 0.5 * (phase * TAU).cos()
}

/// Position of a marker on a ring of `radius` rotated by `angle`, starting at the top
pub fn orbit_point(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
    (center.0 + radius * angle.sin(), center.1 + radius * angle.cos())
}

/// Outer radius that fits a canvas of the given extents, honouring the activation scale
pub fn fit_radius(width: f64, height: f64, activated: bool) -> f64 {
    let base = width.min(height) / 2.0 / ACTIVATED_SCALE;
    if activated {
        base * ACTIVATED_SCALE
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps_every_period() {
        let period = Duration::from_secs(5);
        let a = rotation(Duration::from_millis(1250), period, false);
        let b = rotation(Duration::from_millis(6250), period, false);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_reverse_ring_turns_backwards() {
        let period = Duration::from_secs(8);
        let elapsed = Duration::from_secs(1);
        assert!((rotation(elapsed, period, true) + rotation(elapsed, period, false)).abs() < 1e-9);
    }

    #[test]
    fn test_pulse_bounds() {
        assert!(pulse(Duration::ZERO, CORE_PULSE).abs() < 1e-9);
        assert!((pulse(Duration::from_millis(1000), CORE_PULSE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_orbit_point_starts_at_top() {
        let (x, y) = orbit_point((0.0, 0.0), 10.0, 0.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_activated_radius_is_larger() {
        assert!(fit_radius(100.0, 80.0, true) > fit_radius(100.0, 80.0, false));
        assert!(fit_radius(100.0, 80.0, true) <= 40.0 + 1e-9);
    }
}
