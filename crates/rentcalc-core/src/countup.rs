//! Count-up animation engine.
//!
//! A pure state machine: time is injected by the caller, so the frame
//! scheduler (a ticker thread in the application shell) and the tests
//! both drive it the same way. Exactly one writer advances the state;
//! the render path only reads [`CountUp::displayed`].

use std::time::{Duration, Instant};

/// An in-flight interpolation from `start_value` to `end_value`.
#[derive(Debug, Clone, Copy)]
struct Animation {
    start_value: i64,
    end_value: i64,
    started_at: Instant,
    duration: Duration,
}

/// Smoothly interpolates a displayed integer toward a target value.
///
/// Retargeting mid-animation restarts interpolation from the currently
/// displayed value, so the figure never jumps.
#[derive(Debug, Clone)]
pub struct CountUp {
    displayed: i64,
    anim: Option<Animation>,
}

impl CountUp {
    /// Create an animator displaying 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            displayed: 0,
            anim: None,
        }
    }

    /// The currently displayed value.
    #[must_use]
    pub fn displayed(&self) -> i64 {
        self.displayed
    }

    /// Whether an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    /// Retarget the animator.
    ///
    /// Any in-flight animation is cancelled first. A non-finite or
    /// non-positive target snaps the display to 0; a zero duration
    /// snaps it to `round(target)`; otherwise an animation is armed
    /// from the current displayed value. No animation is armed when
    /// the display already equals the rounded target.
    #[allow(clippy::cast_possible_truncation)]
    pub fn set_target(&mut self, target: f64, duration: Duration, now: Instant) {
        self.anim = None;

        if !target.is_finite() || target <= 0.0 {
            self.displayed = 0;
            return;
        }

        let end_value = target.round() as i64;
        if duration.is_zero() {
            self.displayed = end_value;
            return;
        }

        let start_value = self.displayed;
        if start_value == end_value {
            return;
        }

        self.anim = Some(Animation {
            start_value,
            end_value,
            started_at: now,
            duration,
        });
    }

    /// Advance the animation to `now`.
    ///
    /// Returns `true` while further frames are wanted; once progress
    /// reaches 1 the animation is dropped and `false` is returned.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(anim) = self.anim else {
            return false;
        };

        let elapsed = now.saturating_duration_since(anim.started_at);
        let progress = (elapsed.as_secs_f64() / anim.duration.as_secs_f64()).clamp(0.0, 1.0);
        let delta = anim.end_value - anim.start_value;
        self.displayed = anim.start_value + (delta as f64 * progress).round() as i64;

        if progress < 1.0 {
            true
        } else {
            self.anim = None;
            false
        }
    }

    /// Drop any pending animation. No tick mutates state afterward.
    pub fn cancel(&mut self) {
        self.anim = None;
    }
}

impl Default for CountUp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SECOND: Duration = Duration::from_secs(1);

    fn animator_at(displayed: i64) -> CountUp {
        let mut c = CountUp::new();
        c.set_target(displayed as f64, Duration::ZERO, Instant::now());
        assert_eq!(c.displayed(), displayed);
        c
    }

    #[test]
    fn starts_at_zero() {
        let c = CountUp::new();
        assert_eq!(c.displayed(), 0);
        assert!(!c.is_animating());
    }

    #[test]
    fn non_positive_target_snaps_to_zero() {
        let mut c = animator_at(500);
        c.set_target(-10.0, SECOND, Instant::now());
        assert_eq!(c.displayed(), 0);
        assert!(!c.is_animating());
    }

    #[test]
    fn non_finite_target_snaps_to_zero() {
        for target in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut c = animator_at(500);
            c.set_target(target, SECOND, Instant::now());
            assert_eq!(c.displayed(), 0);
            assert!(!c.is_animating());
        }
    }

    #[test]
    fn zero_duration_snaps_to_rounded_target() {
        let mut c = CountUp::new();
        c.set_target(1999.6, Duration::ZERO, Instant::now());
        assert_eq!(c.displayed(), 2000);
        assert!(!c.is_animating());
    }

    #[test]
    fn equal_target_arms_no_animation() {
        let mut c = animator_at(2000);
        c.set_target(2000.0, SECOND, Instant::now());
        assert!(!c.is_animating());
        assert_eq!(c.displayed(), 2000);
    }

    #[test]
    fn value_at_time_zero_is_previous_display() {
        let mut c = animator_at(100);
        let now = Instant::now();
        c.set_target(2000.0, SECOND, now);
        assert!(c.tick(now));
        assert_eq!(c.displayed(), 100);
    }

    #[test]
    fn settles_at_rounded_target_after_duration() {
        let mut c = CountUp::new();
        let now = Instant::now();
        c.set_target(1999.5, SECOND, now);
        assert!(!c.tick(now + SECOND));
        assert_eq!(c.displayed(), 2000);
        assert!(!c.is_animating());
    }

    #[test]
    fn midpoint_is_halfway() {
        let mut c = CountUp::new();
        let now = Instant::now();
        c.set_target(2000.0, SECOND, now);
        c.tick(now + Duration::from_millis(500));
        assert_eq!(c.displayed(), 1000);
    }

    #[test]
    fn monotonic_toward_target() {
        let mut c = CountUp::new();
        let now = Instant::now();
        c.set_target(2000.0, SECOND, now);

        let mut prev = c.displayed();
        for ms in (0..=1000u64).step_by(50) {
            c.tick(now + Duration::from_millis(ms));
            assert!(c.displayed() >= prev);
            prev = c.displayed();
        }
        assert_eq!(c.displayed(), 2000);
    }

    #[test]
    fn monotonic_downward_too() {
        let mut c = animator_at(2000);
        let now = Instant::now();
        c.set_target(500.0, SECOND, now);

        let mut prev = c.displayed();
        for ms in (0..=1000u64).step_by(50) {
            c.tick(now + Duration::from_millis(ms));
            assert!(c.displayed() <= prev);
            prev = c.displayed();
        }
        assert_eq!(c.displayed(), 500);
    }

    #[test]
    fn retarget_restarts_from_current_display() {
        let mut c = CountUp::new();
        let now = Instant::now();
        c.set_target(2000.0, SECOND, now);
        c.tick(now + Duration::from_millis(500));
        assert_eq!(c.displayed(), 1000);

        // New target mid-flight: interpolation restarts at 1000, no jump.
        let retarget_at = now + Duration::from_millis(500);
        c.set_target(3000.0, SECOND, retarget_at);
        assert_eq!(c.displayed(), 1000);

        c.tick(retarget_at + Duration::from_millis(500));
        assert_eq!(c.displayed(), 2000);

        assert!(!c.tick(retarget_at + SECOND));
        assert_eq!(c.displayed(), 3000);
    }

    #[test]
    fn tick_before_start_clamps_to_start_value() {
        let mut c = animator_at(100);
        let now = Instant::now();
        c.set_target(2000.0, SECOND, now + SECOND);
        assert!(c.tick(now));
        assert_eq!(c.displayed(), 100);
    }

    #[test]
    fn cancel_drops_pending_animation() {
        let mut c = CountUp::new();
        let now = Instant::now();
        c.set_target(2000.0, SECOND, now);
        assert!(c.is_animating());

        c.cancel();
        assert!(!c.is_animating());
        assert!(!c.tick(now + SECOND));
        assert_eq!(c.displayed(), 0);
    }

    #[test]
    fn no_frames_after_settling() {
        let mut c = CountUp::new();
        let now = Instant::now();
        c.set_target(10.0, SECOND, now);
        assert!(!c.tick(now + SECOND));
        // Further ticks are inert.
        assert!(!c.tick(now + SECOND * 2));
        assert_eq!(c.displayed(), 10);
    }

    proptest! {
        #[test]
        fn tick_sequence_is_monotonic_and_settles(
            target in 1.0f64..1_000_000.0,
            start in 0i64..1_000_000,
            steps in 1usize..50,
        ) {
            let mut c = animator_at(start);
            let now = Instant::now();
            c.set_target(target, SECOND, now);

            let end = target.round() as i64;
            let mut prev = c.displayed();
            for i in 0..=steps {
                let t = now + SECOND.mul_f64(i as f64 / steps as f64);
                c.tick(t);
                let d = c.displayed();
                if end >= start {
                    prop_assert!(d >= prev);
                } else {
                    prop_assert!(d <= prev);
                }
                prev = d;
            }
            prop_assert_eq!(c.displayed(), end);
            prop_assert!(!c.is_animating());
        }
    }
}
