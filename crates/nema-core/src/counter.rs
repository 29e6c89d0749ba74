//! Animated Counter
//!
//! A linear tween from 0 to a target integer, driven by fixed 16 ms ticks
//! and started the first time the counter is at least 30% visible.

use std::time::Duration;

/// Interval between ticks
pub const TICK: Duration = Duration::from_millis(16);

/// Default time for a counter to reach its target
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// Fraction of the element that must be visible before counting starts
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

/// Where a tween is in its one-shot lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenPhase {
    /// Not yet seen; shows 0
    Hidden,
    /// Counting up on every tick
    Running,
    /// Pinned to the target; never changes again
    Settled,
}

/// Counter state for one animated number
#[derive(Clone, Debug, PartialEq)]
pub struct CounterTween {
    target: u32,
    step: f64,
    accumulated: f64,
    displayed: u32,
    phase: TweenPhase,
}

impl CounterTween {
    /// Create a hidden tween towards `target` over roughly `duration`
    pub fn new(target: u32, duration: Duration) -> Self {
        let ticks = (duration.as_secs_f64() / TICK.as_secs_f64()).max(1.0);
        Self {
            target,
            step: f64::from(target) / ticks,
            accumulated: 0.0,
            displayed: 0,
            phase: TweenPhase::Hidden,
        }
    }

    /// Tween with the default two second duration
    pub fn with_default_duration(target: u32) -> Self {
        Self::new(target, DEFAULT_DURATION)
    }

    /// Feed an intersection ratio from the viewport watcher.
    ///
    /// Returns `true` only on the call that starts the animation.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.phase != TweenPhase::Hidden || ratio < VISIBILITY_THRESHOLD {
            return false;
        }
        tracing::debug!(target = self.target, ratio, "counter revealed");
        self.phase = TweenPhase::Running;
        true
    }

    /// Advance one tick. No-op unless running.
    pub fn tick(&mut self) {
        if self.phase != TweenPhase::Running {
            return;
        }
        self.accumulated += self.step;
        if self.accumulated >= f64::from(self.target) {
            self.displayed = self.target;
            self.phase = TweenPhase::Settled;
            tracing::debug!(target = self.target, "counter settled");
        } else {
            // accumulated < target <= u32::MAX here
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let floor = self.accumulated.floor() as u32;
            self.displayed = floor;
        }
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn phase(&self) -> TweenPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TweenPhase::Running
    }

    pub fn is_settled(&self) -> bool {
        self.phase == TweenPhase::Settled
    }

    /// Rendered text, e.g. `47ms`
    pub fn label(&self, suffix: &str) -> String {
        format!("{}{}", self.displayed, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(tween: &mut CounterTween) -> Vec<u32> {
        let mut seen = Vec::new();
        while !tween.is_settled() {
            tween.tick();
            seen.push(tween.displayed());
            assert!(seen.len() < 10_000, "tween never settled");
        }
        seen
    }

    #[test]
    fn test_hidden_shows_zero() {
        let mut tween = CounterTween::with_default_duration(47);
        for _ in 0..50 {
            tween.tick();
        }
        assert_eq!(tween.displayed(), 0);
        assert_eq!(tween.phase(), TweenPhase::Hidden);
    }

    #[test]
    fn test_threshold() {
        let mut tween = CounterTween::with_default_duration(10);
        assert!(!tween.observe(0.0));
        assert!(!tween.observe(0.29));
        assert_eq!(tween.phase(), TweenPhase::Hidden);

        assert!(tween.observe(0.3));
        assert!(tween.is_running());
    }

    #[test]
    fn test_reveal_only_once() {
        let mut tween = CounterTween::with_default_duration(10);
        assert!(tween.observe(1.0));
        assert!(!tween.observe(1.0));

        run_to_end(&mut tween);
        assert!(!tween.observe(0.8));
        assert!(tween.is_settled());
        assert_eq!(tween.displayed(), 10);
    }

    #[test]
    fn test_monotone_and_bounded() {
        for target in [0, 1, 10, 47, 99, 200, 12_345] {
            let mut tween = CounterTween::with_default_duration(target);
            tween.observe(1.0);
            let seen = run_to_end(&mut tween);

            assert!(seen.windows(2).all(|w| w[0] <= w[1]), "target {target}");
            assert!(seen.iter().all(|&v| v <= target), "target {target}");
            assert_eq!(*seen.last().unwrap(), target);
        }
    }

    #[test]
    fn test_tick_count_matches_duration() {
        // 2000 / 16 = 125 steps of 200 / 125 = 1.6
        let mut tween = CounterTween::with_default_duration(200);
        tween.observe(1.0);
        let seen = run_to_end(&mut tween);
        assert!((124..=126).contains(&seen.len()), "{} ticks", seen.len());
        assert_eq!(seen[0], 1);
        assert_eq!(seen[1], 3);
    }

    #[test]
    fn test_zero_target_settles_first_tick() {
        let mut tween = CounterTween::with_default_duration(0);
        tween.observe(0.5);
        tween.tick();
        assert!(tween.is_settled());
        assert_eq!(tween.displayed(), 0);
    }

    #[test]
    fn test_zero_duration_pins_immediately() {
        let mut tween = CounterTween::new(99, Duration::ZERO);
        tween.observe(0.5);
        tween.tick();
        assert!(tween.is_settled());
        assert_eq!(tween.displayed(), 99);
    }

    #[test]
    fn test_settled_ignores_ticks() {
        let mut tween = CounterTween::new(5, Duration::from_millis(32));
        tween.observe(1.0);
        run_to_end(&mut tween);
        tween.tick();
        tween.tick();
        assert_eq!(tween.displayed(), 5);
    }

    #[test]
    fn test_hero_labels() {
        let mut spawn = CounterTween::with_default_duration(47);
        let mut uptime = CounterTween::with_default_duration(99);
        assert_eq!(spawn.label("ms"), "0ms");

        spawn.observe(0.4);
        uptime.observe(0.4);
        run_to_end(&mut spawn);
        run_to_end(&mut uptime);

        assert_eq!(spawn.label("ms"), "47ms");
        assert_eq!(uptime.label(".9%"), "99.9%");
    }
}
