//! Animated counter: ease-out count-up from 0 to a target.
//!
//! The math lives in [`CounterAnimation`] (a pure function of elapsed time)
//! so that any frame source can drive it; [`CounterState`] adds the
//! run-once-on-first-visibility gate. [`crate::schedule`] owns the frame loop.

use std::time::Duration;

/// Default animation length
pub const DEFAULT_DURATION: Duration = Duration::from_secs(2);

/// Count-up from 0 to `target` over `duration`
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    duration: Duration,
    suffix: String,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration: DEFAULT_DURATION,
            suffix: String::new(),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Normalized progress in `[0, 1]`. A zero duration is already done.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Integer shown after `elapsed`: `floor(ease_out_quart(p) * target)`.
    ///
    /// Exactly `target` once the duration has passed.
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        let progress = self.progress(elapsed);
        if progress >= 1.0 {
            return self.target;
        }
        let value = (ease_out_quart(progress) * self.target as f64).floor() as u64;
        value.min(self.target)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) >= 1.0
    }

    /// Rendered text after `elapsed`, suffix included
    pub fn text_at(&self, elapsed: Duration) -> String {
        self.text_for(self.value_at(elapsed))
    }

    /// Rendered text of the final frame
    pub fn final_text(&self) -> String {
        self.text_for(self.target)
    }

    /// Text for a value reported by a frame loop
    pub fn text_for(&self, value: u64) -> String {
        format!("{}{}", format_compact(value), self.suffix)
    }
}

/// `1 - (1 - p)^4`
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Compact display of a count.
///
/// - `>= 10000`: thousands rounded to an integer, `25000 -> "25k"`
/// - `1000..10000`: thousands to one decimal, `1000 -> "1.0k"`, `9999 -> "10.0k"`
/// - below: the plain integer
///
/// Rounding is half-up in integer arithmetic.
pub fn format_compact(value: u64) -> String {
    if value >= 10_000 {
        format!("{}k", value.saturating_add(500) / 1000)
    } else if value >= 1000 {
        let tenths = value.saturating_add(50) / 100;
        format!("{}.{}k", tenths / 10, tenths % 10)
    } else {
        value.to_string()
    }
}

/// Per-mount counter state with a one-shot visibility gate.
///
/// The animation clock starts the first time the counter is reported
/// visible and never restarts for the same mount.
#[derive(Debug, Clone)]
pub struct CounterState {
    animation: CounterAnimation,
    visible_since: Option<Duration>,
}

impl CounterState {
    pub fn new(animation: CounterAnimation) -> Self {
        Self {
            animation,
            visible_since: None,
        }
    }

    pub fn animation(&self) -> &CounterAnimation {
        &self.animation
    }

    pub fn has_started(&self) -> bool {
        self.visible_since.is_some()
    }

    /// Record visibility at clock time `now`.
    ///
    /// Returns `true` only for the first call; later calls are ignored.
    pub fn mark_visible(&mut self, now: Duration) -> bool {
        if self.visible_since.is_some() {
            return false;
        }
        self.visible_since = Some(now);
        true
    }

    /// Swap in a new target. A counter that was already running restarts
    /// from zero at `now`; an unseen one keeps waiting for visibility.
    ///
    /// Returns `true` when the caller has to relaunch its frame loop.
    pub fn retarget(&mut self, animation: CounterAnimation, now: Duration) -> bool {
        if self.animation == animation {
            return false;
        }
        self.animation = animation;
        match self.visible_since {
            Some(_) => {
                self.visible_since = Some(now);
                true
            }
            None => false,
        }
    }

    /// Value displayed at clock time `now`; 0 before first visibility
    pub fn value(&self, now: Duration) -> u64 {
        match self.visible_since {
            Some(start) => self.animation.value_at(now.saturating_sub(start)),
            None => 0,
        }
    }

    pub fn text(&self, now: Duration) -> String {
        self.animation.text_for(self.value(now))
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        match self.visible_since {
            Some(start) => self.animation.is_finished(now.saturating_sub(start)),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table() {
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(1000), "1.0k");
        assert_eq!(format_compact(1250), "1.3k");
        assert_eq!(format_compact(9999), "10.0k");
        assert_eq!(format_compact(10000), "10k");
        assert_eq!(format_compact(10499), "10k");
        assert_eq!(format_compact(10500), "11k");
        assert_eq!(format_compact(25000), "25k");
    }

    #[test]
    fn test_format_saturates_at_max() {
        assert_eq!(format_compact(u64::MAX), format!("{}k", u64::MAX / 1000));
        assert_eq!(format_compact(u64::MAX - 1), format_compact(u64::MAX));

        let anim = CounterAnimation::new(u64::MAX).with_suffix("+");
        assert_eq!(anim.final_text(), format!("{}k+", u64::MAX / 1000));
        assert_eq!(anim.value_at(anim.duration()), u64::MAX);
    }

    #[test]
    fn test_ease_out_quart_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn test_value_at_midpoint() {
        let anim = CounterAnimation::new(1000);
        assert_eq!(anim.value_at(Duration::ZERO), 0);
        assert_eq!(anim.value_at(Duration::from_secs(1)), 937);
        assert_eq!(anim.value_at(Duration::from_secs(2)), 1000);
        assert_eq!(anim.value_at(Duration::from_secs(60)), 1000);
    }

    #[test]
    fn test_zero_target_stays_zero() {
        let anim = CounterAnimation::new(0);
        for ms in [0, 1, 500, 1999, 2000, 5000] {
            assert_eq!(anim.value_at(Duration::from_millis(ms)), 0);
        }
        assert_eq!(anim.final_text(), "0");
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let anim = CounterAnimation::new(42).with_duration(Duration::ZERO);
        assert!(anim.is_finished(Duration::ZERO));
        assert_eq!(anim.value_at(Duration::ZERO), 42);
    }

    #[test]
    fn test_suffix_is_appended_after_format() {
        let anim = CounterAnimation::new(1500).with_suffix("+");
        assert_eq!(anim.final_text(), "1.5k+");
    }

    #[test]
    fn test_state_runs_once() {
        let mut state = CounterState::new(CounterAnimation::new(100));
        assert_eq!(state.value(Duration::from_secs(10)), 0);

        assert!(state.mark_visible(Duration::from_secs(10)));
        assert!(!state.mark_visible(Duration::from_secs(11)));
        assert_eq!(state.value(Duration::from_secs(12)), 100);
        assert!(state.is_finished(Duration::from_secs(12)));
        assert!(!state.is_finished(Duration::from_secs(11)));
    }

    #[test]
    fn test_retarget_restarts_running_counter() {
        let mut state = CounterState::new(CounterAnimation::new(100));
        assert!(!state.retarget(CounterAnimation::new(100), Duration::ZERO));
        assert!(!state.retarget(CounterAnimation::new(50), Duration::ZERO));
        assert_eq!(state.animation().target(), 50);
        assert!(!state.has_started());

        assert!(state.mark_visible(Duration::from_secs(1)));
        assert!(state.retarget(CounterAnimation::new(900), Duration::from_secs(5)));
        assert_eq!(state.value(Duration::from_secs(5)), 0);
        assert_eq!(state.value(Duration::from_secs(7)), 900);
        assert!(!state.mark_visible(Duration::from_secs(8)));
    }
}
