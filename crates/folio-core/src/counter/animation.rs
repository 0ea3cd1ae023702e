//! Counter animation controller.
//!
//! Drives one statistic's displayed value through a fixed phase sequence:
//! `Idle -> Spinning -> Converging -> Done`. The controller owns all of its
//! timing state; the caller triggers it on the first visibility notification
//! and then calls [`CounterAnimator::update`] each frame while it reports
//! [`CounterAnimator::is_animating`].

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::easing::cubic_ease_out;
use super::timing::{is_complete, progress};
use crate::content::CounterSpec;

/// Interval between randomized spin ticks.
const SPIN_TICK: Duration = Duration::from_millis(50);

/// Number of randomized ticks published before the count-up starts.
const SPIN_TICKS: u32 = 21;

/// Spin samples are drawn uniformly from `[0, value * SPIN_SPREAD)`.
const SPIN_SPREAD: f64 = 1.2;

/// Total count-up duration.
const COUNT_DURATION: Duration = Duration::from_millis(2500);

/// Cadence the driving loop should call `update` at while animating (~60fps).
pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Observable animation phase, in lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Spinning,
    Converging,
    Done,
}

/// Internal phase state. Each variant carries its own deadlines, so the
/// timing state of an outgoing phase ceases to exist at the transition and
/// a stale tick from a previous phase cannot fire.
#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Spinning { next_tick: Instant, ticks: u32 },
    Converging { started: Instant },
    Done,
}

#[derive(Debug)]
pub struct CounterAnimator {
    spec: CounterSpec,
    phase: Phase,
    displayed: f64,
    rng: SmallRng,
}

impl CounterAnimator {
    pub fn new(spec: CounterSpec) -> Self {
        Self {
            spec,
            phase: Phase::Idle,
            displayed: 0.0,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create with a fixed RNG seed so the spin sequence is reproducible.
    pub fn with_seed(spec: CounterSpec, seed: u64) -> Self {
        Self {
            spec,
            phase: Phase::Idle,
            displayed: 0.0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    /// Start the animation. Only the first call while `Idle` has any
    /// effect; the viewport observer delivers at most one notification, and
    /// later phases ignore re-triggering anyway.
    pub fn trigger(&mut self, now: Instant) {
        if matches!(self.phase, Phase::Idle) {
            self.phase = Phase::Spinning {
                next_tick: now + SPIN_TICK,
                ticks: 0,
            };
        }
    }

    /// Advance the animation to `now` and return the displayed value.
    ///
    /// Spin ticks are processed on a deadline schedule, so a late call
    /// delivers every missed tick in order and the tick count stays exact.
    pub fn update(&mut self, now: Instant) -> f64 {
        loop {
            match self.phase {
                Phase::Idle | Phase::Done => break,
                Phase::Spinning { next_tick, ticks } => {
                    if now < next_tick {
                        break;
                    }
                    if ticks >= SPIN_TICKS {
                        // The tick after the last spin switches to the
                        // count-up, stamped at its own deadline.
                        self.phase = Phase::Converging { started: next_tick };
                        continue;
                    }
                    let sample = self.rng.gen::<f64>() * self.spec.value * SPIN_SPREAD;
                    self.displayed = self.quantize(sample);
                    self.phase = Phase::Spinning {
                        next_tick: next_tick + SPIN_TICK,
                        ticks: ticks + 1,
                    };
                }
                Phase::Converging { started } => {
                    if is_complete(started, COUNT_DURATION, now) {
                        // Land on the target itself, not the interpolation's
                        // last sample.
                        self.displayed = self.quantize(self.spec.value);
                        self.phase = Phase::Done;
                    } else {
                        let eased = cubic_ease_out(progress(started, COUNT_DURATION, now));
                        self.displayed = self.quantize(eased * self.spec.value);
                    }
                    break;
                }
            }
        }
        self.displayed
    }

    /// Tear down mid-animation: back to `Idle` with the value reset and all
    /// phase timing state discarded.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.displayed = 0.0;
    }

    pub fn phase(&self) -> CounterPhase {
        match self.phase {
            Phase::Idle => CounterPhase::Idle,
            Phase::Spinning { .. } => CounterPhase::Spinning,
            Phase::Converging { .. } => CounterPhase::Converging,
            Phase::Done => CounterPhase::Done,
        }
    }

    /// Whether the driving loop should run at the animation frame rate.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Spinning { .. } | Phase::Converging { .. })
    }

    /// Current displayed value (already rounded/truncated for display).
    pub fn value(&self) -> f64 {
        self.displayed
    }

    /// Current displayed value formatted for rendering, suffix included.
    pub fn display(&self) -> String {
        if self.spec.fractional {
            format!("{:.1}{}", self.displayed, self.spec.suffix)
        } else {
            format!("{}{}", self.displayed as i64, self.spec.suffix)
        }
    }

    /// Round (fractional) or truncate (integer) a raw value for display.
    fn quantize(&self, value: f64) -> f64 {
        if self.spec.fractional {
            (value * 10.0).round() / 10.0
        } else {
            value.floor()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_spec() -> CounterSpec {
        CounterSpec {
            value: 420.0,
            suffix: "%".to_string(),
            fractional: false,
        }
    }

    fn float_spec() -> CounterSpec {
        CounterSpec {
            value: 6.5,
            suffix: "x".to_string(),
            fractional: true,
        }
    }

    /// Drive the animator tick by tick until it leaves `Spinning`, returning
    /// the published spin values and the instant of the phase switch.
    fn run_spin(animator: &mut CounterAnimator, start: Instant) -> (Vec<f64>, Instant) {
        let mut published = Vec::new();
        let mut i = 1u32;
        loop {
            let now = start + SPIN_TICK * i;
            let value = animator.update(now);
            if animator.phase() != CounterPhase::Spinning {
                return (published, now);
            }
            published.push(value);
            i += 1;
        }
    }

    #[test]
    fn test_idle_without_trigger() {
        let mut animator = CounterAnimator::with_seed(int_spec(), 7);
        let start = Instant::now();
        for i in 0..200u32 {
            assert_eq!(animator.update(start + SPIN_TICK * i), 0.0);
        }
        assert_eq!(animator.phase(), CounterPhase::Idle);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_spin_publishes_exactly_21_ticks_in_range() {
        let mut animator = CounterAnimator::with_seed(int_spec(), 42);
        let start = Instant::now();
        animator.trigger(start);

        let (published, _) = run_spin(&mut animator, start);
        assert_eq!(published.len(), SPIN_TICKS as usize);
        for value in published {
            assert!(value >= 0.0 && value < 420.0 * SPIN_SPREAD, "out of range: {value}");
            // Integer counters truncate every intermediate
            assert_eq!(value, value.floor());
        }
        assert_eq!(animator.phase(), CounterPhase::Converging);
    }

    #[test]
    fn test_seeded_spin_is_reproducible() {
        let start = Instant::now();
        let mut a = CounterAnimator::with_seed(int_spec(), 9);
        let mut b = CounterAnimator::with_seed(int_spec(), 9);
        a.trigger(start);
        b.trigger(start);
        assert_eq!(run_spin(&mut a, start).0, run_spin(&mut b, start).0);
    }

    #[test]
    fn test_phase_sequence_in_order_without_skips() {
        let mut animator = CounterAnimator::with_seed(int_spec(), 3);
        let start = Instant::now();

        let mut snapshots = vec![animator.phase()];
        animator.trigger(start);
        snapshots.push(animator.phase());

        let mut now = start;
        while animator.phase() != CounterPhase::Done {
            now += FRAME_INTERVAL;
            animator.update(now);
            snapshots.push(animator.phase());
        }

        snapshots.dedup();
        assert_eq!(
            snapshots,
            vec![
                CounterPhase::Idle,
                CounterPhase::Spinning,
                CounterPhase::Converging,
                CounterPhase::Done,
            ]
        );
    }

    #[test]
    fn test_converging_is_monotonic_and_lands_exactly() {
        let mut animator = CounterAnimator::with_seed(int_spec(), 11);
        let start = Instant::now();
        animator.trigger(start);
        let (_, conv_start) = run_spin(&mut animator, start);

        let mut now = conv_start;
        let mut prev = animator.update(now);
        while animator.phase() == CounterPhase::Converging {
            now += FRAME_INTERVAL;
            let value = animator.update(now);
            assert!(value >= prev, "count-up went backwards: {prev} -> {value}");
            prev = value;
        }
        assert_eq!(animator.phase(), CounterPhase::Done);
        assert_eq!(animator.value(), 420.0);
        assert_eq!(animator.display(), "420%");
    }

    #[test]
    fn test_fractional_counter_lands_exactly() {
        let mut animator = CounterAnimator::with_seed(float_spec(), 5);
        let start = Instant::now();
        animator.trigger(start);
        // One very late update catches up through both phases
        animator.update(start + Duration::from_secs(60));
        assert_eq!(animator.phase(), CounterPhase::Done);
        assert_eq!(animator.value(), 6.5);
        assert_eq!(animator.display(), "6.5x");
    }

    #[test]
    fn test_trigger_is_one_shot() {
        let mut animator = CounterAnimator::with_seed(int_spec(), 2);
        let start = Instant::now();
        animator.trigger(start);
        animator.update(start + SPIN_TICK * 3);
        let phase_before = animator.phase();
        let value_before = animator.value();

        // Re-triggering mid-flight must not restart the spin
        animator.trigger(start + Duration::from_secs(1));
        assert_eq!(animator.phase(), phase_before);
        assert_eq!(animator.value(), value_before);

        // Nor after completion
        animator.update(start + Duration::from_secs(60));
        animator.trigger(start + Duration::from_secs(61));
        assert_eq!(animator.phase(), CounterPhase::Done);
        assert_eq!(animator.value(), 420.0);
    }

    #[test]
    fn test_reset_mid_spin_publishes_nothing_more() {
        let mut animator = CounterAnimator::with_seed(int_spec(), 13);
        let start = Instant::now();
        animator.trigger(start);
        animator.update(start + SPIN_TICK * 5);
        assert!(animator.is_animating());

        animator.reset();
        assert_eq!(animator.phase(), CounterPhase::Idle);
        assert_eq!(animator.value(), 0.0);
        assert!(!animator.is_animating());

        // Updates after teardown are inert
        assert_eq!(animator.update(start + Duration::from_secs(60)), 0.0);
        assert_eq!(animator.phase(), CounterPhase::Idle);
    }

    #[test]
    fn test_reset_mid_convergence_publishes_nothing_more() {
        let mut animator = CounterAnimator::with_seed(int_spec(), 13);
        let start = Instant::now();
        animator.trigger(start);
        let (_, conv_start) = run_spin(&mut animator, start);
        animator.update(conv_start + Duration::from_millis(500));
        assert_eq!(animator.phase(), CounterPhase::Converging);

        animator.reset();
        assert_eq!(animator.update(conv_start + Duration::from_secs(60)), 0.0);
        assert_eq!(animator.phase(), CounterPhase::Idle);
    }

    #[test]
    fn test_late_update_catches_up_missed_ticks() {
        let mut animator = CounterAnimator::with_seed(int_spec(), 17);
        let start = Instant::now();
        animator.trigger(start);
        // A single update long after the trigger runs the whole sequence
        let value = animator.update(start + Duration::from_secs(10));
        assert_eq!(animator.phase(), CounterPhase::Done);
        assert_eq!(value, 420.0);
    }

    #[test]
    fn test_display_formats_intermediates_per_precision() {
        let start = Instant::now();

        let mut int_anim = CounterAnimator::with_seed(int_spec(), 23);
        int_anim.trigger(start);
        int_anim.update(start + SPIN_TICK);
        assert!(!int_anim.display().contains('.'));
        assert!(int_anim.display().ends_with('%'));

        let mut float_anim = CounterAnimator::with_seed(float_spec(), 23);
        float_anim.trigger(start);
        float_anim.update(start + SPIN_TICK);
        let shown = float_anim.display();
        let digits = shown.strip_suffix('x').unwrap();
        // One decimal place, rounded
        assert_eq!(digits, format!("{:.1}", digits.parse::<f64>().unwrap()));
    }
}
