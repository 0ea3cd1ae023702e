//! Time calculation against an injected clock.
//!
//! Every function takes `now` explicitly instead of reading the system
//! clock, so the animation state machine can be driven with synthetic time
//! in tests.

use std::time::{Duration, Instant};

/// Animation progress (0.0 to 1.0) at `now` for an animation started at
/// `start`, clamped to [0.0, 1.0].
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Check if the animation has run its full duration at `now`
#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}
