//! One-shot viewport visibility tracking.
//!
//! The presentation layer registers the elements it wants reveal/animation
//! effects for, then reports a visibility recomputation after every
//! layout or scroll change by calling [`ViewportObserver::sweep`] with a
//! measurement closure. A target whose visible fraction reaches its
//! threshold is handed back exactly once and immediately dropped from
//! tracking, so a notification can never be delivered twice and visibility
//! is monotonic from the subscriber's point of view.
//!
//! The observer only ever holds the caller-supplied target handle, never the
//! renderable itself; unregistering on teardown is always safe, including
//! after the target has already fired.

use tracing::debug;

/// Threshold used when the caller does not configure one. Slightly above
/// zero so effects start just before the element is fully on screen.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// Visibility detection configuration for one target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveConfig {
    /// Minimum fraction of the target that must be on screen, in `[0, 1]`
    pub threshold: f64,
}

impl Default for ObserveConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ObserveConfig {
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }
}

/// Handle returned by [`ViewportObserver::register`], used to cancel a
/// subscription before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token(u64);

#[derive(Debug)]
struct Entry<T> {
    token: Token,
    target: T,
    threshold: f64,
}

/// Registry of not-yet-visible targets.
#[derive(Debug)]
pub struct ViewportObserver<T> {
    entries: Vec<Entry<T>>,
    next_token: u64,
}

impl<T> Default for ViewportObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewportObserver<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_token: 0,
        }
    }

    /// Begin tracking a target. The threshold is clamped to `[0, 1]`.
    pub fn register(&mut self, target: T, config: ObserveConfig) -> Token {
        let token = Token(self.next_token);
        self.next_token += 1;
        self.entries.push(Entry {
            token,
            target,
            threshold: config.threshold.clamp(0.0, 1.0),
        });
        token
    }

    /// Stop tracking without notification. A no-op for tokens that already
    /// fired or were unregistered before.
    pub fn unregister(&mut self, token: Token) {
        if let Some(pos) = self.entries.iter().position(|e| e.token == token) {
            self.entries.swap_remove(pos);
            debug!(token = token.0, "observation cancelled");
        }
    }

    /// Run one visibility recomputation across all tracked targets.
    ///
    /// `fraction_of` measures the currently visible fraction of a target.
    /// Targets at or above their threshold are returned and removed from
    /// tracking, so each registration yields at most one notification over
    /// its lifetime. Targets that never reach their threshold are simply
    /// never returned.
    pub fn sweep<F>(&mut self, mut fraction_of: F) -> Vec<T>
    where
        F: FnMut(&T) -> f64,
    {
        let mut fired = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if fraction_of(&self.entries[i].target) >= self.entries[i].threshold {
                fired.push(self.entries.swap_remove(i).target);
            } else {
                i += 1;
            }
        }
        fired
    }

    /// Number of targets still being tracked.
    pub fn tracked(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_at_threshold() {
        let mut observer = ViewportObserver::new();
        observer.register("hero", ObserveConfig::with_threshold(0.5));

        assert!(observer.sweep(|_| 0.2).is_empty());
        assert_eq!(observer.sweep(|_| 0.6), vec!["hero"]);
        assert!(observer.is_empty());
    }

    #[test]
    fn test_never_fires_twice_across_repeated_crossings() {
        let mut observer = ViewportObserver::new();
        observer.register(1u32, ObserveConfig::with_threshold(0.5));

        let mut notifications = 0;
        // Visible fraction oscillates across the threshold many times
        for fraction in [0.0, 0.9, 0.1, 0.9, 0.0, 1.0, 0.9] {
            notifications += observer.sweep(|_| fraction).len();
        }
        assert_eq!(notifications, 1);
    }

    #[test]
    fn test_target_never_visible_never_fires() {
        let mut observer = ViewportObserver::new();
        observer.register((), ObserveConfig::with_threshold(0.1));

        for _ in 0..100 {
            assert!(observer.sweep(|_| 0.0).is_empty());
        }
        assert_eq!(observer.tracked(), 1);
    }

    #[test]
    fn test_unregister_prevents_notification() {
        let mut observer = ViewportObserver::new();
        let token = observer.register("contact", ObserveConfig::default());
        observer.unregister(token);

        assert!(observer.sweep(|_| 1.0).is_empty());
    }

    #[test]
    fn test_unregister_after_fire_is_noop() {
        let mut observer = ViewportObserver::new();
        let token = observer.register("stats", ObserveConfig::default());

        assert_eq!(observer.sweep(|_| 1.0).len(), 1);
        // Teardown races with the notification; cancelling now must be safe
        observer.unregister(token);
        assert!(observer.sweep(|_| 1.0).is_empty());
    }

    #[test]
    fn test_independent_thresholds() {
        let mut observer = ViewportObserver::new();
        observer.register("low", ObserveConfig::with_threshold(0.1));
        observer.register("high", ObserveConfig::with_threshold(0.9));

        // Half visible clears one threshold but not the other
        let fired = observer.sweep(|_| 0.5);
        assert_eq!(fired, vec!["low"]);
        assert_eq!(observer.tracked(), 1);
    }

    #[test]
    fn test_threshold_clamped() {
        let mut observer = ViewportObserver::new();
        observer.register("a", ObserveConfig::with_threshold(7.0));
        // Clamped to 1.0, so full visibility fires
        assert_eq!(observer.sweep(|_| 1.0).len(), 1);
    }

    #[test]
    fn test_default_threshold_fires_before_full_entry() {
        let mut observer = ViewportObserver::new();
        observer.register("footer", ObserveConfig::default());
        assert_eq!(observer.sweep(|_| 0.06).len(), 1);
    }
}
