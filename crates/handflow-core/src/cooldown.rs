//! Per-category cooldown tracking
//!
//! One mapping from gesture category to last-fired timestamp. Each rule
//! looks its category up generically with its declared cooldown duration,
//! so rate limiting lives in one place instead of scattered timestamp
//! fields. Cooldowns are policy, never blocking waits.

use crate::gesture::GestureCategory;
use std::collections::HashMap;
use std::time::Duration;

/// Last-fired timestamps per gesture category.
#[derive(Debug, Default)]
pub struct CooldownBank {
    last_fired: HashMap<GestureCategory, Duration>,
}

impl CooldownBank {
    /// Empty bank; every category is immediately ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `category` may fire at `now` given its cooldown duration.
    ///
    /// A zero cooldown is always ready. Timestamps are monotonic readings
    /// supplied by the caller, so tests can drive a deterministic clock.
    pub fn ready(&self, category: GestureCategory, cooldown: Duration, now: Duration) -> bool {
        match self.last_fired.get(&category) {
            None => true,
            Some(&last) => now.saturating_sub(last) >= cooldown,
        }
    }

    /// Record that `category` fired at `now`.
    pub fn record(&mut self, category: GestureCategory, now: Duration) {
        self.last_fired.insert(category, now);
    }

    /// `ready` and `record` in one step; returns whether the fire was
    /// admitted.
    pub fn try_fire(
        &mut self,
        category: GestureCategory,
        cooldown: Duration,
        now: Duration,
    ) -> bool {
        if self.ready(category, cooldown, now) {
            self.record(category, now);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOLDOWN: Duration = Duration::from_millis(1000);

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn first_fire_is_admitted() {
        let mut bank = CooldownBank::new();
        assert!(bank.try_fire(GestureCategory::Transport, COOLDOWN, ms(0)));
    }

    #[test]
    fn refire_blocked_until_expiry() {
        let mut bank = CooldownBank::new();
        assert!(bank.try_fire(GestureCategory::Seek, COOLDOWN, ms(100)));
        assert!(!bank.try_fire(GestureCategory::Seek, COOLDOWN, ms(900)));
        assert!(bank.try_fire(GestureCategory::Seek, COOLDOWN, ms(1100)));
    }

    #[test]
    fn categories_are_independent() {
        let mut bank = CooldownBank::new();
        assert!(bank.try_fire(GestureCategory::Transport, COOLDOWN, ms(0)));
        assert!(bank.try_fire(GestureCategory::Volume, ms(200), ms(10)));
    }

    #[test]
    fn zero_cooldown_always_ready() {
        let mut bank = CooldownBank::new();
        assert!(bank.try_fire(GestureCategory::ScrollBrightness, ms(0), ms(5)));
        assert!(bank.try_fire(GestureCategory::ScrollBrightness, ms(0), ms(5)));
    }

    #[test]
    fn non_monotonic_reading_does_not_panic() {
        let mut bank = CooldownBank::new();
        bank.record(GestureCategory::Seek, ms(500));
        // Earlier reading than the recorded fire; saturates instead of
        // underflowing.
        assert!(!bank.ready(GestureCategory::Seek, COOLDOWN, ms(100)));
    }
}
