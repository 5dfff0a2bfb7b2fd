//! Cancellable deferred effects driven by session time rather than wall-clock callbacks.

use std::time::Duration;

use slotmap::SlotMap;

use crate::types::TimerId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimedEffect {
    SpeedBoostExpired,
    LevelUpGraceEnded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingTimer {
    due: Duration,
    effect: TimedEffect,
}

#[derive(Clone, Debug, Default)]
pub struct Timers {
    now: Duration,
    pending: SlotMap<TimerId, PendingTimer>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay: Duration, effect: TimedEffect) -> TimerId {
        self.pending.insert(PendingTimer { due: self.now + delay, effect })
    }

    /// Returns false when the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.pending.remove(id).is_some()
    }

    /// Moves time forward and returns the effects that came due, earliest first.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimedEffect> {
        self.now += dt;
        let now = self.now;
        let mut due: Vec<(TimerId, PendingTimer)> = self
            .pending
            .iter()
            .filter(|(_, timer)| timer.due <= now)
            .map(|(id, timer)| (id, *timer))
            .collect();
        due.sort_by_key(|(_, timer)| timer.due);
        for (id, _) in &due {
            self.pending.remove(*id);
        }
        due.into_iter().map(|(_, timer)| timer.effect).collect()
    }

    /// Cancels every pending timer and rewinds the clock to zero.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.now = Duration::ZERO;
    }

    /// Session time elapsed while timers were advancing.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_fire_once_when_due() {
        let mut timers = Timers::new();
        timers.schedule(Duration::from_millis(100), TimedEffect::SpeedBoostExpired);
        assert!(timers.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(timers.advance(Duration::from_millis(1)), vec![TimedEffect::SpeedBoostExpired]);
        assert!(timers.advance(Duration::from_millis(500)).is_empty());
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut timers = Timers::new();
        let id = timers.schedule(Duration::from_millis(10), TimedEffect::LevelUpGraceEnded);
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn due_effects_come_back_in_deadline_order() {
        let mut timers = Timers::new();
        timers.schedule(Duration::from_millis(300), TimedEffect::SpeedBoostExpired);
        timers.schedule(Duration::from_millis(200), TimedEffect::LevelUpGraceEnded);
        assert_eq!(
            timers.advance(Duration::from_millis(400)),
            vec![TimedEffect::LevelUpGraceEnded, TimedEffect::SpeedBoostExpired]
        );
    }

    #[test]
    fn delays_are_relative_to_current_time() {
        let mut timers = Timers::new();
        timers.advance(Duration::from_millis(1_000));
        let id = timers.schedule(Duration::from_millis(50), TimedEffect::SpeedBoostExpired);
        assert!(timers.is_pending(id));
        assert!(timers.advance(Duration::from_millis(49)).is_empty());
        assert_eq!(timers.advance(Duration::from_millis(1)).len(), 1);
        assert_eq!(timers.now(), Duration::from_millis(1_050));
    }

    #[test]
    fn clear_cancels_everything_and_rewinds() {
        let mut timers = Timers::new();
        timers.advance(Duration::from_millis(700));
        let id = timers.schedule(Duration::from_millis(10), TimedEffect::LevelUpGraceEnded);
        timers.clear();
        assert!(!timers.is_pending(id));
        assert_eq!(timers.now(), Duration::ZERO);
        assert!(timers.advance(Duration::from_secs(5)).is_empty());
    }
}
