//! Fixed-cadence tick scheduler.
//!
//! [`GameLoop`] owns the tick deadline arithmetic: when the next tick is due,
//! how long until then, and what happens to the deadline when the cadence
//! changes. The host drives it as a pump - sleep (or poll for input) for
//! [`GameLoop::until_next_tick`], then fire the tick callback when
//! [`GameLoop::tick_due`] reports true. This keeps the scheduler free of any
//! knowledge of the engine and keeps execution single-threaded: a tick and
//! everything it triggers runs to completion before the next deadline can
//! fire.
//!
//! `start` and `stop` are idempotent. `set_speed` re-arms the deadline from
//! the moment of the call, so a cadence change neither double-fires nor lets
//! a stale deadline linger.

use std::time::{Duration, Instant};

/// Introspection view of the scheduler, `{speed, is_running}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSnapshot {
    pub speed_ms: u64,
    pub is_running: bool,
}

/// Deadline-based fixed-interval scheduler.
#[derive(Debug, Clone)]
pub struct GameLoop {
    speed_ms: u64,
    /// `Some` while running; the instant the next tick becomes due.
    next_due: Option<Instant>,
}

impl GameLoop {
    pub fn new(speed_ms: u64) -> Self {
        Self {
            speed_ms,
            next_due: None,
        }
    }

    /// Begin scheduling ticks every `speed_ms` milliseconds from now.
    ///
    /// Calling while already running has no effect.
    pub fn start(&mut self) {
        if self.next_due.is_none() {
            self.next_due = Some(Instant::now() + self.interval());
        }
    }

    /// Halt scheduling. Calling while stopped has no effect.
    ///
    /// Stopping only prevents future ticks; it cannot interrupt a tick, as
    /// ticks run synchronously in the host's call stack.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Change the interval used for subsequent scheduling.
    ///
    /// If running, the deadline is re-armed from now at the new cadence; the
    /// old deadline is discarded.
    pub fn set_speed(&mut self, speed_ms: u64) {
        self.speed_ms = speed_ms;
        if self.next_due.is_some() {
            self.next_due = Some(Instant::now() + self.interval());
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn snapshot(&self) -> LoopSnapshot {
        LoopSnapshot {
            speed_ms: self.speed_ms,
            is_running: self.is_running(),
        }
    }

    /// Time remaining until the next tick is due, or `None` when stopped.
    ///
    /// Returns zero when the deadline has already passed.
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Report whether a tick is due at `now`, advancing the deadline if so.
    ///
    /// At most one tick is reported per deadline; the next deadline is
    /// scheduled one interval after `now`.
    pub fn tick_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval());
                true
            }
            _ => false,
        }
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Generous margins: deadlines are armed from the real clock, so tests
    // probe instants well before or well after the interval boundary.

    #[test]
    fn test_not_running_until_started() {
        let mut game_loop = GameLoop::new(100);
        assert!(!game_loop.is_running());
        assert!(game_loop.until_next_tick(Instant::now()).is_none());
        assert!(!game_loop.tick_due(Instant::now() + Duration::from_secs(10)));
    }

    #[test]
    fn test_tick_due_after_one_interval() {
        let mut game_loop = GameLoop::new(100);
        let before = Instant::now();
        game_loop.start();

        assert!(!game_loop.tick_due(before));
        assert!(game_loop.tick_due(before + Duration::from_secs(1)));
    }

    #[test]
    fn test_no_doubled_tick_at_same_instant() {
        let mut game_loop = GameLoop::new(100);
        game_loop.start();

        let later = Instant::now() + Duration::from_secs(1);
        assert!(game_loop.tick_due(later));
        // The deadline advanced past `later`; the same instant cannot fire twice.
        assert!(!game_loop.tick_due(later));
        // One interval after the fire, the next tick is due.
        assert!(game_loop.tick_due(later + Duration::from_secs(1)));
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut game_loop = GameLoop::new(500);
        game_loop.start();
        let armed = game_loop.until_next_tick(Instant::now());

        game_loop.start();
        let rearmed = game_loop.until_next_tick(Instant::now());

        assert!(game_loop.is_running());
        // The second start did not push the deadline out.
        assert!(rearmed.unwrap() <= armed.unwrap());
    }

    #[test]
    fn test_stop_is_idempotent_and_halts_ticks() {
        let mut game_loop = GameLoop::new(100);
        game_loop.start();
        game_loop.stop();
        game_loop.stop();

        assert!(!game_loop.is_running());
        assert!(!game_loop.tick_due(Instant::now() + Duration::from_secs(10)));
    }

    #[test]
    fn test_set_speed_rearms_running_deadline() {
        let mut game_loop = GameLoop::new(500);
        game_loop.start();

        let now = Instant::now();
        game_loop.set_speed(100);
        assert_eq!(game_loop.snapshot().speed_ms, 100);

        // The stale 500ms deadline is gone; the new one fires on the new
        // cadence and no earlier than the change itself.
        assert!(!game_loop.tick_due(now));
        assert!(game_loop.tick_due(now + Duration::from_secs(1)));
    }

    #[test]
    fn test_set_speed_while_stopped_only_updates_interval() {
        let mut game_loop = GameLoop::new(500);
        game_loop.set_speed(100);

        let snapshot = game_loop.snapshot();
        assert_eq!(snapshot.speed_ms, 100);
        assert!(!snapshot.is_running);
        assert!(!game_loop.tick_due(Instant::now() + Duration::from_secs(10)));
    }

    #[test]
    fn test_snapshot_reflects_running_state() {
        let mut game_loop = GameLoop::new(250);
        assert_eq!(
            game_loop.snapshot(),
            LoopSnapshot {
                speed_ms: 250,
                is_running: false
            }
        );

        game_loop.start();
        assert!(game_loop.snapshot().is_running);

        game_loop.stop();
        assert!(!game_loop.snapshot().is_running);
    }
}
