use std::time::{Duration, Instant};

/// Fixed-period tick source driven by the caller's event loop.
///
/// The clock holds at most one pending deadline. `start` overwrites it, so
/// restarting always cancels whatever was scheduled before, and `stop`
/// simply forgets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameClock {
    period: Duration,
    next_tick: Option<Instant>,
}

impl GameClock {
    pub fn new(period: Duration) -> Self {
        GameClock {
            period,
            next_tick: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    pub fn start(&mut self, now: Instant) {
        self.next_tick = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_tick = None;
    }

    /// Changes the period. A running clock is restarted from `now` so the
    /// old deadline can never fire.
    pub fn set_period(&mut self, period: Duration, now: Instant) {
        self.period = period;
        if self.is_running() {
            self.stop();
            self.start(now);
        }
    }

    /// Reports whether a tick is due and, if so, schedules the next one a
    /// full period after `now`. Late polls yield one tick, never a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_tick {
            Some(deadline) if now >= deadline => {
                self.next_tick = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// How long the caller may wait before the next tick is due.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.next_tick
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(150);

    #[test]
    fn test_stopped_clock_never_ticks() {
        let t0 = Instant::now();
        let mut clock = GameClock::new(PERIOD);

        assert!(!clock.is_running());
        assert!(!clock.poll(t0 + Duration::from_secs(10)));
        assert_eq!(clock.time_until_tick(t0), None);
    }

    #[test]
    fn test_ticks_once_per_period() {
        let t0 = Instant::now();
        let mut clock = GameClock::new(PERIOD);
        clock.start(t0);

        assert!(!clock.poll(t0 + Duration::from_millis(149)));
        assert!(clock.poll(t0 + PERIOD));
        assert!(!clock.poll(t0 + PERIOD));
        assert!(!clock.poll(t0 + Duration::from_millis(299)));
        assert!(clock.poll(t0 + PERIOD * 2));
    }

    #[test]
    fn test_late_poll_yields_single_tick() {
        let t0 = Instant::now();
        let mut clock = GameClock::new(PERIOD);
        clock.start(t0);

        let late = t0 + PERIOD * 5;
        assert!(clock.poll(late));
        assert!(!clock.poll(late));
        assert_eq!(clock.time_until_tick(late), Some(PERIOD));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let t0 = Instant::now();
        let mut clock = GameClock::new(PERIOD);
        clock.start(t0);

        clock.stop();
        clock.stop();
        assert!(!clock.is_running());
        assert!(!clock.poll(t0 + PERIOD * 3));
    }

    #[test]
    fn test_restart_cancels_pending_tick() {
        let t0 = Instant::now();
        let mut clock = GameClock::new(PERIOD);
        clock.start(t0);

        clock.start(t0 + Duration::from_millis(100));
        assert!(!clock.poll(t0 + PERIOD));
        assert!(clock.poll(t0 + Duration::from_millis(250)));
    }

    #[test]
    fn test_new_period_applies_immediately() {
        let t0 = Instant::now();
        let mut clock = GameClock::new(Duration::from_millis(200));
        clock.start(t0);

        let changed = t0 + Duration::from_millis(150);
        clock.set_period(Duration::from_millis(100), changed);

        // The 200ms deadline is gone
        assert!(!clock.poll(t0 + Duration::from_millis(200)));
        assert!(clock.poll(changed + Duration::from_millis(100)));
        assert_eq!(clock.period(), Duration::from_millis(100));
    }

    #[test]
    fn test_set_period_keeps_stopped_clock_stopped() {
        let t0 = Instant::now();
        let mut clock = GameClock::new(PERIOD);

        clock.set_period(Duration::from_millis(100), t0);
        assert!(!clock.is_running());

        clock.start(t0);
        assert_eq!(clock.time_until_tick(t0), Some(Duration::from_millis(100)));
    }
}
