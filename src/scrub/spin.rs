use crossbeam_channel::{Receiver, tick};
use std::time::{Duration, Instant};

/// Frame clock that turns the reels while the tape is playing.
///
/// The UI loop drains it once per frame, so the reel rotation is only ever
/// touched from one thread. Stopping drops the tick receiver, which cancels
/// the timer. A `tick` channel holds a single pending tick, so the owed
/// steps are counted from the time elapsed since the last whole interval.
pub struct Spinner {
    interval: Duration,
    step: f64,
    ticks: Option<Receiver<Instant>>,
    last: Instant,
}

impl Spinner {
    pub fn new(interval: Duration, step: f64) -> Self {
        Spinner {
            interval,
            step,
            ticks: None,
            last: Instant::now(),
        }
    }

    pub fn start(&mut self) {
        if self.ticks.is_none() {
            self.ticks = Some(tick(self.interval));
            self.last = Instant::now();
        }
    }

    pub fn stop(&mut self) {
        self.ticks = None;
    }

    pub fn is_running(&self) -> bool {
        self.ticks.is_some()
    }

    pub fn set_running(&mut self, running: bool) {
        match running {
            true => self.start(),
            false => self.stop(),
        }
    }

    /// Returns the rotation owed for every whole interval since the last
    /// drain. The partial interval carries over to the next call.
    pub fn drain(&mut self) -> f64 {
        self.drain_at(Instant::now())
    }

    fn drain_at(&mut self, now: Instant) -> f64 {
        let Some(ticks) = &self.ticks else {
            return 0.0;
        };
        ticks.try_iter().for_each(drop);

        let interval = self.interval.as_nanos().max(1);
        let elapsed = now.saturating_duration_since(self.last).as_nanos();
        let steps = elapsed / interval;

        self.last += Duration::from_nanos((steps * interval) as u64);
        steps as f64 * self.step
    }
}
