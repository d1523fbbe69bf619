//! Ticker - an explicit periodic time source.
//!
//! Nothing in the core reads a clock. Callers advance a `Ticker` by the time
//! that passed and get back how many intervals elapsed, so tests can drive
//! gravity and the auto-player synchronously.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ticker {
    interval_ms: u32,
    elapsed_ms: u32,
    running: bool,
}

impl Ticker {
    /// A stopped ticker with the given interval
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0,
            running: false,
        }
    }

    /// (Re)start from zero with a new interval
    pub fn start(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms;
        self.elapsed_ms = 0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed_ms = 0;
    }

    /// Change the interval; a running ticker restarts its current period
    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms;
        self.elapsed_ms = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Advance by `elapsed_ms`; returns the number of intervals completed
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running || self.interval_ms == 0 {
            return 0;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let fires = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        fires
    }
}
