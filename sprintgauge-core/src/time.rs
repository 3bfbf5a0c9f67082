//! Time management for the measurement unit
//!
//! Provides a clock abstraction so the controller never touches a hardware
//! timer directly:
//! - System clock (host builds, demo runner)
//! - Hardware tick counter (bare-metal targets implement `Clock` themselves)
//! - Fixed clock (deterministic tests)
//!
//! The controller also needs to *block* (countdown phases, fetch retry
//! delay), so the clock owns delays too. On hardware `delay_ms` spins or
//! sleeps; in tests it just advances the fixed timestamp.

/// Timestamp in milliseconds since device boot (monotonic)
pub type Timestamp = u64;

/// Source of monotonic time and blocking delays for the controller
pub trait Clock {
    /// Get current timestamp in milliseconds
    fn now(&mut self) -> Timestamp;

    /// Block for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// System clock backed by `std::time::Instant` (requires std)
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct SystemClock {
    epoch: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Create a clock whose zero point is "now"
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&mut self) -> Timestamp {
        self.epoch.elapsed().as_millis() as Timestamp
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(ms as u64));
    }
}

/// Fixed clock for testing
///
/// `now` returns whatever was set; `delay_ms` advances the timestamp instead
/// of sleeping, so countdown and retry paths run instantly and the elapsed
/// time they "consumed" is still observable.
#[derive(Debug, Clone)]
pub struct FixedClock {
    timestamp: Timestamp,
}

impl FixedClock {
    /// Create a fixed clock starting at the given timestamp
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Set the current timestamp
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Advance the clock by `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl Clock for FixedClock {
    fn now(&mut self) -> Timestamp {
        self.timestamp
    }

    fn delay_ms(&mut self, ms: u32) {
        self.timestamp += ms as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_advances() {
        let mut clock = FixedClock::new(1000);
        assert_eq!(clock.now(), 1000);

        clock.advance(500);
        assert_eq!(clock.now(), 1500);
    }

    #[test]
    fn fixed_clock_delay_consumes_time() {
        let mut clock = FixedClock::new(0);
        clock.delay_ms(5000);
        assert_eq!(clock.now(), 5000);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_clock_is_monotonic() {
        let mut clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
