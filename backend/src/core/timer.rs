//! Interval timer over virtual time
//!
//! The monitor runs on virtual time supplied by its driver. This module
//! converts elapsed milliseconds into discrete emission boundaries, with
//! explicit arm/disarm semantics so a stopped feed can never fire late.

use serde::{Deserialize, Serialize};

/// Period accumulator with explicit arm/disarm.
///
/// While armed, `advance` accumulates elapsed time and reports how many full
/// periods were crossed. Disarming discards any partial period, so after
/// `disarm()` returns no amount of elapsed time produces a fire, and a
/// re-armed timer waits one full period before its first fire.
///
/// # Example
/// ```
/// use fraud_monitor_core_rs::IntervalTimer;
///
/// let mut timer = IntervalTimer::new(3000);
/// timer.arm();
/// assert_eq!(timer.advance(9000), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalTimer {
    /// Emission period in milliseconds
    period_ms: u64,
    /// Virtual time accumulated toward the next fire
    carry_ms: u64,
    armed: bool,
}

impl IntervalTimer {
    /// Create a disarmed timer with the given period.
    ///
    /// # Panics
    /// Panics if `period_ms` is zero.
    pub fn new(period_ms: u64) -> Self {
        assert!(period_ms > 0, "period_ms must be positive");
        Self {
            period_ms,
            carry_ms: 0,
            armed: false,
        }
    }

    /// Arm the timer, counting from zero accumulated time.
    ///
    /// The first fire happens only after one full period elapses. No-op if
    /// already armed (re-arming must not reset an in-progress period).
    pub fn arm(&mut self) {
        if !self.armed {
            self.armed = true;
            self.carry_ms = 0;
        }
    }

    /// Disarm the timer and discard any partial period.
    ///
    /// Cancellation is synchronous: once this returns, `advance` reports zero
    /// fires until the timer is armed again. No-op if already disarmed.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.carry_ms = 0;
    }

    /// Advance virtual time, returning how many period boundaries were crossed.
    ///
    /// Returns 0 while disarmed. Carry is preserved across calls: two
    /// advances of half a period fire once. The count is full-width so a
    /// single large advance never loses boundaries; accumulation saturates
    /// rather than overflowing at the end of the u64 range.
    ///
    /// # Example
    /// ```
    /// use fraud_monitor_core_rs::IntervalTimer;
    ///
    /// let mut timer = IntervalTimer::new(1000);
    /// timer.arm();
    /// assert_eq!(timer.advance(500), 0);
    /// assert_eq!(timer.advance(500), 1);
    /// ```
    pub fn advance(&mut self, elapsed_ms: u64) -> u64 {
        if !self.armed {
            return 0;
        }
        self.carry_ms = self.carry_ms.saturating_add(elapsed_ms);
        let fires = self.carry_ms / self.period_ms;
        self.carry_ms %= self.period_ms;
        fires
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Virtual time accumulated toward the next fire (always < period).
    pub fn carry_ms(&self) -> u64 {
        self.carry_ms
    }
}
