//! Monitor engine.
//!
//! The [`Monitor`] owns the one shared mutable resource of the system: the
//! bounded feed log plus the active flag. External collaborators invoke
//! `start`/`stop` on user intent, a driver advances virtual time, and readers
//! take snapshots; nothing outside the monitor mutates the log.
//!
//! # Lifecycle
//!
//! ```text
//!            start()
//!  Stopped ──────────▶ Running
//!     ▲                   │
//!     └───────────────────┘
//!            stop()
//! ```
//!
//! `start` and `stop` are idempotent: calling either while already in the
//! target state is a no-op, so a UI toggle can never double-arm the timer or
//! leak a pending period.
//!
//! # Example
//!
//! ```rust
//! use fraud_monitor_core_rs::{Monitor, MonitorConfig};
//!
//! let mut monitor = Monitor::new(MonitorConfig::default()).unwrap();
//! monitor.start();
//!
//! // Three full periods elapse: exactly three events, newest first.
//! let emitted = monitor.advance(3 * 3000);
//! assert_eq!(emitted, 3);
//! assert_eq!(monitor.log().len(), 3);
//!
//! monitor.stop();
//! assert_eq!(monitor.advance(60_000), 0);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::timer::IntervalTimer;
use crate::models::event::{LiveEvent, SeverityCounts};
use crate::models::log::{EventLog, DEFAULT_CAPACITY};
use crate::rng::RngManager;
use crate::synth::{EventSynthesizer, DEFAULT_ACCOUNT_POOL};

/// Default emission period in milliseconds.
pub const DEFAULT_PERIOD_MS: u64 = 3000;

/// Monitor construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonitorError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Configuration for a [`Monitor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Emission period in milliseconds
    #[serde(default = "default_period_ms")]
    pub period_ms: u64,

    /// Maximum number of events retained for display
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Seed for the deterministic RNG (zero is coerced to one)
    #[serde(default)]
    pub rng_seed: u64,

    /// Account handles events are attributed to
    #[serde(default = "default_accounts")]
    pub accounts: Vec<String>,
}

fn default_period_ms() -> u64 {
    DEFAULT_PERIOD_MS
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_accounts() -> Vec<String> {
    DEFAULT_ACCOUNT_POOL.iter().map(|s| s.to_string()).collect()
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            period_ms: default_period_ms(),
            capacity: default_capacity(),
            rng_seed: 0,
            accounts: default_accounts(),
        }
    }
}

/// Monitor lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorState {
    Stopped,
    Running,
}

/// Point-in-time copy of the feed for display.
///
/// Snapshots are owned values; consumers can hold them across later mutations
/// of the monitor without observing tearing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorSnapshot {
    pub active: bool,
    /// Virtual ms since monitor construction
    pub now_ms: u64,
    /// Events ever generated, including evicted ones
    pub total_generated: u64,
    pub counts: SeverityCounts,
    /// Retained events, newest-first
    pub events: Vec<LiveEvent>,
}

/// Live-event feed: bounded log + emission lifecycle.
///
/// Single-owner, single-writer: every mutation goes through `&mut self`, so
/// no locking discipline is needed around the log.
#[derive(Debug, Clone)]
pub struct Monitor {
    config: MonitorConfig,
    state: MonitorState,
    timer: IntervalTimer,
    rng: RngManager,
    synth: EventSynthesizer,
    log: EventLog,
    /// Virtual ms since construction; advances even while stopped
    now_ms: u64,
}

impl Monitor {
    /// Create a stopped monitor from a validated configuration.
    ///
    /// # Errors
    /// Returns [`MonitorError::InvalidConfig`] if the period or capacity is
    /// zero, the account pool is empty, or a handle is blank.
    pub fn new(config: MonitorConfig) -> Result<Self, MonitorError> {
        Self::validate_config(&config)?;

        let timer = IntervalTimer::new(config.period_ms);
        let rng = RngManager::new(config.rng_seed);
        let synth = EventSynthesizer::new(config.accounts.clone());
        let log = EventLog::new(config.capacity);

        Ok(Self {
            config,
            state: MonitorState::Stopped,
            timer,
            rng,
            synth,
            log,
            now_ms: 0,
        })
    }

    fn validate_config(config: &MonitorConfig) -> Result<(), MonitorError> {
        if config.period_ms == 0 {
            return Err(MonitorError::InvalidConfig(
                "period_ms must be positive".to_string(),
            ));
        }
        if config.capacity == 0 {
            return Err(MonitorError::InvalidConfig(
                "capacity must be positive".to_string(),
            ));
        }
        if config.accounts.is_empty() {
            return Err(MonitorError::InvalidConfig(
                "account pool must not be empty".to_string(),
            ));
        }
        for (i, account) in config.accounts.iter().enumerate() {
            if account.trim().is_empty() {
                return Err(MonitorError::InvalidConfig(format!(
                    "blank account handle at index {}",
                    i
                )));
            }
        }
        Ok(())
    }

    /// Begin periodic emission. No-op if already running.
    ///
    /// The first event appears only after one full period of subsequent
    /// `advance` time; starting never emits immediately.
    pub fn start(&mut self) {
        if self.state == MonitorState::Running {
            return;
        }
        self.state = MonitorState::Running;
        self.timer.arm();
    }

    /// Halt periodic emission. No-op if already stopped.
    ///
    /// Cancellation is synchronous: the timer is disarmed (partial period
    /// discarded) before this returns, so no event can fire afterwards no
    /// matter how much time elapses. The existing log is kept.
    pub fn stop(&mut self) {
        if self.state == MonitorState::Stopped {
            return;
        }
        self.state = MonitorState::Stopped;
        self.timer.disarm();
    }

    /// Advance virtual time, emitting one event per crossed period boundary.
    ///
    /// Time advances regardless of state; events are only emitted while
    /// running. Each event is stamped with the boundary instant it fired at,
    /// not the end of the advance. Returns the number of events emitted.
    /// Time saturates at the end of the u64 range instead of overflowing.
    pub fn advance(&mut self, elapsed_ms: u64) -> u64 {
        let base_ms = self.now_ms;
        let lead_ms = self.timer.period_ms() - self.timer.carry_ms();
        let fires = self.timer.advance(elapsed_ms);
        self.now_ms = base_ms.saturating_add(elapsed_ms);

        for k in 0..fires {
            let at_ms = base_ms
                .saturating_add(lead_ms)
                .saturating_add(k.saturating_mul(self.timer.period_ms()));
            self.emit_at(at_ms);
        }
        fires
    }

    /// Force a single emission at the current instant.
    ///
    /// Normally emission happens via `advance`; this exists for collaborators
    /// that want one event outside the cadence. Cannot fail.
    pub fn tick(&mut self) {
        let now_ms = self.now_ms;
        self.emit_at(now_ms);
    }

    fn emit_at(&mut self, timestamp_ms: u64) {
        let event = self.synth.synthesize(timestamp_ms, &mut self.rng);
        self.log.push(event);
    }

    pub fn is_active(&self) -> bool {
        self.state == MonitorState::Running
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Virtual ms since construction.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Read access to the bounded log (newest-first iteration).
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Per-severity counts, recomputed from the log.
    pub fn severity_counts(&self) -> SeverityCounts {
        self.log.severity_counts()
    }

    /// Events ever generated, including ones already evicted.
    pub fn total_generated(&self) -> u64 {
        self.synth.generated_count()
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Owned point-in-time copy of the feed for display.
    pub fn snapshot(&self) -> MonitorSnapshot {
        MonitorSnapshot {
            active: self.is_active(),
            now_ms: self.now_ms,
            total_generated: self.synth.generated_count(),
            counts: self.log.severity_counts(),
            events: self.log.to_vec(),
        }
    }
}
