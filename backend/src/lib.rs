//! Fraud Monitor Core - Rust Engine
//!
//! Deterministic live-event feed for fraud monitoring. Generates synthetic
//! detection events on a fixed virtual-time cadence and keeps a capped,
//! newest-first log of them for display.
//!
//! # Architecture
//!
//! - **core**: Virtual time and interval timing
//! - **models**: Domain types (LiveEvent, EventLog, severity aggregates)
//! - **synth**: Synthetic event generation
//! - **monitor**: Feed lifecycle (start/stop/advance/snapshot)
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded RNG)
//! 2. The event log never exceeds its capacity (drop-oldest eviction)
//! 3. Event severity is a fixed function of event kind
//! 4. Time is virtual: the core never reads the wall clock

// Module declarations
pub mod core;
pub mod models;
pub mod monitor;
pub mod rng;
pub mod synth;

// Re-exports for convenience
pub use crate::core::timer::IntervalTimer;
pub use models::{
    event::{EventKind, LiveEvent, Severity, SeverityCounts},
    log::EventLog,
};
pub use monitor::{Monitor, MonitorConfig, MonitorError, MonitorSnapshot, MonitorState};
pub use rng::RngManager;
pub use synth::{EventSynthesizer, DEFAULT_ACCOUNT_POOL};
