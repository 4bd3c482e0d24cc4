//! Monitor - feed lifecycle and event emission
//!
//! Ties the timer, RNG, synthesizer, and bounded log together behind an
//! explicit start/stop/advance/snapshot surface.
//!
//! See `engine.rs` for the implementation.

pub mod engine;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use engine::{Monitor, MonitorConfig, MonitorError, MonitorSnapshot, MonitorState};
