//! Domain types for the monitoring feed

pub mod event;
pub mod log;

pub use event::{EventKind, LiveEvent, Severity, SeverityCounts};
pub use log::EventLog;
