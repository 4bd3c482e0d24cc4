//! Virtual time management for the monitor

pub mod timer;
