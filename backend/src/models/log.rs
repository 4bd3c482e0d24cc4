//! Bounded, newest-first event log.
//!
//! The feed log is a fixed-capacity deque: new events are prepended and, once
//! the log is full, each insertion evicts the oldest entry. Consumers only
//! read; the owning monitor is the single writer.

use std::collections::VecDeque;

use crate::models::event::{EventKind, LiveEvent, Severity, SeverityCounts};

/// Default log capacity (entries kept for display).
pub const DEFAULT_CAPACITY: usize = 50;

/// Fixed-capacity event log, newest-first, drop-oldest on overflow.
///
/// Invariant: `len() <= capacity()` after every insertion. A violation is a
/// programming error and trips a debug assertion, not a runtime error.
///
/// # Example
/// ```
/// use fraud_monitor_core_rs::{EventLog, EventSynthesizer, RngManager};
///
/// let mut rng = RngManager::new(7);
/// let mut synth = EventSynthesizer::with_default_pool();
/// let mut log = EventLog::new(2);
///
/// for t in 0..3 {
///     log.push(synth.synthesize(t * 1000, &mut rng));
/// }
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.latest().unwrap().id, "evt_00000002");
/// ```
#[derive(Debug, Clone)]
pub struct EventLog {
    events: VecDeque<LiveEvent>,
    capacity: usize,
}

impl EventLog {
    /// Create an empty log with the given capacity.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepend an event, evicting the oldest entry if the log is full.
    pub fn push(&mut self, event: LiveEvent) {
        self.events.push_front(event);
        if self.events.len() > self.capacity {
            self.events.pop_back();
        }
        debug_assert!(
            self.events.len() <= self.capacity,
            "event log exceeded capacity after insertion"
        );
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate newest-first.
    pub fn iter(&self) -> impl Iterator<Item = &LiveEvent> {
        self.events.iter()
    }

    /// Most recent event, if any.
    pub fn latest(&self) -> Option<&LiveEvent> {
        self.events.front()
    }

    /// Oldest retained event, if any.
    pub fn oldest(&self) -> Option<&LiveEvent> {
        self.events.back()
    }

    /// Events of a specific kind, newest-first.
    pub fn events_of_kind(&self, kind: EventKind) -> Vec<&LiveEvent> {
        self.events.iter().filter(|e| e.kind == kind).collect()
    }

    /// Events of a specific severity, newest-first.
    pub fn events_of_severity(&self, severity: Severity) -> Vec<&LiveEvent> {
        self.events.iter().filter(|e| e.severity == severity).collect()
    }

    /// Events for a specific account handle, newest-first.
    pub fn events_for_account(&self, account: &str) -> Vec<&LiveEvent> {
        self.events.iter().filter(|e| e.account == account).collect()
    }

    /// Per-severity counts over the current contents.
    ///
    /// Recomputed on every call; there is no cached aggregate to drift out of
    /// sync with the log.
    pub fn severity_counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for event in &self.events {
            counts.bump(event.severity);
        }
        counts
    }

    /// Owned copy of the contents, newest-first.
    pub fn to_vec(&self) -> Vec<LiveEvent> {
        self.events.iter().cloned().collect()
    }

    /// Discard all entries. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: u64, kind: EventKind) -> LiveEvent {
        LiveEvent {
            id: format!("evt_{:08}", id),
            kind,
            message: kind.message().to_string(),
            severity: kind.severity(),
            timestamp_ms: id * 1000,
            account: "@fake_elon_m".to_string(),
            detail: "Risk score: 75/100".to_string(),
        }
    }

    #[test]
    fn test_push_is_newest_first() {
        let mut log = EventLog::new(10);
        log.push(event(0, EventKind::NewAccount));
        log.push(event(1, EventKind::MassAction));

        assert_eq!(log.latest().unwrap().id, "evt_00000001");
        assert_eq!(log.oldest().unwrap().id, "evt_00000000");
    }

    #[test]
    fn test_overflow_evicts_oldest() {
        let mut log = EventLog::new(3);
        for i in 0..5 {
            log.push(event(i, EventKind::ScamDetected));
        }

        assert_eq!(log.len(), 3);
        let ids: Vec<&str> = log.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["evt_00000004", "evt_00000003", "evt_00000002"]);
    }

    #[test]
    fn test_severity_counts_recomputed() {
        let mut log = EventLog::new(10);
        log.push(event(0, EventKind::ProfileMatch)); // critical
        log.push(event(1, EventKind::ScamDetected)); // critical
        log.push(event(2, EventKind::SuspiciousActivity)); // high

        let counts = log.severity_counts();
        assert_eq!(counts.critical, 2);
        assert_eq!(counts.high, 1);
        assert_eq!(counts.medium, 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_zero_capacity_panics() {
        EventLog::new(0);
    }
}
