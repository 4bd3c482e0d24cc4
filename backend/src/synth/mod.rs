//! Synthetic event generation.
//!
//! The synthesizer turns one timer fire into one [`LiveEvent`]: it draws a
//! kind and an account uniformly, derives message and severity from the kind,
//! and stamps a risk-score annotation. All draws go through the injected
//! [`RngManager`], so a seed fully determines the feed.
//!
//! # Determinism
//!
//! The draw order per event is fixed (kind, account, score). Reordering the
//! draws would silently change every seeded sequence, so tests pin it.

use crate::models::event::LiveEvent;
use crate::models::EventKind;
use crate::rng::RngManager;

/// Sample account handles used when no pool is configured.
pub const DEFAULT_ACCOUNT_POOL: [&str; 5] = [
    "@fake_elon_m",
    "@bill_gates_fan",
    "@oprah_fake",
    "@jeff_bezos_1",
    "@mark_z_official",
];

/// Inclusive bounds for the synthetic risk score.
const RISK_SCORE_MIN: i64 = 60;
const RISK_SCORE_MAX: i64 = 99;

/// Generator for synthetic detection events.
///
/// Owns the account pool and the monotonic id counter; randomness is supplied
/// by the caller per draw.
///
/// # Example
/// ```
/// use fraud_monitor_core_rs::{EventSynthesizer, RngManager};
///
/// let mut rng = RngManager::new(42);
/// let mut synth = EventSynthesizer::with_default_pool();
///
/// let event = synth.synthesize(3000, &mut rng);
/// assert_eq!(event.id, "evt_00000000");
/// assert_eq!(event.severity, event.kind.severity());
/// ```
#[derive(Debug, Clone)]
pub struct EventSynthesizer {
    /// Account handles events are attributed to
    accounts: Vec<String>,

    /// Next event ID counter
    next_event_id: u64,
}

impl EventSynthesizer {
    /// Create a synthesizer over the given account pool.
    ///
    /// # Panics
    /// Panics if the pool is empty.
    pub fn new(accounts: Vec<String>) -> Self {
        assert!(!accounts.is_empty(), "account pool must not be empty");
        Self {
            accounts,
            next_event_id: 0,
        }
    }

    /// Create a synthesizer over [`DEFAULT_ACCOUNT_POOL`].
    pub fn with_default_pool() -> Self {
        Self::new(DEFAULT_ACCOUNT_POOL.iter().map(|s| s.to_string()).collect())
    }

    /// Synthesize one event at the given virtual instant.
    ///
    /// Draw order: kind, account, risk score.
    pub fn synthesize(&mut self, timestamp_ms: u64, rng: &mut RngManager) -> LiveEvent {
        let kind = EventKind::ALL[rng.pick_index(EventKind::ALL.len())];
        let account = self.accounts[rng.pick_index(self.accounts.len())].clone();
        let score = rng.range(RISK_SCORE_MIN, RISK_SCORE_MAX + 1);

        let id = format!("evt_{:08}", self.next_event_id);
        self.next_event_id += 1;

        LiveEvent {
            id,
            kind,
            message: kind.message().to_string(),
            severity: kind.severity(),
            timestamp_ms,
            account,
            detail: format!("Risk score: {}/100", score),
        }
    }

    /// Total events synthesized so far.
    pub fn generated_count(&self) -> u64 {
        self.next_event_id
    }

    /// Configured account pool.
    pub fn accounts(&self) -> &[String] {
        &self.accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "account pool must not be empty")]
    fn test_empty_pool_panics() {
        EventSynthesizer::new(Vec::new());
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut rng = RngManager::new(1);
        let mut synth = EventSynthesizer::with_default_pool();

        let a = synth.synthesize(0, &mut rng);
        let b = synth.synthesize(1000, &mut rng);

        assert_eq!(a.id, "evt_00000000");
        assert_eq!(b.id, "evt_00000001");
        assert_eq!(synth.generated_count(), 2);
    }

    #[test]
    fn test_synthesize_deterministic() {
        let mut synth1 = EventSynthesizer::with_default_pool();
        let mut rng1 = RngManager::new(42);

        let mut synth2 = EventSynthesizer::with_default_pool();
        let mut rng2 = RngManager::new(42);

        for t in 0..20u64 {
            let e1 = synth1.synthesize(t * 3000, &mut rng1);
            let e2 = synth2.synthesize(t * 3000, &mut rng2);
            assert_eq!(e1, e2);
        }
    }

    #[test]
    fn test_account_drawn_from_pool() {
        let pool = vec!["@a".to_string(), "@b".to_string()];
        let mut synth = EventSynthesizer::new(pool.clone());
        let mut rng = RngManager::new(99);

        for t in 0..50u64 {
            let event = synth.synthesize(t, &mut rng);
            assert!(pool.contains(&event.account));
        }
    }
}
