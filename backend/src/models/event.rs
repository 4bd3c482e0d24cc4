//! Synthetic detection events.
//!
//! A [`LiveEvent`] is one entry in the monitoring feed: a categorized,
//! severity-tagged observation about an account. Events are ephemeral and
//! never persisted; they exist only inside the bounded feed log.
//!
//! # Kind → severity mapping
//!
//! Severity is a fixed function of the event kind, never independently
//! random. The mapping (and the message templates) follow the reference
//! detection catalog:
//!
//! | Kind               | Severity | Message                                             |
//! |--------------------|----------|-----------------------------------------------------|
//! | NewAccount         | Medium   | New account created with suspicious profile similarity |
//! | SuspiciousActivity | High     | Unusual activity pattern detected                   |
//! | ProfileMatch       | Critical | Profile matches verified celebrity account          |
//! | MassAction         | Medium   | Mass following detected                             |
//! | ScamDetected       | Critical | Financial scam keywords detected in messages        |

use serde::{Deserialize, Serialize};

/// Category of a synthetic detection event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    NewAccount,
    SuspiciousActivity,
    ProfileMatch,
    MassAction,
    ScamDetected,
}

impl EventKind {
    /// All kinds, in catalog order. Used for uniform selection.
    pub const ALL: [EventKind; 5] = [
        EventKind::NewAccount,
        EventKind::SuspiciousActivity,
        EventKind::ProfileMatch,
        EventKind::MassAction,
        EventKind::ScamDetected,
    ];

    /// Wire name of this kind (matches the serde representation).
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::NewAccount => "new_account",
            EventKind::SuspiciousActivity => "suspicious_activity",
            EventKind::ProfileMatch => "profile_match",
            EventKind::MassAction => "mass_action",
            EventKind::ScamDetected => "scam_detected",
        }
    }

    /// Fixed human-readable message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            EventKind::NewAccount => "New account created with suspicious profile similarity",
            EventKind::SuspiciousActivity => "Unusual activity pattern detected",
            EventKind::ProfileMatch => "Profile matches verified celebrity account",
            EventKind::MassAction => "Mass following detected",
            EventKind::ScamDetected => "Financial scam keywords detected in messages",
        }
    }

    /// Fixed severity for this kind.
    pub fn severity(self) -> Severity {
        match self {
            EventKind::NewAccount => Severity::Medium,
            EventKind::SuspiciousActivity => Severity::High,
            EventKind::ProfileMatch => Severity::Critical,
            EventKind::MassAction => Severity::Medium,
            EventKind::ScamDetected => Severity::Critical,
        }
    }
}

/// Urgency of a detection event, ordered Low < Medium < High < Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Uppercase display label (e.g. "CRITICAL").
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

/// One entry in the live monitoring feed.
///
/// `timestamp_ms` is virtual time: milliseconds since the owning monitor was
/// constructed. Drivers that need wall-clock display map it themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveEvent {
    /// Unique token within the log's lifetime (monotonic, e.g. "evt_00000042")
    pub id: String,
    pub kind: EventKind,
    /// Fixed message for `kind`
    pub message: String,
    /// Fixed severity for `kind`
    pub severity: Severity,
    /// Virtual instant the event was generated
    pub timestamp_ms: u64,
    /// Handle drawn from the configured account pool
    pub account: String,
    /// Free-text annotation, "Risk score: {n}/100" with n in [60, 99]
    pub detail: String,
}

/// Per-severity aggregate over a feed log.
///
/// This is a pure derived view: it is recomputed from the log on every read
/// and carries no state of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    /// Count for a single severity.
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    /// Total events across all severities.
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }

    pub(crate) fn bump(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }
}
