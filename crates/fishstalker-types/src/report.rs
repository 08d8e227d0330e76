//! Cycle reports: the structured result of one watch invocation.
//!
//! `CycleReport` is what the watch cycle returns and what tests assert
//! against; `Completion` is the generic success-shaped record handed back
//! to the external invoker regardless of outcome.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened during one fetch-compare-notify cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleOutcome {
    /// Fingerprints matched; the document has not changed.
    Unchanged,

    /// Fingerprints differed and the alert was handed to the messaging
    /// service.
    Notified { message_sid: String },

    /// Fingerprints differed but the send failed. The cycle still
    /// completed; the next scheduled invocation retries from scratch.
    NotificationFailed { reason: String },

    /// A fetch stage failed; no comparison or notification happened.
    Aborted { stage: AbortStage, reason: String },
}

/// The fetch stage at which an aborted cycle stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbortStage {
    ReferenceFetch,
    DocumentFetch,
}

impl fmt::Display for AbortStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortStage::ReferenceFetch => write!(f, "reference fetch"),
            AbortStage::DocumentFetch => write!(f, "document fetch"),
        }
    }
}

/// Structured record of one completed invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReport {
    pub outcome: CycleOutcome,
    pub checked_at: DateTime<Utc>,
}

impl CycleReport {
    /// Stamp an outcome with the current time.
    pub fn new(outcome: CycleOutcome) -> Self {
        Self {
            outcome,
            checked_at: Utc::now(),
        }
    }

    /// The record handed back to the invoker. Always success-shaped: the
    /// cycle ran to completion whether or not a notification was sent or a
    /// fetch stage aborted it.
    pub fn completion(&self) -> Completion {
        Completion {
            status_code: 200,
            body: "watch cycle completed".to_string(),
        }
    }
}

/// Numeric status code + short message describing completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub status_code: u16,
    pub body: String,
}
