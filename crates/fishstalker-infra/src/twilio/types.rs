//! Twilio Messages API wire types.
//!
//! Twilio-specific response structures for HTTP communication with the
//! Messages endpoint. They are NOT the generic notification types from
//! fishstalker-types -- those are provider-agnostic.

use serde::Deserialize;

/// A created message resource, as returned by `POST .../Messages.json`.
///
/// Twilio returns many more fields; only the ones the watcher reads are
/// modeled.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResource {
    /// Unique message identifier (e.g., "SM...").
    pub sid: String,
    /// Delivery status at creation time (usually "queued").
    pub status: Option<String>,
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
}
