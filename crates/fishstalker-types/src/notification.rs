//! Outbound notification types.
//!
//! These are provider-agnostic: the Twilio-specific wire structures live
//! in fishstalker-infra.

use serde::{Deserialize, Serialize};

/// Fixed body text for the stocking alert SMS.
pub const STOCKING_ALERT_BODY: &str =
    "Hello, this is the Fish Stalker letting you know that a new body of water has been stocked";

/// An outbound SMS-style message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Message body text.
    pub body: String,
    /// Sender identifier (E.164 phone number).
    pub from: String,
    /// Recipient identifier (E.164 phone number).
    pub to: String,
}

impl Notification {
    /// Build the fixed-body stocking alert for the given sender/recipient.
    pub fn stocking_alert(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            body: STOCKING_ALERT_BODY.to_string(),
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Message identifier returned by the messaging service on a successful
/// send. Logged to confirm the alert was handed off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationReceipt {
    pub message_sid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stocking_alert_uses_fixed_body() {
        let alert = Notification::stocking_alert("+12075550100", "+12075550199");
        assert_eq!(alert.body, STOCKING_ALERT_BODY);
        assert_eq!(alert.from, "+12075550100");
        assert_eq!(alert.to, "+12075550199");
    }
}
