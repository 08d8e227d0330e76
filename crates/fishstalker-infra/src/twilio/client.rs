//! TwilioNotifier -- concrete [`Notifier`] implementation for Twilio.
//!
//! Sends a form-encoded POST to
//! `/2010-04-01/Accounts/{AccountSid}/Messages.json` with HTTP basic auth.
//!
//! The auth token is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use fishstalker_core::notify::Notifier;
use fishstalker_types::error::NotifyError;
use fishstalker_types::notification::{Notification, NotificationReceipt};

use super::types::MessageResource;

/// Twilio Messages API notifier.
///
/// Implements [`Notifier`] for the Twilio REST API. One call to `send`
/// makes exactly one API request; there is no retry.
pub struct TwilioNotifier {
    client: reqwest::Client,
    account_sid: String,
    auth_token: SecretString,
    base_url: String,
}

impl TwilioNotifier {
    /// Messages API version path segment.
    const API_VERSION: &'static str = "2010-04-01";

    /// Create a new Twilio notifier.
    ///
    /// # Arguments
    ///
    /// * `account_sid` - Twilio account identifier ("AC...")
    /// * `auth_token` - Twilio auth token wrapped in SecretString
    pub fn new(account_sid: String, auth_token: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            account_sid,
            auth_token,
            base_url: "https://api.twilio.com".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the Messages endpoint URL for this account.
    fn messages_url(&self) -> String {
        format!(
            "{}/{}/Accounts/{}/Messages.json",
            self.base_url,
            Self::API_VERSION,
            self.account_sid
        )
    }
}

impl Notifier for TwilioNotifier {
    async fn send(&self, notification: &Notification) -> Result<NotificationReceipt, NotifyError> {
        let url = self.messages_url();
        let params = [
            ("Body", notification.body.as_str()),
            ("From", notification.from.as_str()),
            ("To", notification.to.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(&params)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => NotifyError::AuthenticationFailed,
                429 => NotifyError::RateLimited,
                _ => NotifyError::Api {
                    status: status.as_u16(),
                    message: error_body,
                },
            });
        }

        let message: MessageResource = response
            .json()
            .await
            .map_err(|e| NotifyError::Deserialization(format!("failed to parse response: {e}")))?;

        Ok(NotificationReceipt {
            message_sid: message.sid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_notifier() -> TwilioNotifier {
        TwilioNotifier::new(
            "AC00000000000000000000000000000000".to_string(),
            SecretString::from("test-token-not-real"),
        )
    }

    #[test]
    fn test_messages_url_embeds_account_sid() {
        let notifier = make_notifier();
        assert_eq!(
            notifier.messages_url(),
            "https://api.twilio.com/2010-04-01/Accounts/AC00000000000000000000000000000000/Messages.json"
        );
    }

    #[test]
    fn test_base_url_override() {
        let notifier = make_notifier().with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            notifier.messages_url(),
            "http://localhost:8080/2010-04-01/Accounts/AC00000000000000000000000000000000/Messages.json"
        );
    }
}
