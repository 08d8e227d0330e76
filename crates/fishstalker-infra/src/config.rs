//! Environment-derived watcher configuration.
//!
//! The four messaging credentials are required and validated eagerly, so a
//! missing variable fails at startup with a named error instead of
//! surfacing as a messaging-client error mid-cycle. The two watch URLs
//! have fixed defaults and accept overrides.

use secrecy::SecretString;

use fishstalker_types::error::ConfigError;
use fishstalker_types::target::{DEFAULT_DOCUMENT_URL, DEFAULT_REFERENCE_URL, WatchTargets};

/// Messaging account identifier.
pub const ENV_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
/// Messaging auth credential.
pub const ENV_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";
/// Sender phone number.
pub const ENV_FROM_NUMBER: &str = "TWILIO_PHONE_NUMBER";
/// Recipient phone number.
pub const ENV_TO_NUMBER: &str = "TO_PHONE_NUMBER";
/// Optional override for the watched document URL.
pub const ENV_DOCUMENT_URL: &str = "STOCKING_REPORT_URL";
/// Optional override for the reference fingerprint URL.
pub const ENV_REFERENCE_URL: &str = "REFERENCE_HASH_URL";

/// The required environment variables, in validation order.
pub const REQUIRED_VARS: [&str; 4] = [
    ENV_ACCOUNT_SID,
    ENV_AUTH_TOKEN,
    ENV_FROM_NUMBER,
    ENV_TO_NUMBER,
];

/// Validated configuration for one watch invocation.
///
/// The auth token is wrapped in [`SecretString`] and never appears in
/// Debug output or logs.
#[derive(Debug)]
pub struct WatcherConfig {
    pub account_sid: String,
    pub auth_token: SecretString,
    pub from_number: String,
    pub to_number: String,
    pub targets: WatchTargets,
}

impl WatcherConfig {
    /// Load and validate configuration from process environment variables.
    ///
    /// Fails on the first missing required variable. Empty and
    /// whitespace-only values count as missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            account_sid: required(ENV_ACCOUNT_SID)?,
            auth_token: SecretString::from(required(ENV_AUTH_TOKEN)?),
            from_number: required(ENV_FROM_NUMBER)?,
            to_number: required(ENV_TO_NUMBER)?,
            targets: WatchTargets {
                document_url: optional(ENV_DOCUMENT_URL).unwrap_or_else(|| {
                    tracing::debug!("no {ENV_DOCUMENT_URL} override, using default");
                    DEFAULT_DOCUMENT_URL.to_string()
                }),
                reference_url: optional(ENV_REFERENCE_URL).unwrap_or_else(|| {
                    tracing::debug!("no {ENV_REFERENCE_URL} override, using default");
                    DEFAULT_REFERENCE_URL.to_string()
                }),
            },
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::MissingVar(name))
}

fn optional(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(val) if !val.trim().is_empty() => Some(val),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use secrecy::ExposeSecret;

    use super::*;

    // from_env reads fixed variable names, so tests mutating the
    // environment must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn set_required_vars() {
        // SAFETY: callers hold ENV_LOCK, so no concurrent env access.
        unsafe {
            std::env::set_var(ENV_ACCOUNT_SID, "AC00000000000000000000000000000000");
            std::env::set_var(ENV_AUTH_TOKEN, "test-token-not-real");
            std::env::set_var(ENV_FROM_NUMBER, "+12075550100");
            std::env::set_var(ENV_TO_NUMBER, "+12075550199");
        }
    }

    fn clear_all_vars() {
        // SAFETY: callers hold ENV_LOCK, so no concurrent env access.
        unsafe {
            for name in REQUIRED_VARS {
                std::env::remove_var(name);
            }
            std::env::remove_var(ENV_DOCUMENT_URL);
            std::env::remove_var(ENV_REFERENCE_URL);
        }
    }

    #[test]
    fn test_from_env_with_all_required_vars() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_vars();
        set_required_vars();

        let config = WatcherConfig::from_env().unwrap();
        assert_eq!(config.account_sid, "AC00000000000000000000000000000000");
        assert_eq!(config.auth_token.expose_secret(), "test-token-not-real");
        assert_eq!(config.from_number, "+12075550100");
        assert_eq!(config.to_number, "+12075550199");
        assert_eq!(config.targets.document_url, DEFAULT_DOCUMENT_URL);
        assert_eq!(config.targets.reference_url, DEFAULT_REFERENCE_URL);

        clear_all_vars();
    }

    #[test]
    fn test_from_env_names_the_missing_var() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_vars();
        set_required_vars();
        // SAFETY: ENV_LOCK held.
        unsafe { std::env::remove_var(ENV_AUTH_TOKEN) };

        let err = WatcherConfig::from_env().unwrap_err();
        assert_eq!(err, ConfigError::MissingVar(ENV_AUTH_TOKEN));

        clear_all_vars();
    }

    #[test]
    fn test_from_env_treats_empty_as_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_vars();
        set_required_vars();
        // SAFETY: ENV_LOCK held.
        unsafe { std::env::set_var(ENV_TO_NUMBER, "   ") };

        let err = WatcherConfig::from_env().unwrap_err();
        assert_eq!(err, ConfigError::MissingVar(ENV_TO_NUMBER));

        clear_all_vars();
    }

    #[test]
    fn test_from_env_applies_url_overrides() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_vars();
        set_required_vars();
        // SAFETY: ENV_LOCK held.
        unsafe {
            std::env::set_var(ENV_DOCUMENT_URL, "https://example.test/report.pdf");
            std::env::set_var(ENV_REFERENCE_URL, "https://example.test/hash.txt");
        }

        let config = WatcherConfig::from_env().unwrap();
        assert_eq!(config.targets.document_url, "https://example.test/report.pdf");
        assert_eq!(config.targets.reference_url, "https://example.test/hash.txt");

        clear_all_vars();
    }
}
