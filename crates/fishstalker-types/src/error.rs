use thiserror::Error;

/// Errors from fetching a remote resource (reference text or document).
///
/// Derives `Clone`/`PartialEq` so test doubles can replay stored errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },
}

/// Errors from canonicalizing a fingerprint value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FingerprintError {
    #[error("fingerprint value is empty")]
    Empty,

    #[error("fingerprint value '{value}' is not hexadecimal")]
    NotHex { value: String },
}

/// Errors raised by the messaging client during a send.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    #[error("messaging authentication failed")]
    AuthenticationFailed,

    #[error("messaging service rate limited the send")]
    RateLimited,

    #[error("messaging API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Errors from loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}
