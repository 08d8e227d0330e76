//! Content fingerprints for change detection.
//!
//! A [`Fingerprint`] is the canonical form of a hex digest: trimmed of
//! surrounding whitespace and uppercased. The remotely hosted reference
//! value and the locally computed digest are both normalized through this
//! type, which makes the change comparison case-insensitive.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FingerprintError;

/// A canonical (uppercase hex) content fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Parse a fingerprint from raw text.
    ///
    /// Trims surrounding whitespace (a trailing newline is the common case
    /// for a hash file in object storage) and uppercases the remainder.
    /// Rejects empty input and anything that is not plain hex. Length is
    /// not checked -- the reference resource decides the digest width.
    pub fn parse(raw: &str) -> Result<Self, FingerprintError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FingerprintError::Empty);
        }
        if !trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FingerprintError::NotHex {
                value: trimmed.to_string(),
            });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Render raw digest bytes as a canonical fingerprint.
    pub fn from_digest(bytes: &[u8]) -> Self {
        Self(bytes.iter().map(|b| format!("{b:02X}")).collect())
    }

    /// The canonical uppercase hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercases() {
        let fp = Fingerprint::parse("abcd1234").unwrap();
        assert_eq!(fp.as_str(), "ABCD1234");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        // Hash files in object storage usually end with a newline.
        let fp = Fingerprint::parse("ABCD1234\n").unwrap();
        assert_eq!(fp.as_str(), "ABCD1234");

        let fp = Fingerprint::parse("  abcd1234  ").unwrap();
        assert_eq!(fp.as_str(), "ABCD1234");
    }

    #[test]
    fn test_parse_case_insensitive_equality() {
        let upper = Fingerprint::parse("1234ABCD").unwrap();
        let lower = Fingerprint::parse("1234abcd").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(Fingerprint::parse(""), Err(FingerprintError::Empty));
        assert_eq!(Fingerprint::parse("   \n"), Err(FingerprintError::Empty));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let err = Fingerprint::parse("not a hash").unwrap_err();
        assert!(matches!(err, FingerprintError::NotHex { .. }));
    }

    #[test]
    fn test_from_digest_renders_uppercase_hex() {
        let fp = Fingerprint::from_digest(&[0x00, 0xab, 0xcd, 0xff]);
        assert_eq!(fp.as_str(), "00ABCDFF");
    }

    #[test]
    fn test_display_matches_as_str() {
        let fp = Fingerprint::parse("deadbeef").unwrap();
        assert_eq!(fp.to_string(), "DEADBEEF");
    }
}
