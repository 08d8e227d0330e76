//! ContentHasher trait for computing document fingerprints.
//!
//! Defined in fishstalker-core so the watch cycle can fingerprint content
//! without coupling to a specific hashing algorithm. The
//! `Sha256Fingerprinter` adapter lives in fishstalker-infra.

use fishstalker_types::fingerprint::Fingerprint;

/// Abstraction over content hashing for change detection.
pub trait ContentHasher: Send + Sync {
    /// Compute the canonical fingerprint of the given bytes.
    fn fingerprint(&self, content: &[u8]) -> Fingerprint;
}
