//! SHA-256 fingerprinting of downloaded document bytes.
//!
//! Implements the `ContentHasher` trait from `fishstalker-core` using the
//! `sha2` crate (RustCrypto ecosystem).

use sha2::{Digest, Sha256};

use fishstalker_core::service::hash::ContentHasher;
use fishstalker_types::fingerprint::Fingerprint;

/// SHA-256 implementation of `ContentHasher`.
///
/// Computes canonical (uppercase hex) SHA-256 fingerprints of raw document
/// bytes.
pub struct Sha256Fingerprinter;

impl Sha256Fingerprinter {
    /// Create a new fingerprinter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sha256Fingerprinter {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentHasher for Sha256Fingerprinter {
    fn fingerprint(&self, content: &[u8]) -> Fingerprint {
        let digest = Sha256::digest(content);
        Fingerprint::from_digest(&digest)
    }
}
