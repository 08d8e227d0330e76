//! Cryptographic operations for Fish Stalker.
//!
//! - `hash`: SHA-256 fingerprinting of downloaded document bytes

pub mod hash;
