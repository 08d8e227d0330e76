//! Shared domain types for Fish Stalker.
//!
//! This crate contains the domain types used across the watcher:
//! fingerprints, notifications, watch targets, cycle reports, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod error;
pub mod fingerprint;
pub mod notification;
pub mod report;
pub mod target;
