//! Watch-cycle logic and port trait definitions for Fish Stalker.
//!
//! This crate defines the "ports" (fetcher, hasher, notifier traits) that
//! the infrastructure layer implements. It depends only on
//! `fishstalker-types` -- never on an HTTP client or hashing crate.

pub mod fetch;
pub mod notify;
pub mod service;
