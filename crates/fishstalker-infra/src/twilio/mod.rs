//! Twilio messaging client.
//!
//! This module provides the [`TwilioNotifier`] which implements the
//! [`Notifier`](fishstalker_core::notify::Notifier) trait against the
//! Twilio Messages API.

pub mod client;
pub mod types;

pub use client::TwilioNotifier;
