//! Notifier trait definition.

use fishstalker_types::error::NotifyError;
use fishstalker_types::notification::{Notification, NotificationReceipt};

/// Trait for outbound notification backends (SMS, etc.).
///
/// One call is one send attempt -- retry policy, if any, belongs to the
/// caller. The implementation lives in fishstalker-infra
/// (`TwilioNotifier`).
pub trait Notifier: Send + Sync {
    /// Send a single notification and return the service's receipt.
    fn send(
        &self,
        notification: &Notification,
    ) -> impl std::future::Future<Output = Result<NotificationReceipt, NotifyError>> + Send;
}
