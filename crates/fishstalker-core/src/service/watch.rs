//! The watch cycle: fetch the reference fingerprint, fetch the document,
//! compare digests, notify on change.
//!
//! `run_cycle` never returns an error. Every failure mode folds into the
//! returned [`CycleReport`], so the external invoker always sees a normal
//! completion: fetch failures abort the cycle early, a send failure is
//! reported but does not fail the invocation.

use tracing::{error, info};

use fishstalker_types::fingerprint::Fingerprint;
use fishstalker_types::notification::Notification;
use fishstalker_types::report::{AbortStage, CycleOutcome, CycleReport};
use fishstalker_types::target::WatchTargets;

use crate::fetch::DocumentFetcher;
use crate::notify::Notifier;
use crate::service::hash::ContentHasher;

/// One-shot change detector and notifier.
///
/// Generic over fetcher, hasher, and notifier to maintain the clean
/// architecture boundary -- no infrastructure dependencies in core.
pub struct WatchService<F: DocumentFetcher, H: ContentHasher, N: Notifier> {
    fetcher: F,
    hasher: H,
    notifier: N,
    targets: WatchTargets,
    alert: Notification,
}

impl<F, H, N> WatchService<F, H, N>
where
    F: DocumentFetcher,
    H: ContentHasher,
    N: Notifier,
{
    /// Create a watch service over the given ports and configuration.
    pub fn new(
        fetcher: F,
        hasher: H,
        notifier: N,
        targets: WatchTargets,
        alert: Notification,
    ) -> Self {
        Self {
            fetcher,
            hasher,
            notifier,
            targets,
            alert,
        }
    }

    /// Run one fetch-compare-notify cycle.
    pub async fn run_cycle(&self) -> CycleReport {
        let reference = match self.fetch_reference().await {
            Ok(fingerprint) => fingerprint,
            Err(reason) => {
                error!(%reason, "reference fingerprint fetch failed");
                return CycleReport::new(CycleOutcome::Aborted {
                    stage: AbortStage::ReferenceFetch,
                    reason,
                });
            }
        };

        let document = match self.fetcher.fetch_bytes(&self.targets.document_url).await {
            Ok(bytes) => bytes,
            Err(err) => {
                error!(error = %err, "document download failed");
                return CycleReport::new(CycleOutcome::Aborted {
                    stage: AbortStage::DocumentFetch,
                    reason: err.to_string(),
                });
            }
        };

        let computed = self.hasher.fingerprint(&document);

        if computed == reference {
            info!(fingerprint = %computed, "no change detected");
            return CycleReport::new(CycleOutcome::Unchanged);
        }

        info!(
            expected = %reference,
            actual = %computed,
            "document changed, sending notification"
        );

        match self.notifier.send(&self.alert).await {
            Ok(receipt) => {
                info!(message_sid = %receipt.message_sid, "notification sent");
                CycleReport::new(CycleOutcome::Notified {
                    message_sid: receipt.message_sid,
                })
            }
            Err(err) => {
                error!(error = %err, "notification send failed");
                CycleReport::new(CycleOutcome::NotificationFailed {
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Fetch the reference text and canonicalize it. Both a failed fetch
    /// and a malformed value abort at the reference stage.
    async fn fetch_reference(&self) -> Result<Fingerprint, String> {
        let text = self
            .fetcher
            .fetch_text(&self.targets.reference_url)
            .await
            .map_err(|e| e.to_string())?;
        Fingerprint::parse(&text).map_err(|e| e.to_string())
    }
}
