//! DocumentFetcher trait definition.

use fishstalker_types::error::FetchError;

/// Trait for remote resource retrieval (reference text, document bytes).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). The
/// implementation lives in fishstalker-infra (`HttpDocumentFetcher`).
pub trait DocumentFetcher: Send + Sync {
    /// Fetch a small plain-text resource (the reference fingerprint file).
    fn fetch_text(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<String, FetchError>> + Send;

    /// Fetch a binary resource (the watched document).
    fn fetch_bytes(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, FetchError>> + Send;
}
