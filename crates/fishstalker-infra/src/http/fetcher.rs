//! Reqwest-based implementation of the `DocumentFetcher` port.

use std::time::Duration;

use fishstalker_core::fetch::DocumentFetcher;
use fishstalker_types::error::FetchError;

/// HTTP fetcher for the reference text and the watched document.
///
/// Non-success statuses map to [`FetchError::Status`]; connection and
/// timeout failures map to [`FetchError::Transport`].
pub struct HttpDocumentFetcher {
    client: reqwest::Client,
}

impl HttpDocumentFetcher {
    /// Default request timeout. The stocking report is a multi-megabyte
    /// PDF served from a slow state server.
    const TIMEOUT: Duration = Duration::from_secs(60);

    /// Create a new fetcher with the default timeout.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .expect("failed to create reqwest client");
        Self { client }
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

impl Default for HttpDocumentFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFetcher for HttpDocumentFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let bytes = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
