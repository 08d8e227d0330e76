//! Watch targets: the two fixed remote resources a cycle reads.

use serde::{Deserialize, Serialize};

/// Default URL of the stocking report PDF.
pub const DEFAULT_DOCUMENT_URL: &str =
    "https://www.maine.gov/ifw/docs/current_stocking_report.pdf";

/// Default URL of the plain-text reference hash maintained alongside it.
pub const DEFAULT_REFERENCE_URL: &str =
    "https://fishstock.s3.us-east-2.amazonaws.com/fishstockhash.txt";

/// The pair of remote resources one watch cycle reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchTargets {
    /// The watched document.
    pub document_url: String,
    /// The text resource holding the expected fingerprint.
    pub reference_url: String,
}

impl Default for WatchTargets {
    fn default() -> Self {
        Self {
            document_url: DEFAULT_DOCUMENT_URL.to_string(),
            reference_url: DEFAULT_REFERENCE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets() {
        let targets = WatchTargets::default();
        assert_eq!(targets.document_url, DEFAULT_DOCUMENT_URL);
        assert_eq!(targets.reference_url, DEFAULT_REFERENCE_URL);
    }
}
