//! Document metadata consumed by the annotator.

use serde::Deserialize;

/// Per-document switches for Can I Use panels.
///
/// Field names follow the JSON metadata keys, e.g.
/// `{"includeCanIUsePanels": true, "canIUseUrls": ["https://drafts.csswg.org/css-grid/"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompatMetadata {
    #[serde(rename = "includeCanIUsePanels")]
    pub include_panels: bool,
    /// Spec URLs the document expects Can I Use features to point into.
    #[serde(rename = "canIUseUrls")]
    pub urls: Vec<String>,
    /// URLs exempt from the "matches no feature" warning.
    #[serde(rename = "ignoreCanIUseUrlFailure")]
    pub ignore_url_failures: Vec<String>,
}

impl CompatMetadata {
    /// Metadata with panels switched on and no URL checks.
    pub fn enabled() -> Self {
        Self {
            include_panels: true,
            ..Default::default()
        }
    }

    pub fn with_urls(mut self, urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.urls = urls.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ignored_urls(mut self, urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ignore_url_failures = urls.into_iter().map(Into::into).collect();
        self
    }
}
