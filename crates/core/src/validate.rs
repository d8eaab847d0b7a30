//! Cross-checks the document's declared Can I Use URLs against the dataset.
//!
//! Everything here is advisory: callers log the warnings and carry on.

use crate::catalog::CompatibilityCatalog;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyWarning {
    /// A declared URL that no dataset feature points into.
    UnmatchedUrl { url: String },
    /// Features tied to the declared URLs that the document never annotates,
    /// sorted by feature id, each with its canonical URL.
    UnannotatedFeatures { features: Vec<(String, String)> },
}

impl fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyWarning::UnmatchedUrl { url } => write!(
                f,
                "The Can I Use URL '{url}' isn't associated with any of the Can I Use features. \
                 Please check Can I Use for the correct spec url, and either correct your spec or correct Can I Use. \
                 If the URL is correct and you'd like to keep it in pre-emptively, \
                 add the URL to a 'Ignore Can I Use URL Failure' metadata."
            ),
            ConsistencyWarning::UnannotatedFeatures { features } => {
                write!(
                    f,
                    "The following Can I Use features are associated with your URLs, but don't show up in your spec:"
                )?;
                for (id, url) in features {
                    write!(f, "\n * {id} - {url}")?;
                }
                Ok(())
            }
        }
    }
}

/// Runs both consistency passes.
///
/// Pass one prefix-matches each declared URL against every feature's
/// canonical URL and warns about URLs that match nothing, unless ignored.
/// Ignored URLs still contribute their matches. Pass two reports matched
/// features missing from `annotated` as a single warning.
pub fn validate_urls(
    catalog: &CompatibilityCatalog,
    urls: &[String],
    ignored: &[String],
    annotated: &BTreeSet<String>,
) -> Vec<ConsistencyWarning> {
    let mut warnings = Vec::new();
    let mut matched: BTreeSet<&str> = BTreeSet::new();

    for url in urls {
        let mut saw_url = false;
        for (feature_id, feature_url) in catalog.feature_urls() {
            if feature_url.starts_with(url.as_str()) {
                saw_url = true;
                matched.insert(feature_id);
            }
        }
        if !saw_url && !ignored.contains(url) {
            warnings.push(ConsistencyWarning::UnmatchedUrl { url: url.clone() });
        }
    }

    let features: Vec<(String, String)> = matched
        .into_iter()
        .filter(|id| !annotated.contains(*id))
        .map(|id| {
            let url = catalog.feature_url(id).unwrap_or_default().to_string();
            (id.to_string(), url)
        })
        .collect();
    if !features.is_empty() {
        warnings.push(ConsistencyWarning::UnannotatedFeatures { features });
    }

    warnings
}
