//! Build-scoped view of the Can I Use dataset.
//!
//! The index (`caniuse/data.json`) is read once when the catalog is created.
//! Per-feature records (`caniuse/feature-<id>.json`) are fetched on first
//! request and memoized for the life of the catalog.

use crate::error::CatalogError;
use chrono::{DateTime, NaiveDate};
use compatkit_traits::DataSource;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub const DATA_NAMESPACE: &str = "caniuse";
pub const INDEX_RESOURCE: &str = "data.json";

/// Resource name holding the support record for `feature_id`.
pub fn feature_resource_name(feature_id: &str) -> String {
    format!("feature-{feature_id}.json")
}

/// On-disk form of the dataset index.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetIndex {
    /// Epoch seconds.
    pub updated: i64,
    #[serde(default)]
    pub agents: IndexMap<String, String>,
    pub features: IndexMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct FeatureFile {
    #[serde(default)]
    support: IndexMap<String, String>,
}

/// Support rows for one feature, in the order the dataset lists them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureRecord {
    pub feature_id: String,
    /// browser code -> status token
    pub support: IndexMap<String, String>,
}

impl FeatureRecord {
    pub fn empty(feature_id: impl Into<String>) -> Self {
        Self {
            feature_id: feature_id.into(),
            support: IndexMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.support.is_empty()
    }
}

pub struct CompatibilityCatalog {
    source: Arc<dyn DataSource>,
    updated: i64,
    updated_date: NaiveDate,
    agents: IndexMap<String, String>,
    /// normalized feature id -> canonical spec URL
    features: IndexMap<String, String>,
    cache: HashMap<String, Arc<FeatureRecord>>,
}

impl fmt::Debug for CompatibilityCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompatibilityCatalog")
            .field("source", &self.source.name())
            .field("updated", &self.updated)
            .field("features", &self.features.len())
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl CompatibilityCatalog {
    /// Loads the dataset index from `source`.
    pub fn load(source: Arc<dyn DataSource>) -> Result<Self, CatalogError> {
        let index: DatasetIndex = fetch_json(source.as_ref(), INDEX_RESOURCE)?;
        let updated_date = DateTime::from_timestamp(index.updated, 0)
            .map(|dt| dt.date_naive())
            .ok_or(CatalogError::InvalidTimestamp(index.updated))?;
        let features = index
            .features
            .into_iter()
            .map(|(id, url)| (id.to_lowercase(), url))
            .collect::<IndexMap<_, _>>();

        log::debug!(
            "Loaded Can I Use index from {}: {} features, {} agents, updated {}",
            source.name(),
            features.len(),
            index.agents.len(),
            updated_date
        );

        Ok(Self {
            source,
            updated: index.updated,
            updated_date,
            agents: index.agents,
            features,
            cache: HashMap::new(),
        })
    }

    /// Dataset update time in epoch seconds.
    pub fn updated(&self) -> i64 {
        self.updated
    }

    /// Dataset update time as a UTC calendar date.
    pub fn updated_date(&self) -> NaiveDate {
        self.updated_date
    }

    /// browser code -> display name
    pub fn agents(&self) -> &IndexMap<String, String> {
        &self.agents
    }

    /// Every indexed feature with its canonical URL, in dataset order.
    pub fn feature_urls(&self) -> &IndexMap<String, String> {
        &self.features
    }

    pub fn feature_url(&self, feature_id: &str) -> Option<&str> {
        self.features
            .get(&feature_id.to_lowercase())
            .map(String::as_str)
    }

    pub fn has_feature(&self, feature_id: &str) -> bool {
        self.features.contains_key(&feature_id.to_lowercase())
    }

    /// Number of feature records fetched so far.
    pub fn cached_feature_count(&self) -> usize {
        self.cache.len()
    }

    /// Returns the support record for `feature_id`, fetching it on first use.
    ///
    /// Ids missing from the index yield an empty record without touching the
    /// data source; check [`has_feature`](Self::has_feature) first when the
    /// id needs validating.
    pub fn get_feature(&mut self, feature_id: &str) -> Result<Arc<FeatureRecord>, CatalogError> {
        let key = feature_id.to_lowercase();
        if let Some(record) = self.cache.get(&key) {
            log::trace!("Can I Use cache hit for '{key}'");
            return Ok(Arc::clone(record));
        }
        if !self.has_feature(&key) {
            return Ok(Arc::new(FeatureRecord::empty(key)));
        }

        let file: FeatureFile = fetch_json(self.source.as_ref(), &feature_resource_name(&key))?;
        log::debug!(
            "Fetched Can I Use feature '{}' ({} browsers)",
            key,
            file.support.len()
        );
        let record = Arc::new(FeatureRecord {
            feature_id: key.clone(),
            support: file.support,
        });
        self.cache.insert(key, Arc::clone(&record));
        Ok(record)
    }
}

fn fetch_json<T: DeserializeOwned>(source: &dyn DataSource, name: &str) -> Result<T, CatalogError> {
    let resource = format!("{DATA_NAMESPACE}/{name}");
    let text = source
        .fetch(DATA_NAMESPACE, name)
        .map_err(|source| CatalogError::Fetch {
            resource: resource.clone(),
            source,
        })?;
    serde_json::from_str(&text).map_err(|source| CatalogError::Parse { resource, source })
}
