//! Small in-memory dataset shared by the unit tests.

use crate::catalog::{DATA_NAMESPACE, INDEX_RESOURCE, feature_resource_name};
use compatkit_traits::InMemoryDataSource;
use serde_json::json;
use std::sync::Arc;

pub const UPDATED: i64 = 1_577_836_800; // 2020-01-01T00:00:00Z

pub fn sample_index() -> serde_json::Value {
    json!({
        "updated": UPDATED,
        "agents": {
            "chrome": "Chrome",
            "edge": "Edge",
            "firefox": "Firefox",
            "ie": "IE",
            "op_mini": "Opera Mini",
            "safari": "Safari"
        },
        "features": {
            "flexbox": "https://www.w3.org/TR/css-flexbox-1/",
            "grid": "https://www.w3.org/TR/css-grid-1/#grid-containers",
            "css-subgrid": "https://www.w3.org/TR/css-grid-2/#subgrids",
            "fetch": "https://fetch.spec.whatwg.org/"
        }
    })
}

// Raw text keeps the declaration order of the support rows.
const SAMPLE_FEATURES: &[(&str, &str)] = &[
    (
        "flexbox",
        r#"{"title": "CSS Flexible Box Layout Module", "support": {
            "safari": "y  9",
            "chrome": "y  29",
            "ie": "a  11",
            "firefox": "y  28",
            "op_mini": "n"
        }}"#,
    ),
    (
        "grid",
        r#"{"support": {"chrome": "y  57", "edge": "u", "firefox": "a  all"}}"#,
    ),
    (
        "css-subgrid",
        r#"{"support": {"firefox": "y  71", "chrome": "n  117"}}"#,
    ),
    ("fetch", r#"{"support": {"chrome": "y  42"}}"#),
];

pub fn source_with_index(index: &str) -> Arc<InMemoryDataSource> {
    let source = InMemoryDataSource::new();
    source.add(DATA_NAMESPACE, INDEX_RESOURCE, index).unwrap();
    Arc::new(source)
}

pub fn sample_source() -> Arc<InMemoryDataSource> {
    let source = source_with_index(&sample_index().to_string());
    for (id, record) in SAMPLE_FEATURES {
        source
            .add(DATA_NAMESPACE, &feature_resource_name(id), *record)
            .unwrap();
    }
    source
}
