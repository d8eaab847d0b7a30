use compatkit::InMemoryDataSource;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// 2020-01-01T00:00:00Z
pub const UPDATED: i64 = 1_577_836_800;

pub fn sample_index() -> Value {
    json!({
        "updated": UPDATED,
        "agents": {
            "chrome": "Chrome",
            "firefox": "Firefox",
            "ie": "IE",
            "safari": "Safari"
        },
        "features": {
            "flexbox": "https://www.w3.org/TR/css-flexbox-1/",
            "grid": "https://www.w3.org/TR/css-grid-1/",
            "fetch": "https://fetch.spec.whatwg.org/"
        }
    })
}

/// Feature files as raw text so support rows keep their declared order.
pub const FEATURES: &[(&str, &str)] = &[
    (
        "flexbox",
        r#"{"support": {"chrome": "y  29", "ie": "a  11", "firefox": "y  28", "safari": "n"}}"#,
    ),
    (
        "grid",
        r#"{"support": {"chrome": "y  57", "ie": "u", "firefox": "a  all"}}"#,
    ),
    ("fetch", r#"{"support": {"chrome": "y  42"}}"#),
];

pub fn memory_source() -> Arc<InMemoryDataSource> {
    let source = InMemoryDataSource::new();
    source
        .add("caniuse", "data.json", &sample_index().to_string())
        .unwrap();
    for (id, record) in FEATURES {
        source
            .add("caniuse", &format!("feature-{id}.json"), *record)
            .unwrap();
    }
    Arc::new(source)
}

/// Lays the dataset out under `<dir>/caniuse/`.
pub fn write_data_dir(dir: &Path) -> std::io::Result<()> {
    let caniuse = dir.join("caniuse");
    fs::create_dir_all(&caniuse)?;
    fs::write(caniuse.join("data.json"), sample_index().to_string())?;
    for (id, record) in FEATURES {
        fs::write(caniuse.join(format!("feature-{id}.json")), record)?;
    }
    Ok(())
}
