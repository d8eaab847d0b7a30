//! Renders a feature's support record into a collapsible panel fragment.

use crate::catalog::FeatureRecord;
use crate::status::{StatusToken, SupportCode};
use chrono::NaiveDate;
use compatkit_idf::Element;
use indexmap::IndexMap;

pub const FEATURE_URL_BASE: &str = "https://caniuse.com/#feat=";

/// Link to the public page for `feature_id`.
pub fn feature_page_url(feature_id: &str) -> String {
    format!("{FEATURE_URL_BASE}{feature_id}")
}

/// A rendered, not yet attached panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub feature_id: String,
    pub fragment: Element,
}

/// Builds the panel for one feature.
///
/// Rows follow the record's declaration order. Unknown-support rows are left
/// out, as are rows whose token can't be parsed.
pub fn render_panel(
    feature_id: &str,
    record: &FeatureRecord,
    as_of: NaiveDate,
    agents: &IndexMap<String, String>,
) -> Panel {
    let mut support = Element::new("p")
        .with_attr("class", "support")
        .with_child(Element::new("b").with_child("Support:"));

    for (browser, raw) in &record.support {
        let Some(token) = StatusToken::parse(raw) else {
            log::warn!(
                "Skipping malformed Can I Use status '{}' for {} in '{}'",
                raw,
                browser,
                feature_id
            );
            continue;
        };
        if token.code == SupportCode::Unknown {
            continue;
        }
        let name = agents.get(browser).map(String::as_str).unwrap_or_else(|| {
            log::debug!("No display name for browser '{browser}', using its code");
            browser.as_str()
        });
        support.push(browser_compat_span(browser, name, &token));
    }

    let source = Element::new("p")
        .with_attr("class", "caniuse")
        .with_child("Source: ")
        .with_child(
            Element::new("a")
                .with_attr("href", feature_page_url(feature_id))
                .with_child("caniuse.com"),
        )
        .with_child(format!(" as of {}", as_of.format("%Y-%m-%d")));

    let fragment = Element::new("aside")
        .with_attr("class", "caniuse-status wrapped")
        .with_attr("data-deco", "")
        .with_child(
            Element::new("input")
                .with_attr("value", "CanIUse")
                .with_attr("type", "button")
                .with_attr("class", "caniuse-panel-btn"),
        )
        .with_child(support)
        .with_child(source);

    Panel {
        feature_id: feature_id.to_string(),
        fragment,
    }
}

fn browser_compat_span(browser_code: &str, display_name: &str, token: &StatusToken<'_>) -> Element {
    let name = if token.code == SupportCode::Partial {
        Element::new("span")
            .with_child(Element::new("span").with_child(format!("{display_name} (limited)")))
    } else {
        Element::new("span").with_child(display_name)
    };
    Element::new("span")
        .with_attr("class", format!("{browser_code} {}", token.code.css_class()))
        .with_child(name)
        .with_child(Element::new("span").with_child(token.version_text()))
}
