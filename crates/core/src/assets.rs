//! Named script and style assets contributed to the output document.
//!
//! Assets are keyed by name, so contributing the same asset twice is a no-op.
//! Fragments appended to an existing style are tracked by their own name for
//! the same reason.

use indexmap::{IndexMap, IndexSet};

pub const PANEL_SCRIPT: &str = "script-caniuse-panel";
pub const PANEL_STYLE: &str = "style-caniuse-panel";
pub const DARKMODE_STYLE: &str = "style-darkmode";
pub const DARKMODE_FRAGMENT: &str = "caniuse-darkmode";

const PANEL_SCRIPT_BODY: &str = include_str!("../assets/caniuse-panel.js");
const PANEL_STYLE_BODY: &str = include_str!("../assets/caniuse-panel.css");
const DARKMODE_BODY: &str = include_str!("../assets/caniuse-darkmode.css");

#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    scripts: IndexMap<String, String>,
    styles: IndexMap<String, String>,
    appended: IndexSet<String>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a script. Returns `false` if `name` was already present.
    pub fn add_script(&mut self, name: &str, body: &str) -> bool {
        insert_once(&mut self.scripts, name, body)
    }

    /// Registers a style block. Returns `false` if `name` was already present.
    pub fn add_style(&mut self, name: &str, body: &str) -> bool {
        insert_once(&mut self.styles, name, body)
    }

    /// Appends `body` to the style `target`, creating it if needed.
    ///
    /// `fragment` names the appended piece; a second append under the same
    /// fragment name changes nothing and returns `false`.
    pub fn append_style(&mut self, target: &str, fragment: &str, body: &str) -> bool {
        if !self.appended.insert(fragment.to_string()) {
            return false;
        }
        let style = self.styles.entry(target.to_string()).or_default();
        if !style.is_empty() && !style.ends_with('\n') {
            style.push('\n');
        }
        style.push_str(body);
        true
    }

    pub fn script(&self, name: &str) -> Option<&str> {
        self.scripts.get(name).map(String::as_str)
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles.get(name).map(String::as_str)
    }

    /// Scripts in registration order.
    pub fn scripts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.scripts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Styles in registration order.
    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.styles.is_empty()
    }
}

fn insert_once(map: &mut IndexMap<String, String>, name: &str, body: &str) -> bool {
    if map.contains_key(name) {
        return false;
    }
    map.insert(name.to_string(), body.to_string());
    true
}

/// Adds the panel script, the panel stylesheet and the dark-mode overrides.
pub fn contribute_panel_assets(assets: &mut AssetRegistry) {
    let added = [
        assets.add_script(PANEL_SCRIPT, PANEL_SCRIPT_BODY),
        assets.add_style(PANEL_STYLE, PANEL_STYLE_BODY),
        assets.append_style(DARKMODE_STYLE, DARKMODE_FRAGMENT, DARKMODE_BODY),
    ];
    if added.iter().any(|&a| a) {
        log::debug!("Contributed Can I Use panel assets");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contribute_twice_is_idempotent() {
        let mut assets = AssetRegistry::new();
        contribute_panel_assets(&mut assets);
        let once: Vec<_> = assets.styles().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        contribute_panel_assets(&mut assets);
        let twice: Vec<_> = assets.styles().map(|(k, v)| (k.to_string(), v.to_string())).collect();

        assert_eq!(once, twice);
        assert_eq!(assets.scripts().count(), 1);
        assert_eq!(assets.styles().count(), 2);
        assert_eq!(assets.style(DARKMODE_STYLE).unwrap().matches("prefers-color-scheme").count(), 1);
    }

    #[test]
    fn test_append_extends_existing_style() {
        let mut assets = AssetRegistry::new();
        assets.add_style(DARKMODE_STYLE, "body { color: white; }");
        assert!(assets.append_style(DARKMODE_STYLE, "extra", ".x {}"));
        assert!(!assets.append_style(DARKMODE_STYLE, "extra", ".x {}"));
        assert_eq!(
            assets.style(DARKMODE_STYLE),
            Some("body { color: white; }\n.x {}")
        );
    }

    #[test]
    fn test_add_does_not_overwrite() {
        let mut assets = AssetRegistry::new();
        assert!(assets.add_script("s", "one"));
        assert!(!assets.add_script("s", "two"));
        assert_eq!(assets.script("s"), Some("one"));
    }

    #[test]
    fn test_panel_assets_content() {
        let mut assets = AssetRegistry::new();
        assert!(assets.is_empty());
        contribute_panel_assets(&mut assets);
        assert!(assets.script(PANEL_SCRIPT).unwrap().contains("caniuse-panel-btn"));
        assert!(assets.style(PANEL_STYLE).unwrap().contains(".caniuse-status"));
    }
}
