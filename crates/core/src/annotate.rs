//! Finds `caniuse`-annotated elements and attaches support panels to them.

use crate::assets::{AssetRegistry, contribute_panel_assets};
use crate::catalog::CompatibilityCatalog;
use crate::error::{AnnotationError, CatalogError};
use crate::metadata::CompatMetadata;
use crate::panel::render_panel;
use crate::validate::{ConsistencyWarning, validate_urls};
use compatkit_idf::Element;
use compatkit_traits::{DataSource, DocumentTree};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Attribute holding the feature id on annotated elements.
pub const CANIUSE_ATTR: &str = "caniuse";
/// Class added to every annotated element.
pub const PANELED_CLASS: &str = "caniuse-paneled";
/// Attribute on a panel naming the id of the element it describes.
pub const DFN_ID_ATTR: &str = "data-dfn-id";

/// State owned by a single build.
///
/// The catalog is created on first use and lives as long as the context.
/// Never share a context between builds; create one per build instead.
pub struct BuildContext {
    source: Arc<dyn DataSource>,
    catalog: Option<CompatibilityCatalog>,
    assets: AssetRegistry,
}

impl fmt::Debug for BuildContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildContext")
            .field("source", &self.source.name())
            .field("catalog", &self.catalog)
            .field("assets", &self.assets)
            .finish()
    }
}

impl BuildContext {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            catalog: None,
            assets: AssetRegistry::new(),
        }
    }

    /// The catalog, if any annotation has needed it yet.
    pub fn catalog(&self) -> Option<&CompatibilityCatalog> {
        self.catalog.as_ref()
    }

    pub fn assets(&self) -> &AssetRegistry {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut AssetRegistry {
        &mut self.assets
    }

    fn catalog_mut(&mut self) -> Result<&mut CompatibilityCatalog, CatalogError> {
        let catalog = match self.catalog.take() {
            Some(catalog) => catalog,
            None => CompatibilityCatalog::load(Arc::clone(&self.source))?,
        };
        Ok(self.catalog.insert(catalog))
    }
}

/// Outcome of one annotation pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AnnotationReport {
    /// Ids of the elements that received a panel, in document order.
    pub panels: Vec<String>,
    pub errors: Vec<AnnotationError>,
    pub warnings: Vec<ConsistencyWarning>,
}

impl AnnotationReport {
    /// True when no element-level error was recorded.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

struct Request<T> {
    el: T,
    feature: String,
    tag: String,
}

/// Replaces every `caniuse` attribute in `doc` with a support panel.
///
/// Per-element problems are collected in the report and do not stop the
/// pass. Only a failure to load the dataset is returned as an error.
pub fn add_compat_panels<T>(
    doc: &mut T,
    metadata: &CompatMetadata,
    ctx: &mut BuildContext,
) -> Result<AnnotationReport, CatalogError>
where
    T: DocumentTree<Fragment = Element>,
{
    let mut report = AnnotationReport::default();
    if !metadata.include_panels {
        log::debug!("Can I Use panels disabled for this document");
        return Ok(report);
    }

    let elements = doc.find_all_with_attribute(CANIUSE_ATTR);
    if elements.is_empty() {
        return Ok(report);
    }

    // Tags are captured before the attribute goes away so diagnostics still
    // show what the author wrote.
    let requests: Vec<Request<T::Handle>> = elements
        .into_iter()
        .map(|el| {
            let tag = doc.serialize_tag(el);
            let feature = doc
                .remove_attribute(el, CANIUSE_ATTR)
                .unwrap_or_default()
                .trim()
                .to_lowercase();
            Request { el, feature, tag }
        })
        .collect();
    let annotated: BTreeSet<String> = requests
        .iter()
        .filter(|r| !r.feature.is_empty())
        .map(|r| r.feature.clone())
        .collect();

    let catalog = ctx.catalog_mut()?;
    report.warnings = validate_urls(
        catalog,
        &metadata.urls,
        &metadata.ignore_url_failures,
        &annotated,
    );
    for warning in &report.warnings {
        log::warn!("{warning}");
    }

    let as_of = catalog.updated_date();
    let body = doc.body();
    for Request { el, feature, tag } in requests {
        if feature.is_empty() {
            log::debug!("Ignoring empty caniuse attribute on {tag}");
            continue;
        }
        doc.add_class(el, PANELED_CLASS);

        if !catalog.has_feature(&feature) {
            let err = AnnotationError::UnrecognizedFeature {
                feature,
                element: tag,
            };
            log::error!("{err}");
            report.errors.push(err);
            continue;
        }
        let Some(dfn_id) = doc
            .get_attribute(el, "id")
            .filter(|id| !id.is_empty())
            .map(str::to_string)
        else {
            let err = AnnotationError::MissingId { element: tag };
            log::error!("{err}");
            report.errors.push(err);
            continue;
        };

        let record = catalog.get_feature(&feature)?;
        let panel = render_panel(&feature, &record, as_of, catalog.agents());
        let handle = doc.append_child(body, panel.fragment);
        doc.set_attribute(handle, DFN_ID_ATTR, &dfn_id);
        report.panels.push(dfn_id);
    }

    if !report.panels.is_empty() {
        contribute_panel_assets(&mut ctx.assets);
    }
    log::info!(
        "Can I Use: {} panel(s), {} error(s), {} warning(s)",
        report.panels.len(),
        report.errors.len(),
        report.warnings.len()
    );
    Ok(report)
}
