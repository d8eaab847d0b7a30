use super::config::FailurePolicy;
use crate::error::PipelineError;
use compatkit_core::{
    AnnotationReport, BuildContext, CompatMetadata, DataSource, add_compat_panels,
};
use compatkit_idf::Document;
use std::sync::Arc;

/// Runs the Can I Use pass over documents.
///
/// The annotator itself holds only configuration. Dataset state lives in the
/// `BuildContext` handed out by [`new_build`](Self::new_build), so separate
/// builds never see each other's catalog.
pub struct DocumentAnnotator {
    source: Arc<dyn DataSource>,
    metadata: CompatMetadata,
    failure_policy: FailurePolicy,
}

impl DocumentAnnotator {
    pub(crate) fn new(
        source: Arc<dyn DataSource>,
        metadata: CompatMetadata,
        failure_policy: FailurePolicy,
    ) -> Self {
        Self {
            source,
            metadata,
            failure_policy,
        }
    }

    pub fn metadata(&self) -> &CompatMetadata {
        &self.metadata
    }

    /// Fresh build-scoped state. Use one per build.
    pub fn new_build(&self) -> BuildContext {
        BuildContext::new(Arc::clone(&self.source))
    }

    /// Annotates `doc` in place.
    ///
    /// Under `FailurePolicy::Strict`, per-element errors turn into
    /// `PipelineError::Annotation` after the whole document has been scanned.
    pub fn annotate(
        &self,
        doc: &mut Document,
        ctx: &mut BuildContext,
    ) -> Result<AnnotationReport, PipelineError> {
        let report = add_compat_panels(doc, &self.metadata, ctx)?;
        if !report.is_success() && self.failure_policy == FailurePolicy::Strict {
            return Err(PipelineError::Annotation(report.errors));
        }
        Ok(report)
    }

    /// Convenience wrapper: one build, one document, rendered to HTML.
    pub fn annotate_to_html(&self, doc: &mut Document) -> Result<String, PipelineError> {
        let mut ctx = self.new_build();
        self.annotate(doc, &mut ctx)?;
        Ok(render_html(doc, &ctx))
    }
}

/// Serializes `doc` with the build's assets.
///
/// Styles precede the body and scripts follow it, each in registration order.
pub fn render_html(doc: &Document, ctx: &BuildContext) -> String {
    let mut out = String::new();
    for (name, body) in ctx.assets().styles() {
        out.push_str(&format!("<style id=\"{name}\">\n{body}</style>\n"));
    }
    out.push_str(&doc.to_html());
    out.push('\n');
    for (name, body) in ctx.assets().scripts() {
        out.push_str(&format!("<script id=\"{name}\">\n{body}</script>\n"));
    }
    out
}
