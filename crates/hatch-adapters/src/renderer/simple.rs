//! Simple variable substitution renderer.

use std::path::Path;

use hatch_core::{
    application::ports::TemplateRenderer,
    domain::{ProjectStructure, RenderContext, ServiceTemplate, TemplateContent},
    error::HatchResult,
};
use tracing::{instrument, trace};

/// Renders `{{VARIABLE}}` placeholders; literal files are copied as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(template = %template.kind))]
    fn render(
        &self,
        template: &ServiceTemplate,
        context: &RenderContext,
        output_root: &Path,
    ) -> HatchResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(output_root);

        for spec in &template.files {
            let content = match &spec.content {
                TemplateContent::Literal(source) => source.as_str().to_string(),
                TemplateContent::Parameterized(source) => context.render(source.as_str()),
            };
            trace!(path = %spec.path, bytes = content.len(), "rendered file");
            structure.add_file(spec.path.as_path(), content);
        }

        Ok(structure)
    }
}
