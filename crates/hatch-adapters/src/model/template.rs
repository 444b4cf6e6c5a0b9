//! Model generator that renders a built-in model definition into the
//! project's models directory.

use std::path::PathBuf;

use hatch_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, ModelGenerator, ModelOutcome, ModelRequest},
    },
    domain::RenderContext,
    error::HatchResult,
};
use tracing::{info, instrument};

use crate::builtin_templates;

/// Writes `<models_root>/<name>.model.js`. An existing file is kept as is.
#[derive(Debug, Clone)]
pub struct TemplateModelGenerator<F> {
    filesystem: F,
    models_root: PathBuf,
}

impl<F: Filesystem> TemplateModelGenerator<F> {
    pub fn new(filesystem: F, models_root: impl Into<PathBuf>) -> Self {
        Self {
            filesystem,
            models_root: models_root.into(),
        }
    }

    pub fn model_path(&self, request: &ModelRequest) -> PathBuf {
        self.models_root.join(format!("{}.model.js", request.name))
    }
}

impl<F: Filesystem> ModelGenerator for TemplateModelGenerator<F> {
    #[instrument(skip_all, fields(model = %request.name, kind = %request.kind))]
    fn generate(&self, request: &ModelRequest) -> HatchResult<ModelOutcome> {
        let source = builtin_templates::model_source(request.kind).ok_or_else(|| {
            ApplicationError::ModelGenerationFailed {
                name: request.name.to_string(),
                reason: format!("no model template for '{}' services", request.kind),
            }
        })?;

        let path = self.model_path(request);
        if self.filesystem.exists(&path) {
            info!(path = %path.display(), "Model already exists, keeping it");
            return Ok(ModelOutcome::Kept(path));
        }

        let content = RenderContext::for_name(&request.name)
            .with_variable("TEMPLATE_KIND", request.kind.as_str())
            .with_variable("SERVICE", request.service.as_str())
            .render(source);

        self.filesystem.create_dir_all(&self.models_root)?;
        self.filesystem.write_file(&path, &content)?;

        info!(path = %path.display(), "Model created");
        Ok(ModelOutcome::Created(path))
    }
}
