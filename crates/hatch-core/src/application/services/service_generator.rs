//! Service Generator - main application orchestrator.
//!
//! Coordinates one `hatch service` run:
//! 1. Resolve the template for the config's kind
//! 2. Render it into the service directory
//! 3. Write the files (rolling back a directory this run created)
//! 4. Register the module in the aggregation file
//! 5. Delegate model creation for ORM-backed kinds
//!
//! Steps are not transactional across each other: a registry or model
//! failure leaves the written service files in place.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ModelGenerator, ModelOutcome, ModelRequest, TemplateRenderer, TemplateStore},
        services::registry_patcher::{PatchOutcome, RegistryPatcher},
    },
    domain::{
        DomainValidator as validator, GenerationConfig, ProjectLayout, ProjectStructure,
        RenderContext,
    },
    error::HatchResult,
};

/// Files a run would write, computed without touching the filesystem.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub service_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub registry_file: PathBuf,
    pub service_exists: bool,
    pub needs_model: bool,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub service_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub registry: PatchOutcome,
    pub model: Option<ModelOutcome>,
}

pub struct ServiceGenerator {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    models: Box<dyn ModelGenerator>,
}

impl ServiceGenerator {
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        models: Box<dyn ModelGenerator>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
            models,
        }
    }

    /// Render without writing; used by `--dry-run`.
    #[instrument(skip_all, fields(service = %config.name()))]
    pub fn plan(&self, config: &GenerationConfig, layout: &ProjectLayout) -> HatchResult<GenerationPlan> {
        let structure = self.render(config, layout)?;
        let service_dir = structure.root().to_path_buf();

        Ok(GenerationPlan {
            service_exists: self.filesystem.exists(&service_dir),
            files: structure.target_paths(),
            service_dir,
            registry_file: layout.registry_file(),
            needs_model: config.template_kind().requires_model(),
        })
    }

    /// Generate a service.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::ServiceExists` if the directory exists and
    ///   `force` is false. Nothing is written in that case.
    /// - Template, filesystem, registry and model errors propagate.
    #[instrument(
        skip_all,
        fields(
            service = %config.name(),
            template = %config.template_kind(),
            root = %layout.root().display()
        )
    )]
    pub fn generate(
        &self,
        config: &GenerationConfig,
        layout: &ProjectLayout,
        force: bool,
    ) -> HatchResult<GenerationReport> {
        info!("Generating {} service", config.template_kind());

        let structure = self.render(config, layout)?;
        let service_dir = structure.root().to_path_buf();

        let existed = self.filesystem.exists(&service_dir);
        if existed && !force {
            return Err(ApplicationError::ServiceExists { path: service_dir }.into());
        }
        if existed {
            warn!(path = %service_dir.display(), "Overwriting existing service files");
        }

        self.write_structure(&structure, !existed)?;

        let registry = RegistryPatcher::new(self.filesystem.as_ref()).patch(
            &layout.registry_file(),
            config.name().as_str(),
            &layout.module_path(config.name()),
        )?;

        let model = if config.template_kind().requires_model() {
            let request = ModelRequest {
                kind: config.template_kind(),
                name: config.name().clone(),
                service: config.name().clone(),
            };
            Some(self.models.generate(&request)?)
        } else {
            None
        };

        info!("Service generated");
        Ok(GenerationReport {
            service_dir,
            files: structure.target_paths(),
            registry,
            model,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn render(&self, config: &GenerationConfig, layout: &ProjectLayout) -> HatchResult<ProjectStructure> {
        let template = self.store.get(config.template_kind())?;
        validator::validate_template(&template)?;

        let context = RenderContext::new(config);
        let structure = self
            .renderer
            .render(&template, &context, &layout.service_dir(config.name()))?;
        validator::validate_project_structure(&structure)?;

        Ok(structure)
    }

    /// Write with rollback. Only a directory created by this call is removed.
    fn write_structure(&self, structure: &ProjectStructure, created: bool) -> HatchResult<()> {
        match self.write_all(structure) {
            Ok(()) => Ok(()),
            Err(e) if created => {
                warn!("Write failed, attempting rollback");
                self.rollback(structure.root());
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    fn write_all(&self, structure: &ProjectStructure) -> HatchResult<()> {
        self.filesystem.create_dir_all(structure.root())?;

        for file in structure.files() {
            let path = structure.root().join(&file.path);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &file.content)?;
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(error = %e, path = %root.display(), "Rollback failed");
        } else {
            info!("Rollback successful");
        }
    }
}
