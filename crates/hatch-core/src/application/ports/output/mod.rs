//! Driven (output) ports - implemented by infrastructure.

use std::path::{Path, PathBuf};

use crate::domain::{
    ProjectStructure, Question, RenderContext, ServiceName, ServiceTemplate, TemplateKind,
};
use crate::error::HatchResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `hatch_adapters::LocalFilesystem` (production)
/// - `hatch_adapters::MemoryFilesystem` (testing, dry runs)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> HatchResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> HatchResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> HatchResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> HatchResult<()>;
}

/// Port for service template lookup.
///
/// Implemented by `hatch_adapters::InMemoryStore`, seeded with the built-in
/// templates and optionally overlaid from a templates directory.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get the template for a kind.
    fn get(&self, kind: TemplateKind) -> HatchResult<ServiceTemplate>;

    /// List all available templates.
    fn list(&self) -> HatchResult<Vec<ServiceTemplate>>;

    /// Insert or replace the template for its kind.
    fn insert(&self, template: ServiceTemplate) -> HatchResult<()>;
}

/// Port for template rendering.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render a template into a structure rooted at `output_root`.
    fn render(
        &self,
        template: &ServiceTemplate,
        context: &RenderContext,
        output_root: &Path,
    ) -> HatchResult<ProjectStructure>;
}

/// Request handed to the model generator for ORM-backed services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    pub kind: TemplateKind,
    pub name: ServiceName,
    pub service: ServiceName,
}

/// What the model generator did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOutcome {
    Created(PathBuf),
    /// A model file already existed and was left untouched.
    Kept(PathBuf),
}

impl ModelOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(path) | Self::Kept(path) => path,
        }
    }
}

/// Port for the delegated model generation step.
#[cfg_attr(test, mockall::automock)]
pub trait ModelGenerator: Send + Sync {
    fn generate(&self, request: &ModelRequest) -> HatchResult<ModelOutcome>;
}

/// Port for asking the user one question.
///
/// Returns the chosen value: a choice's `value` for selects, the entered
/// text for inputs.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    fn ask(&self, question: &Question) -> HatchResult<String>;
}
