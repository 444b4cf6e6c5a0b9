//! Infrastructure adapters for hatch.
//!
//! Implements the ports defined in `hatch_core::application::ports`. All
//! filesystem access and template sources live here.

pub mod builtin_templates;
pub mod filesystem;
pub mod model;
pub mod renderer;
pub mod template_loader;
pub mod template_store;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use model::TemplateModelGenerator;
pub use renderer::SimpleRenderer;
pub use template_loader::{FilesystemTemplateLoader, TemplateLoadError};
pub use template_store::InMemoryStore;
