//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into calls on `hatch-core` services wired to
//! `hatch-adapters`, then render the result through `OutputManager`.

use tracing::info;

use hatch_adapters::{FilesystemTemplateLoader, InMemoryStore};

use crate::{config::AppConfig, error::CliResult};

pub mod completions;
pub mod config;
pub mod init;
pub mod service;
pub mod templates;

/// Built-in templates, overlaid by `templates.local_path` when configured.
///
/// A template loaded from disk replaces the built-in of the same kind.
pub(crate) fn template_store(config: &AppConfig) -> CliResult<InMemoryStore> {
    let store = InMemoryStore::with_builtin()?;

    if let Some(dir) = &config.templates.local_path {
        let templates = FilesystemTemplateLoader::new(dir).load_all()?;
        info!(
            dir = %dir.display(),
            count = templates.len(),
            "Overriding built-in templates"
        );
        store.extend(templates)?;
    }

    Ok(store)
}
