//! `hatch init` - prepare a project for service generation.
//!
//! Writes `.hatch.toml` with the layout in effect and creates the services
//! registry with its insertion marker. An existing registry is never
//! touched; an existing `.hatch.toml` only with `--force`.

use std::path::PathBuf;

use serde::Serialize;
use tracing::instrument;

use hatch_adapters::{LocalFilesystem, builtin_templates::registry_skeleton};
use hatch_core::application::Filesystem;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LayoutConfig},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Sections written by `init`; answers are added later by `hatch service`.
#[derive(Serialize)]
struct InitialConfig<'a> {
    layout: &'a LayoutConfig,
}

#[instrument(skip_all)]
pub fn execute(args: InitArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let project_dir = args.project_dir.unwrap_or_else(|| PathBuf::from("."));
    let filesystem = LocalFilesystem::new();

    let config_path = AppConfig::local_path(&project_dir);
    if filesystem.exists(&config_path) && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
    } else {
        let text = toml::to_string_pretty(&InitialConfig {
            layout: &config.layout,
        })
        .map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise default config: {e}"),
            source: Some(Box::new(e)),
        })?;
        filesystem.write_file(&config_path, &text)?;
        output.success(&format!("Configuration created at {}", config_path.display()))?;
    }

    let registry = config.layout(&project_dir).registry_file();
    if filesystem.exists(&registry) {
        output.info(&format!("Registry already present at {}", registry.display()))?;
    } else {
        if let Some(parent) = registry.parent() {
            filesystem.create_dir_all(parent)?;
        }
        filesystem.write_file(&registry, &registry_skeleton())?;
        output.success(&format!("Registry created at {}", registry.display()))?;
    }

    Ok(())
}
