//! `hatch config` - read and write configuration values.

use std::path::Path;

use serde_json::json;

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, LocalConfigFile},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: &AppConfig,
    project_dir: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key)?;
            if output.is_json() {
                output.json(&json!({ key: value }))?;
            } else {
                println!("{value}");
            }
        }

        ConfigCommands::Set { key, value } => {
            let mut file = LocalConfigFile::open(project_dir)?;
            file.set(&key, &value)?;
            file.save()?;
            output.success(&format!("{key} = {value} ({})", file.path().display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(config)?;
            } else {
                let serialised =
                    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                println!("{serialised}");
            }
        }

        ConfigCommands::Path => {
            let global = AppConfig::config_path();
            let local = AppConfig::local_path(project_dir);
            if output.is_json() {
                output.json(&json!({ "global": global, "local": local }))?;
            } else {
                println!("global: {}", global.display());
                println!("local:  {}", local.display());
            }
        }
    }

    Ok(())
}
