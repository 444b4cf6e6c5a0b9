//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `HATCH_*` environment variables, `__` between sections
//!    (`HATCH_LAYOUT__SERVICES_DIR`), plus `HATCH_TEMPLATES_DIR`
//! 3. Project-local `.hatch.toml`
//! 4. Global file (`--config FILE` or the per-user config dir)
//! 5. Built-in defaults (always present)
//!
//! The project-local file is also where answers are remembered between
//! runs; see [`LocalConfigFile`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use hatch_core::domain::{
    Driver, ProjectLayout, PromptDefaults, ServiceCategory, ServiceName,
    entities::layout::{DEFAULT_MODELS_DIR, DEFAULT_SERVICES_DIR},
};

use crate::{
    cli::OutputFormat,
    error::{CliError, CliResult},
};

/// Name of the project-local configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".hatch.toml";

/// Variable pointing at a directory of replacement templates.
pub const TEMPLATES_DIR_ENV: &str = "HATCH_TEMPLATES_DIR";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Answers remembered from the previous run.
    pub defaults: PromptDefaults,
    /// Where services and models live inside the project.
    pub layout: LayoutConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub services_dir: PathBuf,
    pub models_dir: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            services_dir: PathBuf::from(DEFAULT_SERVICES_DIR),
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of `template.toml` manifests replacing the built-ins.
    pub local_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load and merge every configuration layer.
    ///
    /// `config_file` is the path given with `--config`; it must exist. The
    /// per-user file and `.hatch.toml` under `project_dir` are optional.
    pub fn load(config_file: Option<&Path>, project_dir: &Path) -> anyhow::Result<Self> {
        let global = match config_file {
            Some(path) => File::from(path.to_path_buf())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let local_path = Self::local_path(project_dir);
        debug!(local = %local_path.display(), "Loading configuration");

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(global)
            .add_source(
                File::from(local_path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("HATCH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option(
                "templates.local_path",
                std::env::var(TEMPLATES_DIR_ENV).ok(),
            )?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Path to the per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs`, falling back to `.hatch.toml` in the
    /// current directory when no home directory can be determined.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "hatch", "hatch")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    pub fn local_path(project_dir: &Path) -> PathBuf {
        project_dir.join(LOCAL_CONFIG_FILE)
    }

    /// Project layout rooted at `project_dir`.
    pub fn layout(&self, project_dir: &Path) -> ProjectLayout {
        ProjectLayout::new(project_dir)
            .with_services_dir(&self.layout.services_dir)
            .with_models_dir(&self.layout.models_dir)
    }

    /// Read one value by dotted key.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let value = match key {
            "defaults.service_type" => self
                .defaults
                .service_type
                .map(|t| t.to_string())
                .unwrap_or_default(),
            "defaults.database" => self
                .defaults
                .database
                .map(|d| d.to_string())
                .unwrap_or_default(),
            "defaults.name" => self.defaults.name.clone().unwrap_or_default(),
            "layout.services_dir" => self.layout.services_dir.display().to_string(),
            "layout.models_dir" => self.layout.models_dir.display().to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => format_name(self.output.format),
            "templates.local_path" => self
                .templates
                .local_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }
}

fn format_name(format: OutputFormat) -> String {
    format
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default()
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    }
}

// ── Project-local file ────────────────────────────────────────────────────────

/// Editable view of a project's `.hatch.toml`.
///
/// Only the keys being changed are touched; other sections are written back
/// as they were read.
#[derive(Debug)]
pub struct LocalConfigFile {
    path: PathBuf,
    table: toml::Table,
}

impl LocalConfigFile {
    /// Open the file under `project_dir`, starting empty when it does not exist.
    pub fn open(project_dir: &Path) -> CliResult<Self> {
        let path = AppConfig::local_path(project_dir);
        let table = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| CliError::IoError {
                message: format!("Failed to read '{}'", path.display()),
                source: e,
            })?;
            toml::from_str(&raw).map_err(|e| CliError::ConfigError {
                message: format!("Failed to parse '{}': {e}", path.display()),
                source: Some(Box::new(e)),
            })?
        } else {
            toml::Table::new()
        };

        Ok(Self { path, table })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set a dotted key after checking its value.
    pub fn set(&mut self, key: &str, raw: &str) -> CliResult<()> {
        let value = parse_value(key, raw)?;
        let (section, field) = key.split_once('.').ok_or_else(|| unknown_key(key))?;
        self.update_section(section, |table| {
            table.insert(field.to_string(), value);
        });
        Ok(())
    }

    /// Replace the remembered answers.
    pub fn set_defaults(&mut self, defaults: &PromptDefaults) {
        self.update_section("defaults", |section| {
            if let Some(service_type) = defaults.service_type {
                section.insert("service_type".into(), service_type.to_string().into());
            }
            if let Some(database) = defaults.database {
                section.insert("database".into(), database.to_string().into());
            }
            if let Some(name) = &defaults.name {
                section.insert("name".into(), name.clone().into());
            }
        });
    }

    pub fn save(&self) -> CliResult<()> {
        let text = toml::to_string_pretty(&self.table).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise '{}': {e}", self.path.display()),
            source: Some(Box::new(e)),
        })?;

        fs::write(&self.path, text).map_err(|e| CliError::IoError {
            message: format!("Failed to write '{}'", self.path.display()),
            source: e,
        })?;
        debug!(path = %self.path.display(), "Saved local configuration");
        Ok(())
    }

    /// A non-table value under `name` is replaced by a fresh table.
    fn update_section(&mut self, name: &str, update: impl FnOnce(&mut toml::Table)) {
        let mut section = match self.table.remove(name) {
            Some(toml::Value::Table(table)) => table,
            _ => toml::Table::new(),
        };
        update(&mut section);
        self.table.insert(name.to_string(), toml::Value::Table(section));
    }
}

/// Validate `raw` for `key` and convert it to the stored TOML value.
fn parse_value(key: &str, raw: &str) -> CliResult<toml::Value> {
    let invalid = |reason: String| CliError::InvalidInput {
        message: format!("'{raw}' is not a valid value for {key}: {reason}"),
        source: None,
    };

    let value: toml::Value = match key {
        "defaults.service_type" => raw
            .parse::<ServiceCategory>()
            .map_err(|e| invalid(e.to_string()))?
            .to_string()
            .into(),
        "defaults.database" => raw
            .parse::<Driver>()
            .map_err(|e| invalid(e.to_string()))?
            .to_string()
            .into(),
        "defaults.name" => ServiceName::parse(raw)
            .map_err(|e| invalid(e.to_string()))?
            .to_string()
            .into(),
        "layout.services_dir" | "layout.models_dir" | "templates.local_path" => {
            raw.to_string().into()
        }
        "output.no_color" => raw
            .parse::<bool>()
            .map_err(|e| invalid(e.to_string()))?
            .into(),
        "output.format" => {
            let format = OutputFormat::from_str(raw, true).map_err(invalid)?;
            format_name(format).into()
        }
        _ => return Err(unknown_key(key)),
    };
    Ok(value)
}
