//! Filesystem-based template loader.
//!
//! Lets a project replace the built-in service templates with its own. Each
//! subdirectory holding a `template.toml` manifest becomes one
//! [`ServiceTemplate`]; every other file under it is a template file.
//!
//! # Directory layout expected
//!
//! ```text
//! templates/
//! ├── mongoose/
//! │   ├── template.toml        ← manifest (required)
//! │   ├── index.js
//! │   └── hooks/
//! │       └── index.js
//! └── generic/
//!     ├── template.toml
//!     └── index.js
//! ```
//!
//! # `template.toml` format
//!
//! ```toml
//! [template]
//! kind        = "mongoose"       # generic | memory | nedb | mongoose | sequelize
//! description = "Our mongoose service"   # optional
//!
//! # Optional: override per-file content type.
//! # If omitted, files containing {{ are treated as parameterized.
//! [[files]]
//! path = "hooks/index.js"
//! type = "literal"               # literal | parameterized
//! ```

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use hatch_core::domain::{
    DomainError, DomainValidator, FileSpec, RelativePath, ServiceTemplate, TemplateContent,
    TemplateKind, TemplateSource,
};

const MANIFEST_FILE: &str = "template.toml";

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum TemplateLoadError {
    #[error("templates directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a `template.toml` file.
#[derive(Debug, Deserialize, Clone)]
pub struct TemplateManifest {
    pub template: TemplateSection,
    /// Explicit per-file type overrides.
    pub files: Option<Vec<FileEntry>>,
}

/// `[template]` section.
#[derive(Debug, Deserialize, Clone)]
pub struct TemplateSection {
    /// Which template kind this directory replaces.
    pub kind: String,
    pub description: Option<String>,
}

/// One entry under `[[files]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct FileEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Copied verbatim.
    Literal,
    /// `{{VARIABLE}}` placeholders are substituted.
    Parameterized,
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads [`ServiceTemplate`]s from a directory of `template.toml` manifests.
///
/// Subdirectories that are missing `template.toml`, or whose manifest is
/// invalid, emit a `WARN` log and are skipped; they do not prevent other
/// templates from loading.
pub struct FilesystemTemplateLoader {
    templates_dir: PathBuf,
}

impl FilesystemTemplateLoader {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    /// Load every valid template found under the templates directory.
    ///
    /// # Errors
    ///
    /// Fails only when the directory itself is missing or unreadable.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load_all(&self) -> Result<Vec<ServiceTemplate>, TemplateLoadError> {
        if !self.templates_dir.is_dir() {
            return Err(TemplateLoadError::MissingDirectory(
                self.templates_dir.clone(),
            ));
        }

        let read_dir = fs::read_dir(&self.templates_dir).map_err(|source| TemplateLoadError::Io {
            path: self.templates_dir.clone(),
            source,
        })?;

        let mut dirs = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| TemplateLoadError::Io {
                path: self.templates_dir.clone(),
                source,
            })?;
            if entry.path().is_dir() {
                dirs.push(entry.path());
            }
        }
        dirs.sort();

        let mut templates = Vec::new();
        for dir in dirs {
            match load_template_from_dir(&dir) {
                Ok(template) => {
                    debug!(kind = %template.kind, files = template.file_count(), "loaded template");
                    templates.push(template);
                }
                Err(e) => {
                    warn!(
                        dir   = %dir.display(),
                        error = %e,
                        "skipping template directory due to load error"
                    );
                }
            }
        }

        debug!(count = templates.len(), "finished loading templates");
        Ok(templates)
    }
}

/// Load a single template from one subdirectory.
fn load_template_from_dir(dir: &Path) -> Result<ServiceTemplate, TemplateLoadError> {
    let manifest_path = dir.join(MANIFEST_FILE);
    let raw = fs::read_to_string(&manifest_path).map_err(|source| TemplateLoadError::Io {
        path: manifest_path.clone(),
        source,
    })?;

    let manifest: TemplateManifest =
        toml::from_str(&raw).map_err(|source| TemplateLoadError::Parse {
            path: manifest_path.clone(),
            source,
        })?;

    let kind: TemplateKind = manifest.template.kind.parse()?;
    let description = manifest
        .template
        .description
        .clone()
        .unwrap_or_else(|| kind.description().to_string());

    let overrides: HashMap<String, FileType> = manifest
        .files
        .iter()
        .flatten()
        .map(|f| (normalize_path(&f.path), f.file_type))
        .collect();

    let mut template = ServiceTemplate::new(kind, description);

    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry.path().strip_prefix(dir).map_err(|_| {
            DomainError::InvalidTemplate(format!(
                "failed to relativise '{}' against '{}'",
                entry.path().display(),
                dir.display()
            ))
        })?;
        let path_str = normalize_path(&rel.to_string_lossy());
        if path_str == MANIFEST_FILE {
            continue;
        }

        let content = fs::read_to_string(entry.path()).map_err(|source| TemplateLoadError::Io {
            path: entry.path().to_path_buf(),
            source,
        })?;

        let content = match overrides.get(&path_str) {
            Some(FileType::Literal) => TemplateContent::Literal(TemplateSource::Owned(content)),
            Some(FileType::Parameterized) => {
                TemplateContent::Parameterized(TemplateSource::Owned(content))
            }
            None => TemplateContent::detect(content),
        };

        template = template.with_file(FileSpec::new(RelativePath::try_new(path_str)?, content));
    }

    DomainValidator::validate_template(&template)?;
    Ok(template)
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
