use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// The rendered files of one service, relative to its directory.
///
/// Produced by a renderer, consumed by the generator's write step.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) files: Vec<FileToWrite>,
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

impl ProjectStructure {
    /// `root` is the service directory, e.g. `src/services/messages`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.files.push(FileToWrite {
            path: path.into(),
            content,
        });
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    /// Non-empty, no path twice, nothing outside `root`.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::InvalidTemplate(format!(
                "Nothing rendered for '{}'",
                self.root.display()
            )));
        }

        let mut seen: HashSet<&Path> = HashSet::new();
        for file in &self.files {
            let path = file.path.as_path();
            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }

            let leaves_root = path
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
            if leaves_root {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[FileToWrite] {
        &self.files
    }

    /// Absolute (root-joined) target of every file, in render order.
    pub fn target_paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| self.root.join(&f.path)).collect()
    }
}
