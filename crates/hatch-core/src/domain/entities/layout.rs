use std::path::{Path, PathBuf};

use crate::domain::entities::service_name::ServiceName;

pub const DEFAULT_SERVICES_DIR: &str = "src/services";
pub const DEFAULT_MODELS_DIR: &str = "src/models";
pub const REGISTRY_FILE_NAME: &str = "index.js";

/// Where generated code lands inside a project.
///
/// `services_dir` and `models_dir` are relative to `root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    services_dir: PathBuf,
    models_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            services_dir: PathBuf::from(DEFAULT_SERVICES_DIR),
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
        }
    }

    pub fn with_services_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.services_dir = dir.into();
        self
    }

    pub fn with_models_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.models_dir = dir.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn services_root(&self) -> PathBuf {
        self.root.join(&self.services_dir)
    }

    pub fn models_root(&self) -> PathBuf {
        self.root.join(&self.models_dir)
    }

    pub fn service_dir(&self, name: &ServiceName) -> PathBuf {
        self.services_root().join(name.as_str())
    }

    /// The aggregation file that imports every service.
    pub fn registry_file(&self) -> PathBuf {
        self.services_root().join(REGISTRY_FILE_NAME)
    }

    /// Import source of a service as seen from the registry file.
    pub fn module_path(&self, name: &ServiceName) -> String {
        format!("./{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_paths_from_root() {
        let layout = ProjectLayout::new("/work/app");
        let name = ServiceName::parse("messages").unwrap();

        assert_eq!(
            layout.service_dir(&name),
            PathBuf::from("/work/app/src/services/messages")
        );
        assert_eq!(
            layout.registry_file(),
            PathBuf::from("/work/app/src/services/index.js")
        );
        assert_eq!(layout.models_root(), PathBuf::from("/work/app/src/models"));
        assert_eq!(layout.module_path(&name), "./messages");
    }

    #[test]
    fn directories_are_configurable() {
        let layout = ProjectLayout::new("app")
            .with_services_dir("lib/services")
            .with_models_dir("lib/models");

        assert_eq!(layout.registry_file(), PathBuf::from("app/lib/services/index.js"));
        assert_eq!(layout.models_root(), PathBuf::from("app/lib/models"));
    }
}
