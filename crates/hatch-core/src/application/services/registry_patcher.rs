//! Registry Patcher - registers a generated module in the aggregation file.
//!
//! Reads the registry once, applies [`RegistryEntry::apply`] in memory and
//! writes it back once. There is no locking: two concurrent runs against the
//! same registry are last-writer-wins.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{Anchor, RegistryEdit, RegistryEntry},
    error::HatchResult,
};

/// What happened to the registry file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// No registry file; nothing was touched.
    RegistryMissing,
    /// The import statement was already present.
    AlreadyRegistered,
    /// Import and activation were inserted at the given anchor.
    Patched(Anchor),
}

pub struct RegistryPatcher<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> RegistryPatcher<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Register `module_name` (imported from `module_path`) in the registry.
    ///
    /// # Errors
    ///
    /// - `DomainError::MissingRegistryAnchor` when the file has no marker
    ///   and no closing brace; the file is not written.
    /// - `ApplicationError::FilesystemError` on read or write failure.
    #[instrument(skip_all, fields(registry = %registry_path.display(), module = module_name))]
    pub fn patch(
        &self,
        registry_path: &Path,
        module_name: &str,
        module_path: &str,
    ) -> HatchResult<PatchOutcome> {
        if !self.filesystem.exists(registry_path) {
            info!("No registry file, skipping registration");
            return Ok(PatchOutcome::RegistryMissing);
        }

        let content = self.filesystem.read_to_string(registry_path)?;
        let edit = RegistryEntry::new(module_name, module_path).apply(&content)?;

        let outcome = match &edit {
            RegistryEdit::Unchanged(_) => {
                debug!(
                    "Import already present; activation line is not checked, \
                     so a hand-removed activation stays removed"
                );
                PatchOutcome::AlreadyRegistered
            }
            RegistryEdit::Patched { anchor, .. } => {
                info!(anchor = %anchor, "Registered module");
                PatchOutcome::Patched(*anchor)
            }
        };

        self.filesystem
            .write_file(registry_path, edit.content())?;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};
    use crate::domain::DomainError;
    use crate::error::HatchError;
    use mockall::predicate::eq;
    use std::path::PathBuf;

    const REGISTRY: &str = "/app/src/services/index.js";

    fn existing(content: &'static str) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(move |_| Ok(content.to_string()));
        fs
    }

    #[test]
    fn missing_registry_is_a_silent_no_op() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_read_to_string().never();
        fs.expect_write_file().never();

        let outcome = RegistryPatcher::new(&fs)
            .patch(Path::new(REGISTRY), "messages", "./messages")
            .unwrap();

        assert_eq!(outcome, PatchOutcome::RegistryMissing);
    }

    #[test]
    fn writes_patched_content_once() {
        let mut fs = existing("function configure(app) {\n}\n");
        fs.expect_write_file()
            .with(
                eq(PathBuf::from(REGISTRY)),
                eq("import messages from './messages';\nfunction configure(app) {\n  app.configure(messages);\n}\n"),
            )
            .times(1)
            .returning(|_, _| Ok(()));

        let outcome = RegistryPatcher::new(&fs)
            .patch(Path::new(REGISTRY), "messages", "./messages")
            .unwrap();

        assert_eq!(outcome, PatchOutcome::Patched(Anchor::ClosingBrace));
    }

    #[test]
    fn already_registered_still_writes_unchanged_text() {
        const CONTENT: &str = "import messages from './messages';\nfunction configure(app) {\n}\n";
        let mut fs = existing(CONTENT);
        fs.expect_write_file()
            .with(eq(PathBuf::from(REGISTRY)), eq(CONTENT))
            .times(1)
            .returning(|_, _| Ok(()));

        let outcome = RegistryPatcher::new(&fs)
            .patch(Path::new(REGISTRY), "messages", "./messages")
            .unwrap();

        assert_eq!(outcome, PatchOutcome::AlreadyRegistered);
    }

    #[test]
    fn missing_anchor_writes_nothing() {
        let mut fs = existing("module.exports = [];\n");
        fs.expect_write_file().never();

        let err = RegistryPatcher::new(&fs)
            .patch(Path::new(REGISTRY), "messages", "./messages")
            .unwrap_err();

        assert!(matches!(
            err,
            HatchError::Domain(DomainError::MissingRegistryAnchor { .. })
        ));
    }

    #[test]
    fn read_failure_propagates() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        let err = RegistryPatcher::new(&fs)
            .patch(Path::new(REGISTRY), "messages", "./messages")
            .unwrap_err();

        assert!(matches!(
            err,
            HatchError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
