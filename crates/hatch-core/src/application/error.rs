//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TemplateKind;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No template is registered for the resolved kind.
    #[error("No template available for kind '{kind}'")]
    TemplateResolution { kind: TemplateKind },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The delegated model generator failed.
    #[error("Model generation failed for '{name}': {reason}")]
    ModelGenerationFailed { name: String, reason: String },

    /// Store access failed (lock poisoned).
    #[error("Template store error")]
    StoreLockError,

    /// Prompting for an answer failed (terminal closed, interrupted).
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// The service directory already exists.
    #[error("Service already exists at {path}")]
    ServiceExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateResolution { kind } => vec![
                format!("No '{}' template is installed", kind),
                "Try: hatch templates to see available templates".into(),
                "Check templates.local_path / HATCH_TEMPLATES_DIR if you use custom templates"
                    .into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Use --project-dir to point at the project root".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::ModelGenerationFailed { name, .. } => vec![
                format!("The service '{}' was generated but its model was not", name),
                "Create the model file by hand or re-run with --force".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Pass every answer as a flag and use --yes to skip prompts".into(),
            ],
            Self::ServiceExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite the generated files".into(),
                "Choose a different service name".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateResolution { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::RenderingFailed { .. } | Self::ModelGenerationFailed { .. } => {
                ErrorCategory::Internal
            }
            Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::ValidationFailed(_) | Self::ServiceExists { .. } => ErrorCategory::Validation,
        }
    }
}
