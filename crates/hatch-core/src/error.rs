//! Unified error handling for hatch-core.
//!
//! Wraps domain and application errors behind one type with user-actionable
//! suggestions and a display category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for hatch-core operations.
#[derive(Debug, Error, Clone)]
pub enum HatchError {
    /// Errors from the domain layer (invalid input, registry anchor, template shape).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, template lookup, delegation).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl HatchError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Run: hatch config path to locate your config files".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in hatch".into(),
                "Please report this issue at: https://github.com/cosecruz/hatch/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Registry => ErrorCategory::Registry,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Registry,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type HatchResult<T> = Result<T, HatchError>;

/// Extension trait for adding context to foreign errors.
pub trait Context<T> {
    fn context(self, msg: impl Into<String>) -> HatchResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> HatchResult<T> {
        self.map_err(|e| HatchError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_categories_are_carried_over() {
        let err: HatchError = DomainError::MissingRegistryAnchor {
            module: "messages".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Registry);

        let err: HatchError = DomainError::UnknownDriver("oracle".into()).into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn application_suggestions_are_forwarded() {
        let err: HatchError = ApplicationError::ServiceExists {
            path: PathBuf::from("src/services/messages"),
        }
        .into();

        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn context_wraps_foreign_errors_as_internal() {
        let io: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = io.context("reading registry").unwrap_err();

        assert!(matches!(err, HatchError::Internal { .. }));
        assert!(err.to_string().contains("reading registry: boom"));
    }
}
