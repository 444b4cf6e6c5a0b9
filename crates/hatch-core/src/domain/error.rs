// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the CLI formats them more than once)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },

    #[error("Unknown service type: {0}")]
    UnknownCategory(String),

    #[error("Unknown database driver: {0}")]
    UnknownDriver(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Template '{template}' has no content")]
    EmptyTemplate { template: String },

    #[error("Duplicate path in template: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Registry Errors
    // ========================================================================
    #[error("Registry file has no insertion point for '{module}'")]
    MissingRegistryAnchor { module: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required answer missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidServiceName { name, reason } => vec![
                format!("'{}' cannot be used as a service name: {}", name, reason),
                "Use letters, digits, '_' or '$', starting with a letter".into(),
                "Examples: messages, userAccounts, audit_log".into(),
            ],
            Self::UnknownCategory(value) => vec![
                format!("'{}' is not a service type", value),
                "Supported types: generic, database".into(),
            ],
            Self::UnknownDriver(value) => vec![
                format!("'{}' is not a supported database", value),
                "Supported databases: memory, mongodb, mysql, mariadb, nedb, postgres, sqlite, mssql"
                    .into(),
            ],
            Self::MissingRegistryAnchor { module } => vec![
                format!("Could not find where to register '{}'", module),
                "Add a '// hatch:services' line inside the configure function".into(),
                "Or register the service by hand".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("No value was given for '{}'", field),
                format!("Pass --{} or run without --yes to be prompted", field),
            ],
            Self::EmptyTemplate { template } => vec![
                format!("Template '{}' is corrupted", template),
                "Please report this issue or use a different templates directory".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidServiceName { .. }
            | Self::UnknownCategory(_)
            | Self::UnknownDriver(_)
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::MissingRegistryAnchor { .. } => ErrorCategory::Registry,
            Self::InvalidTemplate(_)
            | Self::EmptyTemplate { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Registry,
    Internal,
}
