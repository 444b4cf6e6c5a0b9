use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Words that cannot be used as an import binding in the generated code.
const RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// A validated service identifier.
///
/// Invariant: usable both as a directory name and as an import/variable
/// binding. Enforced at construction; there is no unchecked constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceName(String);

impl ServiceName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let name = raw.trim();

        let invalid = |reason: &str| DomainError::InvalidServiceName {
            name: raw.clone(),
            reason: reason.to_string(),
        };

        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return Err(invalid("name cannot be empty"));
        };

        if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
            return Err(invalid("name must start with a letter, '_' or '$'"));
        }

        if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '$')) {
            return Err(invalid(&format!("'{bad}' is not allowed in an identifier")));
        }

        if RESERVED.contains(&name) {
            return Err(invalid("name is a reserved word"));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ServiceName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ServiceName> for String {
    fn from(name: ServiceName) -> Self {
        name.0
    }
}
