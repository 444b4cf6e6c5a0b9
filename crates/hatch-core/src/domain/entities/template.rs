//! Service template domain model.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ServiceTemplate (Entity)                                   │
//! │  ├── kind: TemplateKind          (selected by the resolver) │
//! │  ├── description                                            │
//! │  └── files: Vec<FileSpec>                                   │
//! │       ├── path: RelativePath     (relative to service dir)  │
//! │       └── content: TemplateContent                          │
//! │            ├── Literal        → copied verbatim             │
//! │            └── Parameterized  → {{VAR}} substitution        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext (Value Object)                               │
//! │  └── Variable substitution: {{NAME}} -> "messages"          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Decisions
//!
//! ### `Literal` vs `Parameterized`
//!
//! Static helper files (hooks, fixtures) are copied byte-for-byte and never go
//! through substitution, so a literal `{{` in them is safe. Only files marked
//! `Parameterized` are rendered.
//!
//! ### `TemplateSource` with `Static` vs `Owned`
//!
//! Built-in templates reference compile-time strings without allocation;
//! templates loaded from a directory own their content.

use std::collections::{HashMap, HashSet};

use crate::domain::{
    entities::{
        common::RelativePath, generation_config::GenerationConfig, service_name::ServiceName,
    },
    error::DomainError,
    inflection::pluralize,
    value_objects::TemplateKind,
};

// ============================================================================
// Template
// ============================================================================

/// A named set of files rendered into a new service directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTemplate {
    pub kind: TemplateKind,
    pub description: String,
    pub files: Vec<FileSpec>,
}

impl ServiceTemplate {
    pub fn new(kind: TemplateKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, spec: FileSpec) -> Self {
        self.files.push(spec);
        self
    }

    /// Check structural invariants: at least one file, no duplicate paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyTemplate {
                template: self.kind.to_string(),
            });
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(file.path.as_str()) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// One file inside a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: RelativePath,
    pub content: TemplateContent,
}

impl FileSpec {
    pub fn new(path: impl Into<RelativePath>, content: TemplateContent) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }

    pub fn literal(path: impl Into<RelativePath>, content: &'static str) -> Self {
        Self::new(path, TemplateContent::Literal(TemplateSource::Static(content)))
    }

    pub fn parameterized(path: impl Into<RelativePath>, content: &'static str) -> Self {
        Self::new(
            path,
            TemplateContent::Parameterized(TemplateSource::Static(content)),
        )
    }
}

/// How a file's content is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateContent {
    /// Copied as-is.
    Literal(TemplateSource),
    /// Contains `{{VARIABLE}}` placeholders.
    Parameterized(TemplateSource),
}

impl TemplateContent {
    /// Pick `Parameterized` when the text contains a placeholder opener.
    pub fn detect(content: String) -> Self {
        if content.contains("{{") {
            Self::Parameterized(TemplateSource::Owned(content))
        } else {
            Self::Literal(TemplateSource::Owned(content))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Static(&'static str),
    Owned(String),
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

// ============================================================================
// Render Context
// ============================================================================

/// Context for template rendering.
///
/// Built from a [`GenerationConfig`]; every field of the config is exposed
/// as a variable, plus casing variants of the name.
///
/// ## Built-in Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `NAME` | "userAccount" |
/// | `PLURAL_NAME` | "userAccounts" |
/// | `NAME_SNAKE` | "user_account" |
/// | `NAME_KEBAB` | "user-account" |
/// | `NAME_PASCAL` | "UserAccount" |
/// | `CATEGORY` | "database" |
/// | `DRIVER` | "postgres" (empty for generic services) |
/// | `TEMPLATE_KIND` | "sequelize" |
/// | `YEAR` | "2026" |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(config: &GenerationConfig) -> Self {
        Self::for_name(config.name())
            .with_variable("CATEGORY", config.category().as_str())
            .with_variable(
                "DRIVER",
                config.driver().map(|d| d.as_str()).unwrap_or_default(),
            )
            .with_variable("TEMPLATE_KIND", config.template_kind().as_str())
    }

    /// Context with only the name-derived variables and `YEAR`.
    ///
    /// Used for files that belong to a service but are rendered outside the
    /// service template, such as model definitions.
    pub fn for_name(name: &ServiceName) -> Self {
        use chrono::Datelike;

        let name = name.as_str();
        let mut vars = HashMap::new();

        vars.insert("NAME".to_string(), name.to_string());
        vars.insert("PLURAL_NAME".to_string(), pluralize(name));
        vars.insert("NAME_SNAKE".to_string(), to_snake_case(name));
        vars.insert("NAME_KEBAB".to_string(), to_kebab_case(name));
        vars.insert("NAME_PASCAL".to_string(), to_pascal_case(name));
        vars.insert("YEAR".to_string(), chrono::Local::now().year().to_string());

        Self { variables: vars }
    }

    /// Add a custom variable, consuming self and returning a new context.
    ///
    /// Custom variables can override built-ins.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every `{{VARIABLE}}` placeholder with its value.
    ///
    /// - `{{UNKNOWN}}` stays as the literal `{{UNKNOWN}}`
    /// - repeated placeholders are all replaced
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Split an identifier into lowercase words.
///
/// Boundaries: `_`, `-`, `$`, whitespace, a lowercase→uppercase transition
/// (`myApp`), and the end of an acronym (`HTTPServer` → `http`, `server`).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c == '$' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(&next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
