//! Text patch for the service registry (aggregation) file.
//!
//! The registry imports every generated service and activates it inside a
//! configure function:
//!
//! ```text
//! import users from './users';
//! import messages from './messages';
//!
//! export default function () {
//!   const app = this;
//!   app.configure(messages);
//!   app.configure(users);
//!   // hatch:services
//! }
//! ```
//!
//! [`RegistryEntry::apply`] is pure: it takes the current text and returns
//! the new text. Reading and writing the file is the job of
//! `application::services::RegistryPatcher`.
//!
//! # Insertion anchor
//!
//! Activation lines go directly above the last `// hatch:services` marker
//! line when one exists. Files without a marker fall back to the last `}`
//! in the text, which assumes the configure function is the final top-level
//! block of the file. A file that breaks that assumption can be patched in
//! the wrong place; adding the marker fixes it.
//!
//! # Already registered
//!
//! An entry counts as registered when its import statement appears verbatim
//! anywhere in the text. The activation line is not checked, so a hand-edited
//! file that kept the import but dropped the activation is left alone.

use std::fmt;

use crate::domain::error::DomainError;

/// Marker comment that pins where activation lines are inserted.
pub const REGISTRY_MARKER: &str = "// hatch:services";

/// Indentation used for activation lines inserted at the brace fallback.
const FALLBACK_INDENT: &str = "  ";

/// One module to register: its binding name and its import source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    module_name: String,
    module_path: String,
}

/// Result of applying an entry to registry text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEdit {
    /// The import was already present; text is returned untouched.
    Unchanged(String),
    /// The import and activation were inserted.
    Patched { content: String, anchor: Anchor },
}

impl RegistryEdit {
    pub fn content(&self) -> &str {
        match self {
            Self::Unchanged(content) | Self::Patched { content, .. } => content,
        }
    }
}

/// Where the activation line was inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Marker,
    ClosingBrace,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marker => f.write_str("marker"),
            Self::ClosingBrace => f.write_str("closing brace"),
        }
    }
}

impl RegistryEntry {
    pub fn new(module_name: impl Into<String>, module_path: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            module_path: module_path.into(),
        }
    }

    /// `import <name> from '<path>';`
    pub fn import_statement(&self) -> String {
        format!("import {} from '{}';", self.module_name, self.module_path)
    }

    /// `app.configure(<name>);` without indentation.
    pub fn activation(&self) -> String {
        format!("app.configure({});", self.module_name)
    }

    pub fn is_registered_in(&self, content: &str) -> bool {
        content.contains(&self.import_statement())
    }

    /// Apply this entry to `content`.
    ///
    /// # Errors
    ///
    /// [`DomainError::MissingRegistryAnchor`] when the text has neither a
    /// marker line nor a closing brace. Nothing should be written then.
    pub fn apply(&self, content: &str) -> Result<RegistryEdit, DomainError> {
        if self.is_registered_in(content) {
            return Ok(RegistryEdit::Unchanged(content.to_string()));
        }

        let (body, anchor) = self.insert_activation(content).ok_or_else(|| {
            DomainError::MissingRegistryAnchor {
                module: self.module_name.clone(),
            }
        })?;

        let content = format!("{}\n{}", self.import_statement(), body);
        Ok(RegistryEdit::Patched { content, anchor })
    }

    fn insert_activation(&self, content: &str) -> Option<(String, Anchor)> {
        if let Some(line_start) = find_marker_line(content) {
            let indent: String = content[line_start..]
                .chars()
                .take_while(|c| *c == ' ' || *c == '\t')
                .collect();

            let mut patched = String::with_capacity(content.len() + 64);
            patched.push_str(&content[..line_start]);
            patched.push_str(&indent);
            patched.push_str(&self.activation());
            patched.push('\n');
            patched.push_str(&content[line_start..]);
            return Some((patched, Anchor::Marker));
        }

        let brace = content.rfind('}')?;
        let mut patched = String::with_capacity(content.len() + 64);
        patched.push_str(&content[..brace]);
        patched.push_str(FALLBACK_INDENT);
        patched.push_str(&self.activation());
        patched.push('\n');
        patched.push_str(&content[brace..]);
        Some((patched, Anchor::ClosingBrace))
    }
}

/// Byte offset of the start of the last marker line, if any.
fn find_marker_line(content: &str) -> Option<usize> {
    let mut offset = 0;
    let mut found = None;

    for line in content.split_inclusive('\n') {
        if line.trim() == REGISTRY_MARKER {
            found = Some(offset);
        }
        offset += line.len();
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages() -> RegistryEntry {
        RegistryEntry::new("messages", "./messages")
    }

    #[test]
    fn canonical_statements() {
        let entry = messages();
        assert_eq!(entry.import_statement(), "import messages from './messages';");
        assert_eq!(entry.activation(), "app.configure(messages);");
    }

    #[test]
    fn brace_fallback_inserts_before_last_brace() {
        let edit = messages().apply("function configure(app) {\n}\n").unwrap();

        assert_eq!(
            edit.content(),
            "import messages from './messages';\nfunction configure(app) {\n  app.configure(messages);\n}\n"
        );
        assert!(matches!(
            edit,
            RegistryEdit::Patched {
                anchor: Anchor::ClosingBrace,
                ..
            }
        ));
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let once = messages().apply("function configure(app) {\n}\n").unwrap();
        let twice = messages().apply(once.content()).unwrap();

        assert_eq!(once.content(), twice.content());
        assert!(matches!(twice, RegistryEdit::Unchanged(_)));
    }

    #[test]
    fn present_import_without_activation_is_left_alone() {
        let content = "import messages from './messages';\nfunction configure(app) {\n}\n";
        let edit = messages().apply(content).unwrap();

        assert_eq!(edit, RegistryEdit::Unchanged(content.to_string()));
    }

    #[test]
    fn marker_anchor_takes_precedence_over_braces() {
        let content = "export default function () {\n  const app = this;\n  // hatch:services\n}\n\nfunction helper() {\n}\n";
        let edit = messages().apply(content).unwrap();

        assert_eq!(
            edit.content(),
            "import messages from './messages';\nexport default function () {\n  const app = this;\n  app.configure(messages);\n  // hatch:services\n}\n\nfunction helper() {\n}\n"
        );
    }

    #[test]
    fn marker_indentation_is_reused() {
        let content = "function configure(app) {\n\t// hatch:services\n}\n";
        let edit = messages().apply(content).unwrap();

        assert!(edit.content().contains("\tapp.configure(messages);\n\t// hatch:services"));
    }

    #[test]
    fn imports_stack_in_reverse_and_activations_in_call_order() {
        let content = "export default function () {\n  const app = this;\n}\n";
        let first = RegistryEntry::new("users", "./users").apply(content).unwrap();
        let second = messages().apply(first.content()).unwrap();

        assert_eq!(
            second.content(),
            "import messages from './messages';\nimport users from './users';\nexport default function () {\n  const app = this;\n  app.configure(users);\n  app.configure(messages);\n}\n"
        );
    }

    #[test]
    fn untouched_lines_survive_verbatim() {
        let content = "// header comment\nimport a from './a';\n\nexport default function () {\n  const app = this;\n  app.configure(a);\n}\n";
        let edit = messages().apply(content).unwrap();

        for line in content.lines() {
            assert!(edit.content().lines().any(|l| l == line), "lost line: {line}");
        }
        assert_eq!(edit.content().lines().count(), content.lines().count() + 2);
    }

    #[test]
    fn text_without_anchor_is_rejected() {
        let err = messages().apply("const services = [];\n").unwrap_err();
        assert!(matches!(err, DomainError::MissingRegistryAnchor { .. }));
    }
}
