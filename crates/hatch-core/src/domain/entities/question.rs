//! Questions asked while resolving a generation config.
//!
//! A [`Question`] is plain data. How it is asked (a terminal menu, a
//! default-taking stub, a test double) is up to the `Prompter` port.

use crate::domain::value_objects::{Driver, ServiceCategory};

/// Stable keys, also used as the field names in error messages.
pub const KEY_TYPE: &str = "type";
pub const KEY_DATABASE: &str = "database";
pub const KEY_NAME: &str = "name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub key: &'static str,
    pub message: &'static str,
    pub kind: QuestionKind,
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Pick one of a fixed list. The answer is the choice's `value`.
    Select(Vec<Choice>),
    /// Free text.
    Input,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl Question {
    pub fn service_type(default: Option<ServiceCategory>) -> Self {
        let choices = ServiceCategory::ALL
            .iter()
            .map(|c| Choice::new(c.as_str(), c.as_str()))
            .collect();

        Self {
            key: KEY_TYPE,
            message: "What type of service do you need?",
            kind: QuestionKind::Select(choices),
            default: Some(default.unwrap_or_default().to_string()),
        }
    }

    pub fn database(default: Option<Driver>) -> Self {
        let choices = Driver::ALL
            .iter()
            .map(|d| Choice::new(d.label(), d.as_str()))
            .collect();

        Self {
            key: KEY_DATABASE,
            message: "For which database?",
            kind: QuestionKind::Select(choices),
            default: default.map(|d| d.to_string()),
        }
    }

    pub fn name(default: Option<String>) -> Self {
        Self {
            key: KEY_NAME,
            message: "What do you want to call your service?",
            kind: QuestionKind::Input,
            default: default.filter(|d| !d.trim().is_empty()),
        }
    }

    pub fn choices(&self) -> &[Choice] {
        match &self.kind {
            QuestionKind::Select(choices) => choices,
            QuestionKind::Input => &[],
        }
    }

    /// Index of the default inside a select list, if it names a choice.
    pub fn default_index(&self) -> Option<usize> {
        let default = self.default.as_deref()?;
        self.choices().iter().position(|c| c.value == default)
    }
}
