//! Template Service - read-only template queries for `hatch templates`.

use serde::Serialize;

use crate::{
    application::ports::TemplateStore,
    domain::{ServiceTemplate, TemplateKind},
    error::HatchResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub kind: TemplateKind,
    pub description: String,
    pub files: Vec<String>,
    pub requires_model: bool,
}

impl From<&ServiceTemplate> for TemplateInfo {
    fn from(template: &ServiceTemplate) -> Self {
        Self {
            kind: template.kind,
            description: template.description.clone(),
            files: template.files.iter().map(|f| f.path.to_string()).collect(),
            requires_model: template.kind.requires_model(),
        }
    }
}

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    pub fn get(&self, kind: TemplateKind) -> HatchResult<ServiceTemplate> {
        self.store.get(kind)
    }

    /// List all templates, ordered like [`TemplateKind::ALL`].
    pub fn list(&self) -> HatchResult<Vec<TemplateInfo>> {
        let mut templates = self.store.list()?;
        templates.sort_by_key(|t| TemplateKind::ALL.iter().position(|k| *k == t.kind));

        Ok(templates.iter().map(TemplateInfo::from).collect())
    }
}
