//! In-memory template store keyed by template kind.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use hatch_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DomainValidator as validator, ServiceTemplate, TemplateKind},
    error::HatchResult,
};
use tracing::debug;

use crate::builtin_templates;

/// Thread-safe in-memory template store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<TemplateKind, ServiceTemplate>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the built-in service templates loaded.
    pub fn with_builtin() -> HatchResult<Self> {
        let store = Self::new();
        store.extend(builtin_templates::service_templates())?;
        Ok(store)
    }

    /// Insert every template; later templates replace earlier ones of the same kind.
    pub fn extend(&self, templates: impl IntoIterator<Item = ServiceTemplate>) -> HatchResult<()> {
        for template in templates {
            self.insert(template)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, kind: TemplateKind) -> HatchResult<ServiceTemplate> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .get(&kind)
            .cloned()
            .ok_or_else(|| ApplicationError::TemplateResolution { kind }.into())
    }

    fn list(&self) -> HatchResult<Vec<ServiceTemplate>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.values().cloned().collect())
    }

    fn insert(&self, template: ServiceTemplate) -> HatchResult<()> {
        validator::validate_template(&template)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.insert(template.kind, template).is_some() {
            debug!("replaced existing template");
        }
        Ok(())
    }
}
