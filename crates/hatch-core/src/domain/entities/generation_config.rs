use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::service_name::ServiceName,
    inflection::pluralize,
    value_objects::{Driver, ServiceCategory, TemplateKind},
};

/// The resolved parameters for one generation run.
///
/// Built only through [`GenerationConfig::new`], which derives
/// `plural_name` and `template_kind` so they can never disagree with
/// `name`, `category` and `driver`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationConfig {
    name: ServiceName,
    plural_name: String,
    category: ServiceCategory,
    driver: Option<Driver>,
    template_kind: TemplateKind,
}

impl GenerationConfig {
    /// Assemble a config. A driver passed with a generic category is dropped.
    pub fn new(name: ServiceName, category: ServiceCategory, driver: Option<Driver>) -> Self {
        let driver = driver.filter(|_| category.needs_driver());
        let plural_name = pluralize(name.as_str());
        let template_kind = TemplateKind::resolve(category, driver);

        Self {
            name,
            plural_name,
            category,
            driver,
            template_kind,
        }
    }

    pub fn name(&self) -> &ServiceName {
        &self.name
    }

    pub fn plural_name(&self) -> &str {
        &self.plural_name
    }

    pub fn category(&self) -> ServiceCategory {
        self.category
    }

    pub fn driver(&self) -> Option<Driver> {
        self.driver
    }

    pub fn template_kind(&self) -> TemplateKind {
        self.template_kind
    }
}

impl fmt::Display for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.driver {
            Some(driver) => write!(f, "{} ({}, {})", self.name, self.category, driver),
            None => write!(f, "{} ({})", self.name, self.category),
        }
    }
}

/// Values supplied on the command line. A present field is authoritative
/// and its prompt is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    pub category: Option<ServiceCategory>,
    pub driver: Option<Driver>,
    pub name: Option<String>,
}

/// Remembered answers that seed the prompt defaults of the next run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDefaults {
    pub service_type: Option<ServiceCategory>,
    pub database: Option<Driver>,
    pub name: Option<String>,
}

impl PromptDefaults {
    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merged_with(self, other: PromptDefaults) -> Self {
        Self {
            service_type: other.service_type.or(self.service_type),
            database: other.database.or(self.database),
            name: other.name.or(self.name),
        }
    }
}
