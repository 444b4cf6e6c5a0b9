use crate::domain::{
    entities::{ProjectStructure, ServiceTemplate},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Templates and rendered structures are checked here before any I/O.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_template(template: &ServiceTemplate) -> Result<(), DomainError> {
        template.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
