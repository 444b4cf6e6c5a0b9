//! Core domain layer for hatch.
//!
//! Pure logic only: name validation, the (category, driver) to template
//! mapping, pluralization, the registry text patch and template rendering
//! context. All I/O and prompting go through ports defined in the
//! application layer.
//!
//! - **No I/O**: no filesystem, terminal or network access
//! - **Immutable values**: domain objects are `Clone + PartialEq`
//! - **Validated at construction**: a `ServiceName` or `RelativePath` that
//!   exists is valid

pub mod entities;
pub mod error;
pub mod inflection;
pub mod value_objects;

mod validation;

pub use entities::{
    common::RelativePath,
    generation_config::{GenerationConfig, GenerationOptions, PromptDefaults},
    layout::ProjectLayout,
    project_structure::{FileToWrite, ProjectStructure},
    question::{Choice, Question, QuestionKind},
    registry::{Anchor, REGISTRY_MARKER, RegistryEdit, RegistryEntry},
    service_name::ServiceName,
    template::{FileSpec, RenderContext, ServiceTemplate, TemplateContent, TemplateSource},
};

pub use error::{DomainError, ErrorCategory};
pub use inflection::pluralize;
pub use validation::DomainValidator;
pub use value_objects::{Driver, ServiceCategory, TemplateKind};
