//! Application services - orchestrate use cases.

pub mod answer_resolver;
pub mod registry_patcher;
pub mod service_generator;
pub mod template_service;

pub use answer_resolver::{AnswerResolver, Resolution};
pub use registry_patcher::{PatchOutcome, RegistryPatcher};
pub use service_generator::{GenerationPlan, GenerationReport, ServiceGenerator};
pub use template_service::{TemplateInfo, TemplateService};
