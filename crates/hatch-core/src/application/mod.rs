//! Application layer for hatch.
//!
//! - **Services**: use case orchestration (resolver, generator, patcher)
//! - **Ports**: traits for everything outside the process
//! - **Errors**: application-specific error types
//!
//! Business rules live in `crate::domain`; this layer only sequences them.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    AnswerResolver, GenerationPlan, GenerationReport, PatchOutcome, RegistryPatcher, Resolution,
    ServiceGenerator, TemplateInfo, TemplateService,
};

pub use ports::{
    Filesystem, ModelGenerator, ModelOutcome, ModelRequest, Prompter, TemplateRenderer,
    TemplateStore,
};

pub use error::ApplicationError;
