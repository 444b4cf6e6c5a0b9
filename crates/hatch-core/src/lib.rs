//! hatch core - service generation behind ports and adapters.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              hatch-cli                  │
//! │   (clap, prompts, config, output)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  AnswerResolver, ServiceGenerator,      │
//! │  RegistryPatcher, TemplateService       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  Filesystem, TemplateStore, Renderer,   │
//! │  ModelGenerator, Prompter               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      hatch-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hatch_core::prelude::*;
//! # fn run(generator: ServiceGenerator, prompter: &dyn Prompter) -> HatchResult<()> {
//! let resolution = AnswerResolver::new(prompter)
//!     .resolve(GenerationOptions::default(), &PromptDefaults::default())?;
//! let layout = ProjectLayout::new(".");
//! generator.generate(&resolution.config, &layout, false)?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub mod prelude {
    pub use crate::application::{
        AnswerResolver, GenerationReport, PatchOutcome, RegistryPatcher, Resolution,
        ServiceGenerator, TemplateService,
        ports::{Filesystem, ModelGenerator, Prompter, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        Driver, GenerationConfig, GenerationOptions, ProjectLayout, PromptDefaults,
        RenderContext, ServiceCategory, ServiceName, TemplateKind,
    };
    pub use crate::error::{HatchError, HatchResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
