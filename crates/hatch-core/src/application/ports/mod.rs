//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world. Adapters
//! in `hatch-adapters` and `hatch-cli` implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application
//!   - `Filesystem`: file operations
//!   - `TemplateStore`: service template lookup
//!   - `TemplateRenderer`: template rendering
//!   - `ModelGenerator`: delegated model creation
//!   - `Prompter`: asking the user a question

pub mod output;

pub use output::{
    Filesystem, ModelGenerator, ModelOutcome, ModelRequest, Prompter, TemplateRenderer,
    TemplateStore,
};

#[cfg(test)]
pub use output::{
    MockFilesystem, MockModelGenerator, MockPrompter, MockTemplateRenderer, MockTemplateStore,
};
