//! Model generator adapters.

mod template;

pub use template::TemplateModelGenerator;
