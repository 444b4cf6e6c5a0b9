pub mod common;
pub mod generation_config;
pub mod layout;
pub mod project_structure;
pub mod question;
pub mod registry;
pub mod service_name;
pub mod template;

pub use crate::domain::DomainError;
pub use generation_config::GenerationConfig;
pub use project_structure::ProjectStructure;
pub use service_name::ServiceName;
pub use template::ServiceTemplate;
