//! Project model: configuration file, resolution and provider region table

pub mod config;
pub mod loader;
pub mod model;
pub mod provider;

pub use config::{FunctionConfig, ProjectConfig, StageConfig};
pub use loader::ProjectLoader;
pub use model::Project;
