pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::registry::ModRegistry;
pub use crate::models::core_modules::CoreModules;
pub use crate::models::error::RegistryError;
pub use crate::models::mod_dto::{Compatibility, InstallInfo, ModDescriptor, ModType};
