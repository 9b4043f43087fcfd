pub mod core_modules;
pub mod error;
pub mod mod_dto;
pub mod paths;
