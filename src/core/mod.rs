pub mod mod_config;
pub mod mod_documentation;
pub mod mod_info;
pub mod mod_manager;
pub mod registry;
