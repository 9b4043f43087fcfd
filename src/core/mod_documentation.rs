use crate::models::error::RegistryError;
use crate::models::mod_dto::ModDescriptor;

/// Reads the readme detected for a mod at load time.
pub fn read_readme(info: &ModDescriptor) -> Result<String, RegistryError> {
    let readme_path = info
        .readme_path
        .as_ref()
        .ok_or_else(|| RegistryError::FileOrDirectoryNotFound(format!("readme for {}", info.name)))?;

    std::fs::read_to_string(readme_path)
        .map_err(|e| RegistryError::IOError(format!("Failed to read readme: {}", e)))
}
