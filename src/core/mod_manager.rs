use crate::models::error::RegistryError;
use crate::models::mod_dto::{InstallInfo, ModDescriptor};
use crate::models::paths::ModPaths;
use crate::utils::file::FileUtils;
use crate::utils::json::Json;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{info, instrument};

/// Creates `<root>/<name>/module.json` holding `install_info` verbatim.
/// The folder is named after `name_override` when given, else the info's `name`.
#[instrument(skip(install_info))]
pub fn install_module(
    root: &Utf8Path,
    install_info: &InstallInfo,
    name_override: Option<&str>,
) -> Result<Utf8PathBuf, RegistryError> {
    let mod_name = name_override
        .filter(|n| !n.is_empty())
        .or_else(|| install_info.name())
        .ok_or_else(|| RegistryError::InvalidMod("install info has no name".to_string()))?;

    let mod_folder = root.join(mod_name);
    FileUtils::ensure_directory(&mod_folder);
    Json::write_pretty(&ModPaths::new(&mod_folder).module_info, install_info)?;

    info!("Installed mod {mod_name} at {mod_folder}");
    Ok(mod_folder)
}

/// Deletes a mod's files. No dependency or conflict checks against other mods.
#[instrument(skip(info), fields(module = %info.name))]
pub fn uninstall_module(info: &ModDescriptor) -> Result<(), RegistryError> {
    let metadata = std::fs::symlink_metadata(&info.path)
        .map_err(|_| RegistryError::FileOrDirectoryNotFound(info.path.to_string()))?;

    if metadata.is_dir() {
        FileUtils::force_remove_directory(&info.path)?;
    } else {
        std::fs::remove_file(&info.path)?;
    }

    info!("Uninstalled mod {} from {}", info.raw_name, info.path);
    Ok(())
}
