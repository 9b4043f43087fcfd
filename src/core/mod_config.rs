use crate::models::error::RegistryError;
use crate::models::mod_dto::ModDescriptor;
use crate::models::paths::ModPaths;
use crate::utils::json::Json;
use serde_json::{Map, Value};
use tracing::instrument;

pub type ModConfig = Map<String, Value>;

fn ensure_compatible(info: &ModDescriptor) -> Result<(), RegistryError> {
    if info.is_compatible() {
        Ok(())
    } else {
        Err(RegistryError::IncompatibleModule(info.name.clone()))
    }
}

/// Reads `module.config.json`, or synthesizes one from the descriptor's current state.
///
/// The synthesized default leaves `drmKey` out so a key declared in `module.json`
/// is not shadowed.
pub fn read_config_side_file(info: &ModDescriptor) -> Result<ModConfig, RegistryError> {
    ensure_compatible(info)?;

    match Json::try_read(&ModPaths::new(&info.path).config) {
        Some(Value::Object(config)) => Ok(config),
        _ => {
            let mut config = ModConfig::new();
            config.insert("disabled".into(), Value::Bool(info.disabled));
            config.insert("disableAutoUpdate".into(), Value::Bool(info.disable_auto_update));
            Ok(config)
        }
    }
}

pub fn write_config_side_file(info: &ModDescriptor, config: &ModConfig) -> Result<(), RegistryError> {
    ensure_compatible(info)?;
    Json::write_pretty(&ModPaths::new(&info.path).config, config)
}

fn update_config_field(info: &ModDescriptor, key: &str, value: bool) -> Result<(), RegistryError> {
    let mut config = read_config_side_file(info)?;
    config.insert(key.to_string(), Value::Bool(value));
    write_config_side_file(info, &config)
}

#[instrument(skip(info), fields(module = %info.name))]
pub fn set_auto_update_enabled(info: &ModDescriptor, enabled: bool) -> Result<(), RegistryError> {
    update_config_field(info, "disableAutoUpdate", !enabled)
}

pub fn enable_auto_update(info: &ModDescriptor) -> Result<(), RegistryError> {
    set_auto_update_enabled(info, true)
}

pub fn disable_auto_update(info: &ModDescriptor) -> Result<(), RegistryError> {
    set_auto_update_enabled(info, false)
}

/// Flips auto-update relative to `info` as loaded, not to the file on disk.
/// Two calls on the same descriptor write the same value; reload between toggles.
pub fn toggle_auto_update(info: &ModDescriptor) -> Result<(), RegistryError> {
    set_auto_update_enabled(info, info.disable_auto_update)
}

#[instrument(skip(info), fields(module = %info.name))]
pub fn set_load_enabled(info: &ModDescriptor, enabled: bool) -> Result<(), RegistryError> {
    update_config_field(info, "disabled", !enabled)
}

pub fn enable_load(info: &ModDescriptor) -> Result<(), RegistryError> {
    set_load_enabled(info, true)
}

pub fn disable_load(info: &ModDescriptor) -> Result<(), RegistryError> {
    set_load_enabled(info, false)
}

/// Same stale-state semantics as [`toggle_auto_update`].
pub fn toggle_load(info: &ModDescriptor) -> Result<(), RegistryError> {
    set_load_enabled(info, info.disabled)
}
