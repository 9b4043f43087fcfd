use crate::models::core_modules::CoreModules;
use camino::Utf8PathBuf;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "mod_registry";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub version: u8,
    pub mods_root: Utf8PathBuf,
    /// Surfaces deprecation warnings for outdated mod manifests.
    pub dev_mode: bool,
    pub core_modules: CoreModules,
}

impl Default for AppSettings {
    fn default() -> Self {
        let base_dir = ProjectDirs::from("com", "martes", APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|exe_path| exe_path.parent().map(|p| p.to_path_buf()))
            })
            .and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
            .unwrap_or_else(|| Utf8PathBuf::from("."));

        Self {
            version: 0,
            mods_root: base_dir.join("mods"),
            dev_mode: false,
            core_modules: CoreModules::default(),
        }
    }
}

impl AppSettings {
    pub fn load() -> Result<AppSettings, confy::ConfyError> {
        confy::load(APP_NAME, None)
    }

    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, None, self)
    }

    pub fn load_path(path: &camino::Utf8Path) -> Result<AppSettings, confy::ConfyError> {
        confy::load_path(path)
    }

    pub fn store_path(&self, path: &camino::Utf8Path) -> Result<(), confy::ConfyError> {
        confy::store_path(path, self)
    }
}
