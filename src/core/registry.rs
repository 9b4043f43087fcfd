use crate::config::AppSettings;
use crate::core::mod_info::ModInfoLoader;
use crate::core::mod_manager;
use crate::models::core_modules::CoreModules;
use crate::models::error::RegistryError;
use crate::models::mod_dto::{InstallInfo, ModDescriptor};
use crate::models::paths::STANDALONE_EXTENSION;
use crate::utils::file::FileUtils;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, warn};

/// Entry point for a single mods root directory.
pub struct ModRegistry {
    pub root: Utf8PathBuf,
    core_modules: CoreModules,
    dev_mode: bool,
}

impl ModRegistry {
    pub fn new(root: impl Into<Utf8PathBuf>, core_modules: CoreModules) -> Self {
        Self {
            root: root.into(),
            core_modules,
            dev_mode: false,
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.mods_root.clone(), settings.core_modules.clone())
            .with_dev_mode(settings.dev_mode)
    }

    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    pub fn core_modules(&self) -> &CoreModules {
        &self.core_modules
    }

    pub fn is_core_module(&self, info: &ModDescriptor) -> bool {
        self.core_modules.contains(&info.name)
    }

    pub fn loader(&self) -> ModInfoLoader<'_> {
        ModInfoLoader::new(&self.core_modules, self.dev_mode)
    }

    pub fn list_modules(&self) -> Vec<String> {
        list_modules(&self.root)
    }

    pub fn list_module_infos(&self) -> Vec<ModDescriptor> {
        list_module_infos(&self.root, &self.loader())
    }

    pub fn load_module_info(&self, name: &str) -> Result<ModDescriptor, RegistryError> {
        self.loader().load(&self.root, name)
    }

    /// Looks a mod up by its canonical (lowercase) name, falling back to the on-disk name.
    pub fn find_module(&self, name: &str) -> Result<ModDescriptor, RegistryError> {
        let wanted = name.to_lowercase();
        self.list_module_infos()
            .into_iter()
            .find(|info| info.name == wanted)
            .map(Ok)
            .unwrap_or_else(|| self.load_module_info(name))
    }

    pub fn install_module(
        &self,
        install_info: &InstallInfo,
        name_override: Option<&str>,
    ) -> Result<Utf8PathBuf, RegistryError> {
        mod_manager::install_module(&self.root, install_info, name_override)
    }

    pub fn uninstall_module(&self, info: &ModDescriptor) -> Result<(), RegistryError> {
        mod_manager::uninstall_module(info)
    }
}

/// Names of candidate mods under `root`, in directory enumeration order.
///
/// Hidden (`.`) and private (`_`) entries are skipped, as are plain files that
/// are not scripts. A missing root has no mods.
pub fn list_modules(root: &Utf8Path) -> Vec<String> {
    if !root.exists() {
        return Vec::new();
    }

    let names = match FileUtils::list_entry_names(root) {
        Ok(names) => names,
        Err(e) => {
            warn!("Unable to read mods root {root}: {e}");
            return Vec::new();
        }
    };

    names
        .into_iter()
        .filter(|name| !name.starts_with('.') && !name.starts_with('_'))
        .filter(|name| name.ends_with(STANDALONE_EXTENSION) || FileUtils::is_dir(&root.join(name)))
        .collect()
}

/// Descriptors for every listed mod that loads; broken mods are left out.
pub fn list_module_infos(root: &Utf8Path, loader: &ModInfoLoader) -> Vec<ModDescriptor> {
    list_modules(root)
        .iter()
        .filter_map(|name| match loader.load(root, name) {
            Ok(info) => Some(info),
            Err(e) => {
                debug!("Skipping mod {name}: {e}");
                None
            }
        })
        .collect()
}
