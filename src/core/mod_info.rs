use crate::models::core_modules::CoreModules;
use crate::models::error::RegistryError;
use crate::models::mod_dto::{Compatibility, ModDescriptor, ModType};
use crate::models::paths::{ModPaths, README_FILE_NAMES, STANDALONE_EXTENSION};
use crate::utils::json::{is_set, Json};
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub const NETWORK_KEYWORD: &str = "network";
pub const CLIENT_KEYWORD: &str = "client";

/// Builds [`ModDescriptor`]s from a mod's on-disk representation.
pub struct ModInfoLoader<'a> {
    pub core_modules: &'a CoreModules,
    /// Emits deprecation warnings for outdated `module.json` fields.
    pub dev_mode: bool,
}

impl<'a> ModInfoLoader<'a> {
    pub fn new(core_modules: &'a CoreModules, dev_mode: bool) -> Self {
        Self {
            core_modules,
            dev_mode,
        }
    }

    /// Loads the mod named `name` directly under `root`.
    ///
    /// Fails for a non-script file, a `module.json` that is not valid JSON, or an
    /// unknown deprecated `category`. Problems with any other file fall back to defaults.
    pub fn load(&self, root: &Utf8Path, name: &str) -> Result<ModDescriptor, RegistryError> {
        let path = root.join(name);
        let metadata = std::fs::metadata(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RegistryError::FileOrDirectoryNotFound(path.to_string()),
            _ => RegistryError::from(e),
        })?;

        let mut info = if metadata.is_dir() {
            self.load_directory(name, path)?
        } else {
            Self::load_standalone(name, path)?
        };

        info.is_core_module = self.core_modules.contains(&info.name);
        Ok(info)
    }

    fn load_standalone(name: &str, path: Utf8PathBuf) -> Result<ModDescriptor, RegistryError> {
        if !name.ends_with(STANDALONE_EXTENSION) {
            return Err(RegistryError::InvalidMod(name.to_string()));
        }

        Ok(ModDescriptor::legacy(name, path, ModType::Standalone))
    }

    fn load_directory(&self, name: &str, path: Utf8PathBuf) -> Result<ModDescriptor, RegistryError> {
        let paths = ModPaths::new(&path);
        let mut info = ModDescriptor::legacy(name, path, ModType::Regular);

        // An unreadable or empty module.json means a legacy directory mod.
        let text = match std::fs::read_to_string(&paths.module_info) {
            Ok(text) if !text.is_empty() => text,
            _ => return Ok(info),
        };

        let manifest = Self::parse_manifest(&paths.module_info, &text)?;
        Self::apply_manifest(&mut info, &manifest)?;
        self.migrate_nice_name(&mut info);
        self.apply_category(&mut info, manifest.get("category"))?;

        if info.has_keyword(NETWORK_KEYWORD) {
            if let Some(defs) = Self::read_packet_defs(&paths.packet_manifest) {
                info.packets = defs;
            }
        }

        Self::apply_config_side_file(&mut info, &paths.config);
        info.readme_path = Self::find_readme(&info.path);

        Ok(info)
    }

    fn parse_manifest(path: &Utf8Path, text: &str) -> Result<Map<String, Value>, RegistryError> {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(RegistryError::ManifestParseError(format!(
                "{path}: expected a JSON object"
            ))),
            Err(e) => Err(RegistryError::ManifestParseError(format!("{path}: {e}"))),
        }
    }

    fn apply_manifest(info: &mut ModDescriptor, manifest: &Map<String, Value>) -> Result<(), RegistryError> {
        info.compatibility = Compatibility::Compatible;

        if let Some(name) = manifest.get("name").filter(|v| is_set(v)) {
            let name = name.as_str().ok_or_else(|| {
                RegistryError::ManifestParseError(format!("{}: `name` must be a string", info.path))
            })?;
            info.name = name.to_lowercase();
            info.raw_name = name.to_string();
        }

        for keyword in string_list(manifest.get("keywords")) {
            info.add_keyword(&keyword);
        }

        info.author = text_field(manifest, "author");
        info.description = text_field(manifest, "description");
        info.version = text_field(manifest, "version");
        info.donation_url = text_field(manifest, "donationUrl");
        info.support_url = text_field(manifest, "supportUrl");
        info.drm_key = text_field(manifest, "drmKey");

        if let Some(Value::Object(options)) = manifest.get("options") {
            info.options = options.clone();
        }

        info.dependencies = match manifest.get("dependencies") {
            Some(Value::Object(deps)) => deps.keys().cloned().collect(),
            other => string_list(other),
        };
        info.conflicts = string_list(manifest.get("conflicts"));

        info.disable_auto_update = manifest.get("disableAutoUpdate").is_some_and(is_set);
        info.disabled = manifest.get("disabled").is_some_and(is_set);

        Ok(())
    }

    fn migrate_nice_name(&self, info: &mut ModDescriptor) {
        if !info.options.get("niceName").is_some_and(is_set) {
            return;
        }

        if self.dev_mode {
            warn!(
                "module.json uses deprecated \"options.niceName\". Please use \"options.cliName\" instead ({})",
                info.raw_name
            );
        }

        if let Some(nice_name) = info.options.remove("niceName") {
            info.options.insert("cliName".to_string(), nice_name);
        }
    }

    fn apply_category(&self, info: &mut ModDescriptor, category: Option<&Value>) -> Result<(), RegistryError> {
        let Some(category) = category.filter(|v| is_set(v)) else {
            info.add_keyword(NETWORK_KEYWORD);
            return Ok(());
        };

        let category = match category.as_str() {
            Some(c @ (NETWORK_KEYWORD | CLIENT_KEYWORD)) => c,
            Some(other) => {
                return Err(RegistryError::InvalidCategory(format!("{other} ({})", info.raw_name)))
            }
            None => {
                return Err(RegistryError::InvalidCategory(format!("{category} ({})", info.raw_name)))
            }
        };

        if self.dev_mode {
            warn!(
                "module.json uses deprecated \"category\". Please use \"keywords\" and the new mod interface instead ({})",
                info.raw_name
            );
        }

        info.add_keyword(category);
        Ok(())
    }

    fn read_packet_defs(manifest_path: &Utf8Path) -> Option<Map<String, Value>> {
        match Json::try_read(manifest_path)? {
            Value::Object(mut manifest) => match manifest.remove("defs") {
                Some(Value::Object(defs)) => Some(defs),
                _ => None,
            },
            _ => None,
        }
    }

    /// Local overrides survive mod updates, so they win over `module.json`.
    fn apply_config_side_file(info: &mut ModDescriptor, config_path: &Utf8Path) {
        let Some(Value::Object(config)) = Json::try_read(config_path) else {
            return;
        };

        if let Some(disabled) = config.get("disabled") {
            info.disabled = is_set(disabled);
        }
        if let Some(disable_auto_update) = config.get("disableAutoUpdate") {
            info.disable_auto_update = is_set(disable_auto_update);
        }
        match config.get("drmKey") {
            None | Some(Value::Null) => {}
            Some(Value::String(key)) => info.drm_key = Some(key.clone()),
            Some(other) => info.drm_key = Some(other.to_string()),
        }
    }

    fn find_readme(mod_root: &Utf8Path) -> Option<Utf8PathBuf> {
        let entries = match std::fs::read_dir(mod_root) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Readme scan skipped for {mod_root}: {e}");
                return None;
            }
        };

        entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .find(|file| README_FILE_NAMES.contains(&file.to_lowercase().as_str()))
            .map(|file| mod_root.join(file))
    }
}

/// Non-empty strings, plus numbers rendered as text.
fn text_field(manifest: &Map<String, Value>, key: &str) -> Option<String> {
    match manifest.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        _ => None,
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
