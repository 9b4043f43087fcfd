#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use mod_registry_lib::{CoreModules, ModRegistry};
use std::fs;
use tempfile::TempDir;

/// Empty mods root inside a fresh temp dir. Keep the `TempDir` alive for the test.
pub fn setup_mods_root() -> (TempDir, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(tmp.path().join("mods")).unwrap();
    fs::create_dir_all(&root).unwrap();
    (tmp, root)
}

pub fn registry(root: &Utf8Path) -> ModRegistry {
    ModRegistry::new(root, CoreModules::default())
}

/// Mock a directory mod with the given `module.json` text.
pub fn create_test_mod(root: &Utf8Path, folder: &str, module_json: &str) -> Utf8PathBuf {
    let mod_dir = root.join(folder);
    fs::create_dir_all(&mod_dir).unwrap();
    fs::write(mod_dir.join("module.json"), module_json).unwrap();
    fs::write(mod_dir.join("index.js"), "module.exports = function () {};").unwrap();
    mod_dir
}

/// Mock a directory mod without any manifest.
pub fn create_legacy_mod(root: &Utf8Path, folder: &str) -> Utf8PathBuf {
    let mod_dir = root.join(folder);
    fs::create_dir_all(&mod_dir).unwrap();
    fs::write(mod_dir.join("index.js"), "module.exports = function () {};").unwrap();
    mod_dir
}

pub fn read_json(path: &Utf8Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}
