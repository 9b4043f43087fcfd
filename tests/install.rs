mod common;

use common::{create_test_mod, registry, setup_mods_root};
use mod_registry_lib::core::mod_documentation::read_readme;
use mod_registry_lib::{InstallInfo, RegistryError};
use serde_json::json;
use std::fs;

fn install_info(value: serde_json::Value) -> InstallInfo {
    InstallInfo::try_from(value).unwrap()
}

#[test]
fn test_install_writes_manifest_verbatim() {
    let (_tmp, root) = setup_mods_root();
    let reg = registry(&root);

    let folder = reg
        .install_module(&install_info(json!({"name": "Foo", "version": "1.0"})), None)
        .unwrap();

    assert_eq!(folder, root.join("Foo"));
    let text = fs::read_to_string(root.join("Foo/module.json")).unwrap();
    assert_eq!(text, "{\n    \"name\": \"Foo\",\n    \"version\": \"1.0\"\n}");

    let info = reg.load_module_info("Foo").unwrap();
    assert_eq!(info.name, "foo");
    assert_eq!(info.raw_name, "Foo");
    assert_eq!(info.version.as_deref(), Some("1.0"));
}

#[test]
fn test_install_with_name_override_and_missing_root() {
    let (_tmp, root) = setup_mods_root();
    let nested_root = root.join("deeper/still");
    let reg = registry(&nested_root);

    reg.install_module(&install_info(json!({"name": "Foo"})), Some("foo-beta"))
        .unwrap();

    assert!(nested_root.join("foo-beta/module.json").is_file());
    assert!(!nested_root.join("Foo").exists());
}

#[test]
fn test_install_overwrites_existing_manifest() {
    let (_tmp, root) = setup_mods_root();
    create_test_mod(&root, "Foo", r#"{"name": "Foo", "version": "0.9"}"#);
    let reg = registry(&root);

    reg.install_module(&install_info(json!({"name": "Foo", "version": "1.0"})), None)
        .unwrap();

    assert_eq!(reg.load_module_info("Foo").unwrap().version.as_deref(), Some("1.0"));
    assert!(root.join("Foo/index.js").is_file());
}

#[test]
fn test_install_without_name_fails() {
    let (_tmp, root) = setup_mods_root();

    match registry(&root).install_module(&install_info(json!({"version": "1.0"})), None) {
        Err(RegistryError::InvalidMod(_)) => {}
        other => panic!("Expected InvalidMod, got {:?}", other),
    }
    assert!(fs::read_dir(&root).unwrap().next().is_none());
}

#[test]
fn test_install_info_must_be_object() {
    assert!(InstallInfo::try_from(json!(["Foo"])).is_err());
}

#[test]
fn test_uninstall_removes_directory_tree() {
    let (_tmp, root) = setup_mods_root();
    let reg = registry(&root);
    reg.install_module(&install_info(json!({"name": "Foo", "version": "1.0"})), None)
        .unwrap();
    fs::create_dir_all(root.join("Foo/lib/data")).unwrap();
    fs::write(root.join("Foo/lib/data/defs.json"), "{}").unwrap();
    fs::write(root.join("Foo/module.config.json"), r#"{"disabled": true}"#).unwrap();

    let info = reg.load_module_info("Foo").unwrap();
    reg.uninstall_module(&info).unwrap();

    assert!(!root.join("Foo").exists());
    assert!(root.exists());
}

#[test]
fn test_uninstall_standalone_file() {
    let (_tmp, root) = setup_mods_root();
    fs::write(root.join("solo.js"), "").unwrap();
    let reg = registry(&root);

    let info = reg.load_module_info("solo.js").unwrap();
    reg.uninstall_module(&info).unwrap();

    assert!(!root.join("solo.js").exists());
    assert!(reg.list_modules().is_empty());
}

#[test]
fn test_read_readme() {
    let (_tmp, root) = setup_mods_root();
    let dir = create_test_mod(&root, "docs", r#"{"name": "docs"}"#);
    fs::write(dir.join("ReadMe.md"), "# Docs\nUsage here.").unwrap();
    create_test_mod(&root, "nodocs", r#"{"name": "nodocs"}"#);
    let reg = registry(&root);

    assert_eq!(read_readme(&reg.load_module_info("docs").unwrap()).unwrap(), "# Docs\nUsage here.");
    match read_readme(&reg.load_module_info("nodocs").unwrap()) {
        Err(RegistryError::FileOrDirectoryNotFound(_)) => {}
        other => panic!("Expected FileOrDirectoryNotFound, got {:?}", other),
    }
}
