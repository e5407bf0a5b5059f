//! Integration tests for asset lifecycle operations.

mod helpers;

use std::fs;

use studiohub_core::error::ErrorKind;

use helpers::{MODEL_TEMPLATE, TestEnv};

#[test]
fn create_resolves_extension_and_copies_template_bytes() {
    let env = TestEnv::new();
    let dir = env.root.join("Characters");
    env.folders.ensure(&dir).unwrap();

    let asset = env
        .assets
        .create(&dir.join("Hero"), "Maya", "Model")
        .unwrap();

    assert_eq!(asset.name, "Hero.ma");
    assert_eq!(
        fs::read_to_string(dir.join("Hero.ma")).unwrap(),
        MODEL_TEMPLATE
    );
    assert_eq!(asset.extension().as_deref(), Some(".ma"));
}

#[test]
fn create_is_deterministic_per_application() {
    let env = TestEnv::new();
    let dir = env.root.join("Fx");
    env.folders.ensure(&dir).unwrap();

    let asset = env.assets.create(&dir.join("Smoke"), "Houdini", "Fx").unwrap();

    assert_eq!(asset.name, "Smoke.hip");
    assert_eq!(
        fs::read_to_string(dir.join("Smoke.hip")).unwrap(),
        "houdini fx template\n"
    );
}

#[test]
fn missing_pair_is_template_not_found() {
    let env = TestEnv::new();
    let dir = env.root.join("Characters");
    env.folders.ensure(&dir).unwrap();

    let err = env
        .assets
        .create(&dir.join("Hero"), "Maya", "Animation")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::TemplateNotFound);
    assert!(!dir.join("Hero.ma").exists());
}

#[test]
fn unknown_application_is_application_not_configured() {
    let env = TestEnv::new();
    let dir = env.root.join("Characters");
    env.folders.ensure(&dir).unwrap();

    let err = env
        .assets
        .create(&dir.join("Hero"), "Blender", "Model")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::ApplicationNotConfigured);
}

#[test]
fn existing_asset_short_circuits_without_overwrite() {
    let env = TestEnv::new();
    let dir = env.root.join("Characters");
    env.folders.ensure(&dir).unwrap();
    fs::write(dir.join("Hero.ma"), "user edits").unwrap();

    let asset = env
        .assets
        .create(&dir.join("Hero"), "Maya", "Model")
        .unwrap();

    assert_eq!(asset.name, "Hero.ma");
    assert_eq!(fs::read_to_string(dir.join("Hero.ma")).unwrap(), "user edits");
}

#[test]
fn nearest_config_is_found_by_upward_search() {
    let env = TestEnv::new();
    let dir = env.root.join("Characters");
    env.folders.ensure(&dir).unwrap();

    // An unseeded nested directory still resolves against the ancestor's
    // Tools config.
    let nested = dir.join("Hero/Textures");
    fs::create_dir_all(&nested).unwrap();

    let asset = env
        .assets
        .create(&nested.join("HeroSkin"), "Maya", "Model")
        .unwrap();
    assert_eq!(asset.name, "HeroSkin.ma");
}

#[test]
fn no_config_within_workspace_is_not_found() {
    let env = TestEnv::new();
    // The workspace root itself is never seeded by the fixture.
    let dir = env.root.join("bare");
    fs::create_dir(&dir).unwrap();

    let err = env
        .assets
        .create(&dir.join("Hero"), "Maya", "Model")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn open_launches_the_registered_application() {
    let env = TestEnv::new();
    let dir = env.root.join("Characters");
    env.folders.ensure(&dir).unwrap();
    env.assets.create(&dir.join("Hero"), "Maya", "Model").unwrap();

    // Fixture registers `echo` as the Maya executable.
    let asset = env.assets.open(&dir.join("Hero.ma")).unwrap();
    assert_eq!(asset.name, "Hero.ma");
}

#[test]
fn open_with_unregistered_extension_is_application_not_configured() {
    let env = TestEnv::new();
    let dir = env.root.join("Characters");
    env.folders.ensure(&dir).unwrap();
    fs::write(dir.join("readme.txt"), "not an asset").unwrap();

    let err = env.assets.open(&dir.join("readme.txt")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ApplicationNotConfigured);
}

#[test]
fn single_rename_is_verbatim() {
    let env = TestEnv::new();
    let dir = env.root.join("Characters");
    env.folders.ensure(&dir).unwrap();
    env.assets.create(&dir.join("Hero"), "Maya", "Model").unwrap();

    let renamed = env
        .assets
        .rename_all(&[dir.join("Hero.ma")], "Villain.ma")
        .unwrap();

    assert_eq!(renamed[0].name, "Villain.ma");
    assert!(dir.join("Villain.ma").is_file());
    assert!(!dir.join("Hero.ma").exists());
}

#[test]
fn batch_rename_appends_ordinal_and_keeps_original_extension() {
    let env = TestEnv::new();
    let dir = env.root.join("Mixed");
    env.folders.ensure(&dir).unwrap();
    env.assets.create(&dir.join("A"), "Maya", "Model").unwrap();
    env.assets.create(&dir.join("B"), "Houdini", "Fx").unwrap();

    let renamed = env
        .assets
        .rename_all(&[dir.join("A.ma"), dir.join("B.hip")], "Shot")
        .unwrap();

    let names: Vec<&str> = renamed.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Shot1.ma", "Shot2.hip"]);
}

#[test]
fn delete_missing_asset_is_not_found() {
    let env = TestEnv::new();
    let err = env.assets.delete(&env.root.join("gone.ma")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn delete_removes_only_the_file() {
    let env = TestEnv::new();
    let dir = env.root.join("Characters");
    env.folders.ensure(&dir).unwrap();
    env.assets.create(&dir.join("Hero"), "Maya", "Model").unwrap();

    env.assets.delete(&dir.join("Hero.ma")).unwrap();

    assert!(!dir.join("Hero.ma").exists());
    assert!(dir.is_dir());
}
