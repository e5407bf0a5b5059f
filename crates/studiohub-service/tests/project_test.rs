//! Integration tests for project creation.

mod helpers;

use std::fs;

use studiohub_core::error::ErrorKind;
use studiohub_service::{CONFIG_FILE, TEMP_DIR, TOOLS_DIR};

use helpers::TestEnv;

#[test]
fn create_project_materializes_one_folder_per_layout_node() {
    let env = TestEnv::new();

    let project = env.projects.create_project(&env.root, "Alpha").unwrap();
    assert_eq!(project.name(), "Alpha");

    let base = env.root.join("Alpha");
    for rel in [
        "Art",
        "Art/Characters",
        "Art/Environments",
        "Design",
    ] {
        let dir = base.join(rel);
        assert!(dir.is_dir(), "missing layout folder {rel}");
        assert!(dir.join(TEMP_DIR).is_dir(), "{rel} not seeded with Temp");
        assert!(
            dir.join(TOOLS_DIR).join(CONFIG_FILE).is_file(),
            "{rel} not seeded with Tools config"
        );
    }
}

#[test]
fn project_root_is_seeded_like_any_folder() {
    let env = TestEnv::new();
    env.projects.create_project(&env.root, "Alpha").unwrap();

    let base = env.root.join("Alpha");
    assert!(base.join(TEMP_DIR).is_dir());
    let config = fs::read(base.join(TOOLS_DIR).join(CONFIG_FILE)).unwrap();
    assert_eq!(config, helpers::CONFIG_TEMPLATE_XML.as_bytes());
}

#[test]
fn skeleton_is_copied_and_project_file_renamed() {
    let env = TestEnv::new();
    let project = env.projects.create_project(&env.root, "Alpha").unwrap();

    let skeleton = env.root.join("Alpha/Engine/Alpha");
    assert_eq!(project.skeleton_root, skeleton);
    assert!(skeleton.join("Content/Maps").is_dir());
    assert!(skeleton.join("Settings/DefaultEngine.ini").is_file());

    // Identifying file renamed after the project, extension preserved.
    assert!(skeleton.join("Alpha.uproject").is_file());
    assert!(!skeleton.join("EngineProject.uproject").exists());
}

#[test]
fn every_directory_inside_the_copied_skeleton_is_seeded() {
    let env = TestEnv::new();
    env.projects.create_project(&env.root, "Alpha").unwrap();

    let skeleton = env.root.join("Alpha/Engine/Alpha");
    for dir in [
        skeleton.clone(),
        skeleton.join("Content"),
        skeleton.join("Content/Maps"),
        skeleton.join("Settings"),
    ] {
        assert!(
            dir.join(TOOLS_DIR).join(CONFIG_FILE).is_file(),
            "skeleton dir {} not seeded",
            dir.display()
        );
        assert!(dir.join(TEMP_DIR).is_dir());
    }
}

#[test]
fn existing_project_directory_short_circuits() {
    let env = TestEnv::new();
    let base = env.root.join("Alpha");
    fs::create_dir(&base).unwrap();
    fs::write(base.join("marker.txt"), "existing").unwrap();

    let project = env.projects.create_project(&env.root, "Alpha").unwrap();

    assert_eq!(project.name(), "Alpha");
    // No layout walk, no skeleton copy, contents untouched.
    assert!(!base.join("Art").exists());
    assert!(!base.join("Engine").exists());
    assert_eq!(
        fs::read_to_string(base.join("marker.txt")).unwrap(),
        "existing"
    );
}

#[test]
fn missing_skeleton_fails_preflight_before_any_mutation() {
    let env = TestEnv::new();
    fs::remove_dir_all(&env.skeleton_source).unwrap();

    let err = env.projects.create_project(&env.root, "Alpha").unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert!(!env.root.join("Alpha").exists(), "partial tree left behind");
}

#[test]
fn missing_config_template_fails_preflight_before_any_mutation() {
    let env = TestEnv::new();
    fs::remove_file(&env.config_template).unwrap();

    let err = env.projects.create_project(&env.root, "Alpha").unwrap_err();

    assert_eq!(err.kind, ErrorKind::Storage);
    assert!(!env.root.join("Alpha").exists());
}

#[test]
fn empty_project_name_is_rejected() {
    let env = TestEnv::new();
    let err = env.projects.create_project(&env.root, "  ").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}
