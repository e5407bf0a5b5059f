//! Shared test fixtures: a temporary workspace with a config template,
//! project layout, asset templates, and a DCC skeleton.
//!
//! Compiled into each test binary; not every binary uses every item.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use studiohub_service::{AssetService, FolderService, ProjectService};

/// Tools config template written into every fixture.
pub const CONFIG_TEMPLATE_XML: &str = r#"<tools>
  <applications>
    <dcc name="Maya">
      <fileType>.ma</fileType>
      <version>echo</version>
      <template name="Model">maya/model_template.ma</template>
      <template name="Rig">maya/rig_template.ma</template>
    </dcc>
    <dcc name="Houdini">
      <fileType>.hip</fileType>
      <version>echo</version>
      <template name="Fx">houdini/fx_template.hip</template>
    </dcc>
  </applications>
</tools>
"#;

/// Project layout written into every fixture.
pub const LAYOUT_XML: &str = r#"<directory>
  <folder name="Art">
    <folder name="Characters"/>
    <folder name="Environments"/>
  </folder>
  <folder name="Design"/>
</directory>
"#;

/// Bytes of the Maya model template.
pub const MODEL_TEMPLATE: &str = "// Maya ASCII model template\n";

/// A self-contained test environment.
pub struct TestEnv {
    /// Owns the temporary directory for the fixture's lifetime.
    _tmp: TempDir,
    /// Managed workspace root.
    pub root: PathBuf,
    /// Path of the tools config template.
    pub config_template: PathBuf,
    /// Skeleton source directory.
    pub skeleton_source: PathBuf,
    pub folders: FolderService,
    pub projects: ProjectService,
    pub assets: AssetService,
}

impl TestEnv {
    /// Build a complete fixture on disk and wire the three services to it.
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let base = tmp.path();

        let root = base.join("workspace");
        fs::create_dir(&root).unwrap();

        let config_template = base.join("ConfigFileTemplate.xml");
        fs::write(&config_template, CONFIG_TEMPLATE_XML).unwrap();

        let layout = base.join("ProjectLayout.xml");
        fs::write(&layout, LAYOUT_XML).unwrap();

        let templates_root = base.join("templates");
        fs::create_dir_all(templates_root.join("maya")).unwrap();
        fs::create_dir_all(templates_root.join("houdini")).unwrap();
        fs::write(
            templates_root.join("maya/model_template.ma"),
            MODEL_TEMPLATE,
        )
        .unwrap();
        fs::write(
            templates_root.join("maya/rig_template.ma"),
            "// Maya ASCII rig template\n",
        )
        .unwrap();
        fs::write(
            templates_root.join("houdini/fx_template.hip"),
            "houdini fx template\n",
        )
        .unwrap();

        let skeleton_source = base.join("skeleton/EngineProject");
        fs::create_dir_all(skeleton_source.join("Content/Maps")).unwrap();
        fs::create_dir_all(skeleton_source.join("Settings")).unwrap();
        fs::write(
            skeleton_source.join("EngineProject.uproject"),
            "{ \"EngineVersion\": \"5.0\" }\n",
        )
        .unwrap();
        fs::write(
            skeleton_source.join("Settings/DefaultEngine.ini"),
            "[Core]\n",
        )
        .unwrap();

        let folders = FolderService::new(config_template.clone());
        let projects = ProjectService::new(
            folders.clone(),
            layout,
            skeleton_source.clone(),
            "Engine".to_string(),
        );
        let assets = AssetService::new(root.clone(), templates_root);

        Self {
            _tmp: tmp,
            root,
            config_template,
            skeleton_source,
            folders,
            projects,
            assets,
        }
    }
}
