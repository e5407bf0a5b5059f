//! Tools configuration document (`Tools/config.xml`).
//!
//! Every managed folder carries its own verbatim copy of this document.
//! It registers, per DCC application: the file extension its assets use,
//! the executable that opens them, and one template file per asset type.
//!
//! ```xml
//! <tools>
//!   <applications>
//!     <dcc name="Maya">
//!       <fileType>.ma</fileType>
//!       <version>C:/Program Files/Autodesk/Maya2020/bin/maya.exe</version>
//!       <template name="Model">maya/model_template.ma</template>
//!     </dcc>
//!   </applications>
//! </tools>
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;
use crate::result::AppResult;

/// Parsed tools configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsConfig {
    /// The `<applications>` block.
    applications: Applications,
}

/// Container for the registered DCC applications.
#[derive(Debug, Clone, Deserialize)]
struct Applications {
    /// One `<dcc>` entry per application, in document order.
    #[serde(rename = "dcc", default)]
    entries: Vec<DccApplication>,
}

/// A single registered DCC application.
#[derive(Debug, Clone, Deserialize)]
pub struct DccApplication {
    /// Application name (`name` attribute), e.g. `Maya`.
    #[serde(rename = "@name")]
    pub name: String,
    /// File extension for assets of this application, including the dot.
    #[serde(rename = "fileType")]
    pub file_type: String,
    /// Path to the executable that opens assets of this application.
    pub version: String,
    /// Asset-type → template mappings, in document order.
    #[serde(rename = "template", default)]
    pub templates: Vec<TemplateEntry>,
}

/// One asset-type → template-file mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateEntry {
    /// Asset type name (`name` attribute), e.g. `Model`.
    #[serde(rename = "@name")]
    pub name: String,
    /// Template file path (element text). Relative paths are resolved by
    /// the caller against the configured templates root.
    #[serde(rename = "$text", default)]
    pub path: String,
}

impl ToolsConfig {
    /// Parse a tools config from an XML string.
    pub fn parse(xml: &str) -> AppResult<Self> {
        let parsed: Self = quick_xml::de::from_str(xml)?;
        Ok(parsed)
    }

    /// Read and parse a tools config file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let xml = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Tools config not found: {}", path.display()))
            } else {
                AppError::with_source(
                    crate::error::ErrorKind::Storage,
                    format!("Failed to read tools config: {}", path.display()),
                    e,
                )
            }
        })?;
        Self::parse(&xml)
    }

    /// Find an application entry by name.
    pub fn application(&self, name: &str) -> Option<&DccApplication> {
        self.applications.entries.iter().find(|a| a.name == name)
    }

    /// All registered applications, in document order.
    pub fn applications(&self) -> &[DccApplication] {
        &self.applications.entries
    }

    /// Resolve the file extension registered for an application.
    pub fn extension_for(&self, application: &str) -> AppResult<&str> {
        self.application(application)
            .map(|a| a.file_type.as_str())
            .ok_or_else(|| {
                AppError::application_not_configured(format!(
                    "Application '{application}' is not registered in the tools config"
                ))
            })
    }

    /// Resolve the template path registered for an (application, asset type)
    /// pair.
    pub fn template_for(&self, application: &str, asset_type: &str) -> AppResult<&str> {
        let app = self.application(application).ok_or_else(|| {
            AppError::application_not_configured(format!(
                "Application '{application}' is not registered in the tools config"
            ))
        })?;

        app.templates
            .iter()
            .find(|t| t.name == asset_type)
            .map(|t| t.path.as_str())
            .ok_or_else(|| {
                AppError::template_not_found(format!(
                    "No template registered for ({application}, {asset_type})"
                ))
            })
    }

    /// Find the application whose registered extension matches `extension`.
    pub fn application_for_extension(&self, extension: &str) -> AppResult<&DccApplication> {
        self.applications
            .entries
            .iter()
            .find(|a| a.file_type == extension)
            .ok_or_else(|| {
                AppError::application_not_configured(format!(
                    "No application registered for extension '{extension}'"
                ))
            })
    }
}
