//! XML document models.
//!
//! StudioHub is driven by two external XML documents: the per-directory
//! tools configuration ([`tools::ToolsConfig`]) and the project layout
//! ([`layout::ProjectLayout`]). Both are deserialized with `quick-xml`.

pub mod layout;
pub mod tools;

pub use layout::{LayoutNode, ProjectLayout};
pub use tools::{DccApplication, ToolsConfig};
