//! # studiohub-entity
//!
//! Domain entities for StudioHub. Entities are identified by absolute
//! filesystem path and carry no filesystem side effects of their own;
//! the service layer owns all mutation.

pub mod asset;
pub mod folder;
pub mod project;

pub use asset::Asset;
pub use folder::Folder;
pub use project::Project;
