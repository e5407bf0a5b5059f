//! # studiohub-core
//!
//! Core crate for StudioHub. Contains the application configuration
//! schema, the XML document models (tools config and project layout),
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other StudioHub crates.

pub mod config;
pub mod documents;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
