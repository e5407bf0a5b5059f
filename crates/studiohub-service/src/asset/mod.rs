//! Asset lifecycle operations: templated creation, open, rename, delete.

pub mod service;

pub use service::AssetService;
