//! Project creation: layout-driven folder trees plus skeleton instantiation.

pub mod service;

pub use service::ProjectService;
