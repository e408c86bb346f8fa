//! Infrastructure adapters for the Quill engine.
//!
//! Directory-backed template catalog access, platform path resolution and
//! cached configuration loading.

pub mod config_service;
pub mod dir_template_store;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::dir_template_store::DirTemplateStore;
pub use crate::paths::QuillPaths;
