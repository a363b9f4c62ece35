//! # Stemcell Storage
//!
//! Loading and saving definition files. A definition file names the
//! infrastructure, operating system and agent of a build in JSON, YAML or
//! TOML, depending on the enabled features.
pub mod config;
pub mod error;

/// Re-export key types
pub use config::{ConfigFormat, DefinitionConfig};
pub use error::StorageSystemError;
