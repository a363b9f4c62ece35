//! # Stemcell Definition Errors
//!
//! Defines error types raised while building a [`Definition`](super::Definition)
//! from user-supplied names.
//!
//! Every variant carries the rejected value so callers can report exactly
//! which axis of the target could not be resolved.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("Unsupported infrastructure '{0}' (expected one of: aws, openstack, vsphere, vcloud)")]
    UnsupportedInfrastructure(String),

    #[error("Unsupported operating system '{0}' (expected one of: centos, ubuntu)")]
    UnsupportedOperatingSystem(String),

    #[error("Unsupported agent '{0}' (expected one of: go, ruby)")]
    UnsupportedAgent(String),
}
